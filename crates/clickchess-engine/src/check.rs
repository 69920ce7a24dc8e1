//! Check detection.

use crate::movegen::pseudo_legal_moves;
use crate::Board;
use clickchess_core::{PieceKind, Side, Square};
use serde::Serialize;

/// A piece whose pseudo-legal moves include the opposing king's square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Attacker {
    pub kind: PieceKind,
    pub origin: Square,
}

/// Whether a king is attacked, and by which pieces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckStatus {
    pub in_check: bool,
    pub attackers: Vec<Attacker>,
}

impl CheckStatus {
    /// Builds a status from the collected attackers.
    pub fn from_attackers(attackers: Vec<Attacker>) -> Self {
        CheckStatus {
            in_check: !attackers.is_empty(),
            attackers,
        }
    }

    /// Returns the only attacker when exactly one piece gives check.
    pub fn sole_attacker(&self) -> Option<Attacker> {
        match self.attackers.as_slice() {
            [attacker] => Some(*attacker),
            _ => None,
        }
    }
}

/// Determines whether the side that just moved is attacking the opposing king.
///
/// Runs on the board it is given, so callers pass the post-move board.
pub fn detect_check(board: &Board, side_just_moved: Side) -> CheckStatus {
    let Some(king) = board.king_square(side_just_moved.opposite()) else {
        return CheckStatus::default();
    };

    let attackers = board
        .pieces_of(side_just_moved)
        .filter(|&(from, _)| {
            pseudo_legal_moves(board, from)
                .destinations()
                .any(|to| to == king)
        })
        .map(|(origin, piece)| Attacker {
            kind: piece.kind(),
            origin,
        })
        .collect();

    CheckStatus::from_attackers(attackers)
}

/// Returns true if the king of the given side is attacked.
pub fn is_king_attacked(board: &Board, king_side: Side) -> bool {
    let Some(king) = board.king_square(king_side) else {
        return false;
    };
    board.pieces_of(king_side.opposite()).any(|(from, _)| {
        pseudo_legal_moves(board, from)
            .destinations()
            .any(|to| to == king)
    })
}
