//! Candidate move representation.

use crate::{PieceKind, Square};
use serde::Serialize;
use std::fmt;

/// What a move does besides relocating the moving piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MoveKind {
    /// Move to an empty square.
    Quiet,
    /// Pawn advance of two squares from its starting row.
    DoubleStep,
    /// Capture of the piece standing on the destination.
    Capture,
    /// Pawn moves diagonally forward to an empty square and removes the
    /// adjacent enemy pawn that just double-stepped.
    SideCapture { captured: Square },
}

/// A pseudo-legal or legal move produced by the generators.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CandidateMove {
    pub from: Square,
    pub to: Square,
    pub piece: PieceKind,
    pub kind: MoveKind,
}

impl CandidateMove {
    /// A placeholder move (not a legal move), used to fill fixed-capacity lists.
    pub const NULL: CandidateMove =
        CandidateMove::new(Square::A8, Square::A8, PieceKind::Pawn, MoveKind::Quiet);

    /// Creates a new move.
    #[inline]
    pub const fn new(from: Square, to: Square, piece: PieceKind, kind: MoveKind) -> Self {
        CandidateMove {
            from,
            to,
            piece,
            kind,
        }
    }

    /// Returns true if this move is a pawn's qualifying two-square advance.
    #[inline]
    pub const fn is_double_step(self) -> bool {
        matches!(self.kind, MoveKind::DoubleStep)
    }

    /// Returns the square of the piece this move removes, if any.
    #[inline]
    pub const fn captured_square(self) -> Option<Square> {
        match self.kind {
            MoveKind::Capture => Some(self.to),
            MoveKind::SideCapture { captured } => Some(captured),
            MoveKind::Quiet | MoveKind::DoubleStep => None,
        }
    }

    /// Returns the move in coordinate notation (e.g., "e2e4").
    pub fn to_coordinate(self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

impl fmt::Debug for CandidateMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} {}, {:?})", self.piece, self.to_coordinate(), self.kind)
    }
}

impl fmt::Display for CandidateMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_coordinate())
    }
}
