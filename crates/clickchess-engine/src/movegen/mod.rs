//! Pseudo-legal move generation.
//!
//! Generators look only at piece movement patterns and board occupancy.
//! They never ask whether a move exposes the mover's king; that is the job
//! of [`crate::legality`], which calls back into this module on
//! hypothetical boards but is never called from it.

pub mod rays;

use crate::Board;
use clickchess_core::{CandidateMove, MoveKind, PieceKind, Side, Square};
use serde::{Serialize, Serializer};

use rays::{cast_rays, jumps, DIAGONALS, KNIGHT_OFFSETS, MAX_RAY, ORTHOGONALS};

/// A list of moves for a single piece with a fixed maximum capacity.
///
/// A queen in the centre of an empty board reaches 27 squares, so a
/// fixed-size array avoids heap allocations during generation.
#[derive(Clone)]
pub struct MoveList {
    moves: [CandidateMove; Self::MAX_MOVES],
    len: usize,
}

impl MoveList {
    /// Maximum number of moves a single piece can have.
    pub const MAX_MOVES: usize = 32;

    /// Creates an empty move list.
    #[inline]
    pub const fn new() -> Self {
        MoveList {
            moves: [CandidateMove::NULL; Self::MAX_MOVES],
            len: 0,
        }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: CandidateMove) {
        debug_assert!(self.len < Self::MAX_MOVES);
        self.moves[self.len] = m;
        self.len += 1;
    }

    /// Returns the number of moves.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[CandidateMove] {
        &self.moves[..self.len]
    }

    /// Iterates over the moves.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, CandidateMove> {
        self.as_slice().iter()
    }

    /// Iterates over the destination squares.
    pub fn destinations(&self) -> impl Iterator<Item = Square> + '_ {
        self.iter().map(|m| m.to)
    }

    /// Returns the move landing on `to`, if any.
    pub fn find_destination(&self, to: Square) -> Option<CandidateMove> {
        self.iter().find(|m| m.to == to).copied()
    }

    /// Clears the move list.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Retains only moves for which the predicate returns true.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&CandidateMove) -> bool,
    {
        let mut write = 0;
        for read in 0..self.len {
            if f(&self.moves[read]) {
                self.moves[write] = self.moves[read];
                write += 1;
            }
        }
        self.len = write;
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for MoveList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for MoveList {}

impl std::ops::Index<usize> for MoveList {
    type Output = CandidateMove;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < self.len);
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a CandidateMove;
    type IntoIter = std::slice::Iter<'a, CandidateMove>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl Serialize for MoveList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.as_slice())
    }
}

/// Generates pseudo-legal moves for the piece standing on `from`.
///
/// Direction-sensitive rules use the side owning the piece. An empty
/// square yields an empty list.
pub fn pseudo_legal_moves(board: &Board, from: Square) -> MoveList {
    let mut moves = MoveList::new();
    let Some(piece) = board.piece_at(from) else {
        return moves;
    };
    let side = piece.side;
    let kind = piece.kind();

    match kind {
        PieceKind::Pawn => generate_pawn_moves(board, from, side, &mut moves),
        PieceKind::Knight => jumps(board, from, side, kind, &KNIGHT_OFFSETS, &mut moves),
        PieceKind::Bishop => cast_rays(board, from, side, kind, &DIAGONALS, MAX_RAY, &mut moves),
        PieceKind::Rook => cast_rays(board, from, side, kind, &ORTHOGONALS, MAX_RAY, &mut moves),
        PieceKind::Queen => {
            cast_rays(board, from, side, kind, &DIAGONALS, MAX_RAY, &mut moves);
            cast_rays(board, from, side, kind, &ORTHOGONALS, MAX_RAY, &mut moves);
        }
        PieceKind::King => {
            cast_rays(board, from, side, kind, &DIAGONALS, 1, &mut moves);
            cast_rays(board, from, side, kind, &ORTHOGONALS, 1, &mut moves);
        }
    }

    moves
}

/// Generates pseudo-legal pawn moves in a fixed order: double step,
/// single step, then the column+1 and column-1 diagonals.
fn generate_pawn_moves(board: &Board, from: Square, side: Side, moves: &mut MoveList) {
    let forward = side.pawn_direction();
    let pawn = PieceKind::Pawn;

    // Double step
    if from.row() == side.pawn_start_row() {
        if let (Some(middle), Some(to)) = (from.offset(forward, 0), from.offset(2 * forward, 0)) {
            if board.is_empty(middle) && board.is_empty(to) {
                moves.push(CandidateMove::new(from, to, pawn, MoveKind::DoubleStep));
            }
        }
    }

    // Single step
    if let Some(to) = from.offset(forward, 0) {
        if board.is_empty(to) {
            moves.push(CandidateMove::new(from, to, pawn, MoveKind::Quiet));
        }
    }

    // Diagonal captures and side-captures
    for column_delta in [1, -1] {
        let Some(to) = from.offset(forward, column_delta) else {
            continue;
        };
        match board.piece_at(to) {
            Some(occupant) if occupant.side != side => {
                moves.push(CandidateMove::new(from, to, pawn, MoveKind::Capture));
            }
            Some(_) => {}
            None => {
                let beside = from.offset(0, column_delta);
                let victim = beside.and_then(|sq| board.piece_at(sq).map(|p| (sq, p)));
                if let Some((captured, p)) = victim {
                    if p.side != side && p.just_double_stepped() {
                        moves.push(CandidateMove::new(
                            from,
                            to,
                            pawn,
                            MoveKind::SideCapture { captured },
                        ));
                    }
                }
            }
        }
    }
}
