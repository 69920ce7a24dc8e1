//! Step and ray movement shared by the non-pawn generators.

use super::MoveList;
use crate::Board;
use clickchess_core::{CandidateMove, MoveKind, PieceKind, Side, Square};

/// Diagonal directions as (row delta, column delta).
pub const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Orthogonal directions as (row delta, column delta).
pub const ORTHOGONALS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Knight jumps as (row delta, column delta).
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Longest ray on an 8x8 board.
pub const MAX_RAY: u8 = 7;

/// Casts one ray per direction, up to `max_steps` squares each.
///
/// Empty squares are quiet destinations. The first occupied square ends
/// the ray and is included only if it holds an enemy piece.
pub fn cast_rays(
    board: &Board,
    from: Square,
    side: Side,
    piece: PieceKind,
    directions: &[(i8, i8)],
    max_steps: u8,
    moves: &mut MoveList,
) {
    for &(row_delta, column_delta) in directions {
        let mut current = from;
        for _ in 0..max_steps {
            let Some(to) = current.offset(row_delta, column_delta) else {
                break;
            };
            match board.piece_at(to) {
                None => moves.push(CandidateMove::new(from, to, piece, MoveKind::Quiet)),
                Some(occupant) => {
                    if occupant.side != side {
                        moves.push(CandidateMove::new(from, to, piece, MoveKind::Capture));
                    }
                    break;
                }
            }
            current = to;
        }
    }
}

/// Generates single-jump destinations from a fixed offset table.
pub fn jumps(
    board: &Board,
    from: Square,
    side: Side,
    piece: PieceKind,
    offsets: &[(i8, i8)],
    moves: &mut MoveList,
) {
    for to in offsets
        .iter()
        .filter_map(|&(row_delta, column_delta)| from.offset(row_delta, column_delta))
    {
        match board.piece_at(to) {
            None => moves.push(CandidateMove::new(from, to, piece, MoveKind::Quiet)),
            Some(occupant) if occupant.side != side => {
                moves.push(CandidateMove::new(from, to, piece, MoveKind::Capture))
            }
            Some(_) => {}
        }
    }
}
