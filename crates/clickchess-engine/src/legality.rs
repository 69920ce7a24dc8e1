//! Legality filtering.
//!
//! A pseudo-legal move is legal when, on the board after the move, no
//! enemy piece attacks the mover's king. While in check the move must also
//! answer the check: a king move, a capture of the sole checker, or a
//! block on the line between king and checker. Knight checks cannot be
//! blocked, and double checks can only be answered by the king.

use crate::check::{is_king_attacked, CheckStatus};
use crate::movegen::{pseudo_legal_moves, MoveList};
use crate::Board;
use clickchess_core::{CandidateMove, PieceKind, Square};
use tracing::trace;

/// Returns true if `m` is legal for the piece standing on `m.from`.
///
/// `check` is the current check status of the mover's side.
pub fn is_legal(board: &Board, m: CandidateMove, check: &CheckStatus) -> bool {
    let Some(piece) = board.piece_at(m.from) else {
        return false;
    };

    let after = board.make_move(m);
    if is_king_attacked(&after, piece.side) {
        trace!(mv = %m, "rejected: leaves king attacked");
        return false;
    }

    if !check.in_check || piece.kind() == PieceKind::King {
        return true;
    }

    let Some(checker) = check.sole_attacker() else {
        trace!(mv = %m, "rejected: double check needs a king move");
        return false;
    };

    if m.captured_square() == Some(checker.origin) {
        return true;
    }

    if checker.kind == PieceKind::Knight {
        trace!(mv = %m, "rejected: knight check cannot be blocked");
        return false;
    }

    let blocks = board
        .king_square(piece.side)
        .is_some_and(|king| blocks_line(king, checker.origin, m.to));
    if !blocks {
        trace!(mv = %m, "rejected: does not answer check");
    }
    blocks
}

/// Returns true if `to` lies strictly between `king` and `attacker`.
fn blocks_line(king: Square, attacker: Square, to: Square) -> bool {
    king.between(attacker).contains(&to)
}

/// Generates the legal moves of the piece standing on `from`.
pub fn legal_moves(board: &Board, from: Square, check: &CheckStatus) -> MoveList {
    let mut moves = pseudo_legal_moves(board, from);
    moves.retain(|m| is_legal(board, *m, check));
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::detect_check;
    use clickchess_core::{MoveKind, Piece, Side};

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn legal_targets(board: &Board, from: &str, mover: Side) -> Vec<Square> {
        let check = detect_check(board, mover.opposite());
        let mut t: Vec<Square> = legal_moves(board, sq(from), &check).destinations().collect();
        t.sort();
        t
    }

    #[test]
    fn startpos_moves_all_legal() {
        let board = Board::startpos();
        let check = CheckStatus::default();
        for (from, _) in board.pieces_of(Side::White) {
            assert_eq!(
                legal_moves(&board, from, &check),
                pseudo_legal_moves(&board, from)
            );
        }
    }

    #[test]
    fn pinned_piece_cannot_leave_line() {
        // Bishop on e2 pinned by the rook on e8
        let board = Board::from_placement("4r2k/8/8/8/8/8/4B3/4K3").unwrap();
        assert!(legal_targets(&board, "e2", Side::White).is_empty());
    }

    #[test]
    fn pinned_rook_may_slide_along_pin() {
        let board = Board::from_placement("4r2k/8/8/8/8/8/4R3/4K3").unwrap();
        let t = legal_targets(&board, "e2", Side::White);
        assert_eq!(t.len(), 6);
        assert!(t.contains(&sq("e8")));
        assert!(t.iter().all(|s| s.column() == 4));
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let board = Board::from_placement("3r3k/8/8/8/8/8/8/4K3").unwrap();
        let t = legal_targets(&board, "e1", Side::White);
        assert!(!t.contains(&sq("d1")));
        assert!(!t.contains(&sq("d2")));
        assert!(t.contains(&sq("f1")));
        assert!(t.contains(&sq("e2")));
    }

    #[test]
    fn king_cannot_capture_defended_piece() {
        let board = Board::from_placement("7k/8/8/8/8/8/3q4/3rK3").unwrap();
        let t = legal_targets(&board, "e1", Side::White);
        assert!(!t.contains(&sq("d2")));
        assert!(!t.contains(&sq("d1")));
    }

    #[test]
    fn in_check_only_block_or_capture() {
        // Rook on a1 checks the king on e1 along the back row.
        let board = Board::from_placement("4k3/8/8/8/8/1N6/7P/r3K3").unwrap();
        let t = legal_targets(&board, "b3", Side::White);
        assert_eq!(t, vec![sq("a1"), sq("c1")]);

        assert!(legal_targets(&board, "h2", Side::White).is_empty());
    }

    #[test]
    fn knight_check_cannot_be_blocked() {
        let board = Board::from_placement("4k3/8/8/8/8/3n4/8/2B1K3").unwrap();
        assert!(legal_targets(&board, "c1", Side::White).is_empty());
    }

    #[test]
    fn knight_checker_can_be_captured() {
        let board = Board::from_placement("4k3/8/8/8/8/3n4/8/3QK3").unwrap();
        let t = legal_targets(&board, "d1", Side::White);
        assert_eq!(t, vec![sq("d3")]);
    }

    #[test]
    fn double_check_requires_king_move() {
        let board = Board::from_placement("4k3/8/8/8/8/5n2/3Q4/r3K3").unwrap();
        let check = detect_check(&board, Side::Black);
        assert_eq!(check.attackers.len(), 2);

        // Blocking the rook on c1 or d1 still leaves the knight check.
        assert!(legal_moves(&board, sq("d2"), &check).is_empty());
        let king = legal_targets(&board, "e1", Side::White);
        assert_eq!(king, vec![sq("e2"), sq("f2")]);
    }

    #[test]
    fn side_capture_of_checking_pawn() {
        let mut board = Board::from_placement("7k/8/8/3pP3/4K3/8/8/8").unwrap();
        board.put(sq("d5"), Piece::double_stepped_pawn(Side::Black));
        let check = detect_check(&board, Side::Black);
        assert!(check.in_check);

        let moves = legal_moves(&board, sq("e5"), &check);
        let side_capture = moves
            .iter()
            .find(|m| matches!(m.kind, MoveKind::SideCapture { .. }))
            .copied();
        assert_eq!(side_capture.map(|m| m.to), Some(sq("d6")));
        assert_eq!(moves.len(), 1);
    }

    #[test]
    fn move_from_empty_square_is_illegal() {
        let board = Board::startpos();
        let m = CandidateMove::new(sq("e4"), sq("e5"), PieceKind::Pawn, MoveKind::Quiet);
        assert!(!is_legal(&board, m, &CheckStatus::default()));
    }
}
