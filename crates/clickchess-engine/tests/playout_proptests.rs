//! Property tests over random playouts and random sparse positions.

use clickchess_core::{MoveKind, Piece, PieceKind, Side, Square};
use clickchess_engine::{is_king_attacked, pseudo_legal_moves, Board, Game};
use proptest::prelude::*;
use proptest::sample::Index;

fn arb_playout() -> impl Strategy<Value = Vec<Index>> {
    prop::collection::vec(any::<Index>(), 0..48)
}

/// A sparse board: random non-king pieces plus one king per side.
fn arb_sparse_board() -> impl Strategy<Value = Board> {
    let extra = (0u8..64, 0usize..5, any::<bool>());
    (
        prop::collection::vec(extra, 0..16),
        0u8..64,
        0u8..64,
    )
        .prop_filter("kings on distinct squares", |(_, w, b)| w != b)
        .prop_map(|(extras, white_king, black_king)| {
            let square = |index| Square::from_index(index).expect("index below 64");
            let mut board = Board::empty();
            for (index, kind, white) in extras {
                let side = if white { Side::White } else { Side::Black };
                board.put(square(index), Piece::new(PieceKind::ALL[kind], side));
            }
            board.put(square(white_king), Piece::new(PieceKind::King, Side::White));
            board.put(square(black_king), Piece::new(PieceKind::King, Side::Black));
            board
        })
}

/// Plays the chosen moves, stopping early when no move is available.
fn play(choices: &[Index]) -> Game {
    let mut game = Game::new();
    for choice in choices {
        let moves = game.all_legal_moves();
        if moves.is_empty() {
            break;
        }
        let m = moves[choice.index(moves.len())];
        game.make_move(m.from, m.to).expect("generated move is legal");
    }
    game
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

    #[test]
    fn prop_destinations_never_hold_friendly_pieces(choices in arb_playout()) {
        let game = play(&choices);
        let board = game.board();
        for (from, piece) in board.pieces() {
            for m in &pseudo_legal_moves(board, from) {
                let occupant = board.piece_at(m.to);
                prop_assert!(occupant.map_or(true, |p| p.side != piece.side), "{} onto own piece", m);
            }
        }
    }

    #[test]
    fn prop_sliders_never_jump(choices in arb_playout()) {
        let game = play(&choices);
        let board = game.board();
        for (from, piece) in board.pieces() {
            if !piece.kind().is_slider() {
                continue;
            }
            for m in &pseudo_legal_moves(board, from) {
                prop_assert!(from.between(m.to).iter().all(|sq| board.is_empty(*sq)), "{} jumps", m);
            }
        }
    }

    #[test]
    fn prop_legal_moves_idempotent(choices in arb_playout()) {
        let game = play(&choices);
        for sq in Square::all() {
            prop_assert_eq!(game.legal_moves(sq), game.legal_moves(sq));
        }
    }

    #[test]
    fn prop_legal_moves_keep_king_safe(choices in arb_playout()) {
        let game = play(&choices);
        let side = game.side_to_move();
        for m in game.all_legal_moves() {
            let after = game.board().make_move(m);
            prop_assert!(!is_king_attacked(&after, side), "{} exposes the king", m);
        }
    }

    #[test]
    fn prop_check_answers(choices in arb_playout()) {
        let game = play(&choices);
        let check = game.check_status();
        if !check.in_check {
            return Ok(());
        }
        let king = game.board().king_square(game.side_to_move()).expect("king present");

        for m in game.all_legal_moves() {
            if m.piece == PieceKind::King {
                continue;
            }
            let checker = check.sole_attacker();
            prop_assert!(checker.is_some(), "{} is not a king move under double check", m);
            let checker = checker.expect("sole attacker");
            let captures = m.captured_square() == Some(checker.origin);
            let blocks = checker.kind != PieceKind::Knight && king.between(checker.origin).contains(&m.to);
            prop_assert!(captures || blocks, "{} ignores the check", m);
        }
    }

    #[test]
    fn prop_only_last_double_step_is_flagged(choices in arb_playout()) {
        let mut game = Game::new();
        for choice in &choices {
            let moves = game.all_legal_moves();
            if moves.is_empty() {
                break;
            }
            let m = moves[choice.index(moves.len())];
            let mover = game.side_to_move();
            game.make_move(m.from, m.to).expect("generated move is legal");

            let flagged: Vec<Square> = game
                .board()
                .pieces_of(mover)
                .filter(|(_, p)| p.just_double_stepped())
                .map(|(sq, _)| sq)
                .collect();
            if m.kind == MoveKind::DoubleStep {
                prop_assert_eq!(flagged, vec![m.to]);
            } else {
                prop_assert!(flagged.is_empty());
            }
        }
    }

    #[test]
    fn prop_sparse_positions_respect_occupancy(board in arb_sparse_board()) {
        for (from, piece) in board.pieces() {
            for m in &pseudo_legal_moves(&board, from) {
                prop_assert!(board.piece_at(m.to).map_or(true, |p| p.side != piece.side), "{} onto own piece", m);
                if piece.kind().is_slider() {
                    prop_assert!(from.between(m.to).iter().all(|sq| board.is_empty(*sq)), "{} jumps", m);
                }
            }
        }
    }

    #[test]
    fn prop_sparse_positions_legal_subset(board in arb_sparse_board()) {
        let game = Game::from_board(board.clone(), Side::White);
        for (from, _) in board.pieces_of(Side::White) {
            let legal = game.legal_moves(from);
            let pseudo = pseudo_legal_moves(&board, from);
            prop_assert!(legal.iter().all(|m| pseudo.iter().any(|p| p == m)));
            prop_assert_eq!(&legal, &game.legal_moves(from));
        }
    }
}
