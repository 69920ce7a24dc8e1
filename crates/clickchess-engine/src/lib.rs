//! Click-driven chess rules engine.
//!
//! This crate provides:
//! - [`Board`] - 64-square piece layout with move application
//! - [`pseudo_legal_moves`] - per-piece move generation ignoring king safety
//! - [`legal_moves`] and [`is_legal`] - the legality filter
//! - [`detect_check`] - attacker collection after a move
//! - [`Game`] - the selection state machine and turn handling
//! - [`BoardSnapshot`] and [`EngineEvent`] - what callers render
//!
//! Rows run from 0 (black's back row) to 7 (white's back row). Pawns may
//! step one or two squares forward, capture diagonally, and capture a pawn
//! that just double-stepped beside them by moving diagonally behind it.
//! There is no castling or promotion.
//!
//! # Example
//!
//! ```
//! use clickchess_engine::{EngineEvent, Game};
//! use clickchess_core::Square;
//!
//! let mut game = Game::new();
//! let e2 = Square::from_algebraic("e2").unwrap();
//! let e4 = Square::from_algebraic("e4").unwrap();
//!
//! assert!(matches!(game.select_or_move(e2), EngineEvent::Selected { .. }));
//! assert!(matches!(game.select_or_move(e4), EngineEvent::MoveApplied(_)));
//! println!("{}", game.board());
//! ```

mod board;
pub mod check;
mod game;
pub mod legality;
pub mod movegen;
pub mod snapshot;

pub use board::Board;
pub use check::{detect_check, is_king_attacked, Attacker, CheckStatus};
pub use game::{Game, GameError, Selection};
pub use legality::{is_legal, legal_moves};
pub use movegen::{pseudo_legal_moves, MoveList};
pub use snapshot::{BoardSnapshot, Cell, EngineEvent, MoveApplied};
