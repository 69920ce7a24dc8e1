//! Core types for the click-driven chess rules engine.
//!
//! This crate provides the vocabulary shared by the engine and its callers:
//! - [`Piece`], [`PieceKind`], [`Role`] and [`Side`] for piece representation
//! - [`Square`] for bounds-checked (row, column) board coordinates
//! - [`CandidateMove`] and [`MoveKind`] for generated moves
//! - Placement notation parsing and formatting

mod mov;
mod piece;
pub mod placement;
mod side;
mod square;

pub use mov::{CandidateMove, MoveKind};
pub use piece::{Piece, PieceKind, Role};
pub use placement::{format_placement, parse_placement, PlacementError, STARTING_PLACEMENT};
pub use side::Side;
pub use square::{Square, SquareError};
