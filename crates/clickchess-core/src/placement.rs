//! Board placement notation: the piece-placement field of FEN.
//!
//! Eight `/`-separated rows, the first describing row 0. Digits denote runs
//! of empty squares, `pnbrqk` are black pieces and `PNBRQK` white ones.

use crate::{Piece, PieceKind, Side, Square};
use thiserror::Error;

/// Errors that can occur when parsing placement text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("invalid placement: expected 8 rows, got {0}")]
    InvalidRowCount(usize),

    #[error("invalid character '{character}' in row {row}")]
    InvalidCharacter { character: char, row: usize },

    #[error("row {row} has {width} squares, expected 8")]
    InvalidRowWidth { row: usize, width: usize },

    #[error("{side} must have exactly one king, found {count}")]
    KingCount { side: Side, count: usize },
}

/// The standard starting layout.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Parses placement text into a square-indexed array.
pub fn parse_placement(text: &str) -> Result<[Option<Piece>; Square::COUNT], PlacementError> {
    let rows: Vec<&str> = text.trim().split('/').collect();
    if rows.len() != 8 {
        return Err(PlacementError::InvalidRowCount(rows.len()));
    }

    let mut squares = [None; Square::COUNT];
    for (row, row_text) in rows.iter().enumerate() {
        let mut width = 0usize;
        for c in row_text.chars() {
            if let Some(run) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                width += run as usize;
            } else if let Some((kind, side)) = PieceKind::from_char(c) {
                if width < 8 {
                    squares[row * 8 + width] = Some(Piece::new(kind, side));
                }
                width += 1;
            } else {
                return Err(PlacementError::InvalidCharacter { character: c, row });
            }
        }
        if width != 8 {
            return Err(PlacementError::InvalidRowWidth { row, width });
        }
    }

    for side in Side::BOTH {
        let count = squares
            .iter()
            .flatten()
            .filter(|p| p.side == side && p.kind() == PieceKind::King)
            .count();
        if count != 1 {
            return Err(PlacementError::KingCount { side, count });
        }
    }

    Ok(squares)
}

/// Formats a square-indexed array as placement text.
pub fn format_placement(squares: &[Option<Piece>; Square::COUNT]) -> String {
    let mut text = String::new();
    for row in 0..8 {
        let mut empty_count = 0;
        for column in 0..8 {
            match squares[row * 8 + column] {
                Some(piece) => {
                    if empty_count > 0 {
                        text.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    text.push(piece.to_char());
                }
                None => empty_count += 1,
            }
        }
        if empty_count > 0 {
            text.push_str(&empty_count.to_string());
        }
        if row < 7 {
            text.push('/');
        }
    }
    text
}
