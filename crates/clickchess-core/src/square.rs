//! Board square representation.

use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when parsing a square.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SquareError {
    #[error("invalid square '{0}': expected a file a-h followed by a rank 1-8")]
    InvalidAlgebraic(String),
}

/// A square on the 8x8 board, addressed by (row, column).
///
/// Row 0 is black's back rank and row 7 is white's; column 0 is the
/// a-file. Internally the square is packed as `row * 8 + column`, so the
/// derived ordering walks the board row by row.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Number of squares on the board.
    pub const COUNT: usize = 64;

    /// Top-left corner, row 0 column 0.
    pub const A8: Square = Square(0);

    /// Creates a square from a row and column, or `None` if either is off the board.
    #[inline]
    pub const fn new(row: u8, column: u8) -> Option<Self> {
        if row < 8 && column < 8 {
            Some(Square(row * 8 + column))
        } else {
            None
        }
    }

    /// Creates a square from untrusted caller coordinates.
    ///
    /// Negative and oversized values are rejected rather than wrapped.
    pub fn from_coords(row: i32, column: i32) -> Option<Self> {
        let row = u8::try_from(row).ok()?;
        let column = u8::try_from(column).ok()?;
        Self::new(row, column)
    }

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub fn from_algebraic(s: &str) -> Result<Self, SquareError> {
        let invalid = || SquareError::InvalidAlgebraic(s.to_string());
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(invalid());
        }
        // Rank 8 is row 0.
        Ok(Square((7 - (rank - b'1')) * 8 + (file - b'a')))
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the row (0-7).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    /// Returns the column (0-7).
    #[inline]
    pub const fn column(self) -> u8 {
        self.0 % 8
    }

    /// Returns the square displaced by the given row and column deltas,
    /// or `None` if that leaves the board.
    #[inline]
    pub fn offset(self, row_delta: i8, column_delta: i8) -> Option<Self> {
        let row = self.row() as i8 + row_delta;
        let column = self.column() as i8 + column_delta;
        if (0..8).contains(&row) && (0..8).contains(&column) {
            Some(Square(row as u8 * 8 + column as u8))
        } else {
            None
        }
    }

    /// Returns the squares strictly between `self` and `other`.
    ///
    /// Empty unless the two squares share a row, column, or diagonal.
    pub fn between(self, other: Square) -> Vec<Square> {
        let row_delta = other.row() as i8 - self.row() as i8;
        let column_delta = other.column() as i8 - self.column() as i8;
        let aligned = row_delta == 0
            || column_delta == 0
            || row_delta.abs() == column_delta.abs();
        if !aligned || self == other {
            return Vec::new();
        }

        let step = (row_delta.signum(), column_delta.signum());
        let mut squares = Vec::new();
        let mut current = self;
        while let Some(next) = current.offset(step.0, step.1) {
            if next == other {
                break;
            }
            squares.push(next);
            current = next;
        }
        squares
    }

    /// Iterates over all 64 squares, row by row.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        let file = (b'a' + self.column()) as char;
        let rank = (b'8' - self.row()) as char;
        format!("{}{}", file, rank)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({},{})", self.row(), self.column())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

impl Serialize for Square {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
