//! UI-facing views of the game: board snapshots and engine events.

use crate::check::CheckStatus;
use crate::Board;
use clickchess_core::{CandidateMove, Piece, Side, Square};
use serde::Serialize;
use std::collections::BTreeMap;

/// What a caller should draw on one square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "cell", rename_all = "snake_case")]
pub enum Cell {
    /// An occupied square. `highlighted` marks a capture target of the
    /// selected piece.
    Piece { piece: Piece, highlighted: bool },
    /// An empty square the selected piece can move to.
    Marker,
}

/// A copy of the board for rendering, keyed by square in row order.
///
/// Empty squares without a marker are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BoardSnapshot {
    cells: BTreeMap<Square, Cell>,
}

impl BoardSnapshot {
    /// Builds a snapshot of `board` with `targets` marked as reachable.
    pub fn new(board: &Board, targets: impl IntoIterator<Item = Square>) -> Self {
        let mut cells: BTreeMap<Square, Cell> = board
            .pieces()
            .map(|(sq, piece)| {
                (
                    sq,
                    Cell::Piece {
                        piece,
                        highlighted: false,
                    },
                )
            })
            .collect();

        for target in targets {
            match cells.get_mut(&target) {
                Some(Cell::Piece { highlighted, .. }) => *highlighted = true,
                Some(Cell::Marker) => {}
                None => {
                    cells.insert(target, Cell::Marker);
                }
            }
        }

        BoardSnapshot { cells }
    }

    /// Returns the cell at a square, if anything is drawn there.
    pub fn get(&self, sq: Square) -> Option<&Cell> {
        self.cells.get(&sq)
    }

    /// Returns the piece at a square, ignoring markers.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        match self.cells.get(&sq) {
            Some(Cell::Piece { piece, .. }) => Some(*piece),
            _ => None,
        }
    }

    /// Iterates over all drawn cells in row order.
    pub fn iter(&self) -> impl Iterator<Item = (Square, &Cell)> {
        self.cells.iter().map(|(sq, cell)| (*sq, cell))
    }

    /// Returns the number of drawn cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if nothing is drawn.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the squares holding a marker or a highlighted piece.
    pub fn highlighted(&self) -> Vec<Square> {
        self.iter()
            .filter(|(_, cell)| {
                matches!(
                    cell,
                    Cell::Marker
                        | Cell::Piece {
                            highlighted: true,
                            ..
                        }
                )
            })
            .map(|(sq, _)| sq)
            .collect()
    }
}

/// The outcome of a completed move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveApplied {
    #[serde(rename = "move")]
    pub mv: CandidateMove,
    pub snapshot: BoardSnapshot,
    pub side_to_move: Side,
    pub check: CheckStatus,
}

/// The result of a square click.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EngineEvent {
    /// A piece was selected; its legal destinations are now marked.
    Selected {
        from: Square,
        destinations: Vec<Square>,
    },
    /// The selected piece moved.
    MoveApplied(MoveApplied),
    /// The selection was cancelled.
    SelectionCleared,
    /// Nothing happened.
    Ignored,
}
