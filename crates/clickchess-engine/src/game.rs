//! Game session: the click-driven selection state machine and move applier.
//!
//! The [`Game`] struct owns the only mutable board. Callers feed it square
//! clicks through [`Game::select_or_move`] and render the events it
//! returns:
//! - clicking an own piece that has legal moves selects it
//! - clicking one of its marked destinations plays the move
//! - clicking anywhere else cancels the selection

use crate::check::{detect_check, CheckStatus};
use crate::legality::legal_moves;
use crate::snapshot::{BoardSnapshot, EngineEvent, MoveApplied};
use crate::{Board, MoveList};
use clickchess_core::{CandidateMove, PlacementError, Side, Square};
use thiserror::Error;
use tracing::debug;

/// Error type for programmatic game operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// The starting placement could not be parsed.
    #[error("invalid placement: {0}")]
    Placement(#[from] PlacementError),
    /// There is no piece on the source square.
    #[error("no piece at {0}")]
    NoPieceAt(Square),
    /// The piece on the source square belongs to the side not on move.
    #[error("the piece at {square} belongs to {side}, who is not on move")]
    NotYourTurn { square: Square, side: Side },
    /// The move is not legal in the current position.
    #[error("illegal move: {from}{to}")]
    IllegalMove { from: Square, to: Square },
}

/// Where the click state machine currently stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    /// No piece is selected.
    #[default]
    AwaitingSelection,
    /// A piece is selected and its legal moves are marked.
    AwaitingDestination { from: Square, moves: MoveList },
}

/// A game session with one authoritative board.
#[derive(Debug, Clone)]
pub struct Game {
    /// Current board.
    board: Board,
    /// Side whose turn it is.
    side_to_move: Side,
    /// Check status of the side to move.
    check: CheckStatus,
    /// Click state machine.
    selection: Selection,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting layout, white to move.
    pub fn new() -> Self {
        Self::from_board(Board::startpos(), Side::White)
    }

    /// Creates a game from an existing board.
    ///
    /// The check status of `side_to_move` is computed immediately.
    pub fn from_board(board: Board, side_to_move: Side) -> Self {
        let check = detect_check(&board, side_to_move.opposite());
        Game {
            board,
            side_to_move,
            check,
            selection: Selection::AwaitingSelection,
        }
    }

    /// Creates a game from placement text.
    pub fn from_placement(text: &str, side_to_move: Side) -> Result<Self, GameError> {
        let board = Board::from_placement(text)?;
        Ok(Self::from_board(board, side_to_move))
    }

    /// Resets the game to the standard starting layout.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns a reference to the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side whose turn it is.
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// Returns the check status of the side to move.
    pub fn check_status(&self) -> &CheckStatus {
        &self.check
    }

    /// Returns true if the side to move is in check.
    pub fn is_check(&self) -> bool {
        self.check.in_check
    }

    /// Returns the current selection state.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Returns a snapshot for rendering, with the legal destinations of
    /// the selected piece marked.
    pub fn snapshot(&self) -> BoardSnapshot {
        match &self.selection {
            Selection::AwaitingSelection => BoardSnapshot::new(&self.board, []),
            Selection::AwaitingDestination { moves, .. } => {
                BoardSnapshot::new(&self.board, moves.destinations())
            }
        }
    }

    /// Returns the legal moves of the piece on `sq`.
    ///
    /// Empty squares yield an empty list. Pieces of the side not on move
    /// are judged against their own king's current safety.
    pub fn legal_moves(&self, sq: Square) -> MoveList {
        let Some(piece) = self.board.piece_at(sq) else {
            return MoveList::new();
        };
        if piece.side == self.side_to_move {
            legal_moves(&self.board, sq, &self.check)
        } else {
            let check = detect_check(&self.board, piece.side.opposite());
            legal_moves(&self.board, sq, &check)
        }
    }

    /// Returns the legal destination squares of the piece on `sq`.
    pub fn legal_destinations(&self, sq: Square) -> Vec<Square> {
        self.legal_moves(sq).destinations().collect()
    }

    /// Returns every legal move of the side to move.
    pub fn all_legal_moves(&self) -> Vec<CandidateMove> {
        self.board
            .pieces_of(self.side_to_move)
            .flat_map(|(from, _)| legal_moves(&self.board, from, &self.check).as_slice().to_vec())
            .collect()
    }

    /// Handles a click on untrusted (row, column) coordinates.
    ///
    /// Off-board coordinates are ignored without touching the state.
    pub fn click(&mut self, row: i32, column: i32) -> EngineEvent {
        match Square::from_coords(row, column) {
            Some(sq) => self.select_or_move(sq),
            None => {
                debug!(row, column, "click outside the board ignored");
                EngineEvent::Ignored
            }
        }
    }

    /// Advances the selection state machine with a click on `sq`.
    pub fn select_or_move(&mut self, sq: Square) -> EngineEvent {
        match std::mem::take(&mut self.selection) {
            Selection::AwaitingSelection => self.select(sq),
            Selection::AwaitingDestination { from, moves } => match moves.find_destination(sq) {
                Some(m) => EngineEvent::MoveApplied(self.apply(m)),
                None => {
                    debug!(%from, clicked = %sq, "selection cleared");
                    EngineEvent::SelectionCleared
                }
            },
        }
    }

    /// Makes a move given by its source and destination squares.
    ///
    /// Any pending selection is discarded.
    pub fn make_move(&mut self, from: Square, to: Square) -> Result<MoveApplied, GameError> {
        let piece = self.board.piece_at(from).ok_or(GameError::NoPieceAt(from))?;
        if piece.side != self.side_to_move {
            return Err(GameError::NotYourTurn {
                square: from,
                side: piece.side,
            });
        }

        let m = legal_moves(&self.board, from, &self.check)
            .find_destination(to)
            .ok_or(GameError::IllegalMove { from, to })?;

        self.selection = Selection::AwaitingSelection;
        Ok(self.apply(m))
    }

    /// Tries to select the piece on `sq`.
    fn select(&mut self, sq: Square) -> EngineEvent {
        let Some(piece) = self.board.piece_at(sq) else {
            return EngineEvent::Ignored;
        };
        if piece.side != self.side_to_move {
            return EngineEvent::Ignored;
        }

        let moves = legal_moves(&self.board, sq, &self.check);
        if moves.is_empty() {
            debug!(square = %sq, "piece has no legal moves");
            return EngineEvent::Ignored;
        }

        let destinations: Vec<Square> = moves.destinations().collect();
        debug!(square = %sq, count = destinations.len(), "piece selected");
        self.selection = Selection::AwaitingDestination { from: sq, moves };
        EngineEvent::Selected {
            from: sq,
            destinations,
        }
    }

    /// Applies a legal move, recomputes check status and passes the turn.
    fn apply(&mut self, m: CandidateMove) -> MoveApplied {
        let mover = self.side_to_move;
        self.board.apply_move(m);
        self.check = detect_check(&self.board, mover);
        self.side_to_move = mover.opposite();
        self.selection = Selection::AwaitingSelection;

        debug!(side = %mover, mv = %m, kind = ?m.kind, "move applied");
        if self.check.in_check {
            debug!(
                side = %self.side_to_move,
                attackers = self.check.attackers.len(),
                "king in check"
            );
        }

        MoveApplied {
            mv: m,
            snapshot: self.snapshot(),
            side_to_move: self.side_to_move,
            check: self.check.clone(),
        }
    }
}
