//! Board state: which piece stands on which square.

use clickchess_core::{
    format_placement, parse_placement, CandidateMove, Piece, PieceKind, PlacementError, Side,
    Square, STARTING_PLACEMENT,
};
use std::fmt;

/// The mapping of occupied squares to pieces.
///
/// Pure data: at most one piece per square, and boards built from
/// placement text carry exactly one king per side.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// Creates an empty board.
    pub fn empty() -> Self {
        Board {
            squares: [None; Square::COUNT],
        }
    }

    /// Creates the standard starting layout.
    pub fn startpos() -> Self {
        Self::from_placement(STARTING_PLACEMENT).expect("STARTING_PLACEMENT is valid")
    }

    /// Creates a board from placement text.
    pub fn from_placement(text: &str) -> Result<Self, PlacementError> {
        Ok(Board {
            squares: parse_placement(text)?,
        })
    }

    /// Converts the board to placement text.
    pub fn to_placement(&self) -> String {
        format_placement(&self.squares)
    }

    /// Returns the piece at the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Returns true if no piece stands on the square.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    /// Places a piece, replacing any occupant.
    #[inline]
    pub fn put(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.index()] = Some(piece);
    }

    /// Removes and returns the occupant of a square.
    #[inline]
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    /// Iterates over all occupied squares, row by row.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Iterates over the pieces belonging to one side.
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.side == side)
    }

    /// Returns the square of the given side's king.
    pub fn king_square(&self, side: Side) -> Option<Square> {
        self.pieces_of(side)
            .find(|(_, piece)| piece.kind() == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Applies a move in place.
    ///
    /// Relocates the moving piece, removes whatever the move captures,
    /// clears the double-step flag on every pawn of the mover and sets it
    /// on the moved pawn if this was its two-square advance.
    pub fn apply_move(&mut self, m: CandidateMove) {
        let Some(piece) = self.remove(m.from) else {
            return;
        };
        let mover = piece.side;

        if let Some(captured) = m.captured_square() {
            self.remove(captured);
        }

        for sq in Square::all() {
            if let Some(p) = self.squares[sq.index()] {
                if p.side == mover && p.just_double_stepped() {
                    self.squares[sq.index()] = Some(p.with_double_step(false));
                }
            }
        }

        self.put(m.to, piece.with_double_step(m.is_double_step()));
    }

    /// Returns the board that results from applying a move to a copy.
    pub fn make_move(&self, m: CandidateMove) -> Board {
        let mut board = self.clone();
        board.apply_move(m);
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_placement())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8u8 {
            write!(f, "{} ", 8 - row)?;
            for column in 0..8u8 {
                let c = Square::new(row, column)
                    .and_then(|sq| self.piece_at(sq))
                    .map_or('.', Piece::to_char);
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clickchess_core::MoveKind;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn startpos_placement_roundtrip() {
        let board = Board::startpos();
        assert_eq!(board.to_placement(), STARTING_PLACEMENT);
        assert_eq!(board.pieces().count(), 32);
    }

    #[test]
    fn piece_at() {
        let board = Board::startpos();
        assert_eq!(
            board.piece_at(sq("e1")),
            Some(Piece::new(PieceKind::King, Side::White))
        );
        assert_eq!(
            board.piece_at(sq("e8")),
            Some(Piece::new(PieceKind::King, Side::Black))
        );
        assert_eq!(board.piece_at(sq("e4")), None);
        assert!(board.is_empty(sq("e4")));
    }

    #[test]
    fn king_square() {
        let board = Board::startpos();
        assert_eq!(board.king_square(Side::White), Square::new(7, 4));
        assert_eq!(board.king_square(Side::Black), Square::new(0, 4));
        assert_eq!(Board::empty().king_square(Side::White), None);
    }

    #[test]
    fn pieces_of_side() {
        let board = Board::startpos();
        assert_eq!(board.pieces_of(Side::White).count(), 16);
        assert!(board
            .pieces_of(Side::Black)
            .all(|(sq, _)| sq.row() <= 1));
    }

    #[test]
    fn apply_double_step_sets_flag() {
        let mut board = Board::startpos();
        board.apply_move(CandidateMove::new(
            sq("e2"),
            sq("e4"),
            PieceKind::Pawn,
            MoveKind::DoubleStep,
        ));
        assert!(board.is_empty(sq("e2")));
        assert_eq!(
            board.piece_at(sq("e4")),
            Some(Piece::double_stepped_pawn(Side::White))
        );
    }

    #[test]
    fn apply_move_clears_movers_flags_only() {
        let mut board = Board::from_placement("4k3/8/8/3pP3/8/8/P7/4K3").unwrap();
        board.put(sq("e5"), Piece::double_stepped_pawn(Side::White));
        board.put(sq("d5"), Piece::double_stepped_pawn(Side::Black));

        board.apply_move(CandidateMove::new(
            sq("a2"),
            sq("a3"),
            PieceKind::Pawn,
            MoveKind::Quiet,
        ));
        assert!(!board.piece_at(sq("e5")).unwrap().just_double_stepped());
        assert!(!board.piece_at(sq("a3")).unwrap().just_double_stepped());
        assert!(board.piece_at(sq("d5")).unwrap().just_double_stepped());
    }

    #[test]
    fn apply_side_capture_removes_adjacent_pawn() {
        let mut board = Board::from_placement("4k3/8/8/8/3pP3/8/8/4K3").unwrap();
        board.put(sq("e4"), Piece::double_stepped_pawn(Side::White));
        board.apply_move(CandidateMove::new(
            sq("d4"),
            sq("e3"),
            PieceKind::Pawn,
            MoveKind::SideCapture {
                captured: sq("e4"),
            },
        ));
        assert!(board.is_empty(sq("d4")));
        assert!(board.is_empty(sq("e4")));
        assert_eq!(
            board.piece_at(sq("e3")),
            Some(Piece::new(PieceKind::Pawn, Side::Black))
        );
    }

    #[test]
    fn make_move_leaves_original_untouched() {
        let board = Board::startpos();
        let after = board.make_move(CandidateMove::new(
            sq("g1"),
            sq("f3"),
            PieceKind::Knight,
            MoveKind::Quiet,
        ));
        assert_eq!(board, Board::startpos());
        assert_eq!(
            after.piece_at(sq("f3")),
            Some(Piece::new(PieceKind::Knight, Side::White))
        );
    }

    #[test]
    fn display_diagram() {
        let text = Board::startpos().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "8  r n b q k b n r");
        assert_eq!(lines[4], "4  . . . . . . . .");
        assert_eq!(lines[7], "1  R N B Q K B N R");
        assert_eq!(lines[8], "   a b c d e f g h");
    }
}
