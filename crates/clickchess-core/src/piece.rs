//! Piece representation.

use crate::Side;
use serde::Serialize;

/// The six kinds of pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Returns the placement character for this kind with the given side.
    pub const fn to_char(self, side: Side) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match side {
            Side::White => c.to_ascii_uppercase(),
            Side::Black => c,
        }
    }

    /// Parses a placement character into a kind and side.
    pub const fn from_char(c: char) -> Option<(PieceKind, Side)> {
        let side = if c.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some((kind, side))
    }

    /// Returns true if this kind moves along rays (bishop, rook, or queen).
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// Kind-specific state of a piece.
///
/// Only pawns carry state: whether they advanced two squares on the last
/// ply, which opens them to a side-capture on the opponent's reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Role {
    Pawn { just_double_stepped: bool },
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Role {
    /// Returns the stateless kind of this role.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        match self {
            Role::Pawn { .. } => PieceKind::Pawn,
            Role::Knight => PieceKind::Knight,
            Role::Bishop => PieceKind::Bishop,
            Role::Rook => PieceKind::Rook,
            Role::Queen => PieceKind::Queen,
            Role::King => PieceKind::King,
        }
    }
}

impl From<PieceKind> for Role {
    fn from(kind: PieceKind) -> Self {
        match kind {
            PieceKind::Pawn => Role::Pawn {
                just_double_stepped: false,
            },
            PieceKind::Knight => Role::Knight,
            PieceKind::Bishop => Role::Bishop,
            PieceKind::Rook => Role::Rook,
            PieceKind::Queen => Role::Queen,
            PieceKind::King => Role::King,
        }
    }
}

/// A piece on the board: its owning side and kind-specific state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Piece {
    pub side: Side,
    #[serde(flatten)]
    pub role: Role,
}

impl Piece {
    /// Creates a piece of the given kind with fresh state.
    #[inline]
    pub fn new(kind: PieceKind, side: Side) -> Self {
        Piece {
            side,
            role: kind.into(),
        }
    }

    /// Creates a pawn with the double-step flag set.
    #[inline]
    pub const fn double_stepped_pawn(side: Side) -> Self {
        Piece {
            side,
            role: Role::Pawn {
                just_double_stepped: true,
            },
        }
    }

    /// Returns the kind of this piece.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.role.kind()
    }

    /// Returns true for a pawn that advanced two squares on the last ply.
    #[inline]
    pub const fn just_double_stepped(self) -> bool {
        matches!(
            self.role,
            Role::Pawn {
                just_double_stepped: true
            }
        )
    }

    /// Returns a copy with the pawn double-step flag set to `value`.
    ///
    /// Non-pawns are returned unchanged.
    #[inline]
    pub const fn with_double_step(self, value: bool) -> Self {
        match self.role {
            Role::Pawn { .. } => Piece {
                side: self.side,
                role: Role::Pawn {
                    just_double_stepped: value,
                },
            },
            _ => self,
        }
    }

    /// Returns the placement character for this piece.
    #[inline]
    pub const fn to_char(self) -> char {
        self.kind().to_char(self.side)
    }
}
