//! Piece, role and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// What a piece does, independent of its side.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Role {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl Role {
    /// All roles, back rank pieces first
    pub const ALL: [Role; 6] = [
        Role::King,
        Role::Queen,
        Role::Rook,
        Role::Bishop,
        Role::Knight,
        Role::Pawn,
    ];

    /// Roles a pawn may be promoted to, in order of typical preference (queen first)
    pub const PROMOTIONS: [Role; 4] = [Role::Queen, Role::Rook, Role::Bishop, Role::Knight];

    /// Returns true if this role moves along rays and can be blocked (Queen, Rook, Bishop)
    #[inline]
    #[must_use]
    pub const fn is_slider(self) -> bool {
        matches!(self, Role::Queen | Role::Rook | Role::Bishop)
    }

    /// Lowercase letter for this role (k, q, r, b, n, p)
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Role::King => 'k',
            Role::Queen => 'q',
            Role::Rook => 'r',
            Role::Bishop => 'b',
            Role::Knight => 'n',
            Role::Pawn => 'p',
        }
    }

    #[must_use]
    pub fn from_char(c: char) -> Option<Role> {
        match c.to_ascii_lowercase() {
            'k' => Some(Role::King),
            'q' => Some(Role::Queen),
            'r' => Some(Role::Rook),
            'b' => Some(Role::Bishop),
            'n' => Some(Role::Knight),
            'p' => Some(Role::Pawn),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::King => "king",
            Role::Queen => "queen",
            Role::Rook => "rook",
            Role::Bishop => "bishop",
            Role::Knight => "knight",
            Role::Pawn => "pawn",
        };
        f.write_str(name)
    }
}

/// The two sides.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors, White first
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Home row of the back-rank pieces (0 for White, 7 for Black)
    #[inline]
    #[must_use]
    pub const fn home_row(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Pawn forward direction (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_direction(self) -> isize {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Pawn starting row (1 for White, 6 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_start_row(self) -> usize {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Row a pawn must stand on to capture en passant (4 for White, 3 for Black)
    #[inline]
    #[must_use]
    pub const fn en_passant_row(self) -> usize {
        match self {
            Color::White => 4,
            Color::Black => 3,
        }
    }

    /// Pawn promotion row (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub const fn promotion_row(self) -> usize {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// One of the twelve piece kinds: a side paired with a role.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceKind {
    pub color: Color,
    pub role: Role,
}

impl PieceKind {
    #[inline]
    #[must_use]
    pub const fn new(color: Color, role: Role) -> Self {
        PieceKind { color, role }
    }

    /// Returns true if both kinds belong to the same side
    #[inline]
    #[must_use]
    pub fn same_team(self, other: PieceKind) -> bool {
        self.color == other.color
    }

    /// Role letter, uppercase for White
    #[must_use]
    pub fn to_char(self) -> char {
        let c = self.role.to_char();
        if self.color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.role)
    }
}

/// A piece standing on the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub kind: PieceKind,
    pub square: Square,
}

impl Piece {
    #[inline]
    #[must_use]
    pub const fn new(kind: PieceKind, square: Square) -> Self {
        Piece { kind, square }
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.kind.color
    }

    #[inline]
    #[must_use]
    pub const fn role(&self) -> Role {
        self.kind.role
    }
}

/// Stable handle to a piece in a board's arena.
///
/// Handles are never reused while the board lives, so a binding held by the
/// caller either resolves to the same piece or to nothing once it is captured.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceId(pub(crate) usize);

impl PieceId {
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}
