//! Move descriptor.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::CastleSide;
use super::square::Square;

/// Classification of a move, decided when the move is created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    /// Any move without a side effect beyond a capture on the target square
    Normal,
    /// Pawn advancing two squares from its starting row
    DoublePawn,
    /// Pawn capturing a double-advanced pawn beside it
    EnPassant,
    Castle(CastleSide),
}

impl MoveKind {
    #[inline]
    #[must_use]
    pub const fn is_special(self) -> bool {
        !matches!(self, MoveKind::Normal)
    }
}

/// A move about to be applied.
///
/// `subject` is the square of the piece that moves, `target` is where it ends
/// up. `object` is the square of a second piece affected by the move: the
/// captured piece, or the rook when castling. For en passant the object sits
/// beside the subject, not on the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub subject: Square,
    pub object: Option<Square>,
    pub target: Square,
    pub kind: MoveKind,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn is_castle(&self) -> bool {
        matches!(self.kind, MoveKind::Castle(_))
    }

    /// True if the move removes an enemy piece
    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.object.is_some() && !self.is_castle()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.subject, self.target)
    }
}
