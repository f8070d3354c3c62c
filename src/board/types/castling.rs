//! Castling rights type.
//!
//! Rights are tracked as six "has moved" flags, one per king and per rook.
//! A flag only ever goes from unset to set; nothing clears it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

const WHITE_KING_MOVED: u8 = 1 << 0;
const WHITE_KINGS_ROOK_MOVED: u8 = 1 << 1;
const WHITE_QUEENS_ROOK_MOVED: u8 = 1 << 2;
const BLACK_KING_MOVED: u8 = 1 << 3;
const BLACK_KINGS_ROOK_MOVED: u8 = 1 << 4;
const BLACK_QUEENS_ROOK_MOVED: u8 = 1 << 5;

const ALL_MOVED: u8 = WHITE_KING_MOVED
    | WHITE_KINGS_ROOK_MOVED
    | WHITE_QUEENS_ROOK_MOVED
    | BLACK_KING_MOVED
    | BLACK_KINGS_ROOK_MOVED
    | BLACK_QUEENS_ROOK_MOVED;

/// Which rook a castle uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// Column the rook starts on
    #[inline]
    #[must_use]
    pub const fn rook_col(self) -> usize {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// Column the king lands on
    #[inline]
    #[must_use]
    pub const fn king_target_col(self) -> usize {
        match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 2,
        }
    }

    /// Column the rook lands on, next to the king
    #[inline]
    #[must_use]
    pub const fn rook_target_col(self) -> usize {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }

    /// Columns between king and rook that must be empty
    #[must_use]
    pub const fn empty_cols(self) -> &'static [usize] {
        match self {
            CastleSide::KingSide => &[5, 6],
            CastleSide::QueenSide => &[1, 2, 3],
        }
    }

    /// Columns the king crosses or lands on, which must not be attacked
    #[must_use]
    pub const fn safe_cols(self) -> &'static [usize] {
        match self {
            CastleSide::KingSide => &[5, 6],
            CastleSide::QueenSide => &[3, 2],
        }
    }

    /// Side whose castle lands the king on `col`, if any
    #[must_use]
    pub const fn for_king_target(col: usize) -> Option<CastleSide> {
        match col {
            6 => Some(CastleSide::KingSide),
            2 => Some(CastleSide::QueenSide),
            _ => None,
        }
    }

    /// Side whose rook starts on `sq` for `color`, if `sq` is a rook home square
    #[must_use]
    pub fn for_rook_home(color: Color, sq: Square) -> Option<CastleSide> {
        if sq.row() != color.home_row() {
            return None;
        }
        CastleSide::BOTH
            .into_iter()
            .find(|side| side.rook_col() == sq.col())
    }
}

/// King and rook movement flags for both sides
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// Nothing has moved yet: every castle is still possible
    #[must_use]
    pub const fn fresh() -> Self {
        CastlingRights(0)
    }

    /// Every king and rook counts as moved: no castle is possible
    #[must_use]
    pub const fn revoked() -> Self {
        CastlingRights(ALL_MOVED)
    }

    #[inline]
    #[must_use]
    pub const fn king_moved(self, color: Color) -> bool {
        self.0 & Self::king_bit(color) != 0
    }

    #[inline]
    #[must_use]
    pub const fn rook_moved(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::rook_bit(color, side) != 0
    }

    /// True while neither the king nor the `side` rook of `color` has moved
    #[inline]
    #[must_use]
    pub const fn can_castle(self, color: Color, side: CastleSide) -> bool {
        !self.king_moved(color) && !self.rook_moved(color, side)
    }

    #[inline]
    pub fn mark_king_moved(&mut self, color: Color) {
        self.0 |= Self::king_bit(color);
    }

    #[inline]
    pub fn mark_rook_moved(&mut self, color: Color, side: CastleSide) {
        self.0 |= Self::rook_bit(color, side);
    }

    /// Clear the flags that block `color` from castling on `side`.
    ///
    /// Only used while setting up a position; play never clears a flag.
    pub(crate) fn restore(&mut self, color: Color, side: CastleSide) {
        self.0 &= !(Self::king_bit(color) | Self::rook_bit(color, side));
    }

    const fn king_bit(color: Color) -> u8 {
        match color {
            Color::White => WHITE_KING_MOVED,
            Color::Black => BLACK_KING_MOVED,
        }
    }

    const fn rook_bit(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => WHITE_KINGS_ROOK_MOVED,
            (Color::White, CastleSide::QueenSide) => WHITE_QUEENS_ROOK_MOVED,
            (Color::Black, CastleSide::KingSide) => BLACK_KINGS_ROOK_MOVED,
            (Color::Black, CastleSide::QueenSide) => BLACK_QUEENS_ROOK_MOVED,
        }
    }
}
