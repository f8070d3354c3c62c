//! Error types for board operations.
//!
//! Every `BoardError` is a broken caller contract: moves produced by the
//! legality filter never trigger one. A side without a king is a finished
//! game, not an error.

use std::fmt;

use super::{PieceId, Role, Square};

/// Error type for rejected board mutations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A piece was relocated from an empty square or onto an occupied one
    InvariantViolation { from: Square, to: Square },
    /// A move with an empty subject square or a same-team target was applied
    IllegalMoveApplied { subject: Square, target: Square },
    /// A move was requested for an empty square
    NoPieceAt { square: Square },
    /// A square with a coordinate outside 0..8
    OffBoard { square: Square },
    /// A handle does not refer to a piece on the board
    UnknownPiece { id: PieceId },
    /// Promotion to a role other than queen, rook, bishop or knight
    InvalidPromotion { role: Role },
    /// Promotion of a piece that is not a pawn on its last row
    NotPromotable { square: Square },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvariantViolation { from, to } => {
                write!(f, "Cannot relocate piece from {from} to {to}")
            }
            BoardError::IllegalMoveApplied { subject, target } => {
                write!(f, "Illegal move applied: {subject} to {target}")
            }
            BoardError::NoPieceAt { square } => write!(f, "No piece at {square}"),
            BoardError::OffBoard { square } => {
                write!(f, "Square ({}, {}) is off the board", square.row(), square.col())
            }
            BoardError::UnknownPiece { id } => {
                write!(f, "No piece with handle {}", id.index())
            }
            BoardError::InvalidPromotion { role } => {
                write!(f, "Cannot promote to {role}")
            }
            BoardError::NotPromotable { square } => {
                write!(f, "Piece at {square} is not a promotable pawn")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}
