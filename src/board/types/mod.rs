//! Core board types.
//!
//! - `Color`, `Role` and `PieceKind` - what a piece is
//! - `Piece` and `PieceId` - a piece on the board and its stable handle
//! - `Square` and `SquareSet` - board coordinates
//! - `Move` and `MoveKind` - move descriptors
//! - `CastlingRights` and `CastleSide` - castling state

mod castling;
mod moves;
mod piece;
mod square;
mod square_set;

pub use castling::{CastleSide, CastlingRights};
pub use moves::{Move, MoveKind};
pub use piece::{Color, Piece, PieceId, PieceKind, Role};
pub use square::Square;
pub use square_set::{SquareSet, SquareSetIter};
