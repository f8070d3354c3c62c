//! Chess board state and rules.
//!
//! Holds the pieces, enumerates legal moves, applies them with their side
//! effects (castling, en passant, double pawn advance) and answers check,
//! checkmate, stalemate and game-over queries.
//!
//! # Example
//! ```
//! use normal_chess::board::{Board, Square};
//!
//! let mut board = Board::new();
//! let pawn = board.piece_at(Square(1, 4)).unwrap();
//! assert!(board.legal_targets(pawn).contains(Square(3, 4)));
//!
//! let mv = board.create_move(Square(1, 4), Square(3, 4)).unwrap();
//! board.apply_move(&mv).unwrap();
//! assert_eq!(board.double_pawn_column(), Some(4));
//! ```

mod builder;
mod display;
mod error;
mod geometry;
mod legality;
mod make_move;
mod rules;
mod special;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{BoardError, SquareError};
pub use rules::{CaptureResolution, PawnThreats, Rules};
pub use state::Board;
pub use status::Outcome;
pub use types::{
    CastleSide, CastlingRights, Color, Move, MoveKind, Piece, PieceId, PieceKind, Role, Square,
    SquareSet, SquareSetIter,
};

pub use geometry::{geometric_targets, is_geometric_target, path_is_blocked};
pub use special::{can_team_capture_spot, is_special_move, special_move_kind};
