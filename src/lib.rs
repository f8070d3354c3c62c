pub mod board;

pub use board::{Board, BoardBuilder, BoardError, Color, Move, PieceId, PieceKind, Role, Square};
