//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece for tests and puzzles.
//!
//! # Example
//! ```
//! use normal_chess::board::{BoardBuilder, Color, Role, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(0, 4), Color::White, Role::King)
//!     .piece(Square(7, 4), Color::Black, Role::King)
//!     .piece(Square(1, 0), Color::White, Role::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! assert!(!board.is_game_over());
//! ```

use log::warn;

use super::state::BACK_RANK;
use super::{Board, CastleSide, CastlingRights, Color, PieceKind, Role, Rules, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, PieceKind)>,
    turn: u32,
    castling: CastlingRights,
    double_pawn_column: Option<usize>,
    rules: Rules,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder with no castling rights.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            turn: 0,
            castling: CastlingRights::revoked(),
            double_pawn_column: None,
            rules: Rules::default(),
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        for (col, &role) in BACK_RANK.iter().enumerate() {
            builder
                .pieces
                .push((Square(0, col), PieceKind::new(Color::White, role)));
            builder
                .pieces
                .push((Square(7, col), PieceKind::new(Color::Black, role)));
        }
        for col in 0..8 {
            builder
                .pieces
                .push((Square(1, col), PieceKind::new(Color::White, Role::Pawn)));
            builder
                .pieces
                .push((Square(6, col), PieceKind::new(Color::Black, Role::Pawn)));
        }
        builder.castling = CastlingRights::fresh();
        builder
    }

    /// Place a piece on the board, replacing anything already there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, role: Role) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, PieceKind::new(color, role)));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Set the side to move. Keeps the turn counter's magnitude.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        let base = self.turn - self.turn % 2;
        self.turn = match color {
            Color::White => base,
            Color::Black => base + 1,
        };
        self
    }

    /// Set the turn counter directly; its parity decides the side to move.
    #[must_use]
    pub const fn turn(mut self, turn: u32) -> Self {
        self.turn = turn;
        self
    }

    /// Set all castling flags at once.
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling = rights;
        self
    }

    /// Allow kingside castling for a color.
    #[must_use]
    pub fn castle_kingside(mut self, color: Color) -> Self {
        self.castling.restore(color, CastleSide::KingSide);
        self
    }

    /// Allow queenside castling for a color.
    #[must_use]
    pub fn castle_queenside(mut self, color: Color) -> Self {
        self.castling.restore(color, CastleSide::QueenSide);
        self
    }

    /// Allow every castle.
    #[must_use]
    pub const fn all_castling_rights(mut self) -> Self {
        self.castling = CastlingRights::fresh();
        self
    }

    /// Disallow every castle.
    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.castling = CastlingRights::revoked();
        self
    }

    /// Record that the previous move was a double pawn advance on `col`.
    #[must_use]
    pub const fn double_pawn_column(mut self, col: usize) -> Self {
        self.double_pawn_column = Some(col);
        self
    }

    #[must_use]
    pub const fn rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();

        for (square, kind) in self.pieces {
            if !square.is_on_board() {
                warn!("{kind} placed off the board at {square:?}, skipped");
                continue;
            }
            board.add_piece(kind, square);
        }

        board.turn = self.turn;
        board.castling = self.castling;
        board.double_pawn_column = self.double_pawn_column;
        board.rules = self.rules;

        board
    }
}
