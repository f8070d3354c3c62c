//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `geometry.rs` - Per-kind target tables and path blocking
//! - `special_moves.rs` - Double advance, en passant and castling
//! - `legality.rs` - Legal target filtering, pins, perft counts
//! - `make_move.rs` - Move creation, application and promotion
//! - `status.rs` - Check, checkmate, stalemate and game over
//! - `proptest.rs` - Property-based random playouts

mod proptest;
mod special_moves;
mod status;

use crate::board::{Board, BoardBuilder, Color, PieceId, Role, Square};

pub(super) fn sq(name: &str) -> Square {
    name.parse().expect("valid square")
}

pub(super) fn position(pieces: &[(&str, Color, Role)]) -> BoardBuilder {
    pieces
        .iter()
        .fold(BoardBuilder::new(), |builder, &(name, color, role)| {
            builder.piece(sq(name), color, role)
        })
}

pub(super) fn id_at(board: &Board, name: &str) -> PieceId {
    board
        .piece_at(sq(name))
        .unwrap_or_else(|| panic!("no piece on {name}"))
}

pub(super) fn play(board: &mut Board, from: &str, to: &str) {
    let mv = board.create_move(sq(from), sq(to)).unwrap();
    assert!(
        board.legal_targets(id_at(board, from)).contains(sq(to)),
        "{from}{to} is not legal in\n{board}"
    );
    board.apply_move(&mv).unwrap();
}

pub(super) fn targets(board: &Board, name: &str) -> Vec<String> {
    board
        .legal_targets(id_at(board, name))
        .iter()
        .map(|sq| sq.to_string())
        .collect()
}
