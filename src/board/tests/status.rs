//! Check, checkmate, stalemate and game-over detection.

use super::{play, position, sq};
use crate::board::{Board, Color, Outcome, Role};

fn fools_mate() -> Board {
    let mut board = Board::new();
    play(&mut board, "f2", "f3");
    play(&mut board, "e7", "e5");
    play(&mut board, "g2", "g4");
    play(&mut board, "d8", "h4");
    board
}

#[test]
fn test_start_position_is_live() {
    let board = Board::new();
    assert!(!board.is_in_check());
    assert!(!board.is_checkmate());
    assert!(!board.is_stalemate());
    assert!(!board.is_game_over());
    assert_eq!(board.outcome(), None);
}

#[test]
fn test_fools_mate() {
    let board = fools_mate();
    assert_eq!(board.side_to_move(), Color::White);
    assert!(board.is_in_check());
    assert!(board.is_checkmate());
    assert!(!board.is_stalemate());
    assert!(board.is_game_over());
    assert_eq!(
        board.outcome(),
        Some(Outcome::Checkmate {
            winner: Color::Black
        })
    );
}

#[test]
fn test_removing_the_checker_lifts_mate() {
    let mut board = fools_mate();
    board.remove_piece_at(sq("h4"));
    assert!(!board.is_in_check());
    assert!(!board.is_checkmate());
    assert!(!board.is_game_over());
}

#[test]
fn test_check_with_escape_is_not_mate() {
    let mut board = Board::new();
    play(&mut board, "e2", "e4");
    play(&mut board, "f7", "f6");
    play(&mut board, "d1", "h5");
    assert!(board.is_in_check());
    assert!(!board.is_checkmate());
    assert!(board.has_any_legal_move());
}

#[test]
fn test_stalemate() {
    let board = position(&[
        ("h8", Color::Black, Role::King),
        ("f7", Color::White, Role::Queen),
        ("g6", Color::White, Role::King),
    ])
    .side_to_move(Color::Black)
    .build();
    assert!(!board.is_in_check());
    assert!(!board.has_any_legal_move());
    assert!(board.is_stalemate());
    assert!(!board.is_checkmate());
    assert!(board.is_game_over());
    assert_eq!(board.outcome(), Some(Outcome::Stalemate));
}

#[test]
fn test_missing_king_ends_the_game() {
    let board = position(&[
        ("e1", Color::White, Role::King),
        ("a7", Color::Black, Role::Pawn),
    ])
    .side_to_move(Color::Black)
    .build();
    assert!(!board.is_in_check());
    assert!(board.is_game_over());
    assert_eq!(
        board.outcome(),
        Some(Outcome::KingCaptured {
            winner: Color::White
        })
    );
}

#[test]
fn test_empty_board_has_no_kings() {
    let board = position(&[]).build();
    assert!(board.is_game_over());
    assert_eq!(board.outcome(), Some(Outcome::NoKings));
}
