//! Double advance, en passant and castling.

use super::{play, position, sq, targets};
use crate::board::{Board, BoardBuilder, CastleSide, Color, MoveKind, PieceKind, Role, Rules};

fn castling_position() -> BoardBuilder {
    position(&[
        ("e1", Color::White, Role::King),
        ("a1", Color::White, Role::Rook),
        ("h1", Color::White, Role::Rook),
        ("e8", Color::Black, Role::King),
    ])
    .all_castling_rights()
}

#[test]
fn test_double_advance_sets_and_clears_column() {
    let mut board = Board::new();
    play(&mut board, "e2", "e4");
    assert_eq!(board.double_pawn_column(), Some(4));

    play(&mut board, "g8", "f6");
    assert_eq!(board.double_pawn_column(), None);

    play(&mut board, "d2", "d3");
    play(&mut board, "c7", "c5");
    assert_eq!(board.double_pawn_column(), Some(2));
}

#[test]
fn test_double_advance_blocked_by_piece_on_middle_square() {
    let mut board = Board::new();
    play(&mut board, "g1", "f3");
    play(&mut board, "b8", "c6");
    assert_eq!(targets(&board, "f2"), Vec::<String>::new());
    assert_eq!(targets(&board, "e2"), vec!["e3", "e4"]);
}

fn en_passant_position() -> Board {
    position(&[
        ("e1", Color::White, Role::King),
        ("e5", Color::White, Role::Pawn),
        ("e8", Color::Black, Role::King),
        ("d7", Color::Black, Role::Pawn),
    ])
    .side_to_move(Color::Black)
    .build()
}

#[test]
fn test_en_passant_capture_removes_passed_pawn() {
    let mut board = en_passant_position();
    play(&mut board, "d7", "d5");
    assert_eq!(targets(&board, "e5"), vec!["d6", "e6"]);

    let mv = board.create_move(sq("e5"), sq("d6")).unwrap();
    assert_eq!(mv.kind, MoveKind::EnPassant);
    assert_eq!(mv.object, Some(sq("d5")));

    board.apply_move(&mv).unwrap();
    assert!(!board.is_occupied(sq("d5")));
    assert_eq!(
        board.kind_at(sq("d6")),
        Some(PieceKind::new(Color::White, Role::Pawn))
    );
    assert_eq!(board.piece_ids_of(Color::Black).len(), 1);
}

#[test]
fn test_en_passant_only_right_after_double_advance() {
    let mut board = en_passant_position();
    play(&mut board, "d7", "d5");
    play(&mut board, "e1", "e2");
    play(&mut board, "e8", "e7");
    assert_eq!(targets(&board, "e5"), vec!["e6"]);
}

#[test]
fn test_single_step_does_not_allow_en_passant() {
    let mut board = position(&[
        ("e1", Color::White, Role::King),
        ("e5", Color::White, Role::Pawn),
        ("e8", Color::Black, Role::King),
        ("d6", Color::Black, Role::Pawn),
    ])
    .side_to_move(Color::Black)
    .build();
    play(&mut board, "d6", "d5");
    assert_eq!(board.double_pawn_column(), None);
    assert_eq!(targets(&board, "e5"), vec!["e6"]);
}

#[test]
fn test_castle_both_sides() {
    let board = castling_position().build();
    let king = targets(&board, "e1");
    assert!(king.contains(&"g1".to_string()));
    assert!(king.contains(&"c1".to_string()));

    let mut kingside = board.clone();
    play(&mut kingside, "e1", "g1");
    assert_eq!(
        kingside.kind_at(sq("f1")),
        Some(PieceKind::new(Color::White, Role::Rook))
    );
    assert!(!kingside.is_occupied(sq("h1")));
    assert!(!kingside.castling_rights().can_castle(Color::White, CastleSide::QueenSide));

    let mut queenside = board;
    let mv = queenside.create_move(sq("e1"), sq("c1")).unwrap();
    assert_eq!(mv.kind, MoveKind::Castle(CastleSide::QueenSide));
    assert_eq!(mv.object, Some(sq("a1")));
    queenside.apply_move(&mv).unwrap();
    assert_eq!(
        queenside.kind_at(sq("d1")),
        Some(PieceKind::new(Color::White, Role::Rook))
    );
    assert_eq!(
        queenside.kind_at(sq("c1")),
        Some(PieceKind::new(Color::White, Role::King))
    );
}

#[test]
fn test_king_that_moved_cannot_castle() {
    let mut board = castling_position().build();
    play(&mut board, "e1", "f1");
    play(&mut board, "e8", "e7");
    play(&mut board, "f1", "e1");
    play(&mut board, "e7", "e8");

    let king = targets(&board, "e1");
    assert!(!king.contains(&"g1".to_string()));
    assert!(!king.contains(&"c1".to_string()));
    assert!(board.castling_rights().king_moved(Color::White));
}

#[test]
fn test_rook_that_moved_cannot_castle() {
    let mut board = castling_position().build();
    play(&mut board, "h1", "h2");
    play(&mut board, "e8", "e7");
    play(&mut board, "h2", "h1");
    play(&mut board, "e7", "e8");

    let king = targets(&board, "e1");
    assert!(!king.contains(&"g1".to_string()));
    assert!(king.contains(&"c1".to_string()));
}

#[test]
fn test_attacked_transit_square_blocks_castling() {
    let board = castling_position()
        .piece(sq("f8"), Color::Black, Role::Rook)
        .build();
    let king = targets(&board, "e1");
    assert!(!king.contains(&"g1".to_string()));
    assert!(king.contains(&"c1".to_string()));
}

#[test]
fn test_attacked_b_file_does_not_block_queenside() {
    let board = castling_position()
        .piece(sq("b8"), Color::Black, Role::Rook)
        .build();
    assert!(targets(&board, "e1").contains(&"c1".to_string()));
}

#[test]
fn test_occupied_b_file_blocks_queenside() {
    let board = castling_position()
        .piece(sq("b1"), Color::White, Role::Knight)
        .build();
    let king = targets(&board, "e1");
    assert!(!king.contains(&"c1".to_string()));
    assert!(king.contains(&"g1".to_string()));
}

#[test]
fn test_no_castling_out_of_check() {
    let board = position(&[
        ("e1", Color::White, Role::King),
        ("a1", Color::White, Role::Rook),
        ("h1", Color::White, Role::Rook),
        ("a8", Color::Black, Role::King),
        ("e5", Color::Black, Role::Rook),
    ])
    .all_castling_rights()
    .build();
    assert!(board.is_in_check());
    let king = targets(&board, "e1");
    assert!(!king.contains(&"g1".to_string()));
    assert!(!king.contains(&"c1".to_string()));
}

#[test]
fn test_empty_transit_square_attacked_by_pawn_blocks_castling() {
    let board = castling_position()
        .piece(sq("e2"), Color::Black, Role::Pawn)
        .build();
    assert_eq!(targets(&board, "e1"), vec!["d2", "e2", "f2"]);
}

#[test]
fn test_pawn_threatening_only_its_moves_lets_king_castle_past_it() {
    let board = castling_position()
        .piece(sq("e2"), Color::Black, Role::Pawn)
        .rules(Rules::legacy())
        .build();
    assert!(!board.is_in_check());
    assert_eq!(targets(&board, "e1"), vec!["c1", "g1", "d2", "e2", "f2"]);
}

#[test]
fn test_pawn_moves_rule_still_guards_the_landing_square() {
    let board = castling_position()
        .piece(sq("h2"), Color::Black, Role::Pawn)
        .rules(Rules::legacy())
        .build();
    assert!(!board.is_in_check());
    let king = targets(&board, "e1");
    assert!(!king.contains(&"g1".to_string()));
    assert!(king.contains(&"c1".to_string()));
}

#[test]
fn test_captured_home_rook_loses_castling_right() {
    let mut board = castling_position()
        .piece(sq("g2"), Color::Black, Role::Bishop)
        .side_to_move(Color::Black)
        .build();
    play(&mut board, "g2", "h1");
    let rights = board.castling_rights();
    assert!(rights.rook_moved(Color::White, CastleSide::KingSide));
    assert!(rights.can_castle(Color::White, CastleSide::QueenSide));
    assert!(!targets(&board, "e1").contains(&"g1".to_string()));
    assert_eq!(
        board.kind_at(sq("h1")),
        Some(PieceKind::new(Color::Black, Role::Bishop))
    );
}
