//! Property-based tests using proptest.

use crate::board::{
    can_team_capture_spot, Board, BoardBuilder, Color, MoveKind, Role, Rules, Square,
};
use proptest::prelude::*;

fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

fn rules_strategy() -> impl Strategy<Value = Rules> {
    prop_oneof![Just(Rules::strict()), Just(Rules::legacy())]
}

proptest! {
    /// Property: after every legal move the mover's king is safe and no
    /// square holds two pieces
    #[test]
    fn prop_random_playout_keeps_board_consistent(
        seed in seed_strategy(),
        num_moves in move_count_strategy(),
        rules in rules_strategy(),
    ) {
        use rand::prelude::*;

        let mut board = BoardBuilder::starting_position().rules(rules).build();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let moves = board.legal_moves();
            prop_assert_eq!(moves.is_empty(), !board.has_any_legal_move());
            if moves.is_empty() {
                prop_assert!(board.is_game_over());
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            let mover = board.side_to_move();
            board.apply_move(&mv).unwrap();

            // legacy en passant may shield the king with the pawn it removes
            if rules == Rules::legacy() && mv.kind == MoveKind::EnPassant {
                break;
            }
            if let Some(id) = board.promotable_pawn(mover) {
                board.set_promoted_kind(id, Role::Queen).unwrap();
            }

            let king = board.king(mover).and_then(|id| board.piece(id)).map(|p| p.square);
            prop_assert!(king.is_some_and(|sq| !can_team_capture_spot(&board, mover.opponent(), sq)));

            for sq in Square::all() {
                prop_assert!(board.occupant_count(sq) <= 1, "two pieces on {}", sq);
            }
            for color in Color::BOTH {
                let kings = board
                    .pieces()
                    .filter(|(_, p)| p.color() == color && p.role() == Role::King)
                    .count();
                prop_assert_eq!(kings, 1);
            }
        }
    }

    /// Property: pinned pieces are exactly the ones whose targets the filter
    /// drops for king safety
    #[test]
    fn prop_legal_targets_agree_with_is_pinned(
        seed in seed_strategy(),
        num_moves in move_count_strategy(),
    ) {
        use rand::prelude::*;

        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let moves = board.legal_moves();
            if moves.is_empty() {
                break;
            }
            for mv in &moves {
                let id = board.piece_at(mv.subject).unwrap();
                prop_assert!(!board.is_pinned(id, mv.target));
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            board.apply_move(&mv).unwrap();
            if let Some(id) = board.promotable_pawn(Color::White) {
                board.set_promoted_kind(id, Role::Queen).unwrap();
            }
            if let Some(id) = board.promotable_pawn(Color::Black) {
                board.set_promoted_kind(id, Role::Queen).unwrap();
            }
        }
    }
}
