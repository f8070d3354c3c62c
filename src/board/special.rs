//! Special moves: pawn double advance, en passant and castling.
//!
//! These depend on state beyond piece placement (the previous move's double
//! advance, the castling flags) and carry their own path and attack
//! conditions, so the legality filter does not run the sliding-block check
//! on them.

use super::geometry::threatens;
use super::{Board, CastleSide, Color, MoveKind, Piece, PieceKind, Role, Square};

/// Whether any `team` piece could capture a piece standing on `spot`.
///
/// Special moves never count: none of them captures on its target square.
#[must_use]
pub fn can_team_capture_spot(board: &Board, team: Color, spot: Square) -> bool {
    board
        .pieces()
        .filter(|(_, p)| p.color() == team)
        .any(|(_, p)| threatens(board, p, spot))
}

/// Whether moving `piece` to `target` is a special move in the current state
#[must_use]
pub fn is_special_move(board: &Board, piece: &Piece, target: Square) -> bool {
    special_move_kind(board, piece, target).is_some()
}

/// Classify `piece` moving to `target` as a special move, if it is one
#[must_use]
pub fn special_move_kind(board: &Board, piece: &Piece, target: Square) -> Option<MoveKind> {
    match piece.role() {
        Role::Pawn => pawn_special(board, piece, target),
        Role::King => castle_side(board, piece, target).map(MoveKind::Castle),
        _ => None,
    }
}

fn pawn_special(board: &Board, piece: &Piece, target: Square) -> Option<MoveKind> {
    let color = piece.color();
    let from = piece.square;
    let dir = color.pawn_direction();
    let (dr, dc) = from.delta(target);

    if from.row() == color.pawn_start_row() && dc == 0 && dr == 2 * dir {
        let middle = from.offset(dir, 0)?;
        if !board.is_occupied(middle) && !board.is_occupied(target) {
            return Some(MoveKind::DoublePawn);
        }
        return None;
    }

    if from.row() == color.en_passant_row()
        && dr == dir
        && dc.abs() == 1
        && board.double_pawn_column() == Some(target.col())
        && !board.is_occupied(target)
    {
        let victim = Square(from.row(), target.col());
        if board.kind_at(victim) == Some(PieceKind::new(color.opponent(), Role::Pawn)) {
            return Some(MoveKind::EnPassant);
        }
    }

    None
}

fn castle_side(board: &Board, king: &Piece, target: Square) -> Option<CastleSide> {
    let color = king.color();
    let row = color.home_row();
    let home = Square(row, 4);
    if king.square != home || target.row() != row {
        return None;
    }
    let side = CastleSide::for_king_target(target.col())?;

    if !board.castling_rights().can_castle(color, side) {
        return None;
    }
    let rook_home = Square(row, side.rook_col());
    if board.kind_at(rook_home) != Some(PieceKind::new(color, Role::Rook)) {
        return None;
    }
    if side
        .empty_cols()
        .iter()
        .any(|&col| board.is_occupied(Square(row, col)))
    {
        return None;
    }

    let enemy = color.opponent();
    if can_team_capture_spot(board, enemy, home) {
        return None;
    }
    if side
        .safe_cols()
        .iter()
        .any(|&col| can_team_capture_spot(board, enemy, Square(row, col)))
    {
        return None;
    }

    Some(side)
}
