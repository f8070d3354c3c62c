//! Piece geometry: where a piece could go on an empty board, and whether the
//! squares in between are clear.

use once_cell::sync::Lazy;

use super::{Board, PawnThreats, Piece, PieceKind, Role, Square, SquareSet};

fn leaper_table(deltas: &[(isize, isize)]) -> [SquareSet; 64] {
    let mut table = [SquareSet::EMPTY; 64];
    for from in Square::all() {
        table[from.as_index()] = deltas
            .iter()
            .filter_map(|&(dr, dc)| from.offset(dr, dc))
            .collect();
    }
    table
}

fn line_table(on_line: fn(isize, isize) -> bool) -> [SquareSet; 64] {
    let mut table = [SquareSet::EMPTY; 64];
    for from in Square::all() {
        table[from.as_index()] = Square::all()
            .filter(|&to| {
                let (dr, dc) = from.delta(to);
                (dr, dc) != (0, 0) && on_line(dr, dc)
            })
            .collect();
    }
    table
}

static KING_TARGETS: Lazy<[SquareSet; 64]> = Lazy::new(|| {
    leaper_table(&[
        (1, 0),
        (-1, 0),
        (0, 1),
        (0, -1),
        (1, 1),
        (1, -1),
        (-1, 1),
        (-1, -1),
    ])
});

static KNIGHT_TARGETS: Lazy<[SquareSet; 64]> = Lazy::new(|| {
    leaper_table(&[
        (2, 1),
        (1, 2),
        (-1, 2),
        (-2, 1),
        (-2, -1),
        (-1, -2),
        (1, -2),
        (2, -1),
    ])
});

// Forward one row, straight or diagonal. Indexed by color.
static PAWN_TARGETS: Lazy<[[SquareSet; 64]; 2]> = Lazy::new(|| {
    [
        leaper_table(&[(1, -1), (1, 0), (1, 1)]),
        leaper_table(&[(-1, -1), (-1, 0), (-1, 1)]),
    ]
});

static ROOK_LINES: Lazy<[SquareSet; 64]> = Lazy::new(|| line_table(|dr, dc| dr == 0 || dc == 0));

static BISHOP_LINES: Lazy<[SquareSet; 64]> =
    Lazy::new(|| line_table(|dr, dc| dr.abs() == dc.abs()));

/// Squares a piece of `kind` on `from` could reach on an empty board.
///
/// Pawns are given all three forward squares; whether the straight one is a
/// move and the diagonals are captures is decided by `path_is_blocked`.
/// Double pawn advances and castling are special moves and are not included.
#[must_use]
pub fn geometric_targets(kind: PieceKind, from: Square) -> SquareSet {
    let idx = from.as_index();
    match kind.role {
        Role::King => KING_TARGETS[idx],
        Role::Queen => ROOK_LINES[idx] | BISHOP_LINES[idx],
        Role::Rook => ROOK_LINES[idx],
        Role::Bishop => BISHOP_LINES[idx],
        Role::Knight => KNIGHT_TARGETS[idx],
        Role::Pawn => PAWN_TARGETS[kind.color.index()][idx],
    }
}

#[inline]
#[must_use]
pub fn is_geometric_target(kind: PieceKind, from: Square, to: Square) -> bool {
    geometric_targets(kind, from).contains(to)
}

/// Whether `piece` is prevented from reaching `target` by the pieces around it.
///
/// Sliders are blocked by any piece strictly between origin and target, and
/// by a second piece sharing their own square (only possible while a move
/// onto them is being simulated). Pawns cannot move diagonally without
/// capturing or straight onto an occupied square. Kings and knights are
/// never blocked.
#[must_use]
pub fn path_is_blocked(board: &Board, piece: &Piece, target: Square) -> bool {
    let from = piece.square;
    match piece.role() {
        Role::Pawn => {
            let occupied = board.is_occupied(target);
            if from.col() == target.col() {
                occupied
            } else {
                !occupied
            }
        }
        role if role.is_slider() => {
            if board.occupant_count(from) > 1 {
                return true;
            }
            let (dr, dc) = from.delta(target);
            let step = (dr.signum(), dc.signum());
            let mut next = from.offset(step.0, step.1);
            while let Some(sq) = next {
                if sq == target {
                    return false;
                }
                if board.is_occupied(sq) {
                    return true;
                }
                next = sq.offset(step.0, step.1);
            }
            false
        }
        _ => false,
    }
}

/// Whether `piece` could capture something standing on `spot`.
///
/// A geometric target with a clear path. Pawns follow the board's
/// `PawnThreats` rule: under `Diagonals` they threaten their two forward
/// diagonals whether or not `spot` is occupied; under `Moves` they threaten
/// what they could move to right now.
pub(crate) fn threatens(board: &Board, piece: &Piece, spot: Square) -> bool {
    let from = piece.square;
    if from == spot {
        return false;
    }
    match (piece.role(), board.rules.pawn_threats) {
        (Role::Pawn, PawnThreats::Diagonals) => {
            let (dr, dc) = from.delta(spot);
            dr == piece.color().pawn_direction() && dc.abs() == 1
        }
        _ => is_geometric_target(piece.kind, from, spot) && !path_is_blocked(board, piece, spot),
    }
}
