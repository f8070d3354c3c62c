//! Legal move filter.
//!
//! A target is legal when it is a geometric target or a special move, is not
//! occupied by a friendly piece, has a clear path (special moves excepted),
//! and does not leave the mover's own king capturable.

use super::geometry::{geometric_targets, path_is_blocked};
use super::special::{can_team_capture_spot, special_move_kind};
use super::{Board, CaptureResolution, Move, MoveKind, Piece, PieceId, Square, SquareSet};

/// A move played out on a scratch board for the pin check.
///
/// The moving piece is relocated and (under strict rules) the captured piece
/// lifted out of its slot. Dropping the simulation puts both back, whatever
/// path the caller leaves by.
struct Simulation<'a> {
    board: &'a mut Board,
    mover: PieceId,
    origin: Square,
    lifted: Option<(PieceId, Piece)>,
}

impl<'a> Simulation<'a> {
    fn start(
        board: &'a mut Board,
        mover: PieceId,
        target: Square,
        captured: Option<Square>,
    ) -> Option<Self> {
        let origin = board.piece(mover)?.square;
        let lifted = captured.and_then(|sq| {
            let id = board.piece_at(sq).filter(|&id| id != mover)?;
            board.pieces[id.0].take().map(|piece| (id, piece))
        });
        if let Some(piece) = board.pieces[mover.0].as_mut() {
            piece.square = target;
        }
        Some(Simulation {
            board,
            mover,
            origin,
            lifted,
        })
    }

    fn board(&self) -> &Board {
        &*self.board
    }
}

impl Drop for Simulation<'_> {
    fn drop(&mut self) {
        if let Some(piece) = self.board.pieces[self.mover.0].as_mut() {
            piece.square = self.origin;
        }
        if let Some((id, piece)) = self.lifted.take() {
            self.board.pieces[id.0] = Some(piece);
        }
    }
}

/// Simulate `mover` going to `target` on `scratch` and report whether its own
/// king could then be captured. A side without a king is always pinned.
fn exposes_king(
    scratch: &mut Board,
    mover: PieceId,
    target: Square,
    captured: Option<Square>,
) -> bool {
    let Some(color) = scratch.piece(mover).map(Piece::color) else {
        return true;
    };
    let Some(sim) = Simulation::start(scratch, mover, target, captured) else {
        return true;
    };
    let exposed = match sim.board().king_square(color) {
        Some(king) => can_team_capture_spot(sim.board(), color.opponent(), king),
        None => true,
    };
    exposed
}

impl Board {
    /// Whether `id` belongs to the side to move
    #[must_use]
    pub fn can_use_piece(&self, id: PieceId) -> bool {
        self.piece(id)
            .is_some_and(|p| p.color() == self.side_to_move())
    }

    /// Whether moving `id` to `target` would leave its own king capturable
    #[must_use]
    pub fn is_pinned(&self, id: PieceId, target: Square) -> bool {
        let Some(piece) = self.piece(id).copied() else {
            return true;
        };
        if !target.is_on_board() {
            return true;
        }
        let captured = self.simulated_capture(&piece, target);
        let mut scratch = self.clone();
        exposes_king(&mut scratch, id, target, captured)
    }

    /// Every square `id` may legally move to.
    ///
    /// Empty for pieces of the side not to move.
    #[must_use]
    pub fn legal_targets(&self, id: PieceId) -> SquareSet {
        let Some(piece) = self.piece(id).copied() else {
            return SquareSet::EMPTY;
        };
        if piece.color() != self.side_to_move() {
            return SquareSet::EMPTY;
        }

        let geometric = geometric_targets(piece.kind, piece.square);
        let mut scratch = self.clone();
        let mut targets = SquareSet::EMPTY;

        for target in Square::all() {
            let special = special_move_kind(self, &piece, target).is_some();
            if !special && !geometric.contains(target) {
                continue;
            }
            if self
                .kind_at(target)
                .is_some_and(|occupant| occupant.same_team(piece.kind))
            {
                continue;
            }
            if !special && path_is_blocked(self, &piece, target) {
                continue;
            }
            let captured = self.simulated_capture(&piece, target);
            if exposes_king(&mut scratch, id, target, captured) {
                continue;
            }
            targets.insert(target);
        }

        targets
    }

    /// Every legal move of the side to move
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for id in self.piece_ids_of(self.side_to_move()) {
            let Some(from) = self.piece(id).map(|p| p.square) else {
                continue;
            };
            for target in self.legal_targets(id) {
                if let Ok(mv) = self.create_move(from, target) {
                    moves.push(mv);
                }
            }
        }
        moves
    }

    /// Square of the piece the pin simulation should lift off the board
    fn simulated_capture(&self, piece: &Piece, target: Square) -> Option<Square> {
        match self.rules.capture_resolution {
            CaptureResolution::Legacy => None,
            CaptureResolution::Strict => match special_move_kind(self, piece, target) {
                Some(MoveKind::EnPassant) => Some(Square(piece.square.row(), target.col())),
                Some(_) => None,
                None => self.is_occupied(target).then_some(target),
            },
        }
    }
}
