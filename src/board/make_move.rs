use log::{debug, trace, warn};

use super::special::special_move_kind;
use super::{
    Board, BoardError, CastleSide, Color, Move, MoveKind, Piece, PieceId, PieceKind, Role, Square,
};

impl Board {
    /// Describe the move of the piece on `subject` to `target`.
    ///
    /// The move is classified against the current state; `object` is filled
    /// with the castling rook, the en passant victim or the captured piece.
    pub fn create_move(&self, subject: Square, target: Square) -> Result<Move, BoardError> {
        if let Some(square) = [subject, target].into_iter().find(|sq| !sq.is_on_board()) {
            warn!("create_move with off-board square {square:?}");
            return Err(BoardError::OffBoard { square });
        }
        let id = self
            .piece_at(subject)
            .ok_or(BoardError::NoPieceAt { square: subject })?;
        let piece = self.piece(id).ok_or(BoardError::UnknownPiece { id })?;

        let kind = special_move_kind(self, piece, target).unwrap_or(MoveKind::Normal);
        let object = match kind {
            MoveKind::Castle(side) => Some(Square(subject.row(), side.rook_col())),
            MoveKind::EnPassant => Some(Square(subject.row(), target.col())),
            MoveKind::DoublePawn => None,
            MoveKind::Normal => self.is_occupied(target).then_some(target),
        };

        Ok(Move {
            subject,
            object,
            target,
            kind,
        })
    }

    /// Apply a move produced by `create_move`.
    ///
    /// Side effects of special moves happen first, then castling flags are
    /// revoked, then the subject moves (capturing whatever is on the target)
    /// and the turn advances. The board is untouched when an error is
    /// returned.
    ///
    /// The move is reclassified against the current state; a move whose
    /// `kind` no longer matches (created for an earlier position, or built by
    /// hand) is rejected rather than replayed.
    pub fn apply_move(&mut self, mv: &Move) -> Result<(), BoardError> {
        let illegal = BoardError::IllegalMoveApplied {
            subject: mv.subject,
            target: mv.target,
        };
        if !mv.subject.is_on_board() || !mv.target.is_on_board() {
            warn!("apply_move with off-board square in {:?}", mv);
            return Err(illegal);
        }
        let subject = self.piece_at(mv.subject).and_then(|id| self.piece(id));
        let Some(mover) = subject.copied() else {
            warn!("apply_move with empty subject square {}", mv.subject);
            return Err(illegal);
        };
        if self
            .kind_at(mv.target)
            .is_some_and(|occupant| occupant.same_team(mover.kind))
        {
            warn!("apply_move onto own piece at {}", mv.target);
            return Err(illegal);
        }
        let kind = special_move_kind(self, &mover, mv.target).unwrap_or(MoveKind::Normal);
        if kind != mv.kind {
            warn!("apply_move {mv} as {:?}, position says {kind:?}", mv.kind);
            return Err(illegal);
        }

        debug!("{} {} ({:?})", mover.kind, mv, mv.kind);

        // 1. special side effects
        self.double_pawn_column = None;
        match mv.kind {
            MoveKind::Castle(side) => {
                let row = mv.subject.row();
                self.relocate(
                    Square(row, side.rook_col()),
                    Square(row, side.rook_target_col()),
                )?;
                self.castling.mark_rook_moved(mover.color(), side);
            }
            MoveKind::EnPassant => {
                let victim = Square(mv.subject.row(), mv.target.col());
                trace!("en passant removes pawn on {victim}");
                self.remove_piece_at(victim);
            }
            MoveKind::DoublePawn => self.double_pawn_column = Some(mv.target.col()),
            MoveKind::Normal => {}
        }

        // 2. castling flags
        self.revoke_castling_rights(&mover, mv);

        // 3. move the subject, capturing on the target
        self.remove_piece_at(mv.target);
        self.relocate(mv.subject, mv.target)?;

        // 4. next turn
        self.turn += 1;
        trace!("after {mv}:\n{self}");
        Ok(())
    }

    fn revoke_castling_rights(&mut self, mover: &Piece, mv: &Move) {
        let color = mover.color();
        match mover.role() {
            Role::King => {
                if !self.castling.king_moved(color) {
                    trace!("{color} king moved, castling revoked");
                }
                self.castling.mark_king_moved(color);
            }
            Role::Rook => {
                if let Some(side) = CastleSide::for_rook_home(color, mv.subject) {
                    trace!("{color} {side:?} rook moved");
                    self.castling.mark_rook_moved(color, side);
                }
            }
            _ => {}
        }

        // A captured rook can no longer castle either.
        if let Some(victim) = self.kind_at(mv.target) {
            if victim.role == Role::Rook && victim.color != color {
                if let Some(side) = CastleSide::for_rook_home(victim.color, mv.target) {
                    trace!("{} {side:?} rook captured", victim.color);
                    self.castling.mark_rook_moved(victim.color, side);
                }
            }
        }
    }

    /// A pawn of `side` standing on its promotion row, if there is one
    #[must_use]
    pub fn promotable_pawn(&self, side: Color) -> Option<PieceId> {
        let pawn = PieceKind::new(side, Role::Pawn);
        self.pieces()
            .find(|(_, p)| p.kind == pawn && p.square.row() == side.promotion_row())
            .map(|(id, _)| id)
    }

    /// Turn a promotable pawn into `role`, keeping its color and handle
    pub fn set_promoted_kind(&mut self, id: PieceId, role: Role) -> Result<(), BoardError> {
        if !Role::PROMOTIONS.contains(&role) {
            return Err(BoardError::InvalidPromotion { role });
        }
        let piece = self
            .pieces
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .ok_or(BoardError::UnknownPiece { id })?;
        if piece.role() != Role::Pawn || piece.square.row() != piece.color().promotion_row() {
            return Err(BoardError::NotPromotable {
                square: piece.square,
            });
        }
        piece.kind.role = role;
        debug!("pawn on {} promoted to {}", piece.square, piece.kind);
        Ok(())
    }
}
