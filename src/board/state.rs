use log::warn;

use super::{BoardError, CastlingRights, Color, Piece, PieceId, PieceKind, Role, Rules, Square};

/// Back rank in column order, a-file first
pub(crate) const BACK_RANK: [Role; 8] = [
    Role::Rook,
    Role::Knight,
    Role::Bishop,
    Role::Queen,
    Role::King,
    Role::Bishop,
    Role::Knight,
    Role::Rook,
];

/// Authoritative game state.
///
/// Pieces live in an arena indexed by `PieceId`. A captured piece leaves an
/// empty slot behind, so handles held elsewhere stay valid (and resolve to
/// nothing) rather than pointing at a different piece.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) pieces: Vec<Option<Piece>>,
    pub(crate) turn: u32,
    pub(crate) double_pawn_column: Option<usize>,
    pub(crate) castling: CastlingRights,
    pub(crate) rules: Rules,
}

impl Board {
    /// Standard initial position, White to move
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (col, role) in BACK_RANK.iter().enumerate() {
            board.add_piece(PieceKind::new(Color::White, *role), Square(0, col));
            board.add_piece(PieceKind::new(Color::White, Role::Pawn), Square(1, col));
            board.add_piece(PieceKind::new(Color::Black, Role::Pawn), Square(6, col));
            board.add_piece(PieceKind::new(Color::Black, *role), Square(7, col));
        }
        board.castling = CastlingRights::fresh();
        board
    }

    /// Board without pieces and without castling rights
    #[must_use]
    pub fn empty() -> Self {
        Board {
            pieces: Vec::with_capacity(32),
            turn: 0,
            double_pawn_column: None,
            castling: CastlingRights::revoked(),
            rules: Rules::default(),
        }
    }

    pub(crate) fn add_piece(&mut self, kind: PieceKind, square: Square) -> PieceId {
        debug_assert!(!self.is_occupied(square), "two pieces on {square}");
        self.pieces.push(Some(Piece::new(kind, square)));
        PieceId(self.pieces.len() - 1)
    }

    /// Number of moves applied so far; even means White to move
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Column of the pawn that double-advanced on the previous move
    pub fn double_pawn_column(&self) -> Option<usize> {
        self.double_pawn_column
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// Look up a live piece by handle
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.0).and_then(Option::as_ref)
    }

    /// All live pieces with their handles, in creation order
    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.pieces
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|p| (PieceId(idx), p)))
    }

    /// Handles of every live piece of `color`
    pub fn piece_ids_of(&self, color: Color) -> Vec<PieceId> {
        self.pieces()
            .filter(|(_, p)| p.color() == color)
            .map(|(id, _)| id)
            .collect()
    }

    /// Handle of the piece on `sq`, first match
    pub fn piece_at(&self, sq: Square) -> Option<PieceId> {
        self.pieces()
            .find(|(_, p)| p.square == sq)
            .map(|(id, _)| id)
    }

    /// Kind of the piece on `sq`
    pub fn kind_at(&self, sq: Square) -> Option<PieceKind> {
        self.pieces()
            .find(|(_, p)| p.square == sq)
            .map(|(_, p)| p.kind)
    }

    pub fn is_occupied(&self, sq: Square) -> bool {
        self.pieces().any(|(_, p)| p.square == sq)
    }

    /// Number of pieces on `sq`. Above one only inside a pin simulation.
    pub(crate) fn occupant_count(&self, sq: Square) -> usize {
        self.pieces().filter(|(_, p)| p.square == sq).count()
    }

    /// Handle of the `color` king, if it is still on the board
    pub fn king(&self, color: Color) -> Option<PieceId> {
        let king = PieceKind::new(color, Role::King);
        self.pieces()
            .find(|(_, p)| p.kind == king)
            .map(|(id, _)| id)
    }

    pub(crate) fn king_square(&self, color: Color) -> Option<Square> {
        self.king(color)
            .and_then(|id| self.piece(id))
            .map(|p| p.square)
    }

    /// Destroy whatever stands on `sq`, returning the removed piece
    pub fn remove_piece_at(&mut self, sq: Square) -> Option<Piece> {
        let mut removed = None;
        for slot in &mut self.pieces {
            if slot.is_some_and(|p| p.square == sq) {
                removed = removed.or(slot.take());
            }
        }
        removed
    }

    /// Move the piece on `from` to the empty square `to`
    pub fn relocate(&mut self, from: Square, to: Square) -> Result<(), BoardError> {
        if !to.is_on_board() {
            warn!("relocate off the board to {to:?}");
            return Err(BoardError::InvariantViolation { from, to });
        }
        let Some(id) = self.piece_at(from) else {
            warn!("relocate from empty square {from}");
            return Err(BoardError::InvariantViolation { from, to });
        };
        if self.is_occupied(to) {
            warn!("relocate onto occupied square {to}");
            return Err(BoardError::InvariantViolation { from, to });
        }
        if let Some(piece) = self.pieces[id.0].as_mut() {
            piece.square = to;
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
