//! Check, checkmate, stalemate and game-over detection.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::special::can_team_capture_spot;
use super::{Board, Color};

/// How a finished game ended
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    Checkmate { winner: Color },
    Stalemate,
    /// One king has left the board
    KingCaptured { winner: Color },
    /// Neither side has a king
    NoKings,
}

impl Board {
    /// Even turn means White to move, odd means Black
    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        if self.turn % 2 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Whether the side to move has its king attacked. False without a king.
    #[must_use]
    pub fn is_in_check(&self) -> bool {
        let side = self.side_to_move();
        self.king_square(side)
            .is_some_and(|king| can_team_capture_spot(self, side.opponent(), king))
    }

    #[must_use]
    pub fn has_any_legal_move(&self) -> bool {
        self.piece_ids_of(self.side_to_move())
            .into_iter()
            .any(|id| !self.legal_targets(id).is_empty())
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.is_in_check() && !self.has_any_legal_move()
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.is_in_check() && !self.has_any_legal_move()
    }

    /// No legal move for the side to move, or a king is missing
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.king(Color::White).is_none()
            || self.king(Color::Black).is_none()
            || !self.has_any_legal_move()
    }

    /// How the game ended, or `None` while it is still going
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match (self.king(Color::White), self.king(Color::Black)) {
            (None, None) => return Some(Outcome::NoKings),
            (None, Some(_)) => {
                return Some(Outcome::KingCaptured {
                    winner: Color::Black,
                })
            }
            (Some(_), None) => {
                return Some(Outcome::KingCaptured {
                    winner: Color::White,
                })
            }
            (Some(_), Some(_)) => {}
        }

        if self.has_any_legal_move() {
            None
        } else if self.is_in_check() {
            Some(Outcome::Checkmate {
                winner: self.side_to_move().opponent(),
            })
        } else {
            Some(Outcome::Stalemate)
        }
    }
}
