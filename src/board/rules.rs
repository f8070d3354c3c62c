//! Rule options that change how legality is decided.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the pin check treats the piece a move would capture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CaptureResolution {
    /// The captured piece is lifted off the board while the move is
    /// simulated, so capturing an attacker resolves the threat it posed.
    #[default]
    Strict,
    /// The captured piece stays on its square during the simulation. A
    /// captured slider is neutralised by the shared-square rule in
    /// `path_is_blocked`; a captured knight, pawn or king still counts as
    /// attacking, so capturing a checking knight is reported illegal.
    Legacy,
}

/// Which squares count as attacked by a pawn.
///
/// Only empty squares are affected: a pawn threatens an occupied diagonal
/// and never an occupied square ahead under both rules. The difference shows
/// in castling, where the king's transit squares are empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PawnThreats {
    /// Both forward diagonals, occupied or not.
    #[default]
    Diagonals,
    /// The squares the pawn could move to: an occupied forward diagonal or
    /// the empty square straight ahead.
    Moves,
}

/// Rule options carried by a `Board`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rules {
    pub capture_resolution: CaptureResolution,
    pub pawn_threats: PawnThreats,
}

impl Rules {
    /// Standard chess rules
    #[must_use]
    pub const fn strict() -> Self {
        Rules {
            capture_resolution: CaptureResolution::Strict,
            pawn_threats: PawnThreats::Diagonals,
        }
    }

    /// Captured pieces stay in place during the pin check and pawns threaten
    /// only where they could move
    #[must_use]
    pub const fn legacy() -> Self {
        Rules {
            capture_resolution: CaptureResolution::Legacy,
            pawn_threats: PawnThreats::Moves,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        assert_eq!(Rules::default(), Rules::strict());
        assert_eq!(Rules::default().pawn_threats, PawnThreats::Diagonals);
        assert_eq!(Rules::legacy().pawn_threats, PawnThreats::Moves);
    }
}
