//! Error types for tennis scoring.

use super::{Player, PointScore};

/// Error that can occur when scoring a point.
///
/// All variants except [`ScoreError::InvalidPlayer`] signal a broken
/// contract rather than a recoverable condition.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ScoreError {
    /// A point was scored after the game was won.
    #[display("Game already over: player {} won", winner)]
    GameAlreadyOver {
        /// Winner of the finished game.
        winner: Player,
    },

    /// A point level was advanced past forty.
    #[display("Unexpected score level: cannot advance past {:?}", _0)]
    UnexpectedScoreLevel(PointScore),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),

    /// A point sequence contained something other than a player label.
    #[display("Invalid player {:?}: expected 'A' or 'B'", _0)]
    InvalidPlayer(char),
}

impl std::error::Error for ScoreError {}
