//! Strictly Tennis - type-safe scoring for a single tennis game
//!
//! # Architecture
//!
//! - **Score**: tagged score value whose constructor folds forty-all into deuce
//! - **Rules**: the pure transition `score_point(score, winner)`
//! - **Contracts**: pre/postconditions checked around every transition
//! - **Runner**: folds a sequence of point winners into a final score
//!
//! # Example
//!
//! ```
//! use strictly_tennis::{Player, Score, run_game};
//!
//! let score = run_game([Player::A, Player::A, Player::A, Player::A])?;
//! assert_eq!(score, Score::Game(Player::A));
//! # Ok::<(), strictly_tennis::ScoreError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod error;
mod invariants;
mod point;
mod rules;
mod runner;
mod scenarios;
mod score;
mod types;

pub use contracts::{Contract, GameNotOver, ScorePointContract};
pub use error::ScoreError;
pub use invariants::{
    Invariant, InvariantSet, InvariantViolation, LiveBeforeInvariant, NormalizedScoreInvariant,
    TennisInvariants, WinnerCreditedInvariant,
};
pub use point::ScoredPoint;
pub use rules::{next_point_score, play_point, score_from_counts, score_point};
pub use runner::{GameLog, run_game, run_game_with};
pub use scenarios::{Scenario, parse_points};
pub use score::{Score, Tally};
pub use types::{Player, PointScore};
