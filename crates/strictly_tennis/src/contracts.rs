//! Contract-based validation for tennis scoring.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::error::ScoreError;
use super::invariants::{InvariantSet, TennisInvariants};
use super::point::ScoredPoint;
use super::{Player, Score};
use tracing::{debug, instrument};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), ScoreError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, action: &A, after: &S) -> Result<(), ScoreError>;
}

/// Precondition: the game has not been won yet.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`ScoreError::GameAlreadyOver`] on a terminal score.
    #[instrument]
    pub fn check(score: &Score) -> Result<(), ScoreError> {
        match score {
            Score::Game(winner) => {
                debug!(%winner, "Point scored after game over");
                Err(ScoreError::GameAlreadyOver { winner: *winner })
            }
            _ => Ok(()),
        }
    }
}

/// Contract for scoring a point.
///
/// Precondition:
/// - The game is not over
///
/// Postconditions:
/// - Forty-all is represented as deuce
/// - The winner of the point is credited by exactly one step
pub struct ScorePointContract;

impl Contract<Score, Player> for ScorePointContract {
    fn pre(score: &Score, _winner: &Player) -> Result<(), ScoreError> {
        GameNotOver::check(score)
    }

    fn post(before: &Score, winner: &Player, after: &Score) -> Result<(), ScoreError> {
        let point = ScoredPoint::new(*winner, *before, *after);
        TennisInvariants::check_all(&point).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            ScoreError::InvariantViolation(format!(
                "Postcondition failed for {}: {}",
                point, descriptions
            ))
        })
    }
}
