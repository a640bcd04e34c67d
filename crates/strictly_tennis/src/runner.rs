//! Replays a sequence of points through the scoring rules.

use super::error::ScoreError;
use super::point::ScoredPoint;
use super::rules::play_point;
use super::{Player, Score};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Plays `points` from love-all and returns the final score.
///
/// Emits one `info` event per point naming its winner and the new score.
/// A point after the game is won fails with
/// [`ScoreError::GameAlreadyOver`] and stops the replay.
#[instrument(skip(points))]
pub fn run_game(points: impl IntoIterator<Item = Player>) -> Result<Score, ScoreError> {
    run_game_with(points, |point| info!("{}", point))
}

/// Plays `points` from love-all, handing every scored point to `on_point`.
pub fn run_game_with<F>(
    points: impl IntoIterator<Item = Player>,
    mut on_point: F,
) -> Result<Score, ScoreError>
where
    F: FnMut(&ScoredPoint),
{
    points
        .into_iter()
        .try_fold(Score::new(), |score, winner| -> Result<Score, ScoreError> {
            let point = play_point(score, winner)?;
            on_point(&point);
            Ok(point.after)
        })
}

/// Complete record of a replayed game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameLog {
    points: Vec<ScoredPoint>,
    final_score: Score,
}

impl GameLog {
    /// Replays `points` from love-all, recording each transition.
    #[instrument(skip(points))]
    pub fn replay(points: impl IntoIterator<Item = Player>) -> Result<Self, ScoreError> {
        let mut recorded = Vec::new();
        let final_score = run_game_with(points, |point| recorded.push(*point))?;
        info!(points = recorded.len(), %final_score, "Replayed game");

        Ok(Self {
            points: recorded,
            final_score,
        })
    }

    /// Returns every scored point in order.
    pub fn points(&self) -> &[ScoredPoint] {
        &self.points
    }

    /// Returns the score after each point, in order.
    pub fn scores(&self) -> Vec<Score> {
        self.points.iter().map(|point| point.after).collect()
    }

    /// Returns the score after the last point.
    pub fn final_score(&self) -> Score {
        self.final_score
    }
}
