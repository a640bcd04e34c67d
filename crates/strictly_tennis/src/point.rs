//! First-class record of a scored point.

use super::{Player, Score};
use serde::{Deserialize, Serialize};

/// One transition of the score: who won the point, and the score before
/// and after it.
///
/// Records are what the runner logs and what the invariants inspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoredPoint {
    /// The player credited with the point.
    pub winner: Player,
    /// Score before the point.
    pub before: Score,
    /// Score after the point.
    pub after: Score,
}

impl ScoredPoint {
    /// Creates a new record.
    pub fn new(winner: Player, before: Score, after: Score) -> Self {
        Self {
            winner,
            before,
            after,
        }
    }
}

impl std::fmt::Display for ScoredPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Point for player {} ... New score: {}",
            self.winner, self.after
        )
    }
}
