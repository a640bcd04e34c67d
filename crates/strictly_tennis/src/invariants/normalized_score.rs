//! Normalized score invariant: forty-all is always deuce.

use super::super::{PointScore, Score, ScoredPoint};
use super::Invariant;

/// Invariant: no score on either side of a point is a forty-all tally.
pub struct NormalizedScoreInvariant;

fn is_normalized(score: &Score) -> bool {
    match score.tally() {
        Some(tally) => {
            tally.player_a() != PointScore::Forty || tally.player_b() != PointScore::Forty
        }
        None => true,
    }
}

impl Invariant<ScoredPoint> for NormalizedScoreInvariant {
    fn holds(point: &ScoredPoint) -> bool {
        is_normalized(&point.before) && is_normalized(&point.after)
    }

    fn description() -> &'static str {
        "Forty-all is represented as deuce"
    }
}
