//! Live-before invariant: no point is scored after the game is won.

use super::super::ScoredPoint;
use super::Invariant;

/// Invariant: the score before a point is not terminal.
pub struct LiveBeforeInvariant;

impl Invariant<ScoredPoint> for LiveBeforeInvariant {
    fn holds(point: &ScoredPoint) -> bool {
        !point.before.is_over()
    }

    fn description() -> &'static str {
        "Points are only scored while the game is live"
    }
}
