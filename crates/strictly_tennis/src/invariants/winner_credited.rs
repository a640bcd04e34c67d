//! Winner-credited invariant: the point goes to the player who won it.

use super::super::rules::next_point_score;
use super::super::{PointScore, Score, ScoredPoint};
use super::Invariant;

/// Invariant: the transition credits exactly the point's winner.
///
/// - A tally advances the winner by one level and leaves the loser alone
/// - Deuce follows the loser's advantage, or the winner pulling level from 30-40
/// - Advantage and game always name the winner
pub struct WinnerCreditedInvariant;

impl Invariant<ScoredPoint> for WinnerCreditedInvariant {
    fn holds(point: &ScoredPoint) -> bool {
        let winner = point.winner;
        let loser = winner.opponent();

        match (point.before, point.after) {
            (Score::Points(before), Score::Points(after)) => {
                next_point_score(before.level(winner)) == Ok(after.level(winner))
                    && before.level(loser) == after.level(loser)
            }
            (Score::Points(before), Score::Deuce) => {
                before.level(winner) == PointScore::Thirty
                    && before.level(loser) == PointScore::Forty
            }
            (Score::Points(before), Score::Game(player)) => {
                player == winner && before.level(winner) == PointScore::Forty
            }
            (Score::Advantage(leader), Score::Game(player)) => leader == winner && player == winner,
            (Score::Advantage(leader), Score::Deuce) => leader == loser,
            (Score::Deuce, Score::Advantage(player)) => player == winner,
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Each point credits its winner by exactly one step"
    }
}
