//! Scoring rules for a tennis game.

use super::contracts::{Contract, ScorePointContract};
use super::error::ScoreError;
use super::point::ScoredPoint;
use super::{Player, PointScore, Score};
use std::cmp::Ordering;
use tracing::{debug, instrument};

/// Advances a level by a single point.
///
/// Fails with [`ScoreError::UnexpectedScoreLevel`] for `Forty`: a point won
/// from forty is resolved by [`score_point`] before a level is advanced.
#[instrument]
pub fn next_point_score(level: PointScore) -> Result<PointScore, ScoreError> {
    match level {
        PointScore::Zero => Ok(PointScore::Fifteen),
        PointScore::Fifteen => Ok(PointScore::Thirty),
        PointScore::Thirty => Ok(PointScore::Forty),
        PointScore::Forty => Err(ScoreError::UnexpectedScoreLevel(level)),
    }
}

/// Scores a point for `winner`, returning the new score.
///
/// Contract enforcement:
/// - Precondition checked always (the game is not over)
/// - Postconditions checked in debug builds only
#[instrument]
pub fn score_point(current: Score, winner: Player) -> Result<Score, ScoreError> {
    ScorePointContract::pre(&current, &winner)?;

    let next = transition(current, winner)?;

    #[cfg(debug_assertions)]
    ScorePointContract::post(&current, &winner, &next)?;

    debug!(%current, %winner, %next, "Scored point");
    Ok(next)
}

/// Scores a point and returns the full record of the transition.
pub fn play_point(current: Score, winner: Player) -> Result<ScoredPoint, ScoreError> {
    let after = score_point(current, winner)?;
    Ok(ScoredPoint::new(winner, current, after))
}

fn transition(current: Score, winner: Player) -> Result<Score, ScoreError> {
    match current {
        Score::Points(tally) => {
            if tally.player_a() == PointScore::Forty && winner == Player::A {
                Ok(Score::Game(Player::A))
            } else if tally.player_b() == PointScore::Forty && winner == Player::B {
                Ok(Score::Game(Player::B))
            } else {
                match winner {
                    Player::A => Ok(Score::points(
                        next_point_score(tally.player_a())?,
                        tally.player_b(),
                    )),
                    Player::B => Ok(Score::points(
                        tally.player_a(),
                        next_point_score(tally.player_b())?,
                    )),
                }
            }
        }
        Score::Advantage(leader) if leader == winner => Ok(Score::Game(winner)),
        Score::Advantage(_) => Ok(Score::Deuce),
        Score::Deuce => Ok(Score::Advantage(winner)),
        Score::Game(player) => Err(ScoreError::GameAlreadyOver { winner: player }),
    }
}

/// Classifies raw point counts into a score.
///
/// A game is won with at least four points and a two point margin. Once
/// both players have three points the score is deuce or advantage.
/// Counts that run past the end of a game are classified by the same rules.
#[instrument]
pub fn score_from_counts(a_points: u32, b_points: u32) -> Score {
    let levels = (
        PointScore::from_points_won(a_points),
        PointScore::from_points_won(b_points),
    );
    if let (Some(a), Some(b)) = levels {
        return Score::points(a, b);
    }

    // At least one player is past forty
    match a_points.cmp(&b_points) {
        Ordering::Equal => Score::Deuce,
        Ordering::Greater if a_points >= b_points + 2 => Score::Game(Player::A),
        Ordering::Greater => Score::Advantage(Player::A),
        Ordering::Less if b_points >= a_points + 2 => Score::Game(Player::B),
        Ordering::Less => Score::Advantage(Player::B),
    }
}
