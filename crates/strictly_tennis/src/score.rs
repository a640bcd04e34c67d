//! Score representation for a single game.
//!
//! [`Score`] is a plain value. The `Points` variant wraps a [`Tally`], whose
//! fields are private, so the only way to build one is [`Score::points`].
//! That constructor folds forty-all into [`Score::Deuce`], which makes a
//! forty-all tally unrepresentable.

use super::error::ScoreError;
use super::{Player, PointScore};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Both players' levels in a game that has not reached deuce.
///
/// Never holds `Forty` on both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(try_from = "TallyRepr")]
#[display("{}-{}", player_a, player_b)]
pub struct Tally {
    player_a: PointScore,
    player_b: PointScore,
}

impl Tally {
    /// Returns player A's level.
    pub fn player_a(&self) -> PointScore {
        self.player_a
    }

    /// Returns player B's level.
    pub fn player_b(&self) -> PointScore {
        self.player_b
    }

    /// Returns the given player's level.
    pub fn level(&self, player: Player) -> PointScore {
        match player {
            Player::A => self.player_a,
            Player::B => self.player_b,
        }
    }

    /// Builds a tally without folding forty-all, for corruption tests only.
    #[cfg(test)]
    pub(crate) fn unchecked(player_a: PointScore, player_b: PointScore) -> Self {
        Self { player_a, player_b }
    }
}

#[derive(Deserialize)]
struct TallyRepr {
    player_a: PointScore,
    player_b: PointScore,
}

impl TryFrom<TallyRepr> for Tally {
    type Error = ScoreError;

    fn try_from(repr: TallyRepr) -> Result<Self, Self::Error> {
        match Score::points(repr.player_a, repr.player_b) {
            Score::Points(tally) => Ok(tally),
            _ => Err(ScoreError::InvariantViolation(
                "forty-all must be represented as deuce".to_string(),
            )),
        }
    }
}

/// Score of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Score {
    /// Ordinary in-progress score.
    #[display("{}", _0)]
    Points(Tally),
    /// Both players on at least forty and level.
    #[display("Deuce")]
    Deuce,
    /// Player is one point ahead after deuce.
    #[display("Advantage {}", _0)]
    Advantage(Player),
    /// Player has won the game. Terminal.
    #[display("Game {}", _0)]
    Game(Player),
}

impl Score {
    /// Score at the start of every game: love-all.
    pub fn new() -> Self {
        Score::points(PointScore::Zero, PointScore::Zero)
    }

    /// Builds an in-progress score, folding forty-all into deuce.
    ///
    /// Every `Points` score in the crate is built here.
    pub fn points(player_a: PointScore, player_b: PointScore) -> Self {
        if player_a == PointScore::Forty && player_b == PointScore::Forty {
            Score::Deuce
        } else {
            Score::Points(Tally { player_a, player_b })
        }
    }

    /// Returns true once the game has been won.
    pub fn is_over(&self) -> bool {
        matches!(self, Score::Game(_))
    }

    /// Returns the winner if the game is over.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Score::Game(player) => Some(*player),
            _ => None,
        }
    }

    /// Returns the tally if the score is an ordinary in-progress score.
    pub fn tally(&self) -> Option<&Tally> {
        match self {
            Score::Points(tally) => Some(tally),
            _ => None,
        }
    }

    /// Scores a point for `winner`. See [`score_point`](crate::score_point).
    pub fn score_point(self, winner: Player) -> Result<Score, ScoreError> {
        super::rules::score_point(self, winner)
    }

    /// Every score from which another point can be played.
    pub fn live_scores() -> Vec<Score> {
        let mut scores: Vec<Score> = PointScore::iter()
            .flat_map(|a| PointScore::iter().map(move |b| Score::points(a, b)))
            .filter(|score| !matches!(score, Score::Deuce))
            .collect();
        scores.push(Score::Deuce);
        scores.extend(Player::iter().map(Score::Advantage));
        scores
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_love_all() {
        assert_eq!(
            Score::new(),
            Score::points(PointScore::Zero, PointScore::Zero)
        );
        assert_eq!(Score::default().to_string(), "0-0");
    }

    #[test]
    fn test_forty_all_is_deuce() {
        assert_eq!(
            Score::points(PointScore::Forty, PointScore::Forty),
            Score::Deuce
        );
    }

    #[test]
    fn test_points_keeps_levels() {
        let score = Score::points(PointScore::Forty, PointScore::Thirty);
        let tally = score.tally().expect("in-progress score");
        assert_eq!(tally.player_a(), PointScore::Forty);
        assert_eq!(tally.player_b(), PointScore::Thirty);
        assert_eq!(tally.level(Player::B), PointScore::Thirty);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Score::points(PointScore::Fifteen, PointScore::Zero).to_string(),
            "15-0"
        );
        assert_eq!(
            Score::points(PointScore::Forty, PointScore::Thirty).to_string(),
            "40-30"
        );
        assert_eq!(Score::Deuce.to_string(), "Deuce");
        assert_eq!(Score::Advantage(Player::A).to_string(), "Advantage A");
        assert_eq!(Score::Game(Player::B).to_string(), "Game B");
    }

    #[test]
    fn test_winner() {
        assert_eq!(Score::Game(Player::A).winner(), Some(Player::A));
        assert!(Score::Game(Player::A).is_over());
        assert_eq!(Score::Advantage(Player::A).winner(), None);
        assert!(!Score::Deuce.is_over());
    }

    #[test]
    fn test_live_scores() {
        let live = Score::live_scores();
        // 15 tallies, deuce, two advantages
        assert_eq!(live.len(), 18);
        assert!(live.iter().all(|score| !score.is_over()));
        assert!(!live.iter().any(|score| matches!(
            score.tally(),
            Some(t) if t.player_a() == PointScore::Forty && t.player_b() == PointScore::Forty
        )));
    }

    #[test]
    fn test_deserialize_rejects_forty_all() {
        let json = r#"{"Points":{"player_a":"Forty","player_b":"Forty"}}"#;
        assert!(serde_json::from_str::<Score>(json).is_err());

        let json = r#"{"Points":{"player_a":"Forty","player_b":"Zero"}}"#;
        let score: Score = serde_json::from_str(json).expect("valid tally");
        assert_eq!(score, Score::points(PointScore::Forty, PointScore::Zero));
    }
}
