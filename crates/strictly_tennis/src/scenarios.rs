//! Fixed demonstration scenarios and point sequence parsing.

use super::error::ScoreError;
use super::Player;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use tracing::instrument;

/// A fixed sequence of points used to demonstrate the scoring rules.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Scenario {
    /// Player A wins four straight points.
    PlayerAAllPoints,
    /// Player B wins four straight points.
    PlayerBAllPoints,
    /// Close game reaching 40-30, won by A.
    ToughGameAWins,
    /// Game through deuce and advantage twice, won by B.
    BackFromAdvantageBWins,
}

impl Scenario {
    /// Every scenario in demonstration order.
    pub fn all() -> Vec<Scenario> {
        Scenario::iter().collect()
    }

    /// Human-readable heading.
    pub fn title(self) -> &'static str {
        match self {
            Scenario::PlayerAAllPoints => "Scenario: Player A gets all the points",
            Scenario::PlayerBAllPoints => "Scenario: Player B gets all the points",
            Scenario::ToughGameAWins => "Scenario: Tough game. A wins",
            Scenario::BackFromAdvantageBWins => {
                "Scenario: Tough game, back from advantage. B wins"
            }
        }
    }

    /// Point winners in playing order.
    pub fn points(self) -> Vec<Player> {
        use crate::Player::{A, B};

        match self {
            Scenario::PlayerAAllPoints => vec![A; 4],
            Scenario::PlayerBAllPoints => vec![B; 4],
            Scenario::ToughGameAWins => vec![A, B, A, B, A, A],
            Scenario::BackFromAdvantageBWins => vec![A, B, A, B, A, B, A, B, B, B],
        }
    }
}

/// Parses a point sequence such as `"AABBA"`.
///
/// Letters are case-insensitive; whitespace and commas are ignored.
#[instrument]
pub fn parse_points(input: &str) -> Result<Vec<Player>, ScoreError> {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| Player::from_char(c).ok_or(ScoreError::InvalidPlayer(c)))
        .collect()
}
