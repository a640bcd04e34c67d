//! Core domain types for a tennis game.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player A.
    A,
    /// Player B.
    B,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Parses a single-character player label (`A`, `a`, `B`, `b`).
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Player::A),
            'B' => Some(Player::B),
            _ => None,
        }
    }
}

/// One player's progress within a game that has not reached deuce.
///
/// Levels are ordered by progress, `Zero < Fifteen < Thirty < Forty`.
/// There is no level after `Forty`: winning a point from `Forty` is a
/// [`Score`](crate::Score) transition, not a level increment.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
pub enum PointScore {
    /// No points won.
    #[display("0")]
    Zero,
    /// One point won.
    #[display("15")]
    Fifteen,
    /// Two points won.
    #[display("30")]
    Thirty,
    /// Three points won.
    #[display("40")]
    Forty,
}

impl PointScore {
    /// Number of points won to reach this level.
    pub fn points_won(self) -> u32 {
        match self {
            PointScore::Zero => 0,
            PointScore::Fifteen => 1,
            PointScore::Thirty => 2,
            PointScore::Forty => 3,
        }
    }

    /// Level reached after winning `points` points, if it is below game point.
    pub fn from_points_won(points: u32) -> Option<Self> {
        match points {
            0 => Some(PointScore::Zero),
            1 => Some(PointScore::Fifteen),
            2 => Some(PointScore::Thirty),
            3 => Some(PointScore::Forty),
            _ => None,
        }
    }
}
