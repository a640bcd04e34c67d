//! Command-line interface for strictly_tennis.

use clap::{Parser, Subcommand, ValueEnum};
use strictly_tennis::Scenario;

/// Strictly Tennis - replays tennis games point by point
#[derive(Parser, Debug)]
#[command(name = "strictly_tennis")]
#[command(about = "Replays a tennis game point by point", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to all scenarios)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Log each point to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the built-in demonstration scenarios
    Scenarios {
        /// Run a single scenario (e.g. `tough-game-a-wins`)
        #[arg(long)]
        only: Option<Scenario>,
    },

    /// Replay a custom point sequence
    Play {
        /// Point winners in order, e.g. `AABBA`
        points: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Scenarios { only: None }
    }
}

/// How results are written to stdout
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One line per point, then the final score
    Text,
    /// One JSON object per game
    Json,
}
