//! Strictly Tennis - CLI
//!
//! Replays tennis games point by point and prints the score trajectory.

#![warn(missing_docs)]

mod cli;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, OutputFormat};
use strictly_tennis::{Player, Scenario, parse_points};
use tracing::{debug, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);
    debug!(?cli, "Parsed arguments");

    match cli.command.unwrap_or_default() {
        Command::Scenarios { only } => run_scenarios(only, cli.format),
        Command::Play { points } => run_play(&points, cli.format),
    }
}

/// Installs the stderr subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run the built-in scenarios, or just one of them
#[instrument]
fn run_scenarios(only: Option<Scenario>, format: OutputFormat) -> Result<()> {
    let scenarios = match only {
        Some(scenario) => vec![scenario],
        None => Scenario::all(),
    };

    for scenario in scenarios {
        let label = scenario.to_string();
        play(Some(scenario.title()), &label, scenario.points(), format)
            .with_context(|| format!("Scenario {label} aborted"))?;
    }

    Ok(())
}

/// Replay a custom point sequence
#[instrument]
fn run_play(points: &str, format: OutputFormat) -> Result<()> {
    let points = parse_points(points).context("Invalid point sequence")?;
    play(None, "custom", points, format).context("Game aborted")
}

fn play(
    title: Option<&str>,
    label: &str,
    points: Vec<Player>,
    format: OutputFormat,
) -> Result<()> {
    let mut out = std::io::stdout().lock();
    match format {
        OutputFormat::Text => report::write_text(&mut out, title, points),
        OutputFormat::Json => report::write_json(&mut out, label, points),
    }
}
