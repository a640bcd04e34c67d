//! Renders replayed games for stdout.

use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use strictly_tennis::{GameLog, Player, run_game_with};

/// JSON line written for each replayed game.
#[derive(Debug, Serialize)]
struct GameReport<'a> {
    game: &'a str,
    #[serde(flatten)]
    log: GameLog,
}

/// Writes the optional title, one line per point, then the final score.
///
/// Lines for points already played are written even when a later point fails.
pub fn write_text(out: &mut impl Write, title: Option<&str>, points: Vec<Player>) -> Result<()> {
    if let Some(title) = title {
        writeln!(out, "{title}")?;
    }

    let mut written = Ok(());
    let score = run_game_with(points, |point| {
        if written.is_ok() {
            written = writeln!(out, "{point}");
        }
    });
    written?;

    writeln!(out, "{}", score?)?;
    Ok(())
}

/// Writes the whole game as a single JSON line.
pub fn write_json(out: &mut impl Write, label: &str, points: Vec<Player>) -> Result<()> {
    let log = GameLog::replay(points)?;
    let report = GameReport { game: label, log };
    writeln!(out, "{}", serde_json::to_string(&report)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_tennis::{Scenario, ScoreError};

    fn render_text(title: Option<&str>, points: Vec<Player>) -> (String, Result<()>) {
        let mut out = Vec::new();
        let result = write_text(&mut out, title, points);
        (String::from_utf8_lossy(&out).into_owned(), result)
    }

    #[test]
    fn test_text_for_player_a_all_points() {
        let scenario = Scenario::PlayerAAllPoints;
        let (text, result) = render_text(Some(scenario.title()), scenario.points());

        assert!(result.is_ok());
        assert_eq!(
            text,
            "Scenario: Player A gets all the points\n\
             Point for player A ... New score: 15-0\n\
             Point for player A ... New score: 30-0\n\
             Point for player A ... New score: 40-0\n\
             Point for player A ... New score: Game A\n\
             Game A\n"
        );
    }

    #[test]
    fn test_text_without_title() {
        let (text, result) = render_text(None, vec![Player::B]);

        assert!(result.is_ok());
        assert_eq!(text, "Point for player B ... New score: 0-15\n0-15\n");
    }

    #[test]
    fn test_text_stops_at_point_after_game() {
        let (text, result) = render_text(None, vec![Player::A; 5]);

        let err = result.expect_err("point after game");
        assert_eq!(
            err.downcast_ref::<ScoreError>(),
            Some(&ScoreError::GameAlreadyOver { winner: Player::A })
        );
        assert_eq!(text.lines().count(), 4);
        assert!(text.ends_with("New score: Game A\n"));
    }

    #[test]
    fn test_json_line() {
        let mut out = Vec::new();
        write_json(&mut out, "custom", vec![Player::A, Player::B]).expect("live game");

        let text = String::from_utf8_lossy(&out);
        let value: serde_json::Value = serde_json::from_str(text.trim_end()).expect("valid json");
        assert_eq!(value["game"], "custom");
        assert_eq!(value["points"].as_array().map(Vec::len), Some(2));
    }
}
