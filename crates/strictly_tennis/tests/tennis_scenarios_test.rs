//! End-to-end tests for replaying tennis games.

use strictly_tennis::{
    GameLog, Player, PointScore, Scenario, Score, ScoreError, parse_points, run_game,
};
use strictly_tennis::Player::{A, B};

#[test]
fn test_player_a_all_points() {
    let log = GameLog::replay(Scenario::PlayerAAllPoints.points()).expect("Valid replay");

    assert_eq!(
        log.scores(),
        vec![
            Score::points(PointScore::Fifteen, PointScore::Zero),
            Score::points(PointScore::Thirty, PointScore::Zero),
            Score::points(PointScore::Forty, PointScore::Zero),
            Score::Game(A),
        ]
    );
}

#[test]
fn test_player_b_all_points() {
    let score = run_game(Scenario::PlayerBAllPoints.points()).expect("Valid replay");
    assert_eq!(score, Score::Game(B));
}

#[test]
fn test_tough_game_a_wins() {
    let log = GameLog::replay(Scenario::ToughGameAWins.points()).expect("Valid replay");
    let scores = log.scores();

    assert_eq!(log.final_score(), Score::Game(A));
    assert_eq!(
        scores[scores.len() - 2],
        Score::points(PointScore::Forty, PointScore::Thirty)
    );
    assert!(!scores.contains(&Score::Deuce));
}

#[test]
fn test_back_from_advantage_b_wins() {
    let log = GameLog::replay(Scenario::BackFromAdvantageBWins.points()).expect("Valid replay");

    let after_deuce: Vec<_> = log
        .scores()
        .into_iter()
        .skip_while(|score| *score != Score::Deuce)
        .collect();
    assert_eq!(
        after_deuce,
        vec![
            Score::Deuce,
            Score::Advantage(A),
            Score::Deuce,
            Score::Advantage(B),
            Score::Game(B),
        ]
    );
}

#[test]
fn test_empty_game() {
    assert_eq!(run_game(Vec::<Player>::new()), Ok(Score::new()));
}

#[test]
fn test_point_after_game_is_rejected() {
    let mut points = Scenario::PlayerAAllPoints.points();
    points.push(B);

    assert_eq!(run_game(points), Err(ScoreError::GameAlreadyOver { winner: A }));
}

#[test]
fn test_custom_sequence() {
    let points = parse_points("A B B B A A").expect("Valid points");
    let log = GameLog::replay(points).expect("Valid replay");

    let rendered: Vec<_> = log.scores().iter().map(ToString::to_string).collect();
    assert_eq!(rendered, ["15-0", "15-15", "15-30", "15-40", "30-40", "Deuce"]);
}

#[test]
fn test_log_serializes_to_json() {
    let log = GameLog::replay([A, B]).expect("Valid replay");
    let json = serde_json::to_string(&log).expect("Serializable log");
    let back: GameLog = serde_json::from_str(&json).expect("Deserializable log");

    assert_eq!(back, log);
}
