//! Formal verification of invariants using Kani model checker.
//!
//! The live state space is finite, so these harnesses cover every
//! transition rather than a bounded sample.

#[cfg(kani)]
mod proofs {
    use crate::{InvariantSet, Player, Score, TennisInvariants, play_point};

    fn any_player() -> Player {
        if kani::any() { Player::A } else { Player::B }
    }

    /// Verify every transition from a live score satisfies all invariants.
    #[kani::proof]
    #[kani::unwind(20)]
    fn verify_live_transitions_hold_invariants() {
        let scores = Score::live_scores();
        let index: usize = kani::any();
        kani::assume(index < scores.len());

        let point = play_point(scores[index], any_player());
        assert!(point.is_ok(), "score_point is total over live scores");
        if let Ok(point) = point {
            assert!(TennisInvariants::check_all(&point).is_ok());
        }
    }

    /// Verify a finished game accepts no further points.
    #[kani::proof]
    fn verify_game_is_terminal() {
        let score = Score::Game(any_player());
        assert!(score.score_point(any_player()).is_err());
    }
}
