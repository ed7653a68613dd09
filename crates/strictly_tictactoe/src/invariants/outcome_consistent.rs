//! Cached outcome invariant.

use super::Invariant;
use crate::{MatchState, rules};

/// Invariant: the stored outcome is exactly what the rules say about the board.
pub struct OutcomeConsistentInvariant;

impl Invariant<MatchState> for OutcomeConsistentInvariant {
    fn holds(state: &MatchState) -> bool {
        state.outcome() == rules::evaluate(state.board())
    }

    fn description() -> &'static str {
        "Stored round outcome matches the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Outcome;

    #[test]
    fn test_stale_outcome_violates() {
        let mut state = MatchState::new();
        state.outcome = Some(Outcome::Draw);
        assert!(!OutcomeConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_draw_is_recorded() {
        let mut state = MatchState::new();
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            state = state.with_move(index).unwrap().0;
        }
        assert_eq!(state.outcome(), Some(Outcome::Draw));
        assert!(OutcomeConsistentInvariant::holds(&state));
    }
}
