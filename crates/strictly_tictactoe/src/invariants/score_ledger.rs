//! Scoreboard and history agreement.

use super::Invariant;
use crate::{MatchState, Player};

/// Invariant: the scoreboard is a tally of the history.
///
/// Also requires history ids and rounds to be strictly increasing, no entry to
/// come from a future round, and a decided current round to be the last entry.
pub struct ScoreLedgerInvariant;

impl Invariant<MatchState> for ScoreLedgerInvariant {
    fn holds(state: &MatchState) -> bool {
        let history = state.history();
        let scores = state.scoreboard();

        let tally = |winner: Option<Player>| {
            history
                .iter()
                .filter(|entry| entry.outcome().winner() == winner)
                .count()
        };
        if scores.total() as usize != history.len()
            || *scores.x_wins() as usize != tally(Some(Player::X))
            || *scores.o_wins() as usize != tally(Some(Player::O))
            || *scores.ties() as usize != tally(None)
        {
            return false;
        }

        let ordered = history
            .windows(2)
            .all(|pair| pair[0].id() < pair[1].id() && pair[0].round() < pair[1].round());
        if !ordered {
            return false;
        }

        if let Some(last) = history.last()
            && (*last.id() >= state.next_history_id() || *last.round() > state.round())
        {
            return false;
        }

        match state.outcome() {
            Some(outcome) => history
                .last()
                .is_some_and(|last| *last.round() == state.round() && *last.outcome() == outcome),
            None => true,
        }
    }

    fn description() -> &'static str {
        "Scoreboard tallies the append-only round history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Scoreboard;

    fn won_round() -> MatchState {
        let mut state = MatchState::new();
        for index in [0, 3, 1, 4, 2] {
            state = state.with_move(index).unwrap().0;
        }
        state
    }

    #[test]
    fn test_ledger_holds_across_rounds() {
        let state = won_round();
        assert!(ScoreLedgerInvariant::holds(&state));
        let state = state.next_round();
        assert!(ScoreLedgerInvariant::holds(&state));
    }

    #[test]
    fn test_dropped_history_violates() {
        let mut state = won_round();
        state.history.clear();
        assert!(!ScoreLedgerInvariant::holds(&state));
    }

    #[test]
    fn test_zeroed_scoreboard_violates() {
        let mut state = won_round();
        state.scoreboard = Scoreboard::new();
        assert!(!ScoreLedgerInvariant::holds(&state));
    }
}
