//! Alternating turn invariant.

use super::Invariant;
use crate::MatchState;

/// Invariant: turns alternate within a round and starters alternate by round.
///
/// Odd rounds start with X, even rounds with O. Within a round the starter
/// has placed either as many marks as the other player or one more, and
/// `to_move` follows from those counts: the next mover while the round is
/// open, the last mover once it is decided.
pub struct AlternatingTurnInvariant;

impl Invariant<MatchState> for AlternatingTurnInvariant {
    fn holds(state: &MatchState) -> bool {
        let expected_starter = if state.round() % 2 == 1 {
            crate::Player::X
        } else {
            crate::Player::O
        };
        if state.starter() != expected_starter {
            return false;
        }

        let starter = state.starter();
        let by_starter = state.board().count_of(starter);
        let by_other = state.board().count_of(starter.opponent());

        let next_mover = if by_starter == by_other {
            starter
        } else if by_starter == by_other + 1 {
            starter.opponent()
        } else {
            return false;
        };

        if state.is_round_over() {
            // Turn is frozen on whoever made the final move.
            by_starter + by_other > 0 && state.to_move() == next_mover.opponent()
        } else {
            state.to_move() == next_mover
        }
    }

    fn description() -> &'static str {
        "Players alternate turns from the round's starter, and starters alternate by round"
    }
}
