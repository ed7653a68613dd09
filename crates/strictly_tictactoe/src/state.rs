//! Consolidated match state and its pure transitions.
//!
//! Every transition builds a complete new [`MatchState`]; nothing here mutates
//! a state that a caller can already see.

use crate::action::{Move, MoveError};
use crate::history::{HistoryEntry, HistoryId};
use crate::outcome::{Outcome, RoundStatus};
use crate::position::Position;
use crate::rules;
use crate::scoreboard::Scoreboard;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Everything the presentation needs to draw a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) starter: Player,
    pub(crate) round: u32,
    /// `rules::evaluate(&board)` as of the last accepted move.
    pub(crate) outcome: Option<Outcome>,
    pub(crate) scoreboard: Scoreboard,
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) next_history_id: HistoryId,
}

impl MatchState {
    /// Round 1, empty board, X to start, no score, no history.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            starter: Player::X,
            round: 1,
            outcome: None,
            scoreboard: Scoreboard::new(),
            history: Vec::new(),
            next_history_id: HistoryId::FIRST,
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose mark the next accepted move places.
    ///
    /// Once the round is over this stays on the player who made the final move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Player who moved first this round.
    pub fn starter(&self) -> Player {
        self.starter
    }

    /// Current round number (1-based).
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Outcome of the current round, once decided.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Cumulative scoreboard.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Finished rounds, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Id the next history entry will receive.
    pub fn next_history_id(&self) -> HistoryId {
        self.next_history_id
    }

    /// Status read model for the current round.
    pub fn status(&self) -> RoundStatus {
        RoundStatus::from_outcome(self.to_move, self.outcome)
    }

    /// True once the current round is won or drawn.
    pub fn is_round_over(&self) -> bool {
        self.status().is_over()
    }

    /// State after the current player marks `index`.
    ///
    /// # Errors
    ///
    /// [`MoveError::RoundOver`] when the round is decided,
    /// [`MoveError::OutOfBounds`] and [`MoveError::CellOccupied`] for bad cells.
    #[instrument(skip(self), fields(round = self.round, player = %self.to_move))]
    pub fn with_move(&self, index: usize) -> Result<(MatchState, Move), MoveError> {
        if self.is_round_over() {
            return Err(MoveError::RoundOver);
        }
        let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        let player = self.to_move;

        let mut next = self.clone();
        next.board.place(index, player)?;

        match rules::evaluate(&next.board) {
            Some(outcome) => {
                let entry = HistoryEntry::new(
                    next.next_history_id,
                    next.round,
                    next.starter,
                    outcome,
                    next.board.filled_count(),
                );
                next.history.push(entry);
                next.next_history_id = next.next_history_id.next();
                next.scoreboard = next.scoreboard.recorded(&outcome);
                next.outcome = Some(outcome);
            }
            None => next.to_move = player.opponent(),
        }

        Ok((next, Move::new(player, position)))
    }

    /// State for the following round: empty board, the other player starts.
    ///
    /// Scoreboard and history carry over unchanged.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn next_round(&self) -> MatchState {
        let starter = self.starter.opponent();
        MatchState {
            board: Board::new(),
            to_move: starter,
            starter,
            round: self.round + 1,
            outcome: None,
            scoreboard: self.scoreboard,
            history: self.history.clone(),
            next_history_id: self.next_history_id,
        }
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_move_leaves_source_state_untouched() {
        let state = MatchState::new();
        let (next, mv) = state.with_move(4).unwrap();

        assert_eq!(state, MatchState::new());
        assert_eq!(mv, Move::new(Player::X, Position::Center));
        assert_eq!(next.to_move(), Player::O);
        assert_eq!(next.board().filled_count(), 1);
    }

    #[test]
    fn test_round_over_follows_status() {
        let mut state = MatchState::new();
        for index in [0, 3, 1, 4] {
            state = state.with_move(index).unwrap().0;
            assert!(!state.is_round_over());
            assert!(!state.status().is_over());
        }

        let (state, _) = state.with_move(2).unwrap();
        assert!(state.is_round_over());
        assert!(state.status().is_over());
        assert_eq!(state.with_move(5), Err(MoveError::RoundOver));
    }

    #[test]
    fn test_next_round_flips_starter() {
        let state = MatchState::new().next_round();
        assert_eq!(state.round(), 2);
        assert_eq!(state.starter(), Player::O);
        assert_eq!(state.to_move(), Player::O);

        let state = state.next_round();
        assert_eq!(state.round(), 3);
        assert_eq!(state.starter(), Player::X);
    }
}
