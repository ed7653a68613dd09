//! The match engine: the single owner of a [`MatchState`].
//!
//! The presentation layer calls [`GameEngine::apply_move`],
//! [`GameEngine::start_next_round`] and [`GameEngine::reset_match`], then
//! redraws from the read accessors. Each call swaps in a complete new state.

use crate::action::{Move, MoveError};
use crate::history::HistoryEntry;
#[cfg(debug_assertions)]
use crate::invariants::{InvariantSet, MatchInvariants};
use crate::outcome::{Outcome, RoundStatus};
use crate::rules::WinningLine;
use crate::scoreboard::Scoreboard;
use crate::state::MatchState;
use crate::types::{Board, Player};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe match engine.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: MatchState,
}

impl GameEngine {
    /// Creates an engine holding a fresh match.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: MatchState::new(),
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Player whose mark the next move places.
    pub fn to_move(&self) -> Player {
        self.state.to_move()
    }

    /// Player who started the current round.
    pub fn starter(&self) -> Player {
        self.state.starter()
    }

    /// Current round number (1-based).
    pub fn round(&self) -> u32 {
        self.state.round()
    }

    /// Cumulative scoreboard.
    pub fn scoreboard(&self) -> &Scoreboard {
        self.state.scoreboard()
    }

    /// Outcome of the current round, if decided.
    pub fn outcome(&self) -> Option<Outcome> {
        self.state.outcome()
    }

    /// Line to highlight, if the round was won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.state.outcome().and_then(|outcome| outcome.line())
    }

    /// Status of the current round.
    pub fn status(&self) -> RoundStatus {
        self.state.status()
    }

    /// True once the current round is won or drawn.
    pub fn is_round_over(&self) -> bool {
        self.state.is_round_over()
    }

    /// Finished rounds, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        self.state.history()
    }

    /// Finished rounds, most recent first.
    pub fn recent_history(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.state.history().iter().rev()
    }

    /// Places the current player's mark at `index`.
    ///
    /// Invalid moves (occupied cell, index out of range, round already
    /// decided) leave the state untouched.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize) {
        if let Err(e) = self.try_move(index) {
            debug!(index, error = %e, "Move ignored");
        }
    }

    /// Like [`apply_move`](Self::apply_move) but reports why a move was ignored.
    ///
    /// # Errors
    ///
    /// Returns the [`MoveError`] describing the rejection. The state is
    /// unchanged whenever an error is returned.
    #[instrument(skip(self), fields(round = self.state.round(), player = %self.state.to_move()))]
    pub fn try_move(&mut self, index: usize) -> Result<Move, MoveError> {
        let (next, mv) = self.state.with_move(index)?;
        self.commit(next)?;

        debug!(%mv, "Move applied");
        if let Some(outcome) = self.state.outcome() {
            info!(
                round = self.state.round(),
                %outcome,
                moves = self.state.board().filled_count(),
                "Round finished"
            );
        }
        Ok(mv)
    }

    /// Clears the board for the next round; the other player starts.
    ///
    /// Scoreboard and history are kept. Meant for use after a round is
    /// decided but does not require it.
    #[instrument(skip(self), fields(round = self.state.round()))]
    pub fn start_next_round(&mut self) {
        if !self.state.is_round_over() {
            debug!("Starting next round before the current one was decided");
        }
        let next = self.state.next_round();
        match self.commit(next) {
            Ok(()) => info!(
                round = self.state.round(),
                starter = %self.state.starter(),
                "Next round started"
            ),
            Err(e) => warn!(error = %e, "Next round rejected"),
        }
    }

    /// Throws away the match and starts over at round 1.
    #[instrument(skip(self))]
    pub fn reset_match(&mut self) {
        self.state = MatchState::new();
        info!("Match reset");
    }

    /// Swaps in `next` after checking invariants in debug builds.
    fn commit(&mut self, next: MatchState) -> Result<(), MoveError> {
        #[cfg(debug_assertions)]
        MatchInvariants::check_all(&next).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(descriptions)
        })?;

        self.state = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_move_reports_reason() {
        let mut engine = GameEngine::new();
        engine.try_move(4).unwrap();
        assert!(matches!(engine.try_move(4), Err(MoveError::CellOccupied(_))));
        assert_eq!(engine.try_move(12), Err(MoveError::OutOfBounds(12)));
        assert_eq!(engine.board().filled_count(), 1);
        assert_eq!(engine.to_move(), Player::O);
    }

    #[test]
    fn test_recent_history_is_newest_first() {
        let mut engine = GameEngine::new();
        for round in 0..3 {
            // The starter always takes the top row.
            for index in [0, 3, 1, 4, 2] {
                engine.apply_move(index);
            }
            assert!(engine.is_round_over(), "round {round} should be decided");
            engine.start_next_round();
        }

        let rounds: Vec<u32> = engine.recent_history().map(|e| *e.round()).collect();
        assert_eq!(rounds, vec![3, 2, 1]);
        assert_eq!(engine.scoreboard().wins(Player::X), 2);
        assert_eq!(engine.scoreboard().wins(Player::O), 1);
    }
}
