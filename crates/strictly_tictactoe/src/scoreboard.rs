//! Cumulative match score.

use crate::outcome::Outcome;
use crate::types::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Win and tie counts for the current match.
///
/// Counts only go up; [`crate::GameEngine::reset_match`] replaces the whole
/// scoreboard with a zeroed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Rounds won by X.
    x_wins: u32,
    /// Rounds won by O.
    o_wins: u32,
    /// Drawn rounds.
    ties: u32,
}

impl Scoreboard {
    /// A zeroed scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounds won by `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Rounds decided so far.
    pub fn total(&self) -> u32 {
        self.x_wins + self.o_wins + self.ties
    }

    /// Returns a copy with exactly one counter bumped for `outcome`.
    pub fn recorded(mut self, outcome: &Outcome) -> Self {
        match outcome.winner() {
            Some(Player::X) => self.x_wins += 1,
            Some(Player::O) => self.o_wins += 1,
            None => self.ties += 1,
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::WinningLine;

    #[test]
    fn test_record_bumps_one_counter() {
        let board = Scoreboard::new()
            .recorded(&Outcome::Win {
                player: Player::X,
                line: WinningLine::TopRow,
            })
            .recorded(&Outcome::Draw)
            .recorded(&Outcome::Draw);

        assert_eq!(board.wins(Player::X), 1);
        assert_eq!(board.wins(Player::O), 0);
        assert_eq!(*board.ties(), 2);
        assert_eq!(board.total(), 3);
    }
}
