//! Round outcomes and the status read model.

use crate::rules::WinningLine;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a line.
    Win {
        /// Who won.
        player: Player,
        /// First completed line in scan order.
        line: WinningLine,
    },
    /// Board filled with no completed line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<WinningLine> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win { player, .. } => write!(f, "{} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// What the presentation should say about the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum RoundStatus {
    /// Waiting on a move.
    #[display("Player {} to move", to_move)]
    InProgress {
        /// Whose turn it is.
        to_move: Player,
    },
    /// Someone completed a line.
    #[display("Player {} wins the round!", player)]
    Won {
        /// Who won.
        player: Player,
        /// Line to highlight.
        line: WinningLine,
    },
    /// Board is full with no line.
    #[display("It's a draw!")]
    Draw,
}

impl RoundStatus {
    /// Builds the status from the current turn and cached outcome.
    pub fn from_outcome(to_move: Player, outcome: Option<Outcome>) -> Self {
        match outcome {
            None => RoundStatus::InProgress { to_move },
            Some(Outcome::Win { player, line }) => RoundStatus::Won { player, line },
            Some(Outcome::Draw) => RoundStatus::Draw,
        }
    }

    /// True once the round has a decided outcome.
    pub fn is_over(&self) -> bool {
        !matches!(self, RoundStatus::InProgress { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_labels() {
        let win = Outcome::Win {
            player: Player::O,
            line: WinningLine::RightColumn,
        };
        assert_eq!(win.to_string(), "O wins");
        assert_eq!(Outcome::Draw.to_string(), "Draw");
        assert_eq!(win.winner(), Some(Player::O));
        assert_eq!(Outcome::Draw.line(), None);
    }

    #[test]
    fn test_status_messages() {
        let status = RoundStatus::from_outcome(Player::X, None);
        assert_eq!(status.to_string(), "Player X to move");
        assert!(!status.is_over());

        let status = RoundStatus::from_outcome(
            Player::O,
            Some(Outcome::Win {
                player: Player::O,
                line: WinningLine::TopRow,
            }),
        );
        assert_eq!(status.to_string(), "Player O wins the round!");
        assert!(status.is_over());

        let status = RoundStatus::from_outcome(Player::X, Some(Outcome::Draw));
        assert_eq!(status.to_string(), "It's a draw!");
    }
}
