//! Round history.

use crate::outcome::Outcome;
use crate::types::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Identifier of a history entry, unique within a match.
///
/// Issued from a counter that starts at 1 and only increases.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[display("#{}", _0)]
pub struct HistoryId(u64);

impl HistoryId {
    /// The first id issued in a match.
    pub const FIRST: HistoryId = HistoryId(1);

    /// The id after this one.
    pub fn next(self) -> Self {
        HistoryId(self.0 + 1)
    }
}

/// A finished round. Never modified after it is appended.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct HistoryEntry {
    /// Unique id within the match.
    id: HistoryId,
    /// Round number (1-based).
    round: u32,
    /// Who moved first in that round.
    starter: Player,
    /// How the round ended.
    outcome: Outcome,
    /// Marks on the board when the round ended.
    moves: usize,
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Round {}: {} ({} started, {} moves)",
            self.round, self.outcome, self.starter, self.moves
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_increase() {
        let first = HistoryId::FIRST;
        assert_eq!(first.to_string(), "#1");
        assert!(first.next() > first);
        assert_eq!(first.next().to_string(), "#2");
    }

    #[test]
    fn test_entry_display() {
        let entry = HistoryEntry::new(HistoryId::FIRST, 3, Player::O, Outcome::Draw, 9);
        assert_eq!(entry.to_string(), "Round 3: Draw (O started, 9 moves)");
        assert_eq!(*entry.round(), 3);
    }
}
