//! First-class action types for tic-tac-toe.
//!
//! A move is a domain event: the player whose turn it was and the cell they
//! marked. Rejected moves are described by [`MoveError`].

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A move that was accepted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player who moved.
    pub player: Player,
    /// Where the mark went.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Reason a move was not applied.
///
/// The engine's public `apply_move` swallows these; they exist so callers
/// and logs can tell why a click did nothing.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Index past the last cell.
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The cell already holds a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// The round has a winner or the board is full.
    #[display("Round is already over")]
    RoundOver,

    /// A transition produced a state that breaks a match invariant.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
