//! Strictly Tic-Tac-Toe - a pure match engine.
//!
//! A match is a sequence of rounds on a 3x3 board sharing one scoreboard and
//! an append-only history. The starting player alternates every round.
//!
//! # Architecture
//!
//! - **Types**: [`Player`], [`Cell`], [`Board`], [`Position`]
//! - **Rules**: pure win/draw evaluation over a board ([`evaluate`])
//! - **State**: [`MatchState`] with pure transitions
//! - **Engine**: [`GameEngine`], the call-in surface for a presentation layer
//! - **Invariants**: composable checks run on every transition in debug builds
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameEngine, Outcome, Player, WinningLine};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 3, 1, 4, 2] {
//!     engine.apply_move(index);
//! }
//! assert_eq!(
//!     engine.outcome(),
//!     Some(Outcome::Win { player: Player::X, line: WinningLine::TopRow })
//! );
//!
//! engine.start_next_round();
//! assert_eq!(engine.round(), 2);
//! assert_eq!(engine.to_move(), Player::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod history;
pub mod invariants;
mod outcome;
mod position;
pub mod rules;
mod scoreboard;
mod state;
mod types;

pub use action::{Move, MoveError};
pub use engine::GameEngine;
pub use history::{HistoryEntry, HistoryId};
pub use invariants::{Invariant, InvariantSet, InvariantViolation, MatchInvariants};
pub use outcome::{Outcome, RoundStatus};
pub use position::Position;
pub use rules::{WinningLine, evaluate};
pub use scoreboard::Scoreboard;
pub use state::MatchState;
pub use types::{Board, CELL_COUNT, Cell, Player};
