//! Strictly Match - a two-player tic-tac-toe match in the terminal.
//!
//! The game rules, scoring and round history live in the
//! [`strictly_tictactoe`] engine. This crate is the presentation layer around
//! it: an interactive terminal UI, scripted replays, configuration and
//! logging.
//!
//! # Example
//!
//! ```
//! use strictly_match::{parse_script, render_text, run_script};
//! use strictly_tictactoe::GameEngine;
//!
//! let mut engine = GameEngine::new();
//! let actions = parse_script("0,3,1,4,2").unwrap();
//! run_script(&mut engine, &actions);
//! assert!(render_text(&engine, 10).contains("Player X wins the round!"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod logging;
mod render;
mod script;
pub mod tui;

pub use config::{ConfigError, MatchConfig};
pub use render::{EMPTY_HISTORY, ReportFormat, render, render_json, render_text};
pub use script::{ScriptAction, ScriptError, parse_script, run_script};
