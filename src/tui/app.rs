//! Application state for the match screen.

use crossterm::event::KeyEvent;
use derive_getters::Getters;
use strictly_tictactoe::{GameEngine, Position};
use tracing::{debug, info, instrument};

use super::input::{self, Command};
use crate::MatchConfig;

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep going.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
///
/// Owns the engine and the purely visual bits (cursor, last notice). All game
/// state comes from the engine.
#[derive(Debug, Getters)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    history_limit: usize,
    /// Why the last key did nothing, if it was ignored.
    notice: Option<String>,
}

impl App {
    /// Creates an app with a fresh match.
    #[instrument(skip(config))]
    pub fn new(config: &MatchConfig) -> Self {
        Self {
            engine: GameEngine::new(),
            cursor: Position::Center,
            history_limit: *config.history_limit(),
            notice: None,
        }
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        let Some(command) = input::command_for(key) else {
            return AppAction::Continue;
        };
        debug!(?command, "Handling command");
        self.notice = None;

        match command {
            Command::MoveCursor(code) => {
                self.cursor = input::move_cursor(self.cursor, code);
            }
            Command::PlaceAtCursor => self.place(self.cursor),
            Command::PlaceAt(pos) => {
                self.cursor = pos;
                self.place(pos);
            }
            Command::NextRound => {
                if self.engine.is_round_over() {
                    self.engine.start_next_round();
                    self.cursor = Position::Center;
                } else {
                    self.notice = Some("Finish the round first".to_string());
                }
            }
            Command::ResetMatch => {
                self.engine.reset_match();
                self.cursor = Position::Center;
            }
            Command::Quit => {
                info!("User quit");
                return AppAction::Quit;
            }
        }
        AppAction::Continue
    }

    /// Key hints for the footer, depending on the round state.
    pub fn controls(&self) -> &'static [(&'static str, &'static str)] {
        if self.engine.is_round_over() {
            &[("n", "Start next round"), ("r", "Reset match"), ("q", "Quit")]
        } else {
            &[
                ("arrows", "Move"),
                ("enter/1-9", "Place"),
                ("r", "Reset match"),
                ("q", "Quit"),
            ]
        }
    }

    fn place(&mut self, pos: Position) {
        if let Err(e) = self.engine.try_move(pos.index()) {
            debug!(position = %pos, error = %e, "Move ignored");
            self.notice = Some(e.to_string());
        }
    }
}
