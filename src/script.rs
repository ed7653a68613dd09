//! Scripted match actions for non-interactive replays.
//!
//! A script is a comma-separated list of tokens. A cell index (`0`-`8`) or a
//! position label (`center`, `top-left`) places a mark, `next` starts the
//! next round and `reset` resets the match.

use derive_more::{Display, Error};
use std::str::FromStr;
use strictly_tictactoe::{GameEngine, Position};
use tracing::{debug, instrument};

/// One step of a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptAction {
    /// Current player marks this cell.
    Place(Position),
    /// Advance to the next round.
    NextRound,
    /// Reset the whole match.
    Reset,
}

impl FromStr for ScriptAction {
    type Err = ScriptError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim().to_lowercase().as_str() {
            "next" => Ok(ScriptAction::NextRound),
            "reset" => Ok(ScriptAction::Reset),
            other => Position::from_label_or_number(other)
                .map(ScriptAction::Place)
                .ok_or_else(|| ScriptError::new(format!("Unknown action '{}'", token.trim()))),
        }
    }
}

/// Parses a comma-separated script. Blank tokens are skipped.
#[instrument]
pub fn parse_script(script: &str) -> Result<Vec<ScriptAction>, ScriptError> {
    script
        .split(',')
        .filter(|token| !token.trim().is_empty())
        .map(|token| token.parse::<ScriptAction>())
        .collect()
}

/// Feeds `actions` to `engine` exactly as a presentation layer would.
///
/// Placements the engine rejects are ignored, as in interactive play.
#[instrument(skip(engine, actions), fields(steps = actions.len()))]
pub fn run_script(engine: &mut GameEngine, actions: &[ScriptAction]) {
    for action in actions {
        debug!(?action, "Script step");
        match action {
            ScriptAction::Place(pos) => engine.apply_move(pos.index()),
            ScriptAction::NextRound => engine.start_next_round(),
            ScriptAction::Reset => engine.reset_match(),
        }
    }
}

/// Script parse error.
#[derive(Debug, Clone, Display, Error)]
#[display("Script error: {} at {}:{}", message, file, line)]
pub struct ScriptError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ScriptError {
    /// Creates a new script error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_tokens() {
        let actions = parse_script("4, top-left,next,, reset ,8").unwrap();
        assert_eq!(
            actions,
            vec![
                ScriptAction::Place(Position::Center),
                ScriptAction::Place(Position::TopLeft),
                ScriptAction::NextRound,
                ScriptAction::Reset,
                ScriptAction::Place(Position::BottomRight),
            ]
        );
    }

    #[test]
    fn test_parse_rejects_unknown_token() {
        let err = parse_script("0,undo").unwrap_err();
        assert!(err.message.contains("undo"));
    }
}
