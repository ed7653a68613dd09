//! Plain-text and JSON reports of a match, for the `replay` command.

use strictly_tictactoe::GameEngine;
use tracing::instrument;

/// Output format for replay reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// Human-readable board, scoreboard and history.
    #[default]
    Text,
    /// Serialized match state.
    Json,
}

/// Shown in place of history before any round has finished.
pub const EMPTY_HISTORY: &str = "Play a round to build your legend.";

/// Renders the match as text, newest history first, at most `history_limit` rows.
#[instrument(skip(engine))]
pub fn render_text(engine: &GameEngine, history_limit: usize) -> String {
    let scores = engine.scoreboard();
    let mut out = format!(
        "Round {}\n{}\n\n{}\n\nScoreboard: X {}  O {}  Draws {}\n",
        engine.round(),
        engine.status(),
        engine.board().display(),
        scores.x_wins(),
        scores.o_wins(),
        scores.ties(),
    );

    out.push_str("History:\n");
    if engine.history().is_empty() {
        out.push_str(&format!("  {}\n", EMPTY_HISTORY));
    }
    for entry in engine.recent_history().take(history_limit) {
        out.push_str(&format!(
            "  Round {}  {}  ({} started, {} moves)\n",
            entry.round(),
            entry.outcome(),
            entry.starter(),
            entry.moves()
        ));
    }
    out
}

/// Renders the match state as pretty JSON.
#[instrument(skip(engine))]
pub fn render_json(engine: &GameEngine) -> serde_json::Result<String> {
    serde_json::to_string_pretty(engine.state())
}

/// Renders in the requested format.
pub fn render(
    engine: &GameEngine,
    format: ReportFormat,
    history_limit: usize,
) -> serde_json::Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(engine, history_limit)),
        ReportFormat::Json => render_json(engine),
    }
}
