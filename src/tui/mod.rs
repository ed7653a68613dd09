//! Terminal UI for a tic-tac-toe match.

mod app;
mod input;
mod ui;

pub use app::{App, AppAction};
pub use input::{Command, command_for, move_cursor};
pub use ui::draw;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{error, info, instrument};

use crate::{MatchConfig, logging};

/// Runs the interactive match until the user quits.
pub fn run_tui(config: &MatchConfig) -> Result<()> {
    logging::init_file_logging(config)?;
    info!("Starting Strictly Match TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let res = run_app(&mut terminal, &mut app, config.tick());

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    info!(
        rounds = app.engine().history().len(),
        "Strictly Match TUI exited"
    );
    res
}

/// Draw, wait for a key, handle it. Repeat until the app asks to quit.
#[instrument(skip_all)]
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, tick: Duration) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(tick)?
            && let Event::Key(key) = event::read()?
        {
            // crossterm reports release and repeat events on some platforms.
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.handle_key(key) == AppAction::Quit {
                return Ok(());
            }
        }
    }
}
