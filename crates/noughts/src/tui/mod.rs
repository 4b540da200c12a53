//! Terminal UI for noughts.

mod app;
mod input;
mod palette;
mod ui;

pub use app::App;
pub use input::{Action, Hitmap, map_event};
pub use palette::Palette;
pub use ui::draw;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use noughts_core::Theme;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Restores the terminal on drop, including on error paths.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture) {
            error!(error = %e, "Failed to leave alternate screen");
        }
        if let Err(e) = disable_raw_mode() {
            error!(error = %e, "Failed to disable raw mode");
        }
    }
}

/// Runs the interactive game until the user quits.
#[instrument]
pub fn run(theme: Theme) -> Result<()> {
    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    let mut app = App::new(theme);
    let res = run_app(&mut terminal, &mut app);
    let cursor = terminal.show_cursor();
    info!("Noughts TUI exited");
    settle(res, cursor)
}

/// Logs both outcomes and returns the event loop's.
fn settle<E: std::fmt::Display>(
    res: Result<()>,
    cursor: std::result::Result<(), E>,
) -> Result<()> {
    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    if let Err(e) = cursor {
        error!(error = %e, "Failed to show cursor");
    }
    res
}

/// Draw, wait for one event, apply it; repeat.
fn run_app(terminal: &mut Tui, app: &mut App) -> Result<()> {
    while app.is_running() {
        let mut hitmap = Hitmap::default();
        terminal.draw(|f| hitmap = draw(f, app))?;

        let event = event::read().context("Failed to read terminal event")?;
        if let Some(action) = map_event(&event, app.cursor(), &hitmap) {
            app.apply(action);
        }
    }
    Ok(())
}
