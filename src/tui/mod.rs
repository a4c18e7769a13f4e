//! Terminal UI for noughts.

mod app;
mod input;
mod ui;

pub use app::{App, AppAction, Tally};
pub use input::{digit_position, move_cursor};

use crate::config::AppConfig;
use crate::error::check_environment;
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout, Write};
use tracing::{debug, error, info, instrument, warn};

/// Runs the interactive game until the user quits.
///
/// Fails before touching the terminal if no interactive terminal is attached.
#[instrument(skip(config), fields(mode = %config.default_mode()))]
pub fn run_tui(config: &AppConfig) -> Result<()> {
    check_environment()?;

    // Log to a file so output does not interfere with the TUI.
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting noughts TUI");

    let _guard = TerminalGuard::enter(io::stdout())?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(*config.default_mode());
    let res = run_app(&mut terminal, &mut app);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(tally = %app.tally(), "Exiting");
    res
}

/// Raw mode and the alternate screen, undone on drop.
struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    fn enter(mut out: W) -> Result<Self> {
        enable_raw_mode()?;
        if let Err(err) = execute!(out, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }
        Ok(Self { out })
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            warn!(error = %err, "Failed to leave raw mode");
        }
        if let Err(err) = execute!(self.out, LeaveAlternateScreen, DisableMouseCapture, Show) {
            warn!(error = %err, "Failed to restore terminal");
        }
    }
}

/// Draw, block for one input event, dispatch; repeat.
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        let area = terminal.draw(|f| ui::draw(f, app))?.area;

        match event::read()? {
            Event::Key(key) => {
                if app.handle_key(key) == AppAction::Quit {
                    info!("User quit");
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => handle_mouse(app, area, mouse),
            _ => {}
        }
    }
}

fn handle_mouse(app: &mut App, area: Rect, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    match ui::cell_at(area, mouse.column, mouse.row) {
        Some(pos) => app.click(pos),
        None => debug!(column = mouse.column, row = mouse.row, "Click outside the board"),
    }
}
