//! Terminal User Interface (TUI) for multitimer.
//!
//! One row per timer with a colored time display (red while stopped, green
//! while running). Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::{App, Level, Mode, Status};
pub use event::Action;

use std::io;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::cli::commands::Context;
use crate::collection::TimerCollection;
use crate::error::TimerError;
use crate::timer::Clock;

/// Run the TUI application.
///
/// Restores the saved timers (or creates the configured number of default
/// ones) and runs until the user quits.
///
/// # Errors
///
/// Returns an error if the terminal fails to initialize or draw.
pub fn run(ctx: &Context) -> Result<(), TimerError> {
    let mut timers = TimerCollection::new(&ctx.paths);
    timers.restore_or_default(ctx.settings.timers.default_count);
    tracing::info!(count = timers.len(), "starting timer screen");

    // Setup terminal
    enable_raw_mode()
        .map_err(|e| TimerError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| TimerError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| TimerError::Terminal(format!("Failed to create terminal: {e}")))?;

    // Create app state and run main loop
    let mut app = App::new(timers);
    let result = run_app(&mut terminal, &mut app, ctx.settings.tick());

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    if app.timers.any_running() {
        tracing::info!("quitting with running timers; unsaved time is discarded");
    }

    result
}

/// Run the main application loop.
///
/// Each pass draws the screen and then waits at most one `tick` for input,
/// so running timers refresh at the tick rate.
fn run_app<B: Backend, C: Clock>(
    terminal: &mut Terminal<B>,
    app: &mut App<C>,
    tick: Duration,
) -> Result<(), TimerError> {
    while !app.should_quit {
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| TimerError::Terminal(format!("Failed to draw: {e}")))?;

        match event::handle_events(app, tick) {
            Ok(Some(action)) => event::dispatch(app, action),
            Ok(None) => {}
            Err(e) => app.handle_error(e)?,
        }
    }

    Ok(())
}
