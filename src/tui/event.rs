//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::TimerError;
use crate::timer::Clock;
use crate::tui::app::{App, Status};

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start or stop the selected timer.
    Toggle,
    /// Add a timer.
    Add,
    /// Remove the selected timer.
    Remove,
    /// Zero the selected timer.
    Reset,
    /// Save the snapshot.
    Save,
    /// Export sessions to CSV.
    Export,
}

const HELP: &str =
    "space:start/stop | a:add | r:rename | d:remove | z:zero | s:save | e:export | q:quit";

/// Wait up to `tick` for a terminal event and handle it.
///
/// Returns an action to take, or None if no action is needed. Returning
/// after `tick` with no input is what drives the display refresh.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events<C: Clock>(
    app: &mut App<C>,
    tick: Duration,
) -> Result<Option<Action>, TimerError> {
    if event::poll(tick).map_err(|e| TimerError::Terminal(format!("Event poll failed: {e}")))? {
        if let Event::Key(key) =
            event::read().map_err(|e| TimerError::Terminal(format!("Event read failed: {e}")))?
        {
            if key.kind == KeyEventKind::Press {
                return Ok(handle_key(app, key));
            }
        }
    }

    Ok(None)
}

/// Map a key press to an action, applying navigation and editing directly.
pub fn handle_key<C: Clock>(app: &mut App<C>, key: KeyEvent) -> Option<Action> {
    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if app.is_editing() {
        match key.code {
            KeyCode::Enter => app.commit_rename(),
            KeyCode::Esc => app.cancel_rename(),
            KeyCode::Backspace => app.pop_char(),
            KeyCode::Char(c) => app.push_char(c),
            _ => {}
        }
        return None;
    }

    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Esc => {
            app.cancel_pending();
            return Some(Action::Quit);
        }

        // Navigation - vim style
        KeyCode::Char('j') | KeyCode::Down => {
            app.cancel_pending();
            app.select_next();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cancel_pending();
            app.select_previous();
        }

        // Jump to top/bottom
        KeyCode::Char('g') => app.handle_g(),
        KeyCode::Char('G') | KeyCode::End => {
            app.cancel_pending();
            app.select_last();
        }
        KeyCode::Home => {
            app.cancel_pending();
            app.select_first();
        }

        // Actions
        KeyCode::Char(' ') | KeyCode::Enter => {
            app.cancel_pending();
            return Some(Action::Toggle);
        }
        KeyCode::Char('a') => {
            app.cancel_pending();
            return Some(Action::Add);
        }
        KeyCode::Char('d') => {
            app.cancel_pending();
            return Some(Action::Remove);
        }
        KeyCode::Char('z') => {
            app.cancel_pending();
            return Some(Action::Reset);
        }
        KeyCode::Char('s') => {
            app.cancel_pending();
            return Some(Action::Save);
        }
        KeyCode::Char('e') => {
            app.cancel_pending();
            return Some(Action::Export);
        }
        KeyCode::Char('r') => {
            app.cancel_pending();
            app.begin_rename();
        }

        // Help
        KeyCode::Char('?') => {
            app.cancel_pending();
            app.status = Some(Status::info(HELP));
        }

        _ => app.cancel_pending(),
    }

    None
}

/// Apply an action to the app.
pub fn dispatch<C: Clock>(app: &mut App<C>, action: Action) {
    match action {
        Action::Quit => app.should_quit = true,
        Action::Toggle => app.toggle_selected(),
        Action::Add => app.add_timer(),
        Action::Remove => app.remove_selected(),
        Action::Reset => app.reset_selected(),
        Action::Save => app.save(),
        Action::Export => app.export(),
    }
}
