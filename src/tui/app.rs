//! Application state for the TUI.

use crate::collection::TimerCollection;
use crate::error::TimerError;
use crate::timer::{Clock, SystemClock, TimerState};

/// Severity of a status-bar message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
    Error,
}

/// Message shown in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub text: String,
    pub level: Level,
}

impl Status {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: Level::Info,
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: Level::Warning,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: Level::Error,
        }
    }

    fn from_error(err: &TimerError) -> Self {
        if err.is_warning() {
            Self::warning(err.user_message())
        } else {
            Self::error(err.user_message())
        }
    }
}

/// Input mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Keys are commands.
    Normal,
    /// Keys edit the selected timer's label.
    Editing { buffer: String },
}

/// Application state.
pub struct App<C: Clock = SystemClock> {
    /// The timers on screen.
    pub timers: TimerCollection<C>,
    /// Currently selected index.
    pub selected: usize,
    /// Current input mode.
    pub mode: Mode,
    /// Status message to display.
    pub status: Option<Status>,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Pending 'g' key for 'gg' command.
    pub pending_g: bool,
}

impl<C: Clock> App<C> {
    /// Create a new app around an already populated collection.
    pub fn new(timers: TimerCollection<C>) -> Self {
        Self {
            timers,
            selected: 0,
            mode: Mode::Normal,
            status: Some(Status::info("Press space to start/stop, ? for help")),
            should_quit: false,
            pending_g: false,
        }
    }

    /// Whether the label editor is open.
    pub const fn is_editing(&self) -> bool {
        matches!(self.mode, Mode::Editing { .. })
    }

    /// Move selection up.
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
        self.pending_g = false;
    }

    /// Move selection down.
    pub fn select_next(&mut self) {
        if !self.timers.is_empty() && self.selected < self.timers.len() - 1 {
            self.selected += 1;
        }
        self.pending_g = false;
    }

    /// Jump to first timer.
    pub fn select_first(&mut self) {
        self.selected = 0;
        self.pending_g = false;
    }

    /// Jump to last timer.
    pub fn select_last(&mut self) {
        if !self.timers.is_empty() {
            self.selected = self.timers.len() - 1;
        }
        self.pending_g = false;
    }

    /// Handle 'g' key for 'gg' command.
    pub fn handle_g(&mut self) {
        if self.pending_g {
            self.select_first();
        } else {
            self.pending_g = true;
            self.status = Some(Status::info("g-"));
        }
    }

    /// Cancel pending 'g' command.
    pub fn cancel_pending(&mut self) {
        if self.pending_g {
            self.pending_g = false;
            self.status = None;
        }
    }

    /// Start or stop the selected timer.
    pub fn toggle_selected(&mut self) {
        match self.timers.toggle(self.selected) {
            Ok(state) => {
                let label = self.selected_label();
                self.status = Some(Status::info(match state {
                    TimerState::Running => format!("Started: {label}"),
                    TimerState::Stopped => format!("Stopped: {label}"),
                }));
            }
            Err(e) => self.status = Some(Status::from_error(&e)),
        }
    }

    /// Append a timer with the default label and select it.
    pub fn add_timer(&mut self) {
        self.selected = self.timers.add_timer(None, 0.0);
        self.status = Some(Status::info(format!("Added: {}", self.selected_label())));
    }

    /// Remove the selected timer.
    pub fn remove_selected(&mut self) {
        match self.timers.remove_timer(self.selected) {
            Ok(timer) => {
                self.status = Some(Status::info(format!("Removed: {}", timer.label())));
                if self.selected > 0 && self.selected >= self.timers.len() {
                    self.selected = self.timers.len().saturating_sub(1);
                }
            }
            Err(e) => self.status = Some(Status::from_error(&e)),
        }
    }

    /// Zero the selected timer's total.
    pub fn reset_selected(&mut self) {
        match self.timers.reset(self.selected) {
            Ok(()) => self.status = Some(Status::info(format!("Reset: {}", self.selected_label()))),
            Err(e) => self.status = Some(Status::from_error(&e)),
        }
    }

    /// Open the label editor on the selected timer.
    pub fn begin_rename(&mut self) {
        if let Some(timer) = self.timers.get(self.selected) {
            self.mode = Mode::Editing {
                buffer: timer.label().to_string(),
            };
            self.status = Some(Status::info("Enter to keep, Esc to cancel"));
        }
    }

    /// Type a character into the label editor.
    pub fn push_char(&mut self, c: char) {
        if let Mode::Editing { ref mut buffer } = self.mode {
            buffer.push(c);
        }
    }

    /// Delete the last character in the label editor.
    pub fn pop_char(&mut self) {
        if let Mode::Editing { ref mut buffer } = self.mode {
            buffer.pop();
        }
    }

    /// Apply the edited label.
    pub fn commit_rename(&mut self) {
        if let Mode::Editing { buffer } = std::mem::replace(&mut self.mode, Mode::Normal) {
            match self.timers.rename(self.selected, &buffer) {
                Ok(()) => {
                    self.status = Some(Status::info(format!("Renamed: {}", self.selected_label())));
                }
                Err(e) => self.status = Some(Status::from_error(&e)),
            }
        }
    }

    /// Close the label editor without changes.
    pub fn cancel_rename(&mut self) {
        self.mode = Mode::Normal;
        self.status = None;
    }

    /// Save labels and totals for next time.
    pub fn save(&mut self) {
        self.status = Some(match self.timers.save_snapshot() {
            Ok(records) => Status::info(format!(
                "Saved {} timers to {}",
                records.len(),
                self.timers.store().path().display()
            )),
            Err(e) => {
                tracing::error!("{e}");
                Status::from_error(&e)
            }
        });
    }

    /// Export every session to CSV.
    pub fn export(&mut self) {
        self.status = Some(match self.timers.export_sessions() {
            Ok(path) => Status::info(format!("Exported to {}", path.display())),
            Err(e) => {
                if e.is_warning() {
                    tracing::info!("{e}");
                } else {
                    tracing::error!("{e}");
                }
                Status::from_error(&e)
            }
        });
    }

    /// Show a recoverable error in the status bar and keep going.
    ///
    /// # Errors
    ///
    /// Returns the error back if it should end the session.
    pub fn handle_error(&mut self, err: TimerError) -> Result<(), TimerError> {
        if !err.is_recoverable() {
            return Err(err);
        }
        tracing::warn!("{err}");
        self.status = Some(Status::from_error(&err));
        Ok(())
    }

    fn selected_label(&self) -> String {
        self.timers
            .get(self.selected)
            .map(|t| t.label().to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Paths;
    use crate::timer::MockClock;
    use chrono::{Local, TimeZone};
    use tempfile::TempDir;

    fn app(dir: &TempDir, count: usize) -> App<MockClock> {
        let mut clock = MockClock::new();
        clock
            .expect_now()
            .returning(|| Local.with_ymd_and_hms(2024, 9, 1, 12, 0, 0).unwrap());
        let paths = Paths::with_root(dir.path().to_path_buf());
        let mut timers = TimerCollection::with_clock(&paths, clock);
        timers.restore_or_default(count);
        App::new(timers)
    }

    #[test]
    fn test_navigation() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir, 3);

        app.select_previous();
        assert_eq!(app.selected, 0);
        app.select_next();
        app.select_next();
        app.select_next();
        assert_eq!(app.selected, 2);
        app.select_first();
        assert_eq!(app.selected, 0);
        app.select_last();
        assert_eq!(app.selected, 2);
    }

    #[test]
    fn test_gg() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir, 3);
        app.select_last();

        app.handle_g();
        assert!(app.pending_g);
        assert_eq!(app.selected, 2);
        app.handle_g();
        assert_eq!(app.selected, 0);
        assert!(!app.pending_g);
    }

    #[test]
    fn test_toggle_selected() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir, 2);
        app.select_next();

        app.toggle_selected();
        assert!(app.timers.get(1).unwrap().is_running());
        assert!(!app.timers.get(0).unwrap().is_running());
        assert_eq!(app.status, Some(Status::info("Started: Timer 2")));

        app.toggle_selected();
        assert!(!app.timers.get(1).unwrap().is_running());
        assert_eq!(app.timers.get(1).unwrap().sessions().len(), 1);
    }

    #[test]
    fn test_add_and_remove() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir, 1);

        app.add_timer();
        assert_eq!(app.selected, 1);
        assert_eq!(app.timers.get(1).unwrap().label(), "Timer 2");

        app.remove_selected();
        assert_eq!(app.timers.len(), 1);
        assert_eq!(app.selected, 0);

        app.remove_selected();
        assert!(app.timers.is_empty());
        app.remove_selected();
        assert_eq!(app.status.as_ref().unwrap().level, Level::Error);

        app.add_timer();
        assert_eq!(app.timers.get(0).unwrap().label(), "Timer 3");
    }

    #[test]
    fn test_rename_flow() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir, 1);

        app.begin_rename();
        assert!(app.is_editing());
        for _ in 0.."Timer 1".len() {
            app.pop_char();
        }
        "Focus".chars().for_each(|c| app.push_char(c));
        app.commit_rename();

        assert!(!app.is_editing());
        assert_eq!(app.timers.get(0).unwrap().label(), "Focus");
    }

    #[test]
    fn test_cancel_rename() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir, 1);

        app.begin_rename();
        app.push_char('!');
        app.cancel_rename();
        assert_eq!(app.timers.get(0).unwrap().label(), "Timer 1");
    }

    #[test]
    fn test_save() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir, 2);

        app.save();
        assert_eq!(app.status.as_ref().unwrap().level, Level::Info);
        assert!(dir.path().join("timers.json").exists());
    }

    #[test]
    fn test_save_failure_keeps_state() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("timers.json")).unwrap();
        std::fs::write(dir.path().join("timers.json/x"), "").unwrap();
        let mut app = app(&dir, 2);

        app.save();
        assert_eq!(app.status.as_ref().unwrap().level, Level::Error);
        assert_eq!(app.timers.len(), 2);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_export_without_sessions_warns() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir, 2);

        app.export();
        assert_eq!(
            app.status,
            Some(Status::warning("No sessions to export"))
        );
        assert!(!dir.path().join("exports").exists());
    }

    #[test]
    fn test_handle_error() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir, 1);

        app.handle_error(TimerError::InvalidTimer(4)).unwrap();
        assert_eq!(app.status, Some(Status::error("No timer #4")));
        assert!(!app.should_quit);

        let err = app
            .handle_error(TimerError::Terminal("gone".to_string()))
            .unwrap_err();
        assert!(matches!(err, TimerError::Terminal(_)));
    }

    #[test]
    fn test_export_with_session() {
        let dir = TempDir::new().unwrap();
        let mut app = app(&dir, 1);
        app.toggle_selected();
        app.toggle_selected();

        app.export();
        let status = app.status.clone().unwrap();
        assert_eq!(status.level, Level::Info);
        assert!(status.text.starts_with("Exported to"));
        assert_eq!(std::fs::read_dir(dir.path().join("exports")).unwrap().count(), 1);
    }
}
