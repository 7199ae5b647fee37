//! The stopwatch state machine.

use chrono::{DateTime, Local};

use super::format::format_elapsed;
use super::session::{seconds_between, Session};

/// Timer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// Not accumulating time. Initial state.
    Stopped,
    /// Accumulating time since the last start.
    Running,
}

impl std::fmt::Display for TimerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stopped => write!(f, "Stopped"),
            Self::Running => write!(f, "Running"),
        }
    }
}

/// A single stopwatch.
///
/// `accumulated` only holds time from completed sessions. While running, the
/// open interval begins at `current_start`; the timer is running exactly when
/// `current_start` is set.
#[derive(Debug, Clone)]
pub struct Timer {
    number: u64,
    label: String,
    accumulated: f64,
    current_start: Option<DateTime<Local>>,
    sessions: Vec<Session>,
}

impl Timer {
    /// Create a stopped timer.
    ///
    /// `number` is the creation sequence number used for the default label
    /// `Timer N`. Negative or non-finite `accumulated` values are treated as 0.
    #[must_use]
    pub fn new(number: u64, label: Option<String>, accumulated: f64) -> Self {
        let mut timer = Self {
            number,
            label: String::new(),
            accumulated: sanitize_seconds(accumulated),
            current_start: None,
            sessions: Vec::new(),
        };
        timer.set_label(label.as_deref().unwrap_or_default());
        timer
    }

    /// The label shown when the user has not chosen one.
    #[must_use]
    pub fn default_label(&self) -> String {
        format!("Timer {}", self.number)
    }

    /// Creation sequence number.
    #[must_use]
    pub const fn number(&self) -> u64 {
        self.number
    }

    /// Display name.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Change the display name. Blank input restores the default label;
    /// anything else is kept verbatim.
    pub fn set_label(&mut self, label: &str) {
        self.label = if label.trim().is_empty() {
            self.default_label()
        } else {
            label.to_string()
        };
    }

    /// Seconds banked from completed sessions.
    #[must_use]
    pub const fn accumulated(&self) -> f64 {
        self.accumulated
    }

    /// Start of the open interval, if running.
    #[must_use]
    pub const fn current_start(&self) -> Option<DateTime<Local>> {
        self.current_start
    }

    /// Completed sessions in chronological order.
    #[must_use]
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.current_start.is_some()
    }

    #[must_use]
    pub const fn state(&self) -> TimerState {
        if self.is_running() {
            TimerState::Running
        } else {
            TimerState::Stopped
        }
    }

    /// Begin an interval at `now`. Does nothing if already running.
    pub fn start(&mut self, now: DateTime<Local>) {
        if self.current_start.is_none() {
            self.current_start = Some(now);
        }
    }

    /// Close the open interval at `now`, record it and bank its duration.
    ///
    /// Returns the recorded session, or `None` if the timer was not running.
    pub fn stop(&mut self, now: DateTime<Local>) -> Option<&Session> {
        let started_at = self.current_start.take()?;
        let session = Session::new(started_at, now);
        self.accumulated += session.duration;
        self.sessions.push(session);
        self.sessions.last()
    }

    /// Stop if running, otherwise start. Returns the new state.
    pub fn toggle(&mut self, now: DateTime<Local>) -> TimerState {
        if self.is_running() {
            self.stop(now);
        } else {
            self.start(now);
        }
        self.state()
    }

    /// Total seconds including the open interval, if any.
    #[must_use]
    pub fn current_elapsed(&self, now: DateTime<Local>) -> f64 {
        self.current_start.map_or(self.accumulated, |start| {
            self.accumulated + seconds_between(start, now)
        })
    }

    /// [`Self::current_elapsed`] as `HH:MM:SS`.
    #[must_use]
    pub fn display(&self, now: DateTime<Local>) -> String {
        format_elapsed(self.current_elapsed(now))
    }

    /// Zero the banked total. The session history is kept.
    ///
    /// A running timer first records its open interval as a session, then
    /// keeps running from `now`.
    pub fn reset(&mut self, now: DateTime<Local>) {
        let was_running = self.stop(now).is_some();
        self.accumulated = 0.0;
        if was_running {
            self.start(now);
        }
    }
}

fn sanitize_seconds(seconds: f64) -> f64 {
    if seconds.is_finite() && seconds > 0.0 {
        seconds
    } else {
        0.0
    }
}
