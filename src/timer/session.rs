//! Completed start/stop intervals.

use chrono::{DateTime, Local};

use super::format::{format_elapsed, format_timestamp};

/// One completed start/stop interval.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// When the timer was started.
    pub started_at: DateTime<Local>,
    /// When the timer was stopped.
    pub stopped_at: DateTime<Local>,
    /// Length of the interval in seconds.
    pub duration: f64,
}

impl Session {
    /// Build a session from its endpoints.
    #[must_use]
    pub fn new(started_at: DateTime<Local>, stopped_at: DateTime<Local>) -> Self {
        Self {
            started_at,
            stopped_at,
            duration: seconds_between(started_at, stopped_at),
        }
    }

    /// Duration as `HH:MM:SS`.
    #[must_use]
    pub fn formatted_duration(&self) -> String {
        format_elapsed(self.duration)
    }

    /// Start time as `YYYY-MM-DD HH:MM:SS`.
    #[must_use]
    pub fn formatted_start(&self) -> String {
        format_timestamp(&self.started_at)
    }

    /// Stop time as `YYYY-MM-DD HH:MM:SS`.
    #[must_use]
    pub fn formatted_stop(&self) -> String {
        format_timestamp(&self.stopped_at)
    }
}

/// Seconds from `start` to `end`, clamped at zero if the clock went backwards.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn seconds_between(start: DateTime<Local>, end: DateTime<Local>) -> f64 {
    let micros = end
        .signed_duration_since(start)
        .num_microseconds()
        .unwrap_or(i64::MAX);
    (micros.max(0) as f64) / 1_000_000.0
}
