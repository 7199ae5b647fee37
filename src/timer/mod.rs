//! Stopwatch timers.
//!
//! A [`Timer`] is plain data: a label, banked seconds, an optional open
//! interval and the list of completed [`Session`]s. Every transition takes
//! the current time explicitly so callers decide where time comes from,
//! normally through a [`Clock`].

mod clock;
mod format;
mod session;
mod stopwatch;

pub use clock::{Clock, SystemClock};
#[cfg(test)]
pub use clock::MockClock;
pub use format::{format_elapsed, format_timestamp, EXPORT_STAMP_FORMAT, TIMESTAMP_FORMAT};
pub use session::{seconds_between, Session};
pub use stopwatch::{Timer, TimerState};
