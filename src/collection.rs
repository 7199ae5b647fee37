//! The ordered set of timers the application shows.
//!
//! [`TimerCollection`] owns the timers, numbers new ones, and connects them to
//! the snapshot store and the CSV exporter.

use std::path::PathBuf;

use crate::config::Paths;
use crate::error::TimerError;
use crate::storage::{CsvExporter, SnapshotStore, TimerRecord};
use crate::timer::{Clock, SystemClock, Timer, TimerState};

/// Ordered list of timers plus their persistence.
pub struct TimerCollection<C: Clock = SystemClock> {
    timers: Vec<Timer>,
    created: u64,
    clock: C,
    store: SnapshotStore,
    exporter: CsvExporter,
}

impl TimerCollection<SystemClock> {
    /// Empty collection using the system clock and the given paths.
    #[must_use]
    pub fn new(paths: &Paths) -> Self {
        Self::with_clock(paths, SystemClock)
    }
}

impl<C: Clock> TimerCollection<C> {
    /// Empty collection with an explicit clock.
    #[must_use]
    pub fn with_clock(paths: &Paths, clock: C) -> Self {
        Self {
            timers: Vec::new(),
            created: 0,
            clock,
            store: SnapshotStore::new(paths.snapshot_file.clone()),
            exporter: CsvExporter::new(paths.export_dir.clone()),
        }
    }

    /// Restore the saved timers, or create `default_count` fresh ones if
    /// nothing usable is saved.
    pub fn restore_or_default(&mut self, default_count: usize) {
        match self.load_snapshot() {
            Some(records) => {
                for record in records {
                    self.add_timer(Some(record.label), record.elapsed);
                }
            }
            None => {
                for _ in 0..default_count {
                    self.add_timer(None, 0.0);
                }
            }
        }
    }

    /// Append a stopped timer and return its position.
    ///
    /// Default labels are numbered by how many timers this collection has
    /// ever created, so numbers are never reused after a removal.
    pub fn add_timer(&mut self, label: Option<String>, initial_accumulated: f64) -> usize {
        self.created += 1;
        self.timers
            .push(Timer::new(self.created, label, initial_accumulated));
        self.timers.len() - 1
    }

    /// Remove the timer at `index`. An open interval is discarded.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::InvalidTimer` if `index` is out of range.
    pub fn remove_timer(&mut self, index: usize) -> Result<Timer, TimerError> {
        if index >= self.timers.len() {
            return Err(TimerError::InvalidTimer(index + 1));
        }
        Ok(self.timers.remove(index))
    }

    /// Toggle the timer at `index` and return its new state.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::InvalidTimer` if `index` is out of range.
    pub fn toggle(&mut self, index: usize) -> Result<TimerState, TimerError> {
        let now = self.clock.now();
        let timer = self
            .timers
            .get_mut(index)
            .ok_or(TimerError::InvalidTimer(index + 1))?;
        let state = timer.toggle(now);
        tracing::debug!(timer = timer.label(), %state, "toggled");
        Ok(state)
    }

    /// Rename the timer at `index`.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::InvalidTimer` if `index` is out of range.
    pub fn rename(&mut self, index: usize, label: &str) -> Result<(), TimerError> {
        self.timers
            .get_mut(index)
            .ok_or(TimerError::InvalidTimer(index + 1))?
            .set_label(label);
        Ok(())
    }

    /// Zero the accumulated time of the timer at `index`.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::InvalidTimer` if `index` is out of range.
    pub fn reset(&mut self, index: usize) -> Result<(), TimerError> {
        let now = self.clock.now();
        self.timers
            .get_mut(index)
            .ok_or(TimerError::InvalidTimer(index + 1))?
            .reset(now);
        Ok(())
    }

    /// Zero the accumulated time of every timer.
    pub fn reset_all(&mut self) {
        let now = self.clock.now();
        for timer in &mut self.timers {
            timer.reset(now);
        }
    }

    /// Elapsed seconds of the timer at `index` as of now.
    #[must_use]
    pub fn current_elapsed(&self, index: usize) -> Option<f64> {
        let now = self.clock.now();
        self.timers.get(index).map(|t| t.current_elapsed(now))
    }

    /// `(label, current elapsed)` for every timer, in order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<TimerRecord> {
        let now = self.clock.now();
        self.timers
            .iter()
            .map(|t| TimerRecord::new(t.label(), t.current_elapsed(now)))
            .collect()
    }

    /// Write the current snapshot, replacing any earlier one.
    ///
    /// Running timers are saved with their elapsed time so far and keep
    /// running.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::ConfigSave` if the file cannot be written. The
    /// in-memory timers are unaffected.
    pub fn save_snapshot(&self) -> Result<Vec<TimerRecord>, TimerError> {
        let records = self.snapshot();
        self.store.save(&records)?;
        Ok(records)
    }

    /// Saved records, or `None` if there is no usable snapshot.
    #[must_use]
    pub fn load_snapshot(&self) -> Option<Vec<TimerRecord>> {
        self.store.load_or_none()
    }

    /// Export every completed session to a new CSV file.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::ExportNoData` if there are no sessions, or
    /// `TimerError::ExportWrite` if the file cannot be written.
    pub fn export_sessions(&self) -> Result<PathBuf, TimerError> {
        self.exporter.export(&self.timers, self.clock.now())
    }

    #[must_use]
    pub fn timers(&self) -> &[Timer] {
        &self.timers
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Timer> {
        self.timers.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Whether any timer is running.
    #[must_use]
    pub fn any_running(&self) -> bool {
        self.timers.iter().any(Timer::is_running)
    }

    /// Total number of timers ever created.
    #[must_use]
    pub const fn created(&self) -> u64 {
        self.created
    }

    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    #[must_use]
    pub const fn store(&self) -> &SnapshotStore {
        &self.store
    }

    #[must_use]
    pub const fn exporter(&self) -> &CsvExporter {
        &self.exporter
    }
}
