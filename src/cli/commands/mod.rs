//! Command implementations for multitimer.
//!
//! Non-interactive commands edit the saved snapshot directly: load it into a
//! [`TimerCollection`], change it, and save it back.

mod completions;

pub use completions::completions;

use crate::cli::args::{Cli, OutputFormat};
use crate::collection::TimerCollection;
use crate::config::{Paths, Settings};
use crate::error::TimerError;
use crate::output::{format_paths, format_record, format_records};
use crate::storage::TimerRecord;

const LIST_TITLE: &str = "Saved timers";

/// Resolved paths and settings for one invocation.
#[derive(Debug, Clone)]
pub struct Context {
    pub paths: Paths,
    pub settings: Settings,
}

impl Context {
    /// Resolve settings and paths. Command-line flags win over the settings
    /// file, which wins over the defaults under `base`.
    ///
    /// A settings file that cannot be parsed is logged and ignored.
    #[must_use]
    pub fn resolve(cli: &Cli, base: Paths) -> Self {
        let settings_file = cli
            .config
            .clone()
            .unwrap_or_else(|| base.settings_file.clone());

        let settings = Settings::load_from_path(&settings_file).unwrap_or_else(|e| {
            tracing::warn!("{e}; using default settings");
            Settings::default()
        });

        let mut paths = settings.apply_to(base);
        paths.settings_file = settings_file;
        if let Some(ref file) = cli.snapshot {
            paths = paths.with_snapshot_file(file.clone());
        }
        if let Some(ref dir) = cli.export_dir {
            paths = paths.with_export_dir(dir.clone());
        }

        Self { paths, settings }
    }

    /// The saved timers as a collection. Empty if nothing usable is saved.
    #[must_use]
    pub fn saved_timers(&self) -> TimerCollection {
        let mut timers = TimerCollection::new(&self.paths);
        timers.restore_or_default(0);
        timers
    }
}

/// Convert a 1-based position from the command line into an index.
fn to_index(position: usize, len: usize) -> Result<usize, TimerError> {
    if position == 0 || position > len {
        return Err(TimerError::InvalidTimer(position));
    }
    Ok(position - 1)
}

/// Execute list command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn list(ctx: &Context, format: OutputFormat) -> Result<String, TimerError> {
    let records = ctx.saved_timers().snapshot();
    format_records(&records, LIST_TITLE, format)
}

/// Execute add command
///
/// # Errors
///
/// Returns an error if the snapshot cannot be saved.
pub fn add(
    ctx: &Context,
    label: Option<String>,
    elapsed: f64,
    format: OutputFormat,
) -> Result<String, TimerError> {
    let mut timers = ctx.saved_timers();
    let index = timers.add_timer(label, elapsed);
    let records = timers.save_snapshot()?;
    format_record(index + 1, &records[index], "Added", format)
}

/// Execute rename command
///
/// # Errors
///
/// Returns an error if the position is invalid or the snapshot cannot be saved.
pub fn rename(
    ctx: &Context,
    position: usize,
    label: &str,
    format: OutputFormat,
) -> Result<String, TimerError> {
    let mut timers = ctx.saved_timers();
    let index = to_index(position, timers.len())?;
    timers.rename(index, label)?;
    let records = timers.save_snapshot()?;
    format_record(position, &records[index], "Renamed", format)
}

/// Execute remove command
///
/// # Errors
///
/// Returns an error if the position is invalid or the snapshot cannot be saved.
pub fn remove(ctx: &Context, position: usize, format: OutputFormat) -> Result<String, TimerError> {
    let mut timers = ctx.saved_timers();
    let index = to_index(position, timers.len())?;
    let removed = timers.remove_timer(index)?;
    timers.save_snapshot()?;
    let record = TimerRecord::new(removed.label(), removed.accumulated());
    format_record(position, &record, "Removed", format)
}

/// Execute reset command
///
/// # Errors
///
/// Returns an error if the position is invalid or the snapshot cannot be saved.
pub fn reset(
    ctx: &Context,
    position: Option<usize>,
    format: OutputFormat,
) -> Result<String, TimerError> {
    let mut timers = ctx.saved_timers();
    match position {
        Some(position) => {
            let index = to_index(position, timers.len())?;
            timers.reset(index)?;
            let records = timers.save_snapshot()?;
            format_record(position, &records[index], "Reset", format)
        }
        None => {
            timers.reset_all();
            let records = timers.save_snapshot()?;
            format_records(&records, LIST_TITLE, format)
        }
    }
}

/// Execute paths command
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn paths(ctx: &Context, format: OutputFormat) -> Result<String, TimerError> {
    format_paths(&ctx.paths, format)
}
