//! Output formatting for multitimer commands.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::TimerError;
use crate::storage::TimerRecord;

pub use json::*;
pub use pretty::*;

/// Format saved timers based on output format
///
/// # Errors
///
/// Returns `TimerError::Json` if JSON serialization fails.
pub fn format_records(
    records: &[TimerRecord],
    title: &str,
    format: OutputFormat,
) -> Result<String, TimerError> {
    match format {
        OutputFormat::Pretty => Ok(format_records_pretty(records, title)),
        OutputFormat::Json => format_records_json(records, title),
    }
}

/// Format a single saved timer based on output format
///
/// # Errors
///
/// Returns `TimerError::Json` if JSON serialization fails.
pub fn format_record(
    position: usize,
    record: &TimerRecord,
    action: &str,
    format: OutputFormat,
) -> Result<String, TimerError> {
    match format {
        OutputFormat::Pretty => Ok(format_record_pretty(position, record, action)),
        OutputFormat::Json => format_record_json(position, record, action),
    }
}

/// Format resolved paths based on output format
///
/// # Errors
///
/// Returns `TimerError::Json` if JSON serialization fails.
pub fn format_paths(paths: &Paths, format: OutputFormat) -> Result<String, TimerError> {
    match format {
        OutputFormat::Pretty => Ok(format_paths_pretty(paths)),
        OutputFormat::Json => format_paths_json(paths),
    }
}
