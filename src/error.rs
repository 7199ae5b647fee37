//! Error types for multitimer.
//!
//! Every fallible operation in the crate returns [`TimerError`]. None of the
//! variants are fatal to an interactive session: the TUI reports them in the
//! status bar and keeps running.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by timers, persistence, export and the terminal UI.
#[derive(Error, Debug)]
pub enum TimerError {
    /// The snapshot file exists but could not be read or parsed.
    #[error("Could not load saved timers from {}: {message}", path.display())]
    ConfigLoad { path: PathBuf, message: String },

    /// Writing the snapshot file failed.
    #[error("Failed to save timers to {}: {source}", path.display())]
    ConfigSave {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No timer has a completed session, so there is nothing to export.
    #[error("No timer sessions to export. Start and stop at least one timer first.")]
    ExportNoData,

    /// Writing the CSV export failed.
    #[error("Failed to export to {}: {message}", path.display())]
    ExportWrite { path: PathBuf, message: String },

    /// Settings or path resolution problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal setup or drawing failed.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// No timer at this 1-based position.
    #[error("No timer #{0}")]
    InvalidTimer(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl TimerError {
    /// Whether the application can carry on after this error.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Terminal(_))
    }

    /// Whether this is a warning rather than a failure.
    #[must_use]
    pub const fn is_warning(&self) -> bool {
        matches!(self, Self::ExportNoData)
    }

    /// Short text suitable for a status line or dialog.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigSave { source, .. } => format!("Save failed: {source}"),
            Self::ExportNoData => "No sessions to export".to_string(),
            Self::ExportWrite { message, .. } => format!("Export failed: {message}"),
            other => other.to_string(),
        }
    }
}
