//! Path resolution for multitimer data files.
//!
//! Defaults:
//! - `~/.multi_timer_config.json` - Saved timers (labels and totals)
//! - `~/Desktop/` - CSV exports
//! - `~/.multitimer/config.yaml` - Settings
//! - `~/.multitimer/multitimer.log` - Log output while the TUI is open

use std::path::{Path, PathBuf};

use crate::error::TimerError;

/// File name of the saved-timers snapshot.
pub const SNAPSHOT_FILE_NAME: &str = ".multi_timer_config.json";

/// Paths to multitimer configuration and data locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    /// Root directory: `~/.multitimer/`
    pub root: PathBuf,
    /// Settings file: `~/.multitimer/config.yaml`
    pub settings_file: PathBuf,
    /// Log file: `~/.multitimer/multitimer.log`
    pub log_file: PathBuf,
    /// Snapshot file: `~/.multi_timer_config.json`
    pub snapshot_file: PathBuf,
    /// Export directory: `~/Desktop/`
    pub export_dir: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TimerError> {
        let home = std::env::var("HOME")
            .map_err(|_| TimerError::Config("Could not determine home directory".to_string()))?;
        Ok(Self::for_home(Path::new(&home)))
    }

    /// Paths laid out relative to a given home directory.
    #[must_use]
    pub fn for_home(home: &Path) -> Self {
        let root = home.join(".multitimer");
        Self {
            settings_file: root.join("config.yaml"),
            log_file: root.join("multitimer.log"),
            snapshot_file: home.join(SNAPSHOT_FILE_NAME),
            export_dir: home.join("Desktop"),
            root,
        }
    }

    /// Create paths with everything under a single directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            settings_file: root.join("config.yaml"),
            log_file: root.join("multitimer.log"),
            snapshot_file: root.join("timers.json"),
            export_dir: root.join("exports"),
            root,
        }
    }

    /// Replace the snapshot file location.
    #[must_use]
    pub fn with_snapshot_file(mut self, path: PathBuf) -> Self {
        self.snapshot_file = path;
        self
    }

    /// Replace the export directory.
    #[must_use]
    pub fn with_export_dir(mut self, dir: PathBuf) -> Self {
        self.export_dir = dir;
        self
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fall back to the current directory if home cannot be determined
            Self::with_root(PathBuf::from(".multitimer"))
        })
    }
}
