//! Settings for multitimer.
//!
//! Settings are loaded from `~/.multitimer/config.yaml`. Every field is
//! optional; missing fields fall back to defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config::Paths;
use crate::error::TimerError;

/// Main settings structure.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Timer defaults.
    pub timers: TimersConfig,
    /// CSV export settings.
    pub export: ExportConfig,
    /// Snapshot file settings.
    pub snapshot: SnapshotConfig,
}

/// Timer defaults.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TimersConfig {
    /// Timers created when there is no saved snapshot.
    #[serde(default = "default_timer_count")]
    pub default_count: usize,
    /// Display refresh interval in milliseconds.
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,
}

/// CSV export settings.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory for export files. Defaults to `~/Desktop`.
    pub directory: Option<PathBuf>,
}

/// Snapshot file settings.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SnapshotConfig {
    /// Snapshot file location. Defaults to `~/.multi_timer_config.json`.
    pub path: Option<PathBuf>,
}

const fn default_timer_count() -> usize {
    3
}

const fn default_tick_millis() -> u64 {
    100
}

impl Default for TimersConfig {
    fn default() -> Self {
        Self {
            default_count: default_timer_count(),
            tick_millis: default_tick_millis(),
        }
    }
}

impl Settings {
    /// Load settings from a specific path.
    ///
    /// If the file doesn't exist, returns default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from_path(path: &Path) -> Result<Self, TimerError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            TimerError::Config(format!(
                "Failed to read settings file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            TimerError::Config(format!(
                "Failed to parse settings file {}: {e}",
                path.display()
            ))
        })
    }

    /// Apply the path overrides from these settings.
    #[must_use]
    pub fn apply_to(&self, mut paths: Paths) -> Paths {
        if let Some(ref file) = self.snapshot.path {
            paths = paths.with_snapshot_file(file.clone());
        }
        if let Some(ref dir) = self.export.directory {
            paths = paths.with_export_dir(dir.clone());
        }
        paths
    }

    /// Refresh interval, never below 10 ms.
    #[must_use]
    pub fn tick(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timers.tick_millis.max(10))
    }
}
