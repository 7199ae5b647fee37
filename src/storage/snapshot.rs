//! Saved-timers snapshot.
//!
//! The snapshot file is a JSON array of `{"label": ..., "elapsed": ...}`
//! objects, rewritten in full on every save. Session history is not stored.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::TimerError;

/// One saved timer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerRecord {
    /// Display name. Empty means "use the default label".
    #[serde(default)]
    pub label: String,
    /// Accumulated seconds.
    #[serde(default, deserialize_with = "lenient_seconds")]
    pub elapsed: f64,
}

impl TimerRecord {
    #[must_use]
    pub fn new(label: impl Into<String>, elapsed: f64) -> Self {
        Self {
            label: label.into(),
            elapsed,
        }
    }
}

/// Accept `null` and negative values as zero.
fn lenient_seconds<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value.filter(|v| v.is_finite() && *v > 0.0).unwrap_or(0.0))
}

/// Reads and writes the snapshot file at a fixed path.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the snapshot.
    ///
    /// Returns `Ok(None)` if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::ConfigLoad` if the file cannot be read or parsed.
    pub fn load(&self) -> Result<Option<Vec<TimerRecord>>, TimerError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path).map_err(|e| TimerError::ConfigLoad {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        let records = serde_json::from_str(&contents).map_err(|e| TimerError::ConfigLoad {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        Ok(Some(records))
    }

    /// Read the snapshot, treating every failure as "nothing saved".
    ///
    /// Load failures are logged and never returned. An empty list also
    /// counts as nothing saved.
    #[must_use]
    pub fn load_or_none(&self) -> Option<Vec<TimerRecord>> {
        match self.load() {
            Ok(Some(records)) if !records.is_empty() => {
                tracing::debug!(count = records.len(), path = %self.path.display(), "loaded saved timers");
                Some(records)
            }
            Ok(_) => None,
            Err(e) => {
                tracing::warn!("{e}");
                None
            }
        }
    }

    /// Replace the snapshot with `records`.
    ///
    /// The new contents are written to a sibling temporary file and renamed
    /// over the old one, so a failed save leaves the previous snapshot intact.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::ConfigSave` if any filesystem step fails.
    pub fn save(&self, records: &[TimerRecord]) -> Result<(), TimerError> {
        let contents = serde_json::to_string_pretty(records)?;
        self.write_atomic(contents.as_bytes())
            .map_err(|source| TimerError::ConfigSave {
                path: self.path.clone(),
                source,
            })?;
        tracing::info!(count = records.len(), path = %self.path.display(), "saved timers");
        Ok(())
    }

    fn write_atomic(&self, bytes: &[u8]) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp = self.temp_path();
        let result = (|| {
            let mut file = fs::File::create(&tmp)?;
            file.write_all(bytes)?;
            file.sync_all()?;
            fs::rename(&tmp, &self.path)
        })();

        if result.is_err() {
            fs::remove_file(&tmp).ok();
        }
        result
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map_or_else(|| "snapshot".into(), |n| n.to_string_lossy().into_owned());
        self.path.with_file_name(format!(".{name}.tmp"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> SnapshotStore {
        SnapshotStore::new(dir.path().join("timers.json"))
    }

    #[test]
    fn test_load_missing() {
        let dir = TempDir::new().unwrap();
        assert!(store(&dir).load().unwrap().is_none());
        assert!(store(&dir).load_or_none().is_none());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        let records = vec![
            TimerRecord::new("Deep work", 3600.25),
            TimerRecord::new("Email, \"misc\" & ünïcödé", 0.0),
            TimerRecord::new("Timer 3", 12.5),
        ];

        store.save(&records).unwrap();
        assert_eq!(store.load().unwrap(), Some(records));
    }

    #[test]
    fn test_save_overwrites() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        store
            .save(&[TimerRecord::new("a", 1.0), TimerRecord::new("b", 2.0)])
            .unwrap();
        store.save(&[TimerRecord::new("c", 3.0)]).unwrap();

        assert_eq!(store.load().unwrap(), Some(vec![TimerRecord::new("c", 3.0)]));
        assert!(!dir.path().join(".timers.json.tmp").exists());
    }

    #[test]
    fn test_file_format() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.save(&[TimerRecord::new("Focus", 42.0)]).unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value, serde_json::json!([{"label": "Focus", "elapsed": 42.0}]));
    }

    #[test]
    fn test_load_corrupt() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        std::fs::write(store.path(), "{not json").unwrap();

        assert!(matches!(store.load(), Err(TimerError::ConfigLoad { .. })));
        assert!(store.load_or_none().is_none());
    }

    #[test]
    fn test_load_empty_list_is_none() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        std::fs::write(store.path(), "[]").unwrap();

        assert_eq!(store.load().unwrap(), Some(vec![]));
        assert!(store.load_or_none().is_none());
    }

    #[test]
    fn test_load_tolerates_missing_and_bad_fields() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        std::fs::write(
            store.path(),
            r#"[{"label": "x"}, {"elapsed": 10}, {"label": "y", "elapsed": -4}, {"label": "z", "elapsed": null}]"#,
        )
        .unwrap();

        let records = store.load().unwrap().unwrap();
        assert_eq!(
            records,
            vec![
                TimerRecord::new("x", 0.0),
                TimerRecord::new("", 10.0),
                TimerRecord::new("y", 0.0),
                TimerRecord::new("z", 0.0),
            ]
        );
    }

    #[test]
    fn test_save_creates_parent_dir() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path().join("a/b/timers.json"));
        store.save(&[TimerRecord::new("t", 1.0)]).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_save_failure_is_config_save() {
        let dir = TempDir::new().unwrap();
        // A directory where the file should go makes the rename fail.
        let target = dir.path().join("timers.json");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(target.join("keep"), "x").unwrap();

        let store = SnapshotStore::new(target);
        let err = store.save(&[TimerRecord::new("t", 1.0)]).unwrap_err();
        assert!(matches!(err, TimerError::ConfigSave { .. }));
        assert!(err.is_recoverable());
    }
}
