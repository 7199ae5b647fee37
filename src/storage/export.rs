//! CSV export of completed sessions.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::TimerError;
use crate::timer::{Timer, EXPORT_STAMP_FORMAT};

/// Header row of every export.
pub const CSV_HEADER: [&str; 4] = ["Timer Name", "Start Time", "Stop Time", "Duration"];

/// File name for an export created at `at`: `timer_export_YYYYMMDD_HHMMSS.csv`.
#[must_use]
pub fn export_file_name(at: &DateTime<Local>) -> String {
    format!("timer_export_{}.csv", at.format(EXPORT_STAMP_FORMAT))
}

/// Write the header and one row per session, in timer order then
/// chronological order.
///
/// Returns the number of session rows written.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_sessions<W: Write>(out: W, timers: &[Timer]) -> Result<usize, TimerError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(out);

    writer.write_record(CSV_HEADER)?;

    let mut rows = 0;
    for timer in timers {
        for session in timer.sessions() {
            writer.write_record([
                timer.label(),
                session.formatted_start().as_str(),
                session.formatted_stop().as_str(),
                session.formatted_duration().as_str(),
            ])?;
            rows += 1;
        }
    }

    writer.flush()?;
    Ok(rows)
}

/// Writes session exports into a fixed directory.
#[derive(Debug, Clone)]
pub struct CsvExporter {
    dir: PathBuf,
}

impl CsvExporter {
    #[must_use]
    pub const fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Export every session of `timers` to a new timestamped file.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::ExportNoData` without touching the filesystem if
    /// no timer has a completed session, and `TimerError::ExportWrite` if the
    /// file cannot be written.
    pub fn export(&self, timers: &[Timer], now: DateTime<Local>) -> Result<PathBuf, TimerError> {
        if timers.iter().all(|t| t.sessions().is_empty()) {
            return Err(TimerError::ExportNoData);
        }

        let path = self.unused_path(&now);
        let write_error = |message: String| TimerError::ExportWrite {
            path: path.clone(),
            message,
        };

        fs::create_dir_all(&self.dir).map_err(|e| write_error(e.to_string()))?;
        let file = fs::File::create(&path).map_err(|e| write_error(e.to_string()))?;
        let rows = write_or_discard(&path, file, timers).map_err(|e| write_error(e.to_string()))?;

        tracing::info!(rows, path = %path.display(), "exported sessions");
        Ok(path)
    }

    /// Timestamped path in the export directory that does not exist yet.
    fn unused_path(&self, now: &DateTime<Local>) -> PathBuf {
        let base = self.dir.join(export_file_name(now));
        if !base.exists() {
            return base;
        }

        let stem = format!("timer_export_{}", now.format(EXPORT_STAMP_FORMAT));
        (1..)
            .map(|n| self.dir.join(format!("{stem}_{n}.csv")))
            .find(|p| !p.exists())
            .unwrap_or(base)
    }
}

/// Write sessions to `out`, which backs the file at `path`. On failure the
/// partial file is removed.
fn write_or_discard<W: Write>(path: &Path, out: W, timers: &[Timer]) -> Result<usize, TimerError> {
    write_sessions(out, timers).inspect_err(|_| {
        fs::remove_file(path).ok();
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use tempfile::TempDir;

    fn t0() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 6, 3, 14, 30, 0).unwrap()
    }

    fn timer_with_sessions(number: u64, label: &str, lengths: &[i64]) -> Timer {
        let mut timer = Timer::new(number, Some(label.to_string()), 0.0);
        let mut now = t0();
        for secs in lengths {
            timer.start(now);
            now += Duration::seconds(*secs);
            timer.stop(now);
            now += Duration::minutes(10);
        }
        timer
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name(&t0()), "timer_export_20240603_143000.csv");
    }

    #[test]
    fn test_export_no_data() {
        let dir = TempDir::new().unwrap();
        let exporter = CsvExporter::new(dir.path().join("out"));
        let timers = vec![Timer::new(1, None, 100.0), Timer::new(2, None, 0.0)];

        let err = exporter.export(&timers, t0()).unwrap_err();
        assert!(matches!(err, TimerError::ExportNoData));
        assert!(!exporter.dir().exists());
    }

    #[test]
    fn test_export_two_sessions() {
        let dir = TempDir::new().unwrap();
        let exporter = CsvExporter::new(dir.path().to_path_buf());
        let timers = vec![timer_with_sessions(1, "Coding", &[65, 3725])];

        let path = exporter.export(&timers, t0()).unwrap();
        assert_eq!(path, dir.path().join("timer_export_20240603_143000.csv"));

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Timer Name,Start Time,Stop Time,Duration");
        assert_eq!(lines[1], "Coding,2024-06-03 14:30:00,2024-06-03 14:31:05,00:01:05");
        assert_eq!(lines[2], "Coding,2024-06-03 14:41:05,2024-06-03 15:43:10,01:02:05");
    }

    #[test]
    fn test_export_order_and_skip_empty_timers() {
        let timers = vec![
            timer_with_sessions(1, "First", &[1]),
            Timer::new(2, None, 50.0),
            timer_with_sessions(3, "Third", &[2, 3]),
        ];

        let mut buf = Vec::new();
        let rows = write_sessions(&mut buf, &timers).unwrap();
        assert_eq!(rows, 3);

        let text = String::from_utf8(buf).unwrap();
        let labels: Vec<&str> = text
            .lines()
            .skip(1)
            .map(|l| l.split(',').next().unwrap())
            .collect();
        assert_eq!(labels, vec!["First", "Third", "Third"]);
    }

    #[test]
    fn test_export_quotes_labels() {
        let timers = vec![timer_with_sessions(1, "Admin, \"misc\"", &[5])];
        let mut buf = Vec::new();
        write_sessions(&mut buf, &timers).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text
            .lines()
            .nth(1)
            .unwrap()
            .starts_with("\"Admin, \"\"misc\"\"\","));
    }

    #[test]
    fn test_export_does_not_overwrite() {
        let dir = TempDir::new().unwrap();
        let exporter = CsvExporter::new(dir.path().to_path_buf());
        let timers = vec![timer_with_sessions(1, "A", &[1])];

        let first = exporter.export(&timers, t0()).unwrap();
        let second = exporter.export(&timers, t0()).unwrap();
        assert_ne!(first, second);
        assert_eq!(
            second,
            dir.path().join("timer_export_20240603_143000_1.csv")
        );
    }

    #[test]
    fn test_export_write_failure() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "file").unwrap();

        let exporter = CsvExporter::new(blocker);
        let timers = vec![timer_with_sessions(1, "A", &[1])];
        let err = exporter.export(&timers, t0()).unwrap_err();
        assert!(matches!(err, TimerError::ExportWrite { .. }));
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("disk full"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_failed_write_removes_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(export_file_name(&t0()));
        std::fs::write(&path, "Timer Name,Sta").unwrap();
        let timers = vec![timer_with_sessions(1, "A", &[1])];

        assert!(write_or_discard(&path, FailingWriter, &timers).is_err());
        assert!(!path.exists());
    }
}
