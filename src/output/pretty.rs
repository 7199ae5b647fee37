//! Human-readable output formatting.

use colored::Colorize;

use crate::config::Paths;
use crate::storage::TimerRecord;
use crate::timer::format_elapsed;

/// Format saved timers as a numbered table
pub fn format_records_pretty(records: &[TimerRecord], title: &str) -> String {
    if records.is_empty() {
        return format!("{title} (0 timers)\n  No saved timers");
    }

    let width = records
        .iter()
        .map(|r| r.label.chars().count())
        .max()
        .unwrap_or(0)
        .max(10);

    let mut output = format!("{} ({} timers)\n", title, records.len());
    output.push_str(&"─".repeat(width + 18));
    output.push('\n');

    for (i, record) in records.iter().enumerate() {
        let position = format!("{:>3}.", i + 1);
        output.push_str(&format!(
            "{} {:<width$}  {}\n",
            position.dimmed(),
            record.label.bold(),
            format_elapsed(record.elapsed).yellow(),
        ));
    }

    let total: f64 = records.iter().map(|r| r.elapsed).sum();
    output.push_str(&format!(
        "{} {:<width$}  {}",
        "    ".dimmed(),
        "Total".dimmed(),
        format_elapsed(total).cyan(),
    ));

    output
}

/// Format one timer after a change
pub fn format_record_pretty(position: usize, record: &TimerRecord, action: &str) -> String {
    format!(
        "{} timer #{}: {} ({})",
        action,
        position,
        record.label.bold(),
        format_elapsed(record.elapsed).yellow()
    )
}

/// Format resolved paths
pub fn format_paths_pretty(paths: &Paths) -> String {
    let rows = [
        ("Snapshot", &paths.snapshot_file),
        ("Exports", &paths.export_dir),
        ("Settings", &paths.settings_file),
        ("Log", &paths.log_file),
    ];

    rows.iter()
        .map(|(name, path)| format!("{:<9} {}", format!("{name}:").dimmed(), path.display()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_empty_records() {
        let out = format_records_pretty(&[], "Saved timers");
        assert!(out.contains("0 timers"));
        assert!(out.contains("No saved timers"));
    }

    #[test]
    fn test_records_table() {
        colored::control::set_override(false);
        let records = vec![
            TimerRecord::new("Writing", 3725.0),
            TimerRecord::new("Email", 100.0 * 3600.0),
        ];
        let out = format_records_pretty(&records, "Saved timers");

        assert!(out.starts_with("Saved timers (2 timers)"));
        assert!(out.contains("  1. Writing"));
        assert!(out.contains("01:02:05"));
        assert!(out.contains("100:00:00"));
        assert!(out.contains("101:02:05"));
    }

    #[test]
    fn test_record_pretty() {
        colored::control::set_override(false);
        let out = format_record_pretty(2, &TimerRecord::new("Calls", 5.0), "Added");
        assert_eq!(out, "Added timer #2: Calls (00:00:05)");
    }

    #[test]
    fn test_paths_pretty() {
        colored::control::set_override(false);
        let out = format_paths_pretty(&Paths::with_root(PathBuf::from("/r")));
        assert!(out.contains("/r/timers.json"));
        assert!(out.contains("/r/exports"));
    }
}
