//! JSON output formatting.

use serde_json::json;

use crate::config::Paths;
use crate::error::TimerError;
use crate::storage::TimerRecord;
use crate::timer::format_elapsed;

fn record_value(position: usize, record: &TimerRecord) -> serde_json::Value {
    json!({
        "position": position,
        "label": record.label,
        "elapsed": record.elapsed,
        "display": format_elapsed(record.elapsed),
    })
}

/// Format saved timers as JSON
///
/// # Errors
///
/// Returns `TimerError::Json` if serialization fails.
pub fn format_records_json(records: &[TimerRecord], title: &str) -> Result<String, TimerError> {
    let items: Vec<_> = records
        .iter()
        .enumerate()
        .map(|(i, r)| record_value(i + 1, r))
        .collect();
    let output = json!({
        "list": title,
        "count": records.len(),
        "items": items,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format one saved timer as JSON
///
/// # Errors
///
/// Returns `TimerError::Json` if serialization fails.
pub fn format_record_json(
    position: usize,
    record: &TimerRecord,
    action: &str,
) -> Result<String, TimerError> {
    let mut value = record_value(position, record);
    value["action"] = json!(action);
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Format resolved paths as JSON
///
/// # Errors
///
/// Returns `TimerError::Json` if serialization fails.
pub fn format_paths_json(paths: &Paths) -> Result<String, TimerError> {
    let output = json!({
        "snapshot": paths.snapshot_file,
        "export_dir": paths.export_dir,
        "settings": paths.settings_file,
        "log": paths.log_file,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_records_json() {
        let records = vec![TimerRecord::new("A", 61.0), TimerRecord::new("B", 0.5)];
        let out = format_records_json(&records, "Saved timers").unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["count"], 2);
        assert_eq!(value["list"], "Saved timers");
        assert_eq!(value["items"][0]["position"], 1);
        assert_eq!(value["items"][0]["display"], "00:01:01");
        assert_eq!(value["items"][1]["label"], "B");
    }

    #[test]
    fn test_record_json_action() {
        let out = format_record_json(3, &TimerRecord::new("C", 5.0), "added").unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["action"], "added");
        assert_eq!(value["position"], 3);
    }

    #[test]
    fn test_paths_json() {
        let paths = Paths::with_root(PathBuf::from("/r"));
        let out = format_paths_json(&paths).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["snapshot"], "/r/timers.json");
        assert_eq!(value["export_dir"], "/r/exports");
    }
}
