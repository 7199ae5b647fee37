//! Display formatting for elapsed time and timestamps.

use chrono::{DateTime, Local};

/// Timestamp format used in CSV exports.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamp format used in export file names.
pub const EXPORT_STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Format seconds as `HH:MM:SS`.
///
/// Fractions are truncated. The hour field is at least two digits and grows
/// as needed, so 100 hours renders as `100:00:00`. Negative and non-finite
/// input renders as zero.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_elapsed(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// Format a timestamp as `YYYY-MM-DD HH:MM:SS`.
#[must_use]
pub fn format_timestamp(t: &DateTime<Local>) -> String {
    t.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_elapsed_basic() {
        assert_eq!(format_elapsed(0.0), "00:00:00");
        assert_eq!(format_elapsed(5.0), "00:00:05");
        assert_eq!(format_elapsed(90.0), "00:01:30");
        assert_eq!(format_elapsed(3661.0), "01:01:01");
    }

    #[test]
    fn test_format_elapsed_truncates() {
        assert_eq!(format_elapsed(59.999), "00:00:59");
        assert_eq!(format_elapsed(3599.9), "00:59:59");
    }

    #[test]
    fn test_format_elapsed_wide_hours() {
        assert_eq!(format_elapsed(99.0 * 3600.0), "99:00:00");
        assert_eq!(format_elapsed(100.0 * 3600.0), "100:00:00");
        assert_eq!(format_elapsed(1234.0 * 3600.0 + 61.0), "1234:01:01");
    }

    #[test]
    fn test_format_elapsed_invalid_input() {
        assert_eq!(format_elapsed(-3.0), "00:00:00");
        assert_eq!(format_elapsed(f64::NAN), "00:00:00");
        assert_eq!(format_elapsed(f64::INFINITY), "00:00:00");
    }

    #[test]
    fn test_format_timestamp() {
        let t = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 3).unwrap();
        assert_eq!(format_timestamp(&t), "2024-03-09 07:05:03");
        assert_eq!(t.format(EXPORT_STAMP_FORMAT).to_string(), "20240309_070503");
    }
}
