//! Human-readable formatting for sizes and timestamps.

use chrono::{DateTime, Utc};

/// Format a byte count with base-2 units and one decimal place above 1 KB.
pub fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}

/// Render a modification time the way listings show it, e.g. `Mar 05, 2026 14:32`.
pub fn format_timestamp(when: &DateTime<Utc>) -> String {
    when.format("%b %d, %Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_human_size_units() {
        assert_eq!(human_size(0), "0 B");
        assert_eq!(human_size(512), "512 B");
        assert_eq!(human_size(1024), "1.0 KB");
        assert_eq!(human_size(1536), "1.5 KB");
        assert_eq!(human_size(1024 * 1024), "1.0 MB");
        assert_eq!(human_size(5 * 1024 * 1024 * 1024), "5.0 GB");
    }

    #[test]
    fn test_human_size_tops_out_at_terabytes() {
        assert_eq!(human_size(u64::MAX), format!("{:.1} TB", u64::MAX as f64 / 1024f64.powi(4)));
    }

    #[test]
    fn test_timestamp_format() {
        let when = Utc.with_ymd_and_hms(2026, 3, 5, 14, 32, 0).unwrap();
        assert_eq!(format_timestamp(&when), "Mar 05, 2026 14:32");
    }
}
