use chrono::Local;
use market_types::unix_seconds;

/// Format unix seconds as local date-time to minute precision
/// ("2015-12-13 09:46"). Fractions are dropped; out-of-range timestamps are
/// shown raw.
pub fn format_unix_minutes(seconds: f64) -> String {
    match unix_seconds(seconds) {
        Some(ts) => ts
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string(),
        None => seconds.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_format_unix_minutes_matches_local_time() {
        let expected = DateTime::from_timestamp(1_450_000_000, 0)
            .unwrap()
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string();
        assert_eq!(format_unix_minutes(1_450_000_000.0), expected);
        assert_eq!(format_unix_minutes(1_450_000_000.9), expected);
    }

    #[test]
    fn test_format_unix_minutes_shape() {
        let formatted = format_unix_minutes(0.0);
        assert_eq!(formatted.len(), "1970-01-01 00:00".len());
        assert_eq!(&formatted[4..5], "-");
        assert_eq!(&formatted[10..11], " ");
        assert_eq!(&formatted[13..14], ":");
    }

    #[test]
    fn test_out_of_range_timestamp_is_raw() {
        assert_eq!(format_unix_minutes(1e30), 1e30.to_string());
        assert_eq!(format_unix_minutes(f64::NAN), "NaN");
    }
}
