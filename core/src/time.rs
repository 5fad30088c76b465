//! Time related utils.

/// DateTime used across the signing process.
pub type DateTime = chrono::DateTime<chrono::Utc>;

/// Return the current time.
pub fn now() -> DateTime {
    chrono::Utc::now()
}

/// Format a date as `20220313`.
pub fn format_date(t: DateTime) -> String {
    t.format("%Y%m%d").to_string()
}

/// Format a datetime as ISO 8601 basic: `20220313T072004Z`.
pub fn format_iso8601(t: DateTime) -> String {
    t.format("%Y%m%dT%H%M%SZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn test_time() -> DateTime {
        chrono::Utc
            .with_ymd_and_hms(2022, 3, 13, 7, 20, 4)
            .unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(test_time()), "20220313");
    }

    #[test]
    fn test_format_iso8601() {
        assert_eq!(format_iso8601(test_time()), "20220313T072004Z");
    }
}
