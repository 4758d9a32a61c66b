//! Parsing the loosely formatted timestamps Eventbrite emits.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::SyncError;

/// Parse a local start timestamp into a calendar date.
///
/// Eventbrite's `start.local` is usually `YYYY-MM-DDTHH:MM:SS` without an
/// offset, but RFC 3339 strings, space-separated datetimes and bare dates
/// are accepted too.
pub fn parse_event_date(raw: &str) -> Result<NaiveDate, SyncError> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt.date());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }

    Err(SyncError::Timestamp(raw.to_string()))
}

/// Format a date the way the Airtable `Event Date` field expects it.
pub fn format_event_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naive_datetime() {
        let date = parse_event_date("2024-05-01T18:30:00").unwrap();
        assert_eq!(format_event_date(date), "2024-05-01");
    }

    #[test]
    fn test_rfc3339_with_offset() {
        let date = parse_event_date("2024-05-01T23:30:00-07:00").unwrap();
        assert_eq!(format_event_date(date), "2024-05-01");
    }

    #[test]
    fn test_space_separated_datetime() {
        let date = parse_event_date("2024-05-01 18:30:00").unwrap();
        assert_eq!(format_event_date(date), "2024-05-01");
    }

    #[test]
    fn test_bare_date() {
        let date = parse_event_date("2024-05-01").unwrap();
        assert_eq!(format_event_date(date), "2024-05-01");
    }

    #[test]
    fn test_surrounding_whitespace() {
        let date = parse_event_date("  2024-05-01T18:30:00  ").unwrap();
        assert_eq!(format_event_date(date), "2024-05-01");
    }

    #[test]
    fn test_garbage_is_an_error() {
        assert!(parse_event_date("next tuesday").is_err());
        assert!(parse_event_date("").is_err());
    }
}
