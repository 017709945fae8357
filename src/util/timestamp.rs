//! Parser for `LastUpdated` values.
//!
//! The source does not guarantee a single timestamp format, so several are
//! accepted:
//! - RFC 3339: `2024-06-01T12:00:00Z`, `2024-06-01T12:00:00+02:00`
//! - Naive datetime (UTC assumed): `2024-06-01T12:00:00`, `2024-06-01 12:00:00`
//! - Date only (midnight UTC): `2024-06-01`

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Error type for timestamp parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampParseError {
    pub input: String,
}

impl std::fmt::Display for TimestampParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unrecognized timestamp '{}'", self.input)
    }
}

impl std::error::Error for TimestampParseError {}

/// Parses a `LastUpdated` value into a Unix timestamp (seconds since epoch).
///
/// Callers that need a total order over possibly-malformed values (the
/// LastUpdated comparator) map the error to a sentinel instead of failing.
pub fn parse_timestamp(input: &str) -> Result<i64, TimestampParseError> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc).timestamp());
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(Utc.from_utc_datetime(&ndt).timestamp());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        if let Some(ndt) = date.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&ndt).timestamp());
        }
    }

    Err(TimestampParseError {
        input: input.to_string(),
    })
}

/// Formats a `LastUpdated` value for display as `YYYY-MM-DD HH:MM` (UTC).
/// Unparseable values are shown verbatim.
pub fn display_timestamp(input: &str) -> String {
    match parse_timestamp(input) {
        Ok(ts) => match Utc.timestamp_opt(ts, 0).single() {
            Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
            None => input.to_string(),
        },
        Err(_) => input.to_string(),
    }
}
