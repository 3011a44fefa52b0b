// src/config/due_date.rs

//! Parsing of due-date strings.
//!
//! Accepted forms, tried in order:
//! 1. RFC 3339 (`2025-01-05T09:30:00Z`, `2025-01-05T09:30:00+02:00`)
//! 2. naive date-time (`2025-01-05T09:30:00`), taken as UTC
//! 3. plain date (`2025-01-05`), taken as midnight UTC

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const NAIVE_DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a due date; the error string says what was expected.
pub fn parse_due_date(s: &str) -> Result<DateTime<Utc>, String> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    for fmt in NAIVE_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| "expected an RFC 3339 timestamp or a YYYY-MM-DD date".to_string())
}
