//! Utilities for date and time formatting
//!
//! Provides consistent date/time formatting across the application

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parse an ISO-like timestamp into its calendar date.
///
/// Accepts RFC 3339 ("2024-01-05T10:00:00Z", "2024-01-05T10:00:00+03:00"),
/// naive date-time ("2024-01-05T10:00:00.123") and date-only ("2024-01-05").
/// Offsets are normalised to UTC.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Format ISO timestamp as a long en-US date
/// Example: "2024-01-05T00:00:00Z" -> "January 5, 2024"
///
/// Returns `None` when the input cannot be parsed.
pub fn format_long_date(raw: &str) -> Option<String> {
    parse_date(raw).map(|d| d.format("%B %-d, %Y").to_string())
}
