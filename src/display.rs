//! Display Fallbacks
//!
//! Shared formatting for values the backend may omit.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Placeholder for missing text fields
pub const NOT_AVAILABLE: &str = "N/A";

/// Shown for numeric fields the backend omits
pub const ZERO_AMOUNT: &str = "0";

/// Placeholder for dates the viewer's clock cannot interpret
pub const INVALID_DATE: &str = "Invalid Date";

/// Format a number without a trailing `.0` for whole values
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Parse the timestamp shapes the backend emits
///
/// Date-times without an offset are local; a bare date is UTC midnight.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Local>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Local.from_local_datetime(&naive).earliest();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Local.from_local_datetime(&naive).earliest();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|naive| Utc.from_utc_datetime(&naive).with_timezone(&Local));
    }

    None
}

/// Viewer-local date string (`M/D/YYYY`), `N/A` when absent
pub fn format_date(raw: Option<&str>) -> String {
    match raw {
        None => NOT_AVAILABLE.to_string(),
        Some(raw) => parse_timestamp(raw)
            .map(|dt| dt.format("%-m/%-d/%Y").to_string())
            .unwrap_or_else(|| INVALID_DATE.to_string()),
    }
}
