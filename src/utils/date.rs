//! Display formatting for the feed's date/time strings.
//!
//! Feed values may carry an offset (RFC 3339, shown in local time) or be
//! naive (`YYYY-MM-DD` / `YYYY-MM-DDTHH:MM[:SS]`, shown as-is). Anything
//! unparseable is displayed verbatim.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};

fn parse_feed_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// `2025-03-14` -> `Mar 14, 2025`
pub fn format_op_date(raw: &str) -> String {
    parse_feed_datetime(raw)
        .map(|dt| dt.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

fn format_clock(raw: &str) -> String {
    parse_feed_datetime(raw)
        .map(|dt| dt.format("%-I:%M %p").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// `8:00 AM – 4:30 PM`
pub fn format_time_range(start: &str, end: &str) -> String {
    format!("{} – {}", format_clock(start), format_clock(end))
}

/// Local wall-clock rendering of a recorded check timestamp.
pub fn format_stamp(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}
