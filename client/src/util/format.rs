//! Presentation-only formatting for times, counts, SQL, and timestamps.
//!
//! Nothing here feeds back into request parameters or stored data.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta};

/// Fixed 24-hour display pattern (`2024/10/15 02:00:00`).
pub const TIMESTAMP_PATTERN: &str = "%Y/%m/%d %H:%M:%S";
/// Placeholder when a fingerprint has never been seen executing.
pub const NO_EXECUTIONS: &str = "No executions recorded";
/// SQL previews are cut after this many characters.
pub const SQL_PREVIEW_CHARS: usize = 100;

/// Seconds as `"850ms"` below one second, otherwise `"1.25s"`.
pub fn format_time(seconds: f64) -> String {
    if seconds < 1.0 {
        return format!("{:.0}ms", seconds * 1000.0);
    }
    format!("{seconds:.2}s")
}

/// Counts as `"1.2M"`, `"3.4K"`, or the plain integer.
#[allow(clippy::cast_precision_loss)]
pub fn format_number(count: u64) -> String {
    if count >= 1_000_000 {
        return format!("{:.1}M", count as f64 / 1_000_000.0);
    }
    if count >= 1_000 {
        return format!("{:.1}K", count as f64 / 1_000.0);
    }
    count.to_string()
}

/// First [`SQL_PREVIEW_CHARS`] characters, with `...` when cut.
pub fn truncate_sql(sql: &str) -> String {
    if sql.chars().count() <= SQL_PREVIEW_CHARS {
        return sql.to_owned();
    }
    let head = sql.chars().take(SQL_PREVIEW_CHARS).collect::<String>();
    format!("{head}...")
}

/// First six characters of a checksum for badges.
pub fn short_checksum(checksum: &str) -> String {
    checksum.chars().take(6).collect()
}

/// Parse a service timestamp into its wall-clock face value.
///
/// The service emits RFC 2822 (`Tue, 15 Oct 2024 10:00:00 GMT`), RFC 3339,
/// `YYYY-MM-DD HH:MM:SS`, or a bare date; the offset designator is ignored.
pub fn parse_service_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(raw) {
        return Some(parsed.naive_local());
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.naive_local());
    }
    for pattern in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(parsed);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Shift a service timestamp back by `offset_hours` and format it.
///
/// Returns `None` when the value cannot be parsed.
pub fn display_timestamp(raw: &str, offset_hours: i64) -> Option<String> {
    let parsed = parse_service_timestamp(raw)?;
    let shifted = parsed.checked_sub_signed(TimeDelta::try_hours(offset_hours)?)?;
    Some(shifted.format(TIMESTAMP_PATTERN).to_string())
}

/// Display text for an optional `last_occurrence`.
pub fn display_last_occurrence(raw: Option<&str>, offset_hours: i64) -> String {
    match raw {
        Some(raw) if !raw.trim().is_empty() => display_timestamp(raw, offset_hours).unwrap_or_else(|| raw.to_owned()),
        _ => NO_EXECUTIONS.to_owned(),
    }
}

/// Short `MM-DD` axis label for a service date; unparsable input passes through.
pub fn date_label(raw: &str) -> String {
    parse_service_timestamp(raw).map_or_else(|| raw.to_owned(), |parsed| parsed.format("%m-%d").to_string())
}
