//! Best-effort timestamp handling
//!
//! Malformed timestamps never fail extraction: parsing degrades to plain
//! string splitting.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Calendar date (`YYYY-MM-DD`) of an ISO-8601 timestamp
///
/// The date is taken in the timestamp's own offset, not converted to UTC.
/// Unparseable input falls back to the text before the first `T`, or
/// before the first space when there is no `T`. Empty input yields an
/// empty string.
pub fn date_portion(timestamp: &str) -> String {
    if timestamp.is_empty() {
        return String::new();
    }

    match parse_date(timestamp) {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => {
            let separator = if timestamp.contains('T') { 'T' } else { ' ' };
            timestamp.split(separator).next().unwrap_or_default().to_string()
        }
    }
}

/// Creation timestamp reduced to whole seconds with a `T` separator
///
/// Only the text before the first `.` is kept; spaces become `T`.
pub fn comparison_key(timestamp: &str) -> String {
    timestamp
        .split('.')
        .next()
        .unwrap_or_default()
        .replace(' ', "T")
}

fn parse_date(timestamp: &str) -> Option<NaiveDate> {
    let normalized = timestamp.replace('Z', "+00:00");

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&normalized, format) {
            return Some(dt.date_naive());
        }
    }
    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&normalized, format) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(&normalized, "%Y-%m-%d").ok()
}
