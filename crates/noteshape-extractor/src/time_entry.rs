//! Time-entry log extractor
//!
//! Recognizes notes whose lines start with compact time codes (`637 Woke up`,
//! `1420 Lunch`), optionally behind a checkbox glyph.

use crate::patterns::TIME_CODE_RE;
use crate::schema::bundled_schema;
use crate::timestamp::date_portion;
use noteshape_domain::{
    ExtractorKind, NoteExtractor, NoteRecord, StructuredRecord, TimeEntry, TimeEntryResult,
};
use serde_json::Value;
use tracing::debug;

/// Minimum number of valid time-coded lines for a note to qualify
pub const MIN_TIME_ENTRIES: usize = 2;

/// Extractor for time-coded activity logs
#[derive(Debug, Clone)]
pub struct TimeEntryExtractor {
    schema: Value,
}

impl TimeEntryExtractor {
    /// Create an extractor validated against `schema`
    pub fn new(schema: Value) -> Self {
        Self { schema }
    }

    /// Extract the log, entries sorted by time of day
    pub fn extract_note(&self, note: &NoteRecord) -> TimeEntryResult {
        let date = date_portion(note.created());

        let mut entries: Vec<TimeEntry> = time_coded_lines(&note.text)
            .map(|line| {
                let timestamp = if date.is_empty() {
                    format!("{}:00", line.time)
                } else {
                    format!("{}T{}:00", date, line.time)
                };
                TimeEntry {
                    timestamp,
                    time: line.time,
                    date: date.clone(),
                    activity: line.activity.to_string(),
                    raw_line: line.raw.to_string(),
                }
            })
            .collect();

        let original: Vec<String> = entries.iter().map(|e| e.time.clone()).collect();
        entries.sort_by(|a, b| a.time.cmp(&b.time));
        let sorted: Vec<String> = entries.iter().map(|e| e.time.clone()).collect();

        let mut warnings = Vec::new();
        if original != sorted {
            debug!(note_id = %note.id, "Time entries reordered");
            warnings.push(format!(
                "Time entries are out of chronological order. Original order: {}, Sorted order: {}",
                quoted_list(&original),
                quoted_list(&sorted)
            ));
        }

        TimeEntryResult {
            note_id: note.id.clone(),
            title: note.title.clone(),
            date,
            created: note.created().to_string(),
            last_updated: note.edited().to_string(),
            time_entries: entries,
            raw_text: note.text.clone(),
            warnings,
        }
    }
}

impl Default for TimeEntryExtractor {
    fn default() -> Self {
        Self::new(bundled_schema(ExtractorKind::TimeEntry))
    }
}

impl NoteExtractor for TimeEntryExtractor {
    fn kind(&self) -> ExtractorKind {
        ExtractorKind::TimeEntry
    }

    fn can_handle(&self, note: &NoteRecord) -> bool {
        time_coded_lines(&note.text).nth(MIN_TIME_ENTRIES - 1).is_some()
    }

    fn extract(&self, note: &NoteRecord) -> StructuredRecord {
        self.extract_note(note).into()
    }

    fn schema(&self) -> &Value {
        &self.schema
    }
}

/// A line carrying a valid time code
struct TimeCodedLine<'a> {
    time: String,
    activity: &'a str,
    raw: &'a str,
}

fn time_coded_lines(text: &str) -> impl Iterator<Item = TimeCodedLine<'_>> {
    text.trim().split('\n').filter_map(|line| {
        let raw = line.trim();
        let caps = TIME_CODE_RE.captures(raw)?;
        let time = canonical_time(caps.get(1)?.as_str())?;
        Some(TimeCodedLine {
            time,
            activity: caps.get(2)?.as_str().trim(),
            raw,
        })
    })
}

/// `HH:MM` for a 3 or 4 digit code, or `None` when out of range
///
/// Three digits split as `H` + `MM`, four as `HH` + `MM`.
pub fn canonical_time(code: &str) -> Option<String> {
    if !code.is_ascii() || !(3..=4).contains(&code.len()) {
        return None;
    }
    let (hours, minutes) = code.split_at(code.len() - 2);
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;

    (hours <= 23 && minutes <= 59).then(|| format!("{:02}:{:02}", hours, minutes))
}

fn quoted_list(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|item| format!("'{}'", item)).collect();
    format!("[{}]", quoted.join(", "))
}
