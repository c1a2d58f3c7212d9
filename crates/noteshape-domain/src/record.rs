//! Record module - structured output shapes
//!
//! Each shape is owned by exactly one extractor, built fresh per note and
//! never mutated after construction. Field names are the on-disk JSON names.

use crate::kind::ExtractorKind;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A checklist item found in a generic note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkbox {
    /// Whether the item is ticked
    pub checked: bool,

    /// Item text, trimmed
    pub text: String,
}

/// Generic note: links, checklist items and remaining free-text lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericNote {
    /// Source note identifier
    pub note_id: String,

    /// Source note title
    pub title: String,

    /// URLs, duplicate-free, in first-seen order
    pub links: Vec<String>,

    /// Checklist items in document order
    pub checkboxes: Vec<Checkbox>,

    /// Non-checklist, non-blank lines in document order
    pub rest: Vec<String>,
}

/// A Hacker News item link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HnLink {
    /// Full item URL
    pub url: String,

    /// Numeric item id, as text
    pub item_id: String,
}

/// Hacker News bookmark note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HnParsedNote {
    /// Source note identifier
    pub note_id: String,

    /// Source note title
    pub title: String,

    /// Primary item URL (first match, title before body), empty if none
    pub url: String,

    /// Primary item id, empty if none
    pub item_id: String,

    /// Original labels followed by hashtags found in the body
    pub labels: Vec<String>,

    /// Body text, unmodified
    pub description: String,

    /// Every item link found, title matches first
    pub hn_links: Vec<HnLink>,
}

/// One time-coded line of an activity log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// `date + "T" + time + ":00"`, or `time + ":00"` without a date
    pub timestamp: String,

    /// Zero-padded `HH:MM`
    pub time: String,

    /// Date derived from the note's creation timestamp, may be empty
    pub date: String,

    /// Text following the time code
    pub activity: String,

    /// The original trimmed line
    pub raw_line: String,
}

/// Time-entry log note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntryResult {
    /// Source note identifier
    pub note_id: String,

    /// Source note title
    pub title: String,

    /// Date derived from the creation timestamp
    pub date: String,

    /// Raw creation timestamp
    pub created: String,

    /// Raw edit timestamp
    pub last_updated: String,

    /// Entries sorted by time of day
    pub time_entries: Vec<TimeEntry>,

    /// Body text, unmodified
    pub raw_text: String,

    /// Ordering warnings
    pub warnings: Vec<String>,
}

/// One `sets × reps × weight` triple
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetEntry {
    /// Number of sets
    #[serde(rename = "set")]
    pub set_number: u64,

    /// Repetitions per set
    pub reps: u64,

    /// Weight lifted
    pub weight: f64,
}

/// All sets logged for one exercise abbreviation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseRecord {
    /// Full exercise name from the abbreviation table
    pub exercise_name: String,

    /// Abbreviation as declared in the table
    pub abbreviation: String,

    /// Sets in line order
    pub sets: Vec<SetEntry>,

    /// Number of entries in `sets`
    pub total_sets: usize,

    /// Every contributing line, trimmed and newline-joined
    pub raw_line: String,
}

/// A timestamped activity inside a workout note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedActivity {
    /// Timestamp as written in the note
    pub timestamp: String,

    /// The full line containing the timestamp
    pub activity: String,
}

/// Workout log note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Source note identifier
    pub note_id: String,

    /// Source note title
    pub title: String,

    /// Raw creation timestamp
    pub workout_date: String,

    /// Raw edit timestamp
    pub last_updated: String,

    /// Exercises in first-seen order
    pub exercises: Vec<ExerciseRecord>,

    /// Embedded activity timestamps, or a single synthesized entry
    pub completed_activities: Vec<CompletedActivity>,

    /// Body text with checkbox glyphs normalized to markdown markers
    pub raw_text: String,
}

/// The structured result of extracting one note
///
/// Serializes as the bare inner record, without a tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StructuredRecord {
    /// Generic note
    Generic(GenericNote),

    /// Hacker News bookmark
    HackerNews(HnParsedNote),

    /// Time-entry log
    TimeEntry(TimeEntryResult),

    /// Workout log
    Workout(WorkoutRecord),
}

impl StructuredRecord {
    /// Kind of extractor that produces this shape
    pub fn kind(&self) -> ExtractorKind {
        match self {
            StructuredRecord::Generic(_) => ExtractorKind::Generic,
            StructuredRecord::HackerNews(_) => ExtractorKind::HackerNews,
            StructuredRecord::TimeEntry(_) => ExtractorKind::TimeEntry,
            StructuredRecord::Workout(_) => ExtractorKind::Training,
        }
    }

    /// Identifier of the source note
    pub fn note_id(&self) -> &str {
        match self {
            StructuredRecord::Generic(r) => &r.note_id,
            StructuredRecord::HackerNews(r) => &r.note_id,
            StructuredRecord::TimeEntry(r) => &r.note_id,
            StructuredRecord::Workout(r) => &r.note_id,
        }
    }

    /// Convert to a JSON value for validation or output
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

impl From<GenericNote> for StructuredRecord {
    fn from(record: GenericNote) -> Self {
        StructuredRecord::Generic(record)
    }
}

impl From<HnParsedNote> for StructuredRecord {
    fn from(record: HnParsedNote) -> Self {
        StructuredRecord::HackerNews(record)
    }
}

impl From<TimeEntryResult> for StructuredRecord {
    fn from(record: TimeEntryResult) -> Self {
        StructuredRecord::TimeEntry(record)
    }
}

impl From<WorkoutRecord> for StructuredRecord {
    fn from(record: WorkoutRecord) -> Self {
        StructuredRecord::Workout(record)
    }
}
