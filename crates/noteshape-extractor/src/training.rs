//! Workout log extractor
//!
//! Exercises are named by short abbreviations (`Bp`, `Sq`, ...) and followed
//! by `sets x reps x weight` triples, either on the same line or on the
//! indented lines below it. A single pass over the lines carries the current
//! exercise forward until a line dedents out of its context.

use crate::patterns::{
    CHECKED_BOX, EMBEDDED_TIMESTAMP_RE, EXERCISE_RES, EXERCISE_TABLE, SET_TRIPLE_RE, UNCHECKED_BOX,
};
use crate::schema::bundled_schema;
use crate::timestamp::comparison_key;
use noteshape_domain::{
    CompletedActivity, ExerciseRecord, ExtractorKind, NoteExtractor, NoteRecord, SetEntry,
    StructuredRecord, WorkoutRecord,
};
use serde_json::Value;
use tracing::debug;

/// Activity text for the entry synthesized from the creation timestamp
pub const WORKOUT_LOGGED: &str = "Workout logged";

/// Extractor for strength-training logs
#[derive(Debug, Clone)]
pub struct TrainingExtractor {
    schema: Value,
}

impl TrainingExtractor {
    /// Create an extractor validated against `schema`
    pub fn new(schema: Value) -> Self {
        Self { schema }
    }

    /// Extract the workout record
    pub fn extract_note(&self, note: &NoteRecord) -> WorkoutRecord {
        let text = normalize_checkboxes(&note.text);
        let exercises = extract_exercises(&text);
        let completed_activities = completed_activities(&text, note.created());

        debug!(
            note_id = %note.id,
            exercises = exercises.len(),
            activities = completed_activities.len(),
            "Extracted workout"
        );

        WorkoutRecord {
            note_id: note.id.clone(),
            title: note.title.clone(),
            workout_date: note.created().to_string(),
            last_updated: note.edited().to_string(),
            exercises,
            completed_activities,
            raw_text: text,
        }
    }
}

impl Default for TrainingExtractor {
    fn default() -> Self {
        Self::new(bundled_schema(ExtractorKind::Training))
    }
}

impl NoteExtractor for TrainingExtractor {
    fn kind(&self) -> ExtractorKind {
        ExtractorKind::Training
    }

    fn can_handle(&self, note: &NoteRecord) -> bool {
        if note.text.is_empty() {
            return false;
        }
        let text = normalize_checkboxes(&note.text);
        EXERCISE_RES.iter().any(|re| re.is_match(&text)) && SET_TRIPLE_RE.is_match(&text)
    }

    fn extract(&self, note: &NoteRecord) -> StructuredRecord {
        self.extract_note(note).into()
    }

    fn schema(&self) -> &Value {
        &self.schema
    }
}

/// Replace checkbox glyphs with markdown task markers
pub fn normalize_checkboxes(text: &str) -> String {
    text.replace(UNCHECKED_BOX, "- [ ] ")
        .replace(CHECKED_BOX, "- [x] ")
}

/// Exercise context carried from line to line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ScanState {
    /// Index into the abbreviation table
    current: Option<usize>,
    /// Indent of the line that last named an exercise
    last_indent: usize,
}

/// What a single line contributes to the scan
#[derive(Debug)]
struct LineFacts<'a> {
    indent: usize,
    matched: Option<usize>,
    sets: Vec<SetEntry>,
    raw: &'a str,
}

impl<'a> LineFacts<'a> {
    fn scan(line: &'a str) -> Self {
        Self {
            indent: line.chars().take_while(|c| c.is_whitespace()).count(),
            // Table order decides, not position in the line.
            matched: EXERCISE_RES.iter().position(|re| re.is_match(line)),
            sets: parse_sets(line),
            raw: line.trim(),
        }
    }
}

impl ScanState {
    /// Advance past one line, returning the exercise that owns its sets
    fn step(self, line: &LineFacts<'_>) -> (Self, Option<usize>) {
        let mut next = match line.matched {
            Some(index) => ScanState {
                current: Some(index),
                last_indent: line.indent,
            },
            None => self,
        };

        let owner = if line.sets.is_empty() {
            None
        } else {
            next.current
        };

        if line.matched.is_none() && line.sets.is_empty() && line.indent <= next.last_indent {
            next.current = None;
        }

        (next, owner)
    }
}

/// Exercise records in first-seen order
#[derive(Debug, Default)]
struct ExerciseAggregate {
    records: Vec<ExerciseRecord>,
    positions: [Option<usize>; EXERCISE_TABLE.len()],
}

impl ExerciseAggregate {
    fn add(&mut self, index: usize, line: LineFacts<'_>) {
        match self.positions[index] {
            Some(position) => {
                let record = &mut self.records[position];
                record.sets.extend(line.sets);
                record.total_sets = record.sets.len();
                record.raw_line.push('\n');
                record.raw_line.push_str(line.raw);
            }
            None => {
                let (abbreviation, name) = EXERCISE_TABLE[index];
                self.positions[index] = Some(self.records.len());
                self.records.push(ExerciseRecord {
                    exercise_name: name.to_string(),
                    abbreviation: abbreviation.to_string(),
                    total_sets: line.sets.len(),
                    sets: line.sets,
                    raw_line: line.raw.to_string(),
                });
            }
        }
    }
}

fn extract_exercises(text: &str) -> Vec<ExerciseRecord> {
    let (_, aggregate) = text.split('\n').map(LineFacts::scan).fold(
        (ScanState::default(), ExerciseAggregate::default()),
        |(state, mut aggregate), line| {
            let (state, owner) = state.step(&line);
            if let Some(index) = owner {
                aggregate.add(index, line);
            }
            (state, aggregate)
        },
    );
    aggregate.records
}

/// Every `sets x reps x weight` triple on a line, skipping unparseable ones
fn parse_sets(line: &str) -> Vec<SetEntry> {
    SET_TRIPLE_RE
        .captures_iter(line)
        .filter_map(|caps| match (caps[1].parse(), caps[2].parse(), caps[3].parse()) {
            (Ok(set_number), Ok(reps), Ok(weight)) => Some(SetEntry {
                set_number,
                reps,
                weight,
            }),
            _ => {
                debug!("Skipping set triple '{}': count out of range", &caps[0]);
                None
            }
        })
        .collect()
}

/// Embedded timestamps that differ from the creation time, with their lines
fn completed_activities(text: &str, created: &str) -> Vec<CompletedActivity> {
    let created_key = comparison_key(created);

    let mut activities: Vec<CompletedActivity> = EMBEDDED_TIMESTAMP_RE
        .find_iter(text)
        .filter(|found| found.as_str() != created_key)
        .map(|found| {
            let start = text[..found.start()].rfind('\n').unwrap_or(0);
            let end = text[found.end()..]
                .find('\n')
                .map_or(text.len(), |offset| found.end() + offset);
            CompletedActivity {
                timestamp: found.as_str().to_string(),
                activity: text[start..end].trim().to_string(),
            }
        })
        .collect();

    if activities.is_empty() && !created.is_empty() {
        activities.push(CompletedActivity {
            timestamp: created.to_string(),
            activity: WORKOUT_LOGGED.to_string(),
        });
    }
    activities
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: total_sets always equals the number of recorded sets
        #[test]
        fn test_total_sets_matches_sets(
            triples in prop::collection::vec((1u32..10, 1u32..20, 0u32..300), 1..6)
        ) {
            let line = triples
                .iter()
                .map(|(s, r, w)| format!("{}x{}x{}", s, r, w))
                .collect::<Vec<_>>()
                .join(" ");
            let exercises = extract_exercises(&format!("Bp {}\n  Bp {}", line, line));

            prop_assert_eq!(exercises.len(), 1);
            prop_assert_eq!(exercises[0].total_sets, exercises[0].sets.len());
            prop_assert_eq!(exercises[0].total_sets, triples.len() * 2);
        }
    }
}
