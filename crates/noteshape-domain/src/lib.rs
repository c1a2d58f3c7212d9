//! Noteshape Domain Layer
//!
//! This crate contains the data model shared by every other Noteshape crate:
//! the raw note record captured from the note-taking tool, the structured
//! record shapes produced by extraction, and the trait seams between the
//! extraction engine and its collaborators.
//!
//! ## Key Concepts
//!
//! - **Note record**: the raw input unit (title, body text, labels, timestamps)
//! - **Structured record**: one of four typed shapes (generic note, Hacker News
//!   bookmark, time-entry log, workout log)
//! - **Extractor kind**: the closed set of note shapes the engine recognizes
//! - **Schema validator**: the capability that checks a structured record
//!   against the schema document its extractor declares
//!
//! ## Architecture
//!
//! - Only serialization crates as dependencies
//! - No I/O, no pattern matching logic
//! - Extraction and validation implementations live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod kind;
pub mod note;
pub mod record;
pub mod traits;

// Re-exports for convenience
pub use kind::ExtractorKind;
pub use note::{NoteError, NoteRecord, Timestamps};
pub use record::{
    Checkbox, CompletedActivity, ExerciseRecord, GenericNote, HnLink, HnParsedNote, SetEntry,
    StructuredRecord, TimeEntry, TimeEntryResult, WorkoutRecord,
};
pub use traits::{NoteExtractor, SchemaValidator};
