//! Noteshape Extractor
//!
//! Classifies raw notes into one of a fixed set of shapes and extracts a
//! typed, schema-validated record from each.
//!
//! # Architecture
//!
//! ```text
//! NoteRecord → Registry::select_extractor → NoteExtractor::extract → Gatekeeper → StructuredRecord
//! ```
//!
//! # Extractors
//!
//! - **HackerNews**: `Download-HN` label or a Hacker News item link
//! - **TimeEntry**: two or more lines starting with a time code (`0637 Woke up`)
//! - **Training**: exercise abbreviations with `sets x reps x weight` triples
//! - **Generic**: anything else; links, checklist items and free text
//!
//! Registration order is the only tie-break, so the generic extractor belongs
//! at the end of the list.
//!
//! # Example Usage
//!
//! ```
//! use noteshape_domain::{ExtractorKind, NoteRecord};
//! use noteshape_extractor::Registry;
//!
//! let registry = Registry::with_defaults();
//! let note = NoteRecord::new("Upper Body", "Bp 3x8x100\nMr 3x10x95");
//!
//! let record = registry.parse(&note).unwrap();
//! assert_eq!(record.kind(), ExtractorKind::Training);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod generic;
mod hackernews;
mod patterns;
mod registry;
mod schema;
mod time_entry;
mod timestamp;
mod training;


pub use config::ExtractorConfig;
pub use error::{RegistryError, SchemaLoadError};
pub use generic::GenericExtractor;
pub use hackernews::HackerNewsExtractor;
pub use registry::{build_extractor, Registry};
pub use schema::{bundled_schema, SchemaSet};
pub use time_entry::{canonical_time, TimeEntryExtractor, MIN_TIME_ENTRIES};
pub use timestamp::date_portion;
pub use training::{normalize_checkboxes, TrainingExtractor, WORKOUT_LOGGED};
