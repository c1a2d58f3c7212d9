//! Trait definitions for the extraction seams
//!
//! These traits define the boundaries between the extraction engine and its
//! collaborators. Implementations live in other crates.

use crate::{ExtractorKind, NoteRecord, StructuredRecord};
use serde_json::Value;

/// A heuristic extractor for one note shape
///
/// Implemented by the application layer (noteshape-extractor). Extraction is
/// pure: the same note always yields the same record.
pub trait NoteExtractor: Send + Sync {
    /// The note shape this extractor produces
    fn kind(&self) -> ExtractorKind;

    /// Whether this extractor recognizes the note
    fn can_handle(&self, note: &NoteRecord) -> bool;

    /// Extract the structured record
    ///
    /// Malformed input degrades to best-effort output rather than failing.
    fn extract(&self, note: &NoteRecord) -> StructuredRecord;

    /// Schema document every extracted record must satisfy
    fn schema(&self) -> &Value;
}

/// Trait for validating a JSON value against a schema document
///
/// Implemented by the infrastructure layer (noteshape-gatekeeper)
pub trait SchemaValidator {
    /// Error type describing why a value was rejected
    type Error: std::fmt::Display;

    /// Validate `value` against `schema`
    fn validate(&self, value: &Value, schema: &Value) -> Result<(), Self::Error>;

    /// Check that `schema` is a usable schema document
    fn check_schema(&self, _schema: &Value) -> Result<(), Self::Error> {
        Ok(())
    }
}
