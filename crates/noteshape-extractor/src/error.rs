//! Error types for the Extractor

use noteshape_domain::NoteError;
use thiserror::Error;

/// Errors that can occur while selecting an extractor or parsing a note
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The note is not a key/value mapping
    #[error("Invalid input shape: {0}")]
    InvalidInputShape(String),

    /// No registered extractor recognized the note
    #[error("No suitable extractor found for the given note")]
    NoMatchingExtractor,

    /// The extracted record does not satisfy its extractor's schema
    #[error("Parsed data does not conform to schema: {message}")]
    SchemaViolation {
        /// First violation reported by the validator
        message: String,
    },

    /// The extractor cannot be registered
    #[error("Invalid extractor: {0}")]
    InvalidExtractor(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Record could not be converted to JSON
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A schema document could not be loaded
    #[error(transparent)]
    SchemaLoad(#[from] SchemaLoadError),
}

/// Errors raised while loading schema documents
#[derive(Error, Debug)]
pub enum SchemaLoadError {
    /// The schema file exists but could not be read
    #[error("Failed to read schema '{name}': {source}")]
    Io {
        /// Schema document name
        name: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The schema file is not a JSON object
    #[error("Malformed schema '{name}': {message}")]
    Malformed {
        /// Schema document name
        name: String,
        /// Parse or shape error
        message: String,
    },
}

impl From<NoteError> for RegistryError {
    fn from(e: NoteError) -> Self {
        RegistryError::InvalidInputShape(e.to_string())
    }
}

impl From<serde_json::Error> for RegistryError {
    fn from(e: serde_json::Error) -> Self {
        RegistryError::Serialization(e.to_string())
    }
}
