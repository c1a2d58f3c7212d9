//! Error types for the CLI application.

use noteshape_extractor::RegistryError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registry error
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<walkdir::Error> for CliError {
    fn from(e: walkdir::Error) -> Self {
        let message = e.to_string();
        match e.into_io_error() {
            Some(io) => CliError::Io(io),
            None => CliError::InvalidInput(message),
        }
    }
}
