//! Gatekeeper error types

use thiserror::Error;

/// Errors that can occur during gatekeeper operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatekeeperError {
    /// The schema document itself is malformed
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    /// The value does not satisfy the schema
    #[error("{message}")]
    Rejected {
        /// Description of the first violation
        message: String,
    },
}
