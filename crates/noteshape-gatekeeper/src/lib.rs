//! Noteshape Gatekeeper
//!
//! Validates structured records against the schema document their extractor
//! declares. Nothing leaves the extraction engine without passing through it.
//!
//! The Gatekeeper provides:
//! - Full JSON-Schema validation over `serde_json::Value` (via `jsonschema`)
//! - Meta-schema checks for schema documents themselves
//! - Path-qualified violation reports
//!
//! The draft is taken from `$schema` and defaults to 2020-12.
//!
//! # Examples
//!
//! ```
//! use noteshape_gatekeeper::{Gatekeeper, ValidationStatus};
//! use serde_json::json;
//!
//! let gatekeeper = Gatekeeper::default_config();
//! let schema = json!({
//!     "type": "object",
//!     "properties": {"links": {"type": "array", "items": {"type": "string"}}},
//!     "required": ["links"]
//! });
//!
//! let result = gatekeeper.validate(&json!({"links": ["https://a.com"]}), &schema).unwrap();
//! assert_eq!(result.status, ValidationStatus::Accepted);
//!
//! let result = gatekeeper.validate(&json!({"links": [1]}), &schema).unwrap();
//! assert_eq!(result.status, ValidationStatus::Rejected);
//! ```

#![warn(missing_docs)]

mod validator;
mod error;
mod config;

pub use validator::{Gatekeeper, ValidationResult, ValidationStatus, Violation};
pub use error::GatekeeperError;
pub use config::ValidationConfig;
