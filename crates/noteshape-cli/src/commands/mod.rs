//! Command implementations.

pub mod extractors;
pub mod parse;
pub mod run;
pub mod schema;

pub use self::extractors::execute_extractors;
pub use self::parse::{execute_detect, execute_parse};
pub use self::run::execute_run;
pub use self::schema::execute_schema;

use crate::config::Config;
use crate::error::Result;
use noteshape_extractor::Registry;
use std::fs;
use std::path::Path;

/// Build the registry described by the configuration.
pub fn build_registry(config: &Config) -> Result<Registry> {
    Ok(Registry::from_config(&config.extractor)?)
}

/// Read a note file as raw JSON.
fn read_note_value(path: &Path) -> Result<serde_json::Value> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}
