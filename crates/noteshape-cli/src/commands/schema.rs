//! Schema command implementation.

use crate::cli::SchemaArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use noteshape_domain::ExtractorKind;
use noteshape_extractor::{RegistryError, SchemaSet};

/// Execute the schema command.
///
/// Prints the document the configured schema directory provides, or the
/// bundled one.
pub fn execute_schema(args: SchemaArgs, config: &Config) -> Result<()> {
    let kind: ExtractorKind = args.kind.parse().map_err(CliError::InvalidInput)?;

    let schemas = match &config.extractor.schema_dir {
        Some(dir) => SchemaSet::load_dir(dir).map_err(RegistryError::from)?,
        None => SchemaSet::bundled(),
    };

    println!("{}", serde_json::to_string_pretty(schemas.get(kind))?);
    Ok(())
}
