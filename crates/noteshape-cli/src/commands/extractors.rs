//! Extractors command implementation.

use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the extractors command.
pub fn execute_extractors(config: &Config, formatter: &Formatter) -> Result<()> {
    let registry = super::build_registry(config)?;
    println!("{}", formatter.format_kinds(&registry.kinds())?);
    Ok(())
}
