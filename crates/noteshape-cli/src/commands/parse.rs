//! Parse and detect command implementations.

use super::{build_registry, read_note_value};
use crate::cli::NoteArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use noteshape_domain::NoteRecord;
use noteshape_extractor::RegistryError;

/// Execute the parse command.
pub fn execute_parse(args: NoteArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let registry = build_registry(config)?;
    let value = read_note_value(&args.file)?;
    let record = registry.parse_value(&value)?;

    println!("{}", formatter.format_record(&record)?);
    Ok(())
}

/// Execute the detect command.
pub fn execute_detect(args: NoteArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let registry = build_registry(config)?;
    let value = read_note_value(&args.file)?;
    let note = NoteRecord::from_value(&value).map_err(RegistryError::from)?;
    let kind = registry.select_extractor(&note)?.kind();

    println!("{}", formatter.format_detection(&args.file, kind)?);
    Ok(())
}
