//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Noteshape - Classify exported notes and extract structured records.
#[derive(Debug, Parser)]
#[command(name = "noteshape")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "NOTESHAPE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log debug detail to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (names only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse every JSON note in a directory
    Run(RunArgs),

    /// Parse a single note and print the structured record
    Parse(NoteArgs),

    /// Show which extractor would handle a note
    Detect(NoteArgs),

    /// List the extractors in registration order
    Extractors,

    /// Print the schema document for an extractor
    Schema(SchemaArgs),
}

/// Arguments for the run command.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Input directory (overrides config)
    #[arg(short, long)]
    pub input_dir: Option<PathBuf>,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Descend into subdirectories
    #[arg(short, long)]
    pub recursive: bool,
}

/// Arguments naming a single note file.
#[derive(Debug, Args)]
pub struct NoteArgs {
    /// JSON note file
    pub file: PathBuf,
}

/// Arguments for the schema command.
#[derive(Debug, Args)]
pub struct SchemaArgs {
    /// Extractor name (generic, hackernews, time_entry, training)
    pub kind: String,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_run_command_with_overrides() {
        let cli = Cli::parse_from([
            "noteshape",
            "run",
            "--input-dir",
            "notes",
            "--output-dir",
            "out",
            "--recursive",
        ]);
        match cli.command {
            Command::Run(args) => {
                assert_eq!(args.input_dir, Some(PathBuf::from("notes")));
                assert_eq!(args.output_dir, Some(PathBuf::from("out")));
                assert!(args.recursive);
            }
            _ => panic!("Expected Run command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["noteshape", "detect", "note.json", "--format", "json", "-v"]);
        assert!(matches!(cli.command, Command::Detect(_)));
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert!(cli.verbose);
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(["noteshape"]).is_err());
    }

    #[test]
    fn test_format_conversion() {
        let format: OutputFormat = CliFormat::Quiet.into();
        assert_eq!(format, OutputFormat::Quiet);
    }
}
