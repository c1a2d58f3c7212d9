//! Batch driver: parse a directory of exported notes.
//!
//! Each file holds one JSON note. A failure on one file is recorded in the
//! report and the batch moves on.

use crate::error::Result;
use noteshape_domain::ExtractorKind;
use noteshape_extractor::Registry;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Where to read notes and write records.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Directory holding the note files
    pub input_dir: PathBuf,
    /// Directory receiving `<stem><suffix>.json` files
    pub output_dir: PathBuf,
    /// Appended to each input stem
    pub output_suffix: String,
    /// Descend into subdirectories
    pub recursive: bool,
}

/// Outcome for one input file.
#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    /// Input file
    pub source: PathBuf,
    /// Extractor that produced the record, on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ExtractorKind>,
    /// Written output file, on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    /// Failure description, on error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileOutcome {
    /// Whether the file was parsed and written.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Per-file outcomes of a batch run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    /// Outcomes in processing order
    pub files: Vec<FileOutcome>,
}

impl BatchReport {
    /// Number of files parsed and written.
    pub fn processed(&self) -> usize {
        self.files.iter().filter(|f| f.is_success()).count()
    }

    /// Number of files attempted.
    pub fn total(&self) -> usize {
        self.files.len()
    }

    /// The one-line summary printed after a run.
    pub fn summary(&self) -> String {
        format!(
            "Processed {}/{} files successfully",
            self.processed(),
            self.total()
        )
    }
}

/// `*.json` files under `dir`, sorted by path.
pub fn collect_note_files(dir: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(max_depth) {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type().is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

/// Output path for an input file.
pub fn output_path(source: &Path, options: &BatchOptions) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    options
        .output_dir
        .join(format!("{}{}.json", stem, options.output_suffix))
}

/// Parse one note file and write its record, returning the extractor kind.
pub fn process_file(
    registry: &Registry,
    source: &Path,
    options: &BatchOptions,
) -> Result<(ExtractorKind, PathBuf)> {
    let contents = fs::read_to_string(source)?;
    let value: serde_json::Value = serde_json::from_str(&contents)?;
    let record = registry.parse_value(&value)?;

    let target = output_path(source, options);
    fs::write(&target, serde_json::to_string_pretty(&record)?)?;

    debug!(source = %source.display(), output = %target.display(), kind = %record.kind(), "Wrote record");
    Ok((record.kind(), target))
}

/// Parse every note file in the input directory.
///
/// Fails only when the input directory is missing or the output directory
/// cannot be created; per-file errors land in the report.
pub fn run_batch(registry: &Registry, options: &BatchOptions) -> Result<BatchReport> {
    if !options.input_dir.is_dir() {
        return Err(crate::error::CliError::InvalidInput(format!(
            "Input directory '{}' does not exist",
            options.input_dir.display()
        )));
    }
    fs::create_dir_all(&options.output_dir)?;

    let files = collect_note_files(&options.input_dir, options.recursive)?;
    info!(
        count = files.len(),
        input_dir = %options.input_dir.display(),
        "Found JSON files"
    );

    let mut report = BatchReport::default();
    for source in files {
        let outcome = match process_file(registry, &source, options) {
            Ok((kind, output)) => FileOutcome {
                source,
                kind: Some(kind),
                output: Some(output),
                error: None,
            },
            Err(e) => {
                warn!(source = %source.display(), error = %e, "Failed to process note");
                FileOutcome {
                    source,
                    kind: None,
                    output: None,
                    error: Some(e.to_string()),
                }
            }
        };
        report.files.push(outcome);
    }

    info!(processed = report.processed(), total = report.total(), "Batch complete");
    Ok(report)
}
