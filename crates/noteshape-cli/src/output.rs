//! Output formatting for the CLI.

use crate::batch::BatchReport;
use crate::config::OutputFormat;
use crate::error::Result;
use colored::{Color, Colorize};
use noteshape_domain::{ExtractorKind, StructuredRecord};
use std::path::Path;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the per-file report of a batch run.
    pub fn format_report(&self, report: &BatchReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Table => Ok(self.format_report_table(report)),
            OutputFormat::Quiet => Ok(report
                .files
                .iter()
                .filter_map(|f| f.output.as_ref())
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_report_table(&self, report: &BatchReport) -> String {
        if report.files.is_empty() {
            return self.colorize("No files processed.", Color::Yellow);
        }

        let mut builder = Builder::default();
        builder.push_record(["", "File", "Extractor", "Result"]);

        for file in &report.files {
            let (mark, result) = match (&file.output, &file.error) {
                (_, Some(error)) => (self.colorize("✗", Color::Red), error.clone()),
                (Some(output), None) => (self.colorize("✓", Color::Green), display_name(output)),
                (None, None) => (String::new(), String::new()),
            };
            let kind = file.kind.map(|k| k.to_string()).unwrap_or_default();
            builder.push_record([mark, display_name(&file.source), kind, result]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a structured record. Records are always JSON.
    pub fn format_record(&self, record: &StructuredRecord) -> Result<String> {
        Ok(serde_json::to_string_pretty(record)?)
    }

    /// Format the extractor chosen for a note file.
    pub fn format_detection(&self, file: &Path, kind: ExtractorKind) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "file": file.display().to_string(),
                "extractor": kind,
            }))?),
            OutputFormat::Table => Ok(format!(
                "{} → {}",
                display_name(file),
                self.colorize(kind.as_str(), Color::Cyan)
            )),
            OutputFormat::Quiet => Ok(kind.to_string()),
        }
    }

    /// Format the registered extractors in order.
    pub fn format_kinds(&self, kinds: &[ExtractorKind]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(kinds)?),
            OutputFormat::Quiet => Ok(kinds
                .iter()
                .map(ExtractorKind::as_str)
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["#", "Extractor", "Schema"]);
                for (position, kind) in kinds.iter().enumerate() {
                    builder.push_record([
                        (position + 1).to_string(),
                        kind.to_string(),
                        format!("{}.schema.json", kind.schema_name()),
                    ]);
                }
                let mut table = builder.build();
                table.with(Style::rounded());
                Ok(table.to_string())
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), Color::Green)
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), Color::Blue)
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), Color::Yellow)
    }

    /// Whether status lines should be printed at all.
    pub fn is_quiet(&self) -> bool {
        self.format == OutputFormat::Quiet
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.color_enabled {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
