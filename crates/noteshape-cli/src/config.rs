//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use noteshape_extractor::ExtractorConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding one JSON note per file
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,

    /// Directory receiving the structured records
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Appended to each input file stem to name its output file
    #[serde(default = "default_output_suffix")]
    pub output_suffix: String,

    /// Descend into subdirectories of the input directory
    #[serde(default)]
    pub recursive: bool,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Extractor registration and schema settings
    #[serde(default)]
    pub extractor: ExtractorConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".noteshape").join("config.toml"))
    }

    /// Load configuration from `path`, or the default path when `None`.
    ///
    /// A missing file yields the defaults; an explicitly named file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let path = Self::path()?;
                if path.exists() {
                    Self::from_file(&path)?
                } else {
                    Self::default()
                }
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            CliError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Check settings that serde cannot.
    pub fn validate(&self) -> Result<()> {
        if self.output_suffix.contains(['/', '\\']) {
            return Err(CliError::Config(format!(
                "output_suffix '{}' must not contain path separators",
                self.output_suffix
            )));
        }
        self.extractor.validate().map_err(CliError::Config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            output_dir: default_output_dir(),
            output_suffix: default_output_suffix(),
            recursive: false,
            settings: Settings::default(),
            extractor: ExtractorConfig::default(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_input_dir() -> PathBuf {
    PathBuf::from("mdfiles")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("parsed_output")
}

fn default_output_suffix() -> String {
    "_parsed".to_string()
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
