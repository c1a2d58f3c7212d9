//! Configuration for the Extractor registry

use noteshape_domain::ExtractorKind;
use noteshape_gatekeeper::ValidationConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

/// Configuration for building a [`Registry`](crate::Registry)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Extractor names in registration order; the first match wins
    #[serde(default = "default_extractors")]
    pub extractors: Vec<String>,

    /// Directory whose `<name>.schema.json` files replace the bundled schemas
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_dir: Option<PathBuf>,

    /// Schema validation settings
    #[serde(default)]
    pub validation: ValidationConfig,
}

impl ExtractorConfig {
    /// Resolve the configured names to extractor kinds
    pub fn kinds(&self) -> Result<Vec<ExtractorKind>, String> {
        self.extractors
            .iter()
            .map(|name| name.parse::<ExtractorKind>())
            .collect()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.extractors.is_empty() {
            return Err("extractors must list at least one extractor".to_string());
        }
        let kinds = self.kinds()?;
        let mut seen = HashSet::new();
        for kind in &kinds {
            if !seen.insert(*kind) {
                return Err(format!("extractor '{}' is listed more than once", kind));
            }
        }
        if let Some(dir) = &self.schema_dir {
            if dir.as_os_str().is_empty() {
                return Err("schema_dir cannot be empty".to_string());
            }
        }
        Ok(())
    }

    /// Whether the catch-all extractor is registered last
    pub fn has_fallback_last(&self) -> bool {
        matches!(
            self.kinds().ok().and_then(|k| k.last().copied()),
            Some(ExtractorKind::Generic)
        )
    }
}

impl Default for ExtractorConfig {
    /// Every extractor, most specific first, catch-all last
    fn default() -> Self {
        Self {
            extractors: default_extractors(),
            schema_dir: None,
            validation: ValidationConfig::default(),
        }
    }
}

impl ExtractorConfig {
    /// Specific extractors only: notes matching none of them are rejected
    pub fn without_fallback() -> Self {
        Self {
            extractors: vec![
                ExtractorKind::HackerNews.as_str().to_string(),
                ExtractorKind::TimeEntry.as_str().to_string(),
                ExtractorKind::Training.as_str().to_string(),
            ],
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str)
            .map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

fn default_extractors() -> Vec<String> {
    ExtractorKind::DEFAULT_ORDER
        .iter()
        .map(|kind| kind.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExtractorConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.has_fallback_last());
    }

    #[test]
    fn test_without_fallback_is_valid() {
        let config = ExtractorConfig::without_fallback();
        assert!(config.validate().is_ok());
        assert!(!config.has_fallback_last());
    }

    #[test]
    fn test_empty_extractor_list() {
        let config = ExtractorConfig {
            extractors: vec![],
            ..ExtractorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_extractor_name() {
        let config = ExtractorConfig {
            extractors: vec!["calendar".to_string()],
            ..ExtractorConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("calendar"));
    }

    #[test]
    fn test_duplicate_extractor_name() {
        let config = ExtractorConfig {
            extractors: vec!["training".to_string(), "workout".to_string()],
            ..ExtractorConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ExtractorConfig {
            schema_dir: Some(PathBuf::from("schemas")),
            ..ExtractorConfig::default()
        };
        let toml_str = config.to_toml().unwrap();
        let parsed = ExtractorConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed = ExtractorConfig::from_toml("extractors = [\"training\", \"generic\"]").unwrap();
        assert_eq!(parsed.kinds().unwrap(), vec![ExtractorKind::Training, ExtractorKind::Generic]);
        assert_eq!(parsed.validation, ValidationConfig::default());
        assert!(parsed.schema_dir.is_none());
    }
}
