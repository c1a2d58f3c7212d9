//! Gatekeeper configuration

use serde::{Deserialize, Serialize};

/// Configuration for schema validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Enforce `pattern` keywords on strings
    #[serde(default = "default_true")]
    pub check_patterns: bool,

    /// Stop at the first violation instead of collecting all of them
    #[serde(default = "default_true")]
    pub fail_fast: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            check_patterns: true,
            fail_fast: true,
        }
    }
}

impl ValidationConfig {
    /// Create a permissive configuration (structural checks only, full report)
    pub fn permissive() -> Self {
        Self {
            check_patterns: false,
            fail_fast: false,
        }
    }

    /// Collect every violation rather than stopping at the first
    pub fn exhaustive() -> Self {
        Self {
            check_patterns: true,
            fail_fast: false,
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_strict() {
        let config: ValidationConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ValidationConfig::default());
    }

    #[test]
    fn test_permissive_skips_patterns() {
        let config = ValidationConfig::permissive();
        assert!(!config.check_patterns);
        assert!(!config.fail_fast);
    }
}
