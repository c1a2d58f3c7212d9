//! Schema validation logic

use crate::{GatekeeperError, ValidationConfig};
use jsonschema::Validator;
use noteshape_domain::SchemaValidator;
use serde_json::Value;
use std::fmt;
use tracing::debug;

/// Result of validating a value
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the value passed validation
    pub status: ValidationStatus,

    /// Violations found (empty when accepted)
    pub violations: Vec<Violation>,
}

impl ValidationResult {
    /// Whether the value was accepted
    pub fn is_accepted(&self) -> bool {
        self.status == ValidationStatus::Accepted
    }

    /// Message of the first violation, if any
    pub fn first_message(&self) -> Option<String> {
        self.violations.first().map(ToString::to_string)
    }
}

/// Validation status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStatus {
    /// Value accepted
    Accepted,

    /// Value rejected
    Rejected,
}

/// A single schema violation at a location in the value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Pointer-style path to the offending value (`/exercises/0/sets`)
    pub path: String,

    /// Schema keyword that failed (`required`, `maxItems`, ...)
    pub keyword: String,

    /// Human-readable description
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

impl From<jsonschema::ValidationError<'_>> for Violation {
    fn from(error: jsonschema::ValidationError<'_>) -> Self {
        let schema_path = error.schema_path.to_string();
        let keyword = schema_path.rsplit('/').next().unwrap_or_default().to_string();

        Self {
            path: error.instance_path.to_string(),
            keyword,
            message: error.to_string(),
        }
    }
}

/// The Gatekeeper validates structured records before they are emitted
///
/// Every draft keyword is enforced; `format` is asserted rather than treated
/// as an annotation.
#[derive(Debug, Clone, Default)]
pub struct Gatekeeper {
    config: ValidationConfig,
}

impl Gatekeeper {
    /// Create a new Gatekeeper with the given configuration
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Create a Gatekeeper with default configuration
    pub fn default_config() -> Self {
        Self::new(ValidationConfig::default())
    }

    /// The active configuration
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate a value against a schema document
    ///
    /// # Returns
    ///
    /// A validation result listing violations; `Err` only when the schema
    /// document itself is malformed.
    pub fn validate(&self, value: &Value, schema: &Value) -> Result<ValidationResult, GatekeeperError> {
        let validator = self.compile(schema)?;
        let limit = if self.config.fail_fast { 1 } else { usize::MAX };

        let violations: Vec<Violation> = validator
            .iter_errors(value)
            .take(limit)
            .map(Violation::from)
            .collect();

        let status = if violations.is_empty() {
            ValidationStatus::Accepted
        } else {
            debug!("Value rejected with {} violation(s)", violations.len());
            ValidationStatus::Rejected
        };

        Ok(ValidationResult { status, violations })
    }

    /// Check that a schema document is well formed
    ///
    /// The document is checked against its draft's meta-schema and every
    /// `pattern` must compile.
    pub fn check_schema(&self, schema: &Value) -> Result<(), GatekeeperError> {
        self.compile(schema).map(|_| ())
    }

    fn compile(&self, schema: &Value) -> Result<Validator, GatekeeperError> {
        let relaxed;
        let schema = if self.config.check_patterns {
            schema
        } else {
            let mut stripped = schema.clone();
            strip_patterns(&mut stripped);
            relaxed = stripped;
            &relaxed
        };

        jsonschema::options()
            .should_validate_formats(true)
            .build(schema)
            .map_err(|e| GatekeeperError::InvalidSchema(e.to_string()))
    }
}

impl SchemaValidator for Gatekeeper {
    type Error = GatekeeperError;

    fn validate(&self, value: &Value, schema: &Value) -> Result<(), Self::Error> {
        let result = Gatekeeper::validate(self, value, schema)?;
        match result.first_message() {
            None => Ok(()),
            Some(message) => Err(GatekeeperError::Rejected { message }),
        }
    }

    fn check_schema(&self, schema: &Value) -> Result<(), Self::Error> {
        Gatekeeper::check_schema(self, schema)
    }
}

/// Remove `pattern` keywords. Only string-valued entries are keywords; a
/// property named `pattern` maps to a subschema object and is kept.
fn strip_patterns(schema: &mut Value) {
    match schema {
        Value::Object(map) => {
            if map.get("pattern").is_some_and(Value::is_string) {
                map.remove("pattern");
            }
            map.values_mut().for_each(strip_patterns);
        }
        Value::Array(items) => items.iter_mut().for_each(strip_patterns),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn checkbox_schema() -> Value {
        json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "type": "object",
            "properties": {
                "note_id": {"type": "string"},
                "checkboxes": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "checked": {"type": "boolean"},
                            "text": {"type": "string"}
                        },
                        "required": ["checked", "text"],
                        "additionalProperties": false
                    }
                }
            },
            "required": ["note_id", "checkboxes"]
        })
    }

    #[test]
    fn test_valid_value() {
        let gatekeeper = Gatekeeper::default_config();
        let value = json!({"note_id": "n1", "checkboxes": [{"checked": true, "text": "done"}]});
        let result = gatekeeper.validate(&value, &checkbox_schema()).unwrap();

        assert_eq!(result.status, ValidationStatus::Accepted);
        assert!(result.violations.is_empty());
    }

    #[test]
    fn test_missing_required_property() {
        let gatekeeper = Gatekeeper::default_config();
        let result = gatekeeper
            .validate(&json!({"checkboxes": []}), &checkbox_schema())
            .unwrap();

        assert_eq!(result.status, ValidationStatus::Rejected);
        assert_eq!(result.violations[0].keyword, "required");
        assert_eq!(result.violations[0].path, "");
        let message = result.first_message().unwrap();
        assert!(message.contains("note_id"), "unexpected message: {}", message);
        assert!(message.contains("required"), "unexpected message: {}", message);
    }

    #[test]
    fn test_nested_type_mismatch_reports_path() {
        let gatekeeper = Gatekeeper::default_config();
        let value = json!({"note_id": "n1", "checkboxes": [{"checked": "yes", "text": "x"}]});
        let result = gatekeeper.validate(&value, &checkbox_schema()).unwrap();

        assert_eq!(result.status, ValidationStatus::Rejected);
        assert_eq!(result.violations[0].path, "/checkboxes/0/checked");
        assert_eq!(result.violations[0].keyword, "type");
        assert!(result.violations[0].to_string().starts_with("/checkboxes/0/checked: "));
    }

    #[test]
    fn test_additional_properties_false() {
        let gatekeeper = Gatekeeper::default_config();
        let value = json!({"note_id": "n1", "checkboxes": [{"checked": true, "text": "x", "due": "today"}]});
        let result = gatekeeper.validate(&value, &checkbox_schema()).unwrap();

        assert_eq!(result.violations[0].keyword, "additionalProperties");
        assert!(result.violations[0].message.contains("due"));
    }

    #[test]
    fn test_fail_fast_stops_at_first_violation() {
        let value = json!({"note_id": 1, "checkboxes": "none"});

        let fast = Gatekeeper::default_config().validate(&value, &checkbox_schema()).unwrap();
        assert_eq!(fast.violations.len(), 1);

        let full = Gatekeeper::new(ValidationConfig::exhaustive())
            .validate(&value, &checkbox_schema())
            .unwrap();
        assert_eq!(full.violations.len(), 2);
    }

    #[test]
    fn test_integer_accepts_integral_values_only() {
        let gatekeeper = Gatekeeper::default_config();
        let schema = json!({"type": "integer"});

        assert!(gatekeeper.validate(&json!(3), &schema).unwrap().is_accepted());
        assert!(!gatekeeper.validate(&json!(3.5), &schema).unwrap().is_accepted());
        assert!(!gatekeeper.validate(&json!("3"), &schema).unwrap().is_accepted());
    }

    #[test]
    fn test_type_list() {
        let gatekeeper = Gatekeeper::default_config();
        let schema = json!({"type": ["string", "null"]});

        assert!(gatekeeper.validate(&json!(null), &schema).unwrap().is_accepted());
        assert!(gatekeeper.validate(&json!("x"), &schema).unwrap().is_accepted());
        assert!(!gatekeeper.validate(&json!(1), &schema).unwrap().is_accepted());
    }

    #[test]
    fn test_pattern_and_permissive_config() {
        let schema = json!({"type": "string", "pattern": "^[0-9]{2}:[0-9]{2}$"});
        let strict = Gatekeeper::default_config();
        assert!(strict.validate(&json!("06:37"), &schema).unwrap().is_accepted());
        assert!(!strict.validate(&json!("6:37"), &schema).unwrap().is_accepted());

        let permissive = Gatekeeper::new(ValidationConfig::permissive());
        assert!(permissive.validate(&json!("6:37"), &schema).unwrap().is_accepted());
    }

    #[test]
    fn test_permissive_config_keeps_property_named_pattern() {
        let schema = json!({
            "type": "object",
            "properties": {"pattern": {"type": "string", "pattern": "^x$"}},
            "required": ["pattern"]
        });
        let permissive = Gatekeeper::new(ValidationConfig::permissive());

        assert!(permissive.validate(&json!({"pattern": "y"}), &schema).unwrap().is_accepted());
        assert!(!permissive.validate(&json!({"pattern": 1}), &schema).unwrap().is_accepted());
    }

    #[test]
    fn test_numeric_bounds_and_lengths() {
        let gatekeeper = Gatekeeper::new(ValidationConfig::exhaustive());
        let schema = json!({
            "type": "object",
            "properties": {
                "weight": {"type": "number", "minimum": 0},
                "hours": {"type": "integer", "maximum": 23},
                "name": {"type": "string", "minLength": 1},
                "sets": {"type": "array", "minItems": 1}
            }
        });
        let value = json!({"weight": -1.5, "hours": 24, "name": "", "sets": []});
        let result = gatekeeper.validate(&value, &schema).unwrap();

        let mut keywords: Vec<&str> = result.violations.iter().map(|v| v.keyword.as_str()).collect();
        keywords.sort_unstable();
        assert_eq!(keywords, vec!["maximum", "minItems", "minLength", "minimum"]);
    }

    #[test]
    fn test_upper_bounds_uniqueness_and_negation_are_enforced() {
        let gatekeeper = Gatekeeper::new(ValidationConfig::exhaustive());
        let schema = json!({
            "type": "object",
            "properties": {
                "links": {"type": "array", "maxItems": 0},
                "title": {"type": "string", "maxLength": 2},
                "rest": {"type": "array", "uniqueItems": true}
            },
            "not": {"required": ["note_id"]}
        });
        let value = json!({
            "note_id": "n1",
            "links": ["https://a.com"],
            "title": "a long title",
            "rest": ["dup", "dup"]
        });
        let result = gatekeeper.validate(&value, &schema).unwrap();

        let mut keywords: Vec<&str> = result.violations.iter().map(|v| v.keyword.as_str()).collect();
        keywords.sort_unstable();
        assert_eq!(keywords, vec!["maxItems", "maxLength", "not", "uniqueItems"]);
    }

    #[test]
    fn test_combinators_and_refs_are_enforced() {
        let gatekeeper = Gatekeeper::default_config();
        let schema = json!({
            "$defs": {"hhmm": {"type": "string", "pattern": "^[0-9]{2}:[0-9]{2}$"}},
            "oneOf": [{"$ref": "#/$defs/hhmm"}, {"type": "integer", "exclusiveMinimum": 0}]
        });

        assert!(gatekeeper.validate(&json!("06:37"), &schema).unwrap().is_accepted());
        assert!(gatekeeper.validate(&json!(5), &schema).unwrap().is_accepted());
        assert!(!gatekeeper.validate(&json!(0), &schema).unwrap().is_accepted());
        assert!(!gatekeeper.validate(&json!("6:37"), &schema).unwrap().is_accepted());
    }

    #[test]
    fn test_format_is_asserted() {
        let gatekeeper = Gatekeeper::default_config();
        let schema = json!({"type": "string", "format": "date"});

        assert!(gatekeeper.validate(&json!("2024-01-15"), &schema).unwrap().is_accepted());
        assert!(!gatekeeper.validate(&json!("15/01/2024"), &schema).unwrap().is_accepted());
    }

    #[test]
    fn test_enum_and_const() {
        let gatekeeper = Gatekeeper::default_config();
        assert!(gatekeeper
            .validate(&json!("b"), &json!({"enum": ["a", "b"]}))
            .unwrap()
            .is_accepted());
        assert!(!gatekeeper
            .validate(&json!("c"), &json!({"enum": ["a", "b"]}))
            .unwrap()
            .is_accepted());
        assert!(!gatekeeper
            .validate(&json!(2), &json!({"const": 1}))
            .unwrap()
            .is_accepted());
    }

    #[test]
    fn test_boolean_schemas() {
        let gatekeeper = Gatekeeper::default_config();
        assert!(gatekeeper.validate(&json!({"x": 1}), &json!(true)).unwrap().is_accepted());
        assert!(!gatekeeper.validate(&json!(1), &json!(false)).unwrap().is_accepted());
    }

    #[test]
    fn test_malformed_schema_is_an_error() {
        let gatekeeper = Gatekeeper::default_config();
        assert!(matches!(
            gatekeeper.validate(&json!(1), &json!({"type": "decimal"})),
            Err(GatekeeperError::InvalidSchema(_))
        ));
        assert!(matches!(
            gatekeeper.validate(&json!(1), &json!({"minLength": "two"})),
            Err(GatekeeperError::InvalidSchema(_))
        ));
    }

    #[test]
    fn test_check_schema() {
        let gatekeeper = Gatekeeper::default_config();
        assert!(gatekeeper.check_schema(&checkbox_schema()).is_ok());
        assert!(gatekeeper.check_schema(&json!({"pattern": "("})).is_err());
        assert!(gatekeeper
            .check_schema(&json!({"properties": {"a": {"type": 5}}}))
            .is_err());
        assert!(gatekeeper.check_schema(&json!({"required": "note_id"})).is_err());
        assert!(gatekeeper.check_schema(&json!({"maxItems": -1})).is_err());
    }

    #[test]
    fn test_strip_patterns_only_removes_keywords() {
        let mut schema = json!({
            "pattern": "^a$",
            "properties": {"pattern": {"type": "string", "pattern": "^b$"}},
            "anyOf": [{"pattern": "^c$"}]
        });
        strip_patterns(&mut schema);

        assert_eq!(
            schema,
            json!({
                "properties": {"pattern": {"type": "string"}},
                "anyOf": [{}]
            })
        );
    }

    #[test]
    fn test_schema_validator_trait_reports_first_message() {
        let gatekeeper = Gatekeeper::default_config();
        let err = SchemaValidator::validate(&gatekeeper, &json!({}), &checkbox_schema()).unwrap_err();
        match err {
            GatekeeperError::Rejected { message } => {
                assert!(message.contains("required"), "unexpected message: {}", message)
            }
            other => panic!("expected rejection, got {:?}", other),
        }
        assert!(SchemaValidator::validate(
            &gatekeeper,
            &json!({"note_id": "", "checkboxes": []}),
            &checkbox_schema()
        )
        .is_ok());
    }
}
