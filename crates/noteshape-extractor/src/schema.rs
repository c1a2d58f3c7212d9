//! Schema documents, one per extractor kind
//!
//! The documents ship inside the crate. A schema directory can override any
//! of them by providing `<name>.schema.json`.

use crate::error::SchemaLoadError;
use noteshape_domain::ExtractorKind;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

const GENERIC_SCHEMA: &str = include_str!("../schemas/generic_notes.schema.json");
const HACKERNEWS_SCHEMA: &str = include_str!("../schemas/hackernews.schema.json");
const TIME_ENTRY_SCHEMA: &str = include_str!("../schemas/time_entry.schema.json");
const TRAINING_SCHEMA: &str = include_str!("../schemas/training.schema.json");

/// Schema documents keyed by extractor kind
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaSet {
    documents: HashMap<ExtractorKind, Value>,
}

impl SchemaSet {
    /// The schema documents bundled with this crate
    pub fn bundled() -> Self {
        let documents = ExtractorKind::DEFAULT_ORDER
            .into_iter()
            .map(|kind| (kind, bundled_schema(kind)))
            .collect();
        Self { documents }
    }

    /// Bundled documents, overridden by any `<name>.schema.json` found in `dir`
    ///
    /// Missing files keep the bundled document. A file that exists but cannot
    /// be read, or does not hold a JSON object, is an error.
    pub fn load_dir(dir: &Path) -> Result<Self, SchemaLoadError> {
        let mut set = Self::bundled();

        for kind in ExtractorKind::DEFAULT_ORDER {
            let name = kind.schema_name();
            let path = dir.join(format!("{}.schema.json", name));
            if !path.is_file() {
                debug!(schema = name, "Using bundled schema");
                continue;
            }

            let content = std::fs::read_to_string(&path).map_err(|source| SchemaLoadError::Io {
                name: name.to_string(),
                source,
            })?;
            let document: Value =
                serde_json::from_str(&content).map_err(|e| SchemaLoadError::Malformed {
                    name: name.to_string(),
                    message: e.to_string(),
                })?;
            if !document.is_object() {
                return Err(SchemaLoadError::Malformed {
                    name: name.to_string(),
                    message: "schema document must be a JSON object".to_string(),
                });
            }

            info!(schema = name, path = %path.display(), "Loaded schema override");
            set.documents.insert(kind, document);
        }

        Ok(set)
    }

    /// Schema document for a kind
    pub fn get(&self, kind: ExtractorKind) -> &Value {
        // Every kind is populated at construction.
        &self.documents[&kind]
    }

    /// Replace the document for a kind
    pub fn insert(&mut self, kind: ExtractorKind, document: Value) {
        self.documents.insert(kind, document);
    }
}

impl Default for SchemaSet {
    fn default() -> Self {
        Self::bundled()
    }
}

/// Bundled schema document for a kind
pub fn bundled_schema(kind: ExtractorKind) -> Value {
    let source = match kind {
        ExtractorKind::Generic => GENERIC_SCHEMA,
        ExtractorKind::HackerNews => HACKERNEWS_SCHEMA,
        ExtractorKind::TimeEntry => TIME_ENTRY_SCHEMA,
        ExtractorKind::Training => TRAINING_SCHEMA,
    };
    // Bundled documents are checked by the tests below.
    serde_json::from_str(source).unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use noteshape_gatekeeper::Gatekeeper;
    use serde_json::json;

    #[test]
    fn test_bundled_documents_are_valid_schemas() {
        let set = SchemaSet::bundled();
        let gatekeeper = Gatekeeper::default();
        for kind in ExtractorKind::DEFAULT_ORDER {
            let schema = set.get(kind);
            assert!(schema.is_object(), "{} schema is not an object", kind);
            assert!(gatekeeper.check_schema(schema).is_ok(), "{} schema rejected", kind);
        }
    }

    #[test]
    fn test_load_dir_without_overrides_matches_bundled() {
        let dir = tempfile::tempdir().unwrap();
        let set = SchemaSet::load_dir(dir.path()).unwrap();
        assert_eq!(set, SchemaSet::bundled());
    }

    #[test]
    fn test_load_dir_override_replaces_one_document() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("generic_notes.schema.json"),
            r#"{"type": "object", "required": ["note_id"]}"#,
        )
        .unwrap();

        let set = SchemaSet::load_dir(dir.path()).unwrap();
        assert_eq!(
            set.get(ExtractorKind::Generic),
            &json!({"type": "object", "required": ["note_id"]})
        );
        assert_eq!(
            set.get(ExtractorKind::Training),
            &bundled_schema(ExtractorKind::Training)
        );
    }

    #[test]
    fn test_load_dir_rejects_malformed_override() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("hackernews.schema.json"), "{not json").unwrap();

        let err = SchemaSet::load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, SchemaLoadError::Malformed { ref name, .. } if name == "hackernews"));
    }

    #[test]
    fn test_load_dir_rejects_non_object_override() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("training.schema.json"), "[1, 2]").unwrap();

        assert!(matches!(
            SchemaSet::load_dir(dir.path()),
            Err(SchemaLoadError::Malformed { .. })
        ));
    }
}
