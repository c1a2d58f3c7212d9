//! Extractor registry
//!
//! Holds the extractors in registration order. The first extractor whose
//! `can_handle` accepts a note wins, so the most specific extractors must be
//! registered first and the generic catch-all last.

use crate::config::ExtractorConfig;
use crate::error::RegistryError;
use crate::generic::GenericExtractor;
use crate::hackernews::HackerNewsExtractor;
use crate::schema::SchemaSet;
use crate::time_entry::TimeEntryExtractor;
use crate::training::TrainingExtractor;
use noteshape_domain::{
    ExtractorKind, NoteExtractor, NoteRecord, SchemaValidator, StructuredRecord,
};
use noteshape_gatekeeper::Gatekeeper;
use serde_json::Value;
use tracing::{debug, info, warn};

/// Ordered set of extractors plus the validator their output must satisfy
pub struct Registry<V = Gatekeeper> {
    extractors: Vec<Box<dyn NoteExtractor>>,
    validator: V,
    schemas: SchemaSet,
}

impl Registry<Gatekeeper> {
    /// Create an empty registry validating with the default Gatekeeper
    pub fn new() -> Self {
        Self::with_validator(Gatekeeper::default(), SchemaSet::bundled())
    }

    /// Every extractor, most specific first, using the bundled schemas
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for kind in ExtractorKind::DEFAULT_ORDER {
            registry.push(kind);
        }
        registry
    }

    /// Build a registry from configuration
    ///
    /// Extractors are registered in the configured order. Schemas come from
    /// `schema_dir` when set, falling back to the bundled documents.
    pub fn from_config(config: &ExtractorConfig) -> Result<Self, RegistryError> {
        if config.extractors.is_empty() {
            return Err(RegistryError::Config(
                "extractors must list at least one extractor".to_string(),
            ));
        }

        let schemas = match &config.schema_dir {
            Some(dir) => SchemaSet::load_dir(dir)?,
            None => SchemaSet::bundled(),
        };

        let mut registry =
            Self::with_validator(Gatekeeper::new(config.validation.clone()), schemas);
        for name in &config.extractors {
            registry.register_kind(name)?;
        }

        if !config.has_fallback_last() {
            warn!("Generic extractor is not registered last; some notes may not match");
        }
        info!(extractors = ?registry.kinds(), "Registry ready");
        Ok(registry)
    }

    fn push(&mut self, kind: ExtractorKind) {
        self.extractors.push(build_extractor(kind, &self.schemas));
    }
}

impl Default for Registry<Gatekeeper> {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl<V: SchemaValidator> Registry<V> {
    /// Create an empty registry with a custom validator and schema source
    pub fn with_validator(validator: V, schemas: SchemaSet) -> Self {
        Self {
            extractors: Vec::new(),
            validator,
            schemas,
        }
    }

    /// Append an extractor
    ///
    /// # Errors
    ///
    /// `InvalidExtractor` when the extractor's schema is not an object schema
    /// or the validator rejects it as malformed.
    pub fn register(&mut self, extractor: Box<dyn NoteExtractor>) -> Result<(), RegistryError> {
        let kind = extractor.kind();
        let schema = extractor.schema();

        if !schema.is_object() {
            return Err(RegistryError::InvalidExtractor(format!(
                "{} schema is not a JSON object",
                kind
            )));
        }
        self.validator
            .check_schema(schema)
            .map_err(|e| RegistryError::InvalidExtractor(format!("{} schema: {}", kind, e)))?;

        debug!(extractor = %kind, position = self.extractors.len(), "Registered extractor");
        self.extractors.push(extractor);
        Ok(())
    }

    /// Append the built-in extractor named `name`
    pub fn register_kind(&mut self, name: &str) -> Result<ExtractorKind, RegistryError> {
        let kind = name
            .parse::<ExtractorKind>()
            .map_err(RegistryError::InvalidExtractor)?;
        self.register(build_extractor(kind, &self.schemas))?;
        Ok(kind)
    }

    /// Remove every extractor of `kind`, returning whether any was removed
    pub fn unregister(&mut self, kind: ExtractorKind) -> bool {
        let before = self.extractors.len();
        self.extractors.retain(|e| e.kind() != kind);
        before != self.extractors.len()
    }

    /// Registered kinds in registration order
    pub fn kinds(&self) -> Vec<ExtractorKind> {
        self.extractors.iter().map(|e| e.kind()).collect()
    }

    /// Remove every extractor
    pub fn clear(&mut self) {
        self.extractors.clear();
    }

    /// Number of registered extractors
    pub fn len(&self) -> usize {
        self.extractors.len()
    }

    /// Whether no extractor is registered
    pub fn is_empty(&self) -> bool {
        self.extractors.is_empty()
    }

    /// Schema of the first registered extractor of `kind`
    pub fn schema_for(&self, kind: ExtractorKind) -> Option<&Value> {
        self.extractors
            .iter()
            .find(|e| e.kind() == kind)
            .map(|e| e.schema())
    }

    /// First extractor, in registration order, that accepts the note
    pub fn select_extractor(&self, note: &NoteRecord) -> Result<&dyn NoteExtractor, RegistryError> {
        let extractor = self
            .extractors
            .iter()
            .find(|e| e.can_handle(note))
            .ok_or(RegistryError::NoMatchingExtractor)?;

        debug!(note_id = %note.id, extractor = %extractor.kind(), "Selected extractor");
        Ok(extractor.as_ref())
    }

    /// Select, extract and validate
    ///
    /// # Errors
    ///
    /// `NoMatchingExtractor` when nothing accepts the note, and
    /// `SchemaViolation` when the record fails its extractor's schema.
    pub fn parse(&self, note: &NoteRecord) -> Result<StructuredRecord, RegistryError> {
        let extractor = self.select_extractor(note)?;
        let record = extractor.extract(note);
        let value = record.to_value()?;

        if let Err(e) = self.validator.validate(&value, extractor.schema()) {
            warn!(
                note_id = %note.id,
                extractor = %extractor.kind(),
                error = %e,
                "Extracted record failed validation"
            );
            return Err(RegistryError::SchemaViolation {
                message: e.to_string(),
            });
        }

        Ok(record)
    }

    /// Parse a note given as raw JSON
    ///
    /// # Errors
    ///
    /// `InvalidInputShape` when the value is not a JSON object or a known
    /// field has the wrong type, otherwise as [`Registry::parse`].
    pub fn parse_value(&self, value: &Value) -> Result<StructuredRecord, RegistryError> {
        let note = NoteRecord::from_value(value)?;
        self.parse(&note)
    }
}

/// Instantiate the built-in extractor for `kind`
pub fn build_extractor(kind: ExtractorKind, schemas: &SchemaSet) -> Box<dyn NoteExtractor> {
    let schema = schemas.get(kind).clone();
    match kind {
        ExtractorKind::Generic => Box::new(GenericExtractor::new(schema)),
        ExtractorKind::HackerNews => Box::new(HackerNewsExtractor::new(schema)),
        ExtractorKind::TimeEntry => Box::new(TimeEntryExtractor::new(schema)),
        ExtractorKind::Training => Box::new(TrainingExtractor::new(schema)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const HN_ITEM: &str = "https://news.ycombinator.com/item?id=11111";

    #[test]
    fn test_new_registry_is_empty() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(matches!(
            registry.parse(&NoteRecord::new("t", "x")),
            Err(RegistryError::NoMatchingExtractor)
        ));
    }

    #[test]
    fn test_default_order() {
        let registry = Registry::with_defaults();
        assert_eq!(registry.kinds(), ExtractorKind::DEFAULT_ORDER.to_vec());
    }

    #[test]
    fn test_registration_order_breaks_ties() {
        let note = NoteRecord::new(HN_ITEM, "0637 Woke up\n1053 Coffee");

        let mut registry = Registry::new();
        registry.register_kind("time_entry").unwrap();
        registry.register_kind("hackernews").unwrap();
        assert_eq!(registry.select_extractor(&note).unwrap().kind(), ExtractorKind::TimeEntry);

        registry.clear();
        registry.register_kind("hackernews").unwrap();
        registry.register_kind("time_entry").unwrap();
        assert_eq!(registry.select_extractor(&note).unwrap().kind(), ExtractorKind::HackerNews);
    }

    #[test]
    fn test_register_kind_rejects_unknown_name() {
        let mut registry = Registry::new();
        let err = registry.register_kind("calendar").unwrap_err();
        assert!(matches!(err, RegistryError::InvalidExtractor(_)));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_register_rejects_bad_schema() {
        let mut registry = Registry::new();

        let err = registry
            .register(Box::new(GenericExtractor::new(json!(true))))
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidExtractor(_)));

        let err = registry
            .register(Box::new(GenericExtractor::new(json!({"type": "mapping"}))))
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidExtractor(_)));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_unregister() {
        let mut registry = Registry::with_defaults();
        assert!(registry.unregister(ExtractorKind::Training));
        assert!(!registry.unregister(ExtractorKind::Training));
        assert_eq!(
            registry.kinds(),
            vec![ExtractorKind::HackerNews, ExtractorKind::TimeEntry, ExtractorKind::Generic]
        );
    }

    #[test]
    fn test_schema_violation_reports_first_message() {
        let mut registry = Registry::new();
        registry
            .register(Box::new(GenericExtractor::new(json!({
                "type": "object",
                "required": ["summary"]
            }))))
            .unwrap();

        match registry.parse(&NoteRecord::new("t", "body")) {
            Err(RegistryError::SchemaViolation { message }) => {
                assert!(message.contains("summary"), "unexpected message: {}", message);
                assert!(message.ends_with("is a required property"), "unexpected message: {}", message);
            }
            other => panic!("expected schema violation, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_value_rejects_non_objects() {
        let registry = Registry::with_defaults();
        for value in [json!("text"), json!([1, 2]), json!(null), json!(3)] {
            assert!(matches!(
                registry.parse_value(&value),
                Err(RegistryError::InvalidInputShape(_))
            ));
        }
    }

    #[test]
    fn test_parse_value_falls_back_to_generic() {
        let registry = Registry::with_defaults();
        let record = registry
            .parse_value(&json!({"id": "n1", "title": "Shopping", "text": "\u{2610} milk"}))
            .unwrap();
        assert_eq!(record.kind(), ExtractorKind::Generic);
        assert_eq!(record.note_id(), "n1");
    }

    #[test]
    fn test_from_config_rejects_empty_list() {
        let config = ExtractorConfig {
            extractors: vec![],
            ..ExtractorConfig::default()
        };
        assert!(matches!(Registry::from_config(&config), Err(RegistryError::Config(_))));
    }

    #[test]
    fn test_from_config_uses_configured_order() {
        let registry = Registry::from_config(&ExtractorConfig::without_fallback()).unwrap();
        assert_eq!(
            registry.kinds(),
            vec![ExtractorKind::HackerNews, ExtractorKind::TimeEntry, ExtractorKind::Training]
        );
        assert!(matches!(
            registry.parse(&NoteRecord::new("plain", "nothing special")),
            Err(RegistryError::NoMatchingExtractor)
        ));
    }

    #[test]
    fn test_schema_for() {
        let registry = Registry::with_defaults();
        let schema = registry.schema_for(ExtractorKind::TimeEntry).unwrap();
        assert_eq!(schema, SchemaSet::bundled().get(ExtractorKind::TimeEntry));

        let mut registry = Registry::new();
        registry.register_kind("generic").unwrap();
        assert!(registry.schema_for(ExtractorKind::Training).is_none());
    }
}
