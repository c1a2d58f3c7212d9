//! Catch-all extractor: links, checklist items and free text

use crate::patterns::{CHECKBOX_RE, CHECKED_BOX, URL_RE};
use crate::schema::bundled_schema;
use noteshape_domain::{
    Checkbox, ExtractorKind, GenericNote, NoteExtractor, NoteRecord, StructuredRecord,
};
use serde_json::Value;

/// Extractor for any note; register it last
#[derive(Debug, Clone)]
pub struct GenericExtractor {
    schema: Value,
}

impl GenericExtractor {
    /// Create an extractor validated against `schema`
    pub fn new(schema: Value) -> Self {
        Self { schema }
    }

    /// Extract the generic record
    pub fn extract_note(&self, note: &NoteRecord) -> GenericNote {
        let mut checkboxes = Vec::new();
        let mut rest = Vec::new();

        for line in note.text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            match CHECKBOX_RE.captures(line) {
                Some(caps) => checkboxes.push(Checkbox {
                    checked: caps[1].starts_with(CHECKED_BOX),
                    text: caps[2].trim().to_string(),
                }),
                None => rest.push(line.to_string()),
            }
        }

        GenericNote {
            note_id: note.id.clone(),
            title: note.title.clone(),
            links: unique_links(&note.text),
            checkboxes,
            rest,
        }
    }
}

impl Default for GenericExtractor {
    fn default() -> Self {
        Self::new(bundled_schema(ExtractorKind::Generic))
    }
}

impl NoteExtractor for GenericExtractor {
    fn kind(&self) -> ExtractorKind {
        ExtractorKind::Generic
    }

    /// Every note record is mapping-shaped once parsed
    fn can_handle(&self, _note: &NoteRecord) -> bool {
        true
    }

    fn extract(&self, note: &NoteRecord) -> StructuredRecord {
        self.extract_note(note).into()
    }

    fn schema(&self) -> &Value {
        &self.schema
    }
}

/// URLs in first-seen order, without duplicates
fn unique_links(text: &str) -> Vec<String> {
    let mut links: Vec<String> = Vec::new();
    for found in URL_RE.find_iter(text) {
        if !links.iter().any(|l| l == found.as_str()) {
            links.push(found.as_str().to_string());
        }
    }
    links
}
