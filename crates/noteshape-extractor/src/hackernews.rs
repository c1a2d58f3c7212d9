//! Hacker News bookmark extractor

use crate::patterns::{DOWNLOAD_HN_LABEL, HASHTAG_RE, HN_URL_RE};
use crate::schema::bundled_schema;
use noteshape_domain::{
    ExtractorKind, HnLink, HnParsedNote, NoteExtractor, NoteRecord, StructuredRecord,
};
use serde_json::Value;

/// Extractor for notes that bookmark Hacker News items
///
/// A note qualifies when it carries the `Download-HN` label or links to an
/// item from its title or body.
#[derive(Debug, Clone)]
pub struct HackerNewsExtractor {
    schema: Value,
}

impl HackerNewsExtractor {
    /// Create an extractor validated against `schema`
    pub fn new(schema: Value) -> Self {
        Self { schema }
    }

    /// Extract the bookmark record
    pub fn extract_note(&self, note: &NoteRecord) -> HnParsedNote {
        let hn_links: Vec<HnLink> = item_links(&note.title)
            .chain(item_links(&note.text))
            .collect();

        let mut labels = note.label_strings();
        labels.extend(HASHTAG_RE.captures_iter(&note.text).map(|c| c[1].to_string()));

        let (url, item_id) = hn_links
            .first()
            .map(|link| (link.url.clone(), link.item_id.clone()))
            .unwrap_or_default();

        HnParsedNote {
            note_id: note.id.clone(),
            title: note.title.clone(),
            url,
            item_id,
            labels,
            description: note.text.clone(),
            hn_links,
        }
    }
}

impl Default for HackerNewsExtractor {
    fn default() -> Self {
        Self::new(bundled_schema(ExtractorKind::HackerNews))
    }
}

impl NoteExtractor for HackerNewsExtractor {
    fn kind(&self) -> ExtractorKind {
        ExtractorKind::HackerNews
    }

    fn can_handle(&self, note: &NoteRecord) -> bool {
        note.label_strings().iter().any(|l| l == DOWNLOAD_HN_LABEL)
            || HN_URL_RE.is_match(&note.text)
            || HN_URL_RE.is_match(&note.title)
    }

    fn extract(&self, note: &NoteRecord) -> StructuredRecord {
        self.extract_note(note).into()
    }

    fn schema(&self) -> &Value {
        &self.schema
    }
}

fn item_links(text: &str) -> impl Iterator<Item = HnLink> + '_ {
    HN_URL_RE.captures_iter(text).map(|caps| HnLink {
        url: caps[0].to_string(),
        item_id: caps[1].to_string(),
    })
}
