//! Kind module - the closed set of note shapes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of extractor, one per recognized note shape
///
/// The set is closed: every structured record carries exactly one of these.
/// - Generic: catch-all for any note (links, checkboxes, free text)
/// - HackerNews: shared Hacker News item links
/// - TimeEntry: timestamped activity logs ("0637 Woke up")
/// - Training: workout logs ("Bp 3x8x100")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractorKind {
    /// Fallback shape for any mapping-shaped note
    Generic,

    /// Hacker News bookmark
    #[serde(rename = "hackernews")]
    HackerNews,

    /// Time-coded activity log
    TimeEntry,

    /// Workout log
    Training,
}

impl ExtractorKind {
    /// All kinds, in the default registration order (catch-all last)
    pub const DEFAULT_ORDER: [ExtractorKind; 4] = [
        ExtractorKind::HackerNews,
        ExtractorKind::TimeEntry,
        ExtractorKind::Training,
        ExtractorKind::Generic,
    ];

    /// Get the kind name as used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractorKind::Generic => "generic",
            ExtractorKind::HackerNews => "hackernews",
            ExtractorKind::TimeEntry => "time_entry",
            ExtractorKind::Training => "training",
        }
    }

    /// Name of the schema document this kind validates against
    pub fn schema_name(&self) -> &'static str {
        match self {
            ExtractorKind::Generic => "generic_notes",
            ExtractorKind::HackerNews => "hackernews",
            ExtractorKind::TimeEntry => "time_entry",
            ExtractorKind::Training => "training",
        }
    }

    /// Parse a kind from its configuration name
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "generic" | "generic_notes" => Some(ExtractorKind::Generic),
            "hackernews" | "hacker_news" | "hn" => Some(ExtractorKind::HackerNews),
            "time_entry" | "timeentry" => Some(ExtractorKind::TimeEntry),
            "training" | "workout" => Some(ExtractorKind::Training),
            _ => None,
        }
    }
}

impl fmt::Display for ExtractorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ExtractorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unknown extractor kind: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_config_names() {
        for kind in ExtractorKind::DEFAULT_ORDER {
            assert_eq!(ExtractorKind::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_parse_aliases_and_case() {
        assert_eq!(ExtractorKind::parse("HN"), Some(ExtractorKind::HackerNews));
        assert_eq!(ExtractorKind::parse(" Workout "), Some(ExtractorKind::Training));
        assert!("calendar".parse::<ExtractorKind>().is_err());
    }

    #[test]
    fn test_default_order_ends_with_catch_all() {
        assert_eq!(ExtractorKind::DEFAULT_ORDER.last(), Some(&ExtractorKind::Generic));
    }

    #[test]
    fn test_serde_names_match_config_names() {
        let json = serde_json::to_string(&ExtractorKind::TimeEntry).unwrap();
        assert_eq!(json, "\"time_entry\"");
        let kind: ExtractorKind = serde_json::from_str("\"hackernews\"").unwrap();
        assert_eq!(kind, ExtractorKind::HackerNews);
    }
}
