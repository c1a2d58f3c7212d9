//! Static pattern tables shared by the extractors
//!
//! Iteration order of the tables is significant: the first entry that
//! matches wins.

use regex::Regex;
use std::sync::LazyLock;

/// Unchecked checkbox glyph
pub const UNCHECKED_BOX: char = '\u{2610}';

/// Checked checkbox glyph
pub const CHECKED_BOX: char = '\u{2611}';

/// Label marking a note as a Hacker News bookmark
pub const DOWNLOAD_HN_LABEL: &str = "Download-HN";

/// Exercise abbreviations and their full names, in declaration order
pub const EXERCISE_TABLE: [(&str, &str); 10] = [
    ("Bp", "Bench Press"),
    ("Mr", "Machine Row"),
    ("Ms", "Machine Squat"),
    ("Sq", "Squat"),
    ("Dl", "Deadlift"),
    ("Pu", "Pull-up"),
    ("Dip", "Dip"),
    ("Row", "Row"),
    ("Curl", "Curl"),
    ("Press", "Press"),
];

/// `http(s)://` or `www.` up to whitespace, a quote or a closing bracket
pub static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"https?://[^\s<>"')}\]]+|www\.[^\s<>"')}\]]+"#).expect("valid url regex")
});

/// A checkbox glyph followed by item text
pub static CHECKBOX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([\u{2610}\u{2611}])\s*(.+)$").expect("valid checkbox regex")
});

/// Hacker News item URL, capturing the item id
pub static HN_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://news\.ycombinator\.com/item\?id=([0-9]+)").expect("valid hn url regex")
});

/// `#tag`, capturing the tag
pub static HASHTAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#(\w+)").expect("valid hashtag regex"));

/// Optional checkbox, a 3 or 4 digit time code, then the activity
pub static TIME_CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[\u{2610}\u{2611}]?\s*([0-9]{3,4})\s+(.+)$").expect("valid time code regex")
});

/// `sets x reps x weight`, with `x` or `×` and optional decimal weight
pub static SET_TRIPLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+)\s*[x×]\s*([0-9]+)\s*[x×]\s*([0-9]+(?:\.[0-9]+)?)")
        .expect("valid set triple regex")
});

/// A full date-time with seconds, separated by `T` or whitespace
pub static EMBEDDED_TIMESTAMP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{4}-[0-9]{2}-[0-9]{2}[T\s][0-9]{2}:[0-9]{2}:[0-9]{2})")
        .expect("valid timestamp regex")
});

/// One compiled, word-bounded, case-insensitive matcher per table entry
pub static EXERCISE_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    EXERCISE_TABLE
        .iter()
        .map(|(abbr, _)| {
            Regex::new(&format!(r"(?i)\b{}\b", regex::escape(abbr))).expect("valid exercise regex")
        })
        .collect()
});
