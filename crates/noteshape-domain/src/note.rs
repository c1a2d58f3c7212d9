//! Note module - the raw input record

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Errors raised while reading a raw note
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NoteError {
    /// The top-level value is not a key/value mapping
    #[error("note must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    /// A known field holds a value of the wrong type
    #[error("malformed note: {0}")]
    Malformed(String),
}

/// Creation and edit timestamps as exported by the note-taking tool
///
/// Kept as raw strings; parsing is best-effort and happens in the extractors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamps {
    /// Creation timestamp
    #[serde(default, deserialize_with = "null_as_default")]
    pub created: String,

    /// Last edit timestamp
    #[serde(default, deserialize_with = "null_as_default")]
    pub edited: String,
}

/// A raw note captured from the note-taking tool
///
/// Every field is optional on input and defaults to empty. Unknown keys
/// (archive flags, attachment lists, source URLs) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoteRecord {
    /// Note identifier
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,

    /// Note title
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    /// Body text
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,

    /// Labels, kept as raw JSON values (strings or anything else)
    #[serde(default, deserialize_with = "null_as_default")]
    pub labels: Vec<Value>,

    /// Creation and edit timestamps
    #[serde(default, deserialize_with = "null_as_default")]
    pub timestamps: Timestamps,
}

impl NoteRecord {
    /// Create a note with only a title and body text
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            ..Self::default()
        }
    }

    /// Set the note identifier
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the labels from plain strings
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(|l| Value::String(l.into())).collect();
        self
    }

    /// Set the creation and edit timestamps
    pub fn with_timestamps(mut self, created: impl Into<String>, edited: impl Into<String>) -> Self {
        self.timestamps = Timestamps {
            created: created.into(),
            edited: edited.into(),
        };
        self
    }

    /// Read a note from an arbitrary JSON value
    ///
    /// # Errors
    ///
    /// `NoteError::NotAnObject` when the value is not a JSON object, and
    /// `NoteError::Malformed` when a known field has the wrong type.
    ///
    /// # Examples
    ///
    /// ```
    /// use noteshape_domain::NoteRecord;
    /// use serde_json::json;
    ///
    /// let note = NoteRecord::from_value(&json!({"title": "Groceries", "text": null})).unwrap();
    /// assert_eq!(note.title, "Groceries");
    /// assert_eq!(note.text, "");
    ///
    /// assert!(NoteRecord::from_value(&json!(["not", "a", "note"])).is_err());
    /// ```
    pub fn from_value(value: &Value) -> Result<Self, NoteError> {
        if !value.is_object() {
            return Err(NoteError::NotAnObject(json_type_name(value)));
        }
        NoteRecord::deserialize(value).map_err(|e| NoteError::Malformed(e.to_string()))
    }

    /// Labels as strings
    ///
    /// JSON strings are kept verbatim. Anything else is rendered the way the
    /// note exporter's own tooling prints it: `True`, `None`, `[1, 'a']`,
    /// `{'name': 'tech'}`.
    pub fn label_strings(&self) -> Vec<String> {
        self.labels
            .iter()
            .map(|label| match label {
                Value::String(s) => s.clone(),
                other => {
                    let mut out = String::new();
                    write_repr(other, &mut out);
                    out
                }
            })
            .collect()
    }

    /// Creation timestamp (empty when absent)
    pub fn created(&self) -> &str {
        &self.timestamps.created
    }

    /// Last edit timestamp (empty when absent)
    pub fn edited(&self) -> &str {
        &self.timestamps.edited
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn write_repr(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("None"),
        Value::Bool(true) => out.push_str("True"),
        Value::Bool(false) => out.push_str("False"),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => out.push_str(&i.to_string()),
            (_, Some(u), _) => out.push_str(&u.to_string()),
            (_, _, Some(f)) => out.push_str(&float_repr(f)),
            _ => out.push_str(&n.to_string()),
        },
        Value::String(s) => write_str_repr(s, out),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_repr(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_str_repr(key, out);
                out.push_str(": ");
                write_repr(item, out);
            }
            out.push('}');
        }
    }
}

/// Shortest round-trip float text with a signed, two-digit exponent
fn float_repr(f: f64) -> String {
    if !f.is_finite() {
        return match (f.is_nan(), f.is_sign_negative()) {
            (true, _) => "nan".to_string(),
            (false, true) => "-inf".to_string(),
            (false, false) => "inf".to_string(),
        };
    }

    // Debug switches to exponent form below 1e-4 and from 1e16 upwards.
    let text = format!("{:?}", f);
    match text.split_once('e') {
        None => text,
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
    }
}

fn write_str_repr(s: &str, out: &mut String) {
    let quote = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 || c == '\u{7f}' => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push(quote);
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
