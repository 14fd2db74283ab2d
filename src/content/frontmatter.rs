//! Front-matter parsing
//!
//! A front-matter block is a run of `key: value` lines fenced by `---` lines
//! at the very start of a document. Parsing never fails: anything that does
//! not look like a complete block is treated as plain body text.

use chrono::NaiveDateTime;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

use crate::helpers::parse_date;

/// Delimiter line that opens and closes a front-matter block
const DELIMITER: &str = "---";

/// Flat key/value metadata from a front-matter block, in parse order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrontMatter {
    fields: IndexMap<String, String>,
}

impl FrontMatter {
    /// Create an empty metadata map
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the text between the delimiters into key/value pairs
    ///
    /// Each line is split at its first colon only, so values such as URLs
    /// keep their own colons. Lines without a colon, or with nothing before
    /// it, are skipped. A repeated key keeps its first position and takes
    /// the last value.
    pub fn decode(block: &str) -> Self {
        let mut fields = IndexMap::new();

        for line in block.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            fields.insert(key.to_string(), unquote(value.trim()).to_string());
        }

        Self { fields }
    }

    /// Look up a value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Set a value, replacing any previous value for the key in place
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over the pairs in parse order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The `date` field as a calendar date-time, if present and parseable
    pub fn date(&self) -> Option<NaiveDateTime> {
        self.get("date").and_then(parse_date)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FrontMatter {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fm = FrontMatter::new();
        for (key, value) in iter {
            fm.insert(key, value);
        }
        fm
    }
}

/// A document split into its front-matter and body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDocument {
    pub metadata: FrontMatter,
    pub body: String,
}

impl ParsedDocument {
    /// Split `raw` into metadata and body
    ///
    /// Documents that do not start with `---`, or whose block is never
    /// closed, come back unchanged as body with empty metadata.
    pub fn parse(raw: &str) -> Self {
        let Some(after_open) = raw.strip_prefix(DELIMITER) else {
            return Self::plain(raw);
        };

        let Some((block, rest)) = split_at_closing(after_open) else {
            tracing::debug!("Front-matter block is never closed, treating document as body");
            return Self::plain(raw);
        };

        Self {
            metadata: FrontMatter::decode(block.trim()),
            body: strip_blank_line(rest).to_string(),
        }
    }

    fn plain(raw: &str) -> Self {
        Self {
            metadata: FrontMatter::new(),
            body: raw.to_string(),
        }
    }
}

/// Writes the document back out as `---` fenced `key: value` lines and body
impl fmt::Display for ParsedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", DELIMITER)?;
        for (key, value) in self.metadata.iter() {
            writeln!(f, "{}: {}", key, value)?;
        }
        writeln!(f, "{}", DELIMITER)?;
        f.write_str(&self.body)
    }
}

/// Split `raw` into metadata and body. See [`ParsedDocument::parse`].
pub fn parse(raw: &str) -> ParsedDocument {
    ParsedDocument::parse(raw)
}

/// Find the closing delimiter line in the text following the opening `---`
///
/// Returns the block text before the closing line and everything after it.
fn split_at_closing(text: &str) -> Option<(&str, &str)> {
    let mut offset = 0;

    for (index, line) in text.split_inclusive('\n').enumerate() {
        let start = offset;
        offset += line.len();

        // Segment 0 is the tail of the opening delimiter's own line.
        if index > 0 && line.trim_end() == DELIMITER {
            return Some((&text[..start], &text[offset..]));
        }
    }

    None
}

/// Drop a single blank line directly after the closing delimiter
///
/// A line holding only whitespace counts as blank.
fn strip_blank_line(body: &str) -> &str {
    match body.split_once('\n') {
        Some((line, rest)) if line.trim().is_empty() => rest,
        _ => body,
    }
}

/// Strip one layer of matching single or double quotes
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
