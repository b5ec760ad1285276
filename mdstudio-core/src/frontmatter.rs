//! Metadata-block parsing and rewriting.
//!
//! Documents may begin with a delimited metadata block:
//!
//! ```text
//! ---
//! title: Getting Started
//! theme: docs
//! tags: [guide, intro]
//! ---
//! body...
//! ```
//!
//! The codec is deliberately tolerant: it recognizes a fixed field set,
//! passes every other `key: value` line through untouched, and never fails.
//! A missing terminating delimiter means "no block" and the whole input is
//! body.

use crate::models::{Metadata, ParsedDocument, Theme};
use regex::Regex;
use std::sync::OnceLock;

static FIELD_REGEX: OnceLock<Regex> = OnceLock::new();

fn field_regex() -> &'static Regex {
    FIELD_REGEX.get_or_init(|| {
        Regex::new(r"^\s*([A-Za-z0-9_][A-Za-z0-9_-]*)\s*:\s*(.*)$").unwrap()
    })
}

/// The raw metadata block of a document, located but not yet interpreted.
struct RawBlock<'a> {
    /// Field lines between the delimiters, verbatim (no newlines).
    lines: Vec<&'a str>,
    /// Byte offset where the body begins, just past the closing delimiter.
    body_start: usize,
}

fn is_delimiter(line: &str) -> bool {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);
    line == "---"
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Locate the leading metadata block, if any.
///
/// The block is recognized only when the document starts with a `---` line
/// and a second `---` line terminates it. Anything else, including a lone
/// opening delimiter, is body.
fn find_block(raw: &str) -> Option<RawBlock<'_>> {
    let mut parts = raw.split_inclusive('\n');
    let first = parts.next()?;
    if !first.ends_with('\n') || !is_delimiter(first) {
        return None;
    }

    let mut offset = first.len();
    let mut lines = Vec::new();
    for part in parts {
        if is_delimiter(part) {
            return Some(RawBlock {
                lines,
                body_start: offset + part.len(),
            });
        }
        lines.push(strip_line_ending(part));
        offset += part.len();
    }

    None
}

fn strip_quotes(s: &str) -> &str {
    if s.len() >= 2
        && ((s.starts_with('"') && s.ends_with('"'))
            || (s.starts_with('\'') && s.ends_with('\'')))
    {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

/// Parse a bracketed inline list: `[a, b, "c"]`.
///
/// Anything that is not bracketed yields no tags, matching the original
/// behavior of discarding non-list values.
fn parse_tag_list(value: &str) -> Vec<String> {
    let Some(inner) = value
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
    else {
        return Vec::new();
    };

    inner
        .split(',')
        .map(|t| strip_quotes(t.trim()).to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Split off the raw metadata block, returning `(block, body)` where
/// `block` spans both delimiter lines verbatim (including the trailing
/// newline of the closing one).
pub fn split_block(raw: &str) -> Option<(&str, &str)> {
    let block = find_block(raw)?;
    Some((&raw[..block.body_start], &raw[block.body_start..]))
}

/// Decode raw document text into metadata plus body.
///
/// Never fails; malformed leading text degrades to "no metadata block".
///
/// # Example
///
/// ```
/// use mdstudio_core::frontmatter::decode;
///
/// let doc = decode("---\ntitle: Hi\n---\nBody.\n");
/// assert_eq!(doc.metadata.title.as_deref(), Some("Hi"));
/// assert_eq!(doc.body, "Body.\n");
/// ```
pub fn decode(raw: &str) -> ParsedDocument {
    let Some(block) = find_block(raw) else {
        return ParsedDocument {
            metadata: Metadata::default(),
            body: raw.to_string(),
        };
    };

    let mut metadata = Metadata::default();
    let mut seen_theme = false;
    let mut seen_tags = false;

    for line in &block.lines {
        let Some(caps) = field_regex().captures(line) else {
            continue;
        };
        let key = caps.get(1).map(|m| m.as_str()).unwrap_or("");
        let value = caps.get(2).map(|m| m.as_str().trim()).unwrap_or("");

        // First occurrence wins for modeled fields; duplicates are dropped
        // rather than erroring.
        match key {
            "title" if metadata.title.is_none() => {
                metadata.title = Some(strip_quotes(value).to_string());
            }
            "description" if metadata.description.is_none() => {
                metadata.description = Some(strip_quotes(value).to_string());
            }
            "theme" if !seen_theme => {
                metadata.theme = Theme::from_str(strip_quotes(value));
                seen_theme = true;
            }
            "tags" if !seen_tags => {
                metadata.tags = parse_tag_list(value);
                seen_tags = true;
            }
            "date" if metadata.date.is_none() => {
                metadata.date = Some(strip_quotes(value).to_string());
            }
            "title" | "description" | "theme" | "tags" | "date" => {}
            _ => {
                metadata.extra.push((key.to_string(), value.to_string()));
            }
        }
    }

    ParsedDocument {
        metadata,
        body: raw[block.body_start..].to_string(),
    }
}

/// Encode metadata and body back into raw document text.
///
/// Modeled fields emit in canonical order; pass-through fields follow in
/// the order they were decoded.
pub fn encode(metadata: &Metadata, body: &str) -> String {
    let mut out = String::from("---\n");

    if let Some(title) = &metadata.title {
        out.push_str(&format!("title: {}\n", title));
    }
    if let Some(description) = &metadata.description {
        out.push_str(&format!("description: {}\n", description));
    }
    out.push_str(&format!("theme: {}\n", metadata.theme.as_str()));
    if !metadata.tags.is_empty() {
        out.push_str(&format!("tags: [{}]\n", metadata.tags.join(", ")));
    }
    if let Some(date) = &metadata.date {
        out.push_str(&format!("date: {}\n", date));
    }
    for (key, value) in &metadata.extra {
        out.push_str(&format!("{}: {}\n", key, value));
    }

    out.push_str("---\n");
    out.push_str(body);
    out
}

/// Upsert a single field into the metadata block, leaving every other line
/// untouched.
///
/// Replaces the first matching `key:` line in place, or prepends the field
/// at the top of the block. When no block exists, a new one is synthesized
/// holding only that field.
pub fn set_field(raw: &str, key: &str, value: &str) -> String {
    let Some(block) = find_block(raw) else {
        return format!("---\n{}: {}\n---\n\n{}", key, value, raw);
    };

    let mut lines: Vec<String> = block.lines.iter().map(|l| l.to_string()).collect();
    let mut replaced = false;

    for line in lines.iter_mut() {
        let is_match = field_regex()
            .captures(line)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str() == key)
            .unwrap_or(false);
        if is_match {
            *line = format!("{}: {}", key, value);
            replaced = true;
            break;
        }
    }

    if !replaced {
        lines.insert(0, format!("{}: {}", key, value));
    }

    let mut out = String::from("---\n");
    for line in &lines {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str("---\n");
    out.push_str(&raw[block.body_start..]);
    out
}

/// Convenience: decode and return the first value for `key`, whether
/// modeled or pass-through.
pub fn get_field(raw: &str, key: &str) -> Option<String> {
    let doc = decode(raw);
    match key {
        "title" => doc.metadata.title,
        "description" => doc.metadata.description,
        "theme" => Some(doc.metadata.theme.as_str().to_string()),
        "date" => doc.metadata.date,
        _ => doc
            .metadata
            .extra
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone()),
    }
}
