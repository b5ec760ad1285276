//! The "improve writing" rule: whitespace and layout cleanup.

use super::{is_heading, normalize_newlines};
use regex::Regex;
use std::sync::OnceLock;

static INDENTED_FENCE_REGEX: OnceLock<Regex> = OnceLock::new();
static BULLET_SPACING_REGEX: OnceLock<Regex> = OnceLock::new();
static NUMBERED_SPACING_REGEX: OnceLock<Regex> = OnceLock::new();

fn indented_fence_regex() -> &'static Regex {
    INDENTED_FENCE_REGEX.get_or_init(|| Regex::new(r"^\s+(```.*)$").unwrap())
}

fn bullet_spacing_regex() -> &'static Regex {
    BULLET_SPACING_REGEX.get_or_init(|| Regex::new(r"^(\s*[-*])\s{2,}(.*)$").unwrap())
}

fn numbered_spacing_regex() -> &'static Regex {
    NUMBERED_SPACING_REGEX.get_or_init(|| Regex::new(r"^(\s*\d+\.)\s{2,}(.*)$").unwrap())
}

/// Tidy a document without changing its content:
///
/// - trim trailing whitespace on every line
/// - pull accidentally indented code-fence markers back to column 0
/// - ensure exactly one blank line follows every heading
/// - collapse 3+ consecutive blank lines to exactly 2
/// - collapse extra spaces after `-`, `*`, and `1.` list markers
pub fn normalize(document: &str) -> String {
    let s = normalize_newlines(document);

    let cleaned: Vec<String> = s
        .split('\n')
        .map(|line| {
            let mut line = line.trim_end().to_string();

            if let Some(caps) = indented_fence_regex().captures(&line) {
                line = caps[1].to_string();
            }
            if let Some(caps) = bullet_spacing_regex().captures(&line) {
                line = format!("{} {}", &caps[1], &caps[2]);
            }
            if let Some(caps) = numbered_spacing_regex().captures(&line) {
                line = format!("{} {}", &caps[1], &caps[2]);
            }

            line
        })
        .collect();

    // Second pass: exactly one blank line after headings, then cap blank
    // runs at 2.
    let mut out: Vec<String> = Vec::with_capacity(cleaned.len());
    let mut i = 0;
    while i < cleaned.len() {
        let line = &cleaned[i];
        out.push(line.clone());
        if is_heading(line) {
            let mut next = i + 1;
            while next < cleaned.len() && cleaned[next].is_empty() {
                next += 1;
            }
            if next < cleaned.len() {
                out.push(String::new());
            }
            i = next;
            continue;
        }
        i += 1;
    }

    let mut capped: Vec<String> = Vec::with_capacity(out.len());
    let mut blanks = 0usize;
    for line in out {
        if line.is_empty() {
            blanks += 1;
            if blanks > 2 {
                continue;
            }
        } else {
            blanks = 0;
        }
        capped.push(line);
    }

    format!("{}\n", capped.join("\n").trim())
}
