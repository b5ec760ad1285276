//! Deterministic document rewrite rules.
//!
//! Each rule is a pure `&str -> String` transformation over markdown text:
//! no I/O, no network, no panics. Unexpected structure (missing headings,
//! missing metadata) degrades to a documented fallback instead of erroring.
//! All rules operate on `\n`-normalized text and terminate their output
//! with exactly one trailing newline.

pub mod convert_blog;
pub mod convert_docs;
pub mod diagram;
pub mod normalize;
pub mod outline;
pub mod summarize;

use crate::frontmatter;
use regex::Regex;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

pub use convert_blog::convert_blog;
pub use convert_docs::convert_docs;
pub use diagram::insert_diagram;
pub use normalize::normalize;
pub use outline::outline;
pub use summarize::summarize;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown rewrite rule: {0}")]
pub struct UnknownRule(pub String);

/// The closed set of rewrite rules, dispatched by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteRule {
    Normalize,
    ConvertDocs,
    ConvertBlog,
    Summarize,
    Outline,
    InsertDiagram,
}

impl RewriteRule {
    pub const ALL: [RewriteRule; 6] = [
        RewriteRule::Normalize,
        RewriteRule::ConvertDocs,
        RewriteRule::ConvertBlog,
        RewriteRule::Summarize,
        RewriteRule::Outline,
        RewriteRule::InsertDiagram,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RewriteRule::Normalize => "normalize",
            RewriteRule::ConvertDocs => "convert-docs",
            RewriteRule::ConvertBlog => "convert-blog",
            RewriteRule::Summarize => "summarize",
            RewriteRule::Outline => "outline",
            RewriteRule::InsertDiagram => "insert-diagram",
        }
    }

    /// Apply this rule to raw document text.
    pub fn apply(&self, document: &str) -> String {
        match self {
            RewriteRule::Normalize => normalize(document),
            RewriteRule::ConvertDocs => convert_docs(document),
            RewriteRule::ConvertBlog => convert_blog(document),
            RewriteRule::Summarize => summarize(document),
            RewriteRule::Outline => outline(document),
            RewriteRule::InsertDiagram => insert_diagram(document),
        }
    }
}

impl FromStr for RewriteRule {
    type Err = UnknownRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normalize" => Ok(RewriteRule::Normalize),
            "convert-docs" => Ok(RewriteRule::ConvertDocs),
            "convert-blog" => Ok(RewriteRule::ConvertBlog),
            "summarize" => Ok(RewriteRule::Summarize),
            "outline" => Ok(RewriteRule::Outline),
            "insert-diagram" => Ok(RewriteRule::InsertDiagram),
            other => Err(UnknownRule(other.to_string())),
        }
    }
}

// ---- shared line-level helpers ----

static H1_REGEX: OnceLock<Regex> = OnceLock::new();
static H2_REGEX: OnceLock<Regex> = OnceLock::new();
static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();

pub(crate) fn h1_regex() -> &'static Regex {
    H1_REGEX.get_or_init(|| Regex::new(r"^#\s+(.*)$").unwrap())
}

pub(crate) fn h2_regex() -> &'static Regex {
    H2_REGEX.get_or_init(|| Regex::new(r"^##\s+(.*)$").unwrap())
}

pub(crate) fn heading_regex() -> &'static Regex {
    HEADING_REGEX.get_or_init(|| Regex::new(r"^(#{1,6})\s+(.*)$").unwrap())
}

pub(crate) fn normalize_newlines(document: &str) -> String {
    document.replace("\r\n", "\n")
}

pub(crate) fn is_h1(line: &str) -> bool {
    h1_regex().is_match(line)
}

pub(crate) fn is_h2(line: &str) -> bool {
    h2_regex().is_match(line)
}

pub(crate) fn is_heading(line: &str) -> bool {
    heading_regex().is_match(line)
}

/// Text of the first level-1 heading, if any.
pub(crate) fn extract_first_h1(document: &str) -> Option<String> {
    document.lines().find_map(|line| {
        h1_regex()
            .captures(line)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string())
    })
}

/// Remove every level-1 heading line and reinsert exactly one carrying
/// `title`, immediately after the metadata block (or at the very top when
/// no block exists).
pub(crate) fn ensure_single_h1(document: &str, title: &str) -> String {
    let without_h1: String = document
        .split('\n')
        .filter(|line| !is_h1(line))
        .collect::<Vec<_>>()
        .join("\n");

    match frontmatter::split_block(&without_h1) {
        Some((block, body)) => {
            format!("{}\n# {}\n\n{}", block, title, body.trim_start())
        }
        None => format!("# {}\n\n{}", title, without_h1.trim_start()),
    }
}

/// Index of the first non-blank line at or after `start`.
pub(crate) fn skip_blank_lines(lines: &[&str], start: usize) -> usize {
    let mut i = start;
    while i < lines.len() && lines[i].trim().is_empty() {
        i += 1;
    }
    i
}

/// Trim and terminate with exactly one newline.
pub(crate) fn finalize(document: &str) -> String {
    format!("{}\n", document.trim())
}
