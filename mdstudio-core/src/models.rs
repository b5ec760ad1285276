//! Content model structs for documents, metadata, and derived views.

use serde::{Deserialize, Serialize};

/// Presentation mode of a document.
///
/// Unrecognized raw values coerce to `Docs` during decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Docs,
    Blog,
}

impl Theme {
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "blog" => Theme::Blog,
            _ => Theme::Docs,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Docs => "docs",
            Theme::Blog => "blog",
        }
    }
}

/// Structured metadata carried in a document's leading metadata block.
///
/// Fields outside the modeled set are preserved in `extra`, in the order
/// they appeared, so re-encoding does not drop or reorder them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub theme: Theme,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub date: Option<String>,

    /// Unmodeled fields, passed through opaquely on re-encode.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<(String, String)>,
}

/// Result of decoding raw document text: metadata plus the body.
///
/// An absent metadata block yields default metadata with the whole input
/// as body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedDocument {
    pub metadata: Metadata,
    pub body: String,
}

/// Lightweight listing projection of a stored document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSummary {
    pub slug: String,
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Searchable projection of a document.
///
/// `text` is a lossy, markup-stripped rendering of the body used only for
/// substring matching, never for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchDoc {
    pub slug: String,
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub theme: Theme,
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    pub text: String,
}

/// A single file produced by a site export. Transient, never persisted by
/// the core; callers decide where the sequence lands.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportFile {
    pub path: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_coercion() {
        assert_eq!(Theme::from_str("blog"), Theme::Blog);
        assert_eq!(Theme::from_str("Blog"), Theme::Blog);
        assert_eq!(Theme::from_str("docs"), Theme::Docs);
        assert_eq!(Theme::from_str("wiki"), Theme::Docs);
        assert_eq!(Theme::from_str(""), Theme::Docs);
    }

    #[test]
    fn test_theme_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Blog).unwrap(), "\"blog\"");
        assert_eq!(serde_json::to_string(&Theme::Docs).unwrap(), "\"docs\"");
    }

    #[test]
    fn test_default_metadata() {
        let meta = Metadata::default();
        assert_eq!(meta.theme, Theme::Docs);
        assert!(meta.title.is_none());
        assert!(meta.tags.is_empty());
        assert!(meta.extra.is_empty());
    }
}
