//! Slug-addressed document storage.
//!
//! Documents live as flat `<content>/<slug>.md` files. The store is the
//! source of truth for raw text; everything else (metadata, search docs,
//! export files) is recomputed on demand. There is no locking: concurrent
//! writers to the same slug race with last-write-wins, and listings that
//! re-read entries tolerate files vanishing underneath them.

use crate::config::Config;
use crate::frontmatter;
use crate::models::{PageSummary, ParsedDocument};
use crate::slug::{sanitize_slug, SlugError};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Slug(#[from] SlugError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Durable document collection keyed by sanitized slug.
pub struct DocumentStore {
    content_dir: PathBuf,
}

impl DocumentStore {
    pub fn new(config: &Config) -> Self {
        Self {
            content_dir: config.content_dir(),
        }
    }

    pub fn content_dir(&self) -> &PathBuf {
        &self.content_dir
    }

    fn path_for(&self, safe_slug: &str) -> PathBuf {
        self.content_dir.join(format!("{}.md", safe_slug))
    }

    /// List every stored document, sorted case-insensitively by title then
    /// slug. A missing content directory yields an empty list; entries that
    /// cannot be read at this moment are skipped.
    pub fn list(&self) -> Vec<PageSummary> {
        if !self.content_dir.is_dir() {
            return Vec::new();
        }

        let mut pages = Vec::new();
        for entry in WalkDir::new(&self.content_dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            let path = entry.path();
            if path.extension().map(|e| e != "md").unwrap_or(true) {
                continue;
            }
            let Some(slug) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let raw = match fs::read_to_string(path) {
                Ok(raw) => raw,
                Err(err) => {
                    tracing::warn!("Skipping unreadable document {:?}: {}", path, err);
                    continue;
                }
            };

            let doc = frontmatter::decode(&raw);
            pages.push(PageSummary {
                slug: slug.to_string(),
                title: doc.metadata.title.unwrap_or_else(|| slug.to_string()),
                description: doc.metadata.description,
            });
        }

        pages.sort_by(|a, b| {
            (a.title.to_lowercase(), a.slug.to_lowercase())
                .cmp(&(b.title.to_lowercase(), b.slug.to_lowercase()))
        });

        pages
    }

    /// Read the raw text of a document. `None` for invalid slugs and
    /// missing entries alike.
    pub fn read_raw(&self, slug: &str) -> Option<String> {
        let safe_slug = sanitize_slug(slug).ok()?;
        fs::read_to_string(self.path_for(&safe_slug)).ok()
    }

    /// Read and decode a document. Returns the sanitized slug alongside
    /// the parse result.
    pub fn read_parsed(&self, slug: &str) -> Option<(String, ParsedDocument)> {
        let safe_slug = sanitize_slug(slug).ok()?;
        let raw = fs::read_to_string(self.path_for(&safe_slug)).ok()?;
        Some((safe_slug, frontmatter::decode(&raw)))
    }

    /// Write (create or fully replace) a document. Returns the sanitized
    /// slug actually used.
    pub fn write(&self, slug: &str, raw: &str) -> Result<String, StoreError> {
        let safe_slug = sanitize_slug(slug)?;
        fs::create_dir_all(&self.content_dir)?;
        fs::write(self.path_for(&safe_slug), raw)?;
        tracing::debug!("Wrote document '{}'", safe_slug);
        Ok(safe_slug)
    }

    /// Delete a document. `false` for invalid slugs and missing entries;
    /// never an error.
    pub fn delete(&self, slug: &str) -> bool {
        let Ok(safe_slug) = sanitize_slug(slug) else {
            return false;
        };
        match fs::remove_file(self.path_for(&safe_slug)) {
            Ok(()) => {
                tracing::debug!("Deleted document '{}'", safe_slug);
                true
            }
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Theme;
    use tempfile::tempdir;

    fn store_in(dir: &std::path::Path) -> DocumentStore {
        DocumentStore::new(&Config::with_content_dir(dir))
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());

        let slug = store
            .write("getting-started", "---\ntitle: Hello\n---\nBody.\n")
            .unwrap();
        assert_eq!(slug, "getting-started");

        let raw = store.read_raw("getting-started").unwrap();
        assert_eq!(raw, "---\ntitle: Hello\n---\nBody.\n");

        let (safe, doc) = store.read_parsed("getting-started").unwrap();
        assert_eq!(safe, "getting-started");
        assert_eq!(doc.metadata.title.as_deref(), Some("Hello"));
        assert_eq!(doc.metadata.theme, Theme::Docs);
        assert_eq!(doc.body, "Body.\n");
    }

    #[test]
    fn test_write_sanitizes_slug() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());

        let slug = store.write("../evil slug!", "x\n").unwrap();
        assert_eq!(slug, "evilslug");
        assert!(dir.path().join("evilslug.md").exists());
        assert!(store.read_raw("evilslug").is_some());
    }

    #[test]
    fn test_write_invalid_slug_fails_without_effect() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());

        assert!(matches!(
            store.write("***", "x"),
            Err(StoreError::Slug(SlugError::InvalidSlug))
        ));
        assert!(matches!(
            store.write("", "x"),
            Err(StoreError::Slug(SlugError::InvalidSlug))
        ));
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_write_overwrites_fully() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());

        store.write("page", "first\n").unwrap();
        store.write("page", "second\n").unwrap();
        assert_eq!(store.read_raw("page").unwrap(), "second\n");
    }

    #[test]
    fn test_delete() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());

        store.write("doomed", "x\n").unwrap();
        assert!(store.delete("doomed"));
        assert!(!store.delete("doomed"));
        assert!(!store.delete("***"));
        assert!(store.read_raw("doomed").is_none());
    }

    #[test]
    fn test_list_sorted_by_title_then_slug_case_insensitive() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());

        store.write("zeta", "---\ntitle: alpha\n---\n").unwrap();
        store.write("beta", "---\ntitle: Alpha\n---\n").unwrap();
        store.write("untitled", "no metadata\n").unwrap();
        store.write("gamma", "---\ntitle: Beta\n---\n").unwrap();

        let slugs: Vec<_> = store.list().into_iter().map(|p| p.slug).collect();
        // "alpha"/"Alpha" tie on title, broken by slug; "untitled" falls
        // back to its slug as title.
        assert_eq!(slugs, vec!["beta", "zeta", "gamma", "untitled"]);
    }

    #[test]
    fn test_list_missing_dir_is_empty() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir.path().join("nowhere"));
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_list_ignores_non_markdown_files() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());

        store.write("real", "---\ntitle: Real\n---\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "nope").unwrap();

        let pages = store.list();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].slug, "real");
    }

    #[test]
    fn test_read_invalid_slug_is_none() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());
        assert!(store.read_raw("***").is_none());
        assert!(store.read_parsed("").is_none());
    }
}
