//! Search index built from the document store.
//!
//! Produces a flattened, lossy projection of every stored document,
//! suitable for substring matching. The index is best-effort over a
//! possibly concurrently mutated store: a document that disappears
//! between listing and re-reading is dropped, never an error.

use crate::frontmatter;
use crate::models::SearchDoc;
use crate::store::DocumentStore;
use regex::Regex;
use std::sync::OnceLock;

static FENCED_CODE_REGEX: OnceLock<Regex> = OnceLock::new();

fn fenced_code_regex() -> &'static Regex {
    FENCED_CODE_REGEX.get_or_init(|| Regex::new(r"(?s)```.*?```").unwrap())
}

/// Build the search index, in the same order as `DocumentStore::list`.
pub fn build_search_index(store: &DocumentStore) -> Vec<SearchDoc> {
    let pages = store.list();
    let mut docs = Vec::with_capacity(pages.len());

    for page in pages {
        let Some(raw) = store.read_raw(&page.slug) else {
            tracing::debug!("Skipping '{}': unreadable during indexing", page.slug);
            continue;
        };

        let parsed = frontmatter::decode(&raw);
        docs.push(SearchDoc {
            slug: page.slug.clone(),
            title: parsed.metadata.title.unwrap_or_else(|| page.slug.clone()),
            description: parsed.metadata.description,
            theme: parsed.metadata.theme,
            tags: parsed.metadata.tags,
            date: parsed.metadata.date,
            text: strip_markup(&parsed.body),
        });
    }

    docs
}

/// Strip fenced code blocks and markdown punctuation, collapsing
/// whitespace runs to single spaces. Lossy by design.
pub fn strip_markup(body: &str) -> String {
    let without_code = fenced_code_regex().replace_all(body, " ");

    let without_symbols: String = without_code
        .chars()
        .map(|c| match c {
            '#' | '>' | '*' | '_' | '-' | '[' | ']' | '(' | ')' | '`' => ' ',
            other => other,
        })
        .collect();

    without_symbols.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::Theme;
    use tempfile::tempdir;

    fn store_in(dir: &std::path::Path) -> DocumentStore {
        DocumentStore::new(&Config::with_content_dir(dir))
    }

    #[test]
    fn test_strip_markup() {
        let text = strip_markup("# Heading\n\nSome *bold* [link](url) text.\n");
        assert_eq!(text, "Heading Some bold link url text.");
    }

    #[test]
    fn test_strip_markup_removes_fenced_code() {
        let text = strip_markup("before\n\n```rust\nlet secret = 42;\n```\n\nafter\n");
        assert_eq!(text, "before after");
    }

    #[test]
    fn test_index_carries_metadata() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());
        store
            .write(
                "post",
                "---\ntitle: A Post\ntheme: blog\ntags: [x, y]\ndate: 2025-02-02\n---\nHello there.\n",
            )
            .unwrap();

        let index = build_search_index(&store);
        assert_eq!(index.len(), 1);
        let doc = &index[0];
        assert_eq!(doc.slug, "post");
        assert_eq!(doc.title, "A Post");
        assert_eq!(doc.theme, Theme::Blog);
        assert_eq!(doc.tags, vec!["x", "y"]);
        assert_eq!(doc.date.as_deref(), Some("2025-02-02"));
        assert_eq!(doc.text, "Hello there.");
    }

    #[test]
    fn test_index_order_matches_list_order() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());
        store.write("b-page", "---\ntitle: Zule\n---\nx\n").unwrap();
        store.write("a-page", "---\ntitle: Able\n---\nx\n").unwrap();
        store.write("c-page", "no metadata\n").unwrap();

        let listed: Vec<_> = store.list().into_iter().map(|p| p.slug).collect();
        let indexed: Vec<_> = build_search_index(&store)
            .into_iter()
            .map(|d| d.slug)
            .collect();
        assert_eq!(listed, indexed);
    }

    #[test]
    fn test_title_falls_back_to_slug() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());
        store.write("untitled", "just a body\n").unwrap();

        let index = build_search_index(&store);
        assert_eq!(index[0].title, "untitled");
    }

    #[test]
    fn test_empty_store_empty_index() {
        let dir = tempdir().unwrap();
        let store = store_in(dir.path());
        assert!(build_search_index(&store).is_empty());
    }
}
