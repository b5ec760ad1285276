//! Restructure a document into documentation form.

use super::{
    ensure_single_h1, extract_first_h1, finalize, h2_regex, is_h1, normalize_newlines,
    skip_blank_lines,
};
use crate::frontmatter;
use regex::Regex;
use std::sync::OnceLock;

const FALLBACK_TITLE: &str = "Documentation";
const TOC_HEADING: &str = "Table of Contents";

static NUMBERED_HEADING_REGEX: OnceLock<Regex> = OnceLock::new();

fn numbered_heading_regex() -> &'static Regex {
    NUMBERED_HEADING_REGEX.get_or_init(|| Regex::new(r"^\d+\.\s").unwrap())
}

/// Convert a document to docs form:
///
/// - force `theme: docs`
/// - enforce a single level-1 heading (title from metadata, else the first
///   H1, else a fallback)
/// - insert a `## Table of Contents` heading after the title if absent
/// - number level-2 headings sequentially, leaving already numbered ones
///   (and the TOC heading) untouched, so the rule is a fixed point
pub fn convert_docs(document: &str) -> String {
    let mut s = normalize_newlines(document);

    s = frontmatter::set_field(&s, "theme", "docs");

    let title = frontmatter::decode(&s)
        .metadata
        .title
        .or_else(|| extract_first_h1(&s))
        .unwrap_or_else(|| FALLBACK_TITLE.to_string());
    s = ensure_single_h1(&s, &title);

    s = ensure_toc_heading(&s);
    s = number_h2_headings(&s);

    finalize(&s)
}

fn ensure_toc_heading(document: &str) -> String {
    let has_toc = document.split('\n').any(|line| {
        h2_regex()
            .captures(line)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim() == TOC_HEADING)
            .unwrap_or(false)
    });
    if has_toc {
        return document.to_string();
    }

    let lines: Vec<&str> = document.split('\n').collect();
    let Some(h1_index) = lines.iter().position(|l| is_h1(l)) else {
        return format!("## {}\n\n{}", TOC_HEADING, document);
    };

    let insert_at = skip_blank_lines(&lines, h1_index + 1);
    let mut out: Vec<&str> = Vec::with_capacity(lines.len() + 2);
    out.extend(&lines[..insert_at]);
    let toc_line = format!("## {}", TOC_HEADING);
    out.push(&toc_line);
    out.push("");
    out.extend(&lines[insert_at..]);
    out.join("\n")
}

fn number_h2_headings(document: &str) -> String {
    let mut n = 1;
    document
        .split('\n')
        .map(|line| {
            let Some(caps) = h2_regex().captures(line) else {
                return line.to_string();
            };
            let text = caps[1].trim().to_string();

            // The TOC heading and headings already carrying a "<n>. "
            // prefix keep their text; renumbering them would make the
            // rule drift on every application.
            if text == TOC_HEADING || numbered_heading_regex().is_match(&text) {
                return line.to_string();
            }

            let numbered = format!("## {}. {}", n, text);
            n += 1;
            numbered
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Theme;

    #[test]
    fn test_numbers_sections_and_inserts_toc() {
        let out = convert_docs("# Hi\n\n## A\n## B\n");

        let doc = frontmatter::decode(&out);
        assert_eq!(doc.metadata.theme, Theme::Docs);

        let h1_lines: Vec<&str> = out.lines().filter(|l| is_h1(l)).collect();
        assert_eq!(h1_lines, vec!["# Hi"]);

        // TOC heading directly beneath the title, then numbered sections.
        assert!(doc.body.contains("# Hi\n\n## Table of Contents\n"));
        assert!(out.contains("## 1. A"));
        assert!(out.contains("## 2. B"));
    }

    #[test]
    fn test_idempotent() {
        let input = "---\ntitle: Guide\n---\n# Guide\n\nIntro.\n\n## Setup\n\n## Usage\n";
        let once = convert_docs(input);
        let twice = convert_docs(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_title_preference_order() {
        // Metadata title wins over the H1.
        let out = convert_docs("---\ntitle: Meta Title\n---\n# Other\n");
        assert!(out.contains("# Meta Title"));
        assert!(!out.contains("# Other"));

        // First H1 when no metadata title.
        let out = convert_docs("# From Heading\n\ntext\n");
        assert!(out.contains("# From Heading"));

        // Fallback literal otherwise.
        let out = convert_docs("just prose\n");
        assert!(out.contains("# Documentation"));
    }

    #[test]
    fn test_removes_duplicate_h1s() {
        let out = convert_docs("# One\n\ntext\n\n# Two\n\nmore\n");
        assert_eq!(out.lines().filter(|l| is_h1(l)).count(), 1);
    }

    #[test]
    fn test_existing_toc_not_duplicated() {
        let input = "# T\n\n## Table of Contents\n\n## A\n";
        let out = convert_docs(input);
        assert_eq!(out.matches("## Table of Contents").count(), 1);
    }

    #[test]
    fn test_already_numbered_heading_untouched() {
        let out = convert_docs("# T\n\n## 3. Unrelated\n## Fresh\n");
        assert!(out.contains("## 3. Unrelated"));
        assert!(out.contains("## 1. Fresh"));
    }

    #[test]
    fn test_forces_theme_docs_over_blog() {
        let out = convert_docs("---\ntheme: blog\ntitle: T\n---\nbody\n");
        assert_eq!(frontmatter::decode(&out).metadata.theme, Theme::Docs);
    }
}
