//! Restructure a document into blog-post form.

use super::{
    ensure_single_h1, extract_first_h1, finalize, is_h1, is_h2, normalize_newlines,
    skip_blank_lines,
};
use crate::frontmatter;

const FALLBACK_TITLE: &str = "New Post";
const HOOK_PARAGRAPH: &str =
    "A quick post to explain what’s going on, why it matters, and how you can use it.";

/// Convert a document to blog form:
///
/// - force `theme: blog`
/// - stamp today's date (`YYYY-MM-DD`) only when no date is present
/// - enforce a single level-1 heading
/// - when the post jumps straight from the title into a section, insert a
///   fixed hook paragraph so it does not start abruptly
pub fn convert_blog(document: &str) -> String {
    let mut s = normalize_newlines(document);

    s = frontmatter::set_field(&s, "theme", "blog");
    s = ensure_date(&s);

    let title = frontmatter::decode(&s)
        .metadata
        .title
        .or_else(|| extract_first_h1(&s))
        .unwrap_or_else(|| FALLBACK_TITLE.to_string());
    s = ensure_single_h1(&s, &title);

    s = ensure_hook_paragraph(&s);

    finalize(&s)
}

fn ensure_date(document: &str) -> String {
    let has_date = frontmatter::decode(document)
        .metadata
        .date
        .map(|d| !d.trim().is_empty())
        .unwrap_or(false);
    if has_date {
        return document.to_string();
    }

    let today = chrono::Local::now().format("%Y-%m-%d").to_string();
    frontmatter::set_field(document, "date", &today)
}

fn ensure_hook_paragraph(document: &str) -> String {
    let lines: Vec<&str> = document.split('\n').collect();
    let Some(h1_index) = lines.iter().position(|l| is_h1(l)) else {
        return document.to_string();
    };

    let i = skip_blank_lines(&lines, h1_index + 1);
    if i >= lines.len() || !is_h2(lines[i]) {
        return document.to_string();
    }

    let mut out: Vec<&str> = Vec::with_capacity(lines.len() + 2);
    out.extend(&lines[..i]);
    out.push(HOOK_PARAGRAPH);
    out.push("");
    out.extend(&lines[i..]);
    out.join("\n")
}
