//! TL;DR injection: first paragraph plus section headings as bullets.

use super::{h2_regex, is_h1, is_heading, normalize_newlines, skip_blank_lines};

const TLDR_HEADING: &str = "## TL;DR";
const MAX_PARAGRAPH_CHARS: usize = 120;
const MAX_HEADINGS: usize = 6;

/// Insert a `## TL;DR` block summarizing the document: the first paragraph
/// (truncated to 120 characters) and up to six level-2 heading titles as a
/// bullet list. The block lands immediately after the H1 and any blank
/// lines following it, or at the very top when no H1 exists.
pub fn summarize(document: &str) -> String {
    let s = normalize_newlines(document);
    let lines: Vec<&str> = s.split('\n').collect();

    let h1_index = lines.iter().position(|l| is_h1(l));
    let first_para =
        extract_first_paragraph(&lines, h1_index.map(|i| i + 1).unwrap_or(0));

    let mut bullets: Vec<String> = Vec::new();
    if !first_para.is_empty() {
        bullets.push(truncate_chars(&first_para, MAX_PARAGRAPH_CHARS));
    }
    let mut heading_bullets = 0usize;
    for line in &lines {
        if heading_bullets >= MAX_HEADINGS {
            break;
        }
        if let Some(caps) = h2_regex().captures(line) {
            bullets.push(caps[1].trim().to_string());
            heading_bullets += 1;
        }
    }

    let mut tldr: Vec<String> = vec![TLDR_HEADING.to_string()];
    tldr.extend(bullets.iter().map(|b| format!("- {}", b)));
    tldr.push(String::new());

    match h1_index {
        Some(h1) => {
            let insert_at = skip_blank_lines(&lines, h1 + 1);
            let mut out: Vec<String> =
                lines[..insert_at].iter().map(|l| l.to_string()).collect();
            out.extend(tldr);
            out.extend(lines[insert_at..].iter().map(|l| l.to_string()));
            format!("{}\n", out.join("\n").trim())
        }
        None => format!("{}\n", format!("{}\n{}", tldr.join("\n"), s).trim()),
    }
}

/// Consecutive text lines starting at the first non-blank line at or after
/// `start`, stopping at a blank line, a heading, or a code fence.
fn extract_first_paragraph(lines: &[&str], start: usize) -> String {
    let mut i = skip_blank_lines(lines, start);

    let mut para: Vec<&str> = Vec::new();
    while i < lines.len() {
        let line = lines[i];
        if line.trim().is_empty() || is_heading(line) || line.starts_with("```") {
            break;
        }
        para.push(line.trim());
        i += 1;
    }

    para.join(" ").trim().to_string()
}

fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let truncated: String = s.chars().take(max).collect();
    format!("{}…", truncated.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tldr_inserted_after_h1() {
        let out = summarize("# Title\n\nHello world.\n\n## Section A\n");
        assert!(out.starts_with(
            "# Title\n\n## TL;DR\n- Hello world.\n- Section A\n\nHello world.\n"
        ));
    }

    #[test]
    fn test_no_h1_puts_block_on_top() {
        let out = summarize("Some intro prose.\n\n## Later\n");
        assert!(out.starts_with("## TL;DR\n- Some intro prose.\n- Later\n"));
    }

    #[test]
    fn test_long_paragraph_truncated_with_ellipsis() {
        let long = "word ".repeat(60);
        let out = summarize(&format!("# T\n\n{}\n", long.trim()));
        let bullet = out
            .lines()
            .find(|l| l.starts_with("- "))
            .expect("paragraph bullet");
        assert!(bullet.ends_with('…'));
        assert!(bullet.chars().count() <= 2 + MAX_PARAGRAPH_CHARS + 1);
    }

    #[test]
    fn test_at_most_six_heading_bullets() {
        let sections: String = (1..=9).map(|i| format!("## S{}\n\n", i)).collect();
        let out = summarize(&format!("# T\n\n{}", sections));
        let bullet_count = out.lines().filter(|l| l.starts_with("- ")).count();
        // No intro paragraph, so only heading bullets remain.
        assert_eq!(bullet_count, 6);
    }

    #[test]
    fn test_paragraph_stops_at_fence() {
        let out = summarize("# T\n\nIntro line.\n```\ncode\n```\n");
        assert!(out.contains("- Intro line.\n"));
        assert!(!out.contains("- Intro line. code"));
    }

    #[test]
    fn test_multiline_paragraph_joined() {
        let out = summarize("# T\n\nfirst line\nsecond line\n\n## S\n");
        assert!(out.contains("- first line second line\n"));
    }
}
