//! Insert a mermaid diagram template near an architecture-flavored heading.

use super::{heading_regex, normalize_newlines, skip_blank_lines};

const KEYWORDS: [&str; 4] = ["architecture", "diagram", "system architecture", "data flow"];

const DIAGRAM_BLOCK: [&str; 7] = [
    "```mermaid",
    "graph TD",
    "  A[Start] --> B[Step 1]",
    "  B --> C[Step 2]",
    "  C --> D[Done]",
    "```",
    "",
];

/// Insert a fixed mermaid flow diagram after the first heading (levels
/// 2-6) whose text contains an architecture/diagram keyword,
/// case-insensitive. With no such heading, the block is appended to the
/// end of the document.
pub fn insert_diagram(document: &str) -> String {
    let s = normalize_newlines(document);
    let lines: Vec<&str> = s.split('\n').collect();

    let target = lines.iter().position(|line| {
        heading_regex()
            .captures(line)
            .filter(|caps| caps[1].len() >= 2)
            .map(|caps| {
                let text = caps[2].trim().to_lowercase();
                KEYWORDS.iter().any(|k| text.contains(k))
            })
            .unwrap_or(false)
    });

    match target {
        Some(idx) => {
            let insert_at = skip_blank_lines(&lines, idx + 1);
            let mut out: Vec<&str> = Vec::with_capacity(lines.len() + DIAGRAM_BLOCK.len());
            out.extend(&lines[..insert_at]);
            out.extend(DIAGRAM_BLOCK);
            out.extend(&lines[insert_at..]);
            format!("{}\n", out.join("\n").trim_end())
        }
        None => format!(
            "{}\n\n{}\n",
            s.trim_end(),
            DIAGRAM_BLOCK.join("\n").trim_end()
        ),
    }
}
