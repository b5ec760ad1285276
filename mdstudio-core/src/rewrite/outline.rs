//! Replace a document's body with a fixed outline skeleton.

use super::{extract_first_h1, normalize_newlines};
use crate::frontmatter;

const FALLBACK_TITLE: &str = "Document";

/// Discard the body and emit a six-section outline skeleton titled from
/// metadata, the first H1, or a fallback. The metadata block, when
/// present, is preserved verbatim ahead of the outline.
pub fn outline(document: &str) -> String {
    let s = normalize_newlines(document);

    let title = frontmatter::decode(&s)
        .metadata
        .title
        .or_else(|| extract_first_h1(&s))
        .unwrap_or_else(|| FALLBACK_TITLE.to_string());

    let skeleton = format!(
        "# {}\n\
         \n\
         ## Overview\n\
         - Purpose\n\
         - Audience\n\
         - Key concepts\n\
         \n\
         ## Architecture\n\
         - Components\n\
         - Data flow\n\
         - Key decisions\n\
         \n\
         ## Implementation\n\
         - Setup\n\
         - Core workflow\n\
         - Edge cases\n\
         \n\
         ## Examples\n\
         - Basic example\n\
         - Advanced example\n\
         \n\
         ## Troubleshooting\n\
         - Common issues\n\
         - FAQs\n\
         \n\
         ## References\n\
         - Links\n\
         - Glossary\n",
        title
    );

    match frontmatter::split_block(&s) {
        Some((block, _)) => format!("{}\n{}\n", block.trim_end(), skeleton.trim()),
        None => format!("{}\n", skeleton.trim()),
    }
}
