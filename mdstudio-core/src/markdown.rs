//! Markdown to HTML rendering.

use pulldown_cmark::{html, Options, Parser};

/// Render a markdown body to an HTML fragment.
///
/// Pure: no side effects, no link rewriting. Mermaid fences come out as
/// plain `<pre><code class="language-mermaid">` blocks; rendering them is
/// a client-side concern.
pub fn render_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}
