//! Static site export.
//!
//! Renders every stored document into a flat list of files: a stylesheet,
//! a home index, the serialized search index, and one HTML page per
//! document. The list is generated fresh per call and never persisted by
//! the core; packaging (zip, deploy) is the caller's concern.

use crate::frontmatter;
use crate::markdown::render_html;
use crate::models::ExportFile;
use crate::search::build_search_index;
use crate::store::DocumentStore;

const STYLESHEET: &str = "\
body{font-family:system-ui,-apple-system,Segoe UI,Roboto,Arial; margin:0; background:#fff; color:#111827}
.wrap{max-width:860px; margin:0 auto; padding:32px 18px}
a{color:#2563eb}
pre{background:#f3f4f6; padding:12px; border-radius:12px; overflow:auto}
code{font-family:ui-monospace,SFMono-Regular,Menlo,Monaco,Consolas,monospace}
table{width:100%; border-collapse:collapse; margin:16px 0}
th,td{border:1px solid #e5e7eb; padding:10px 12px; vertical-align:top}
th{background:#f9fafb}
";

/// Renders the whole store into a deterministic set of export files.
pub struct SiteExporter<'a> {
    store: &'a DocumentStore,
    site_title: String,
}

impl<'a> SiteExporter<'a> {
    pub fn new(store: &'a DocumentStore, site_title: impl Into<String>) -> Self {
        Self {
            store,
            site_title: site_title.into(),
        }
    }

    /// Produce the export file sequence: `assets/style.css`, `index.html`,
    /// `search-index.json`, then `site/<slug>/index.html` per document in
    /// index order. A document that cannot be re-read at this moment is
    /// skipped, never fatal.
    pub fn export(&self) -> Vec<ExportFile> {
        let index = build_search_index(self.store);
        let mut files = Vec::with_capacity(index.len() + 3);

        files.push(ExportFile {
            path: "assets/style.css".to_string(),
            content: STYLESHEET.to_string(),
        });

        let home_links: String = index
            .iter()
            .map(|d| {
                format!(
                    "<li><a href=\"/site/{}/\">{}</a></li>",
                    d.slug,
                    escape_html(&d.title)
                )
            })
            .collect();
        files.push(ExportFile {
            path: "index.html".to_string(),
            content: page_template(
                &self.site_title,
                &format!("<h1>{}</h1><ul>{}</ul>", escape_html(&self.site_title), home_links),
            ),
        });

        files.push(ExportFile {
            path: "search-index.json".to_string(),
            content: serde_json::to_string_pretty(&index).unwrap_or_else(|_| "[]".to_string()),
        });

        for doc in &index {
            let Some(raw) = self.store.read_raw(&doc.slug) else {
                tracing::warn!("Skipping '{}': unreadable during export", doc.slug);
                continue;
            };

            let parsed = frontmatter::decode(&raw);
            let title = parsed
                .metadata
                .title
                .unwrap_or_else(|| doc.slug.clone());
            let html = render_html(&parsed.body);

            files.push(ExportFile {
                path: format!("site/{}/index.html", doc.slug),
                content: page_template(&title, &html),
            });
        }

        files
    }
}

/// Fixed page shell. Only the title is escaped; the body is trusted
/// rendered markdown, an accepted limitation.
fn page_template(title: &str, body_html: &str) -> String {
    format!(
        "<!doctype html>\n\
         <html>\n\
         <head>\n\
         \x20 <meta charset=\"utf-8\"/>\n\
         \x20 <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"/>\n\
         \x20 <title>{}</title>\n\
         \x20 <link rel=\"stylesheet\" href=\"/assets/style.css\"/>\n\
         </head>\n\
         <body>\n\
         \x20 <main class=\"wrap\">\n\
         {}\n\
         \x20 </main>\n\
         </body>\n\
         </html>\n",
        escape_html(title),
        body_html
    )
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
