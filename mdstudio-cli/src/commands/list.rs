//! List command implementation.

use anyhow::Result;
use mdstudio_core::DocumentStore;
use std::path::Path;

/// List stored documents, sorted by title then slug.
pub fn list_pages(config_path: &Path, json: bool) -> Result<()> {
    let config = super::load_config(config_path)?;
    let store = DocumentStore::new(&config);
    let pages = store.list();

    if json {
        println!("{}", serde_json::to_string_pretty(&pages)?);
        return Ok(());
    }

    if pages.is_empty() {
        println!("No documents in {:?}", store.content_dir());
        return Ok(());
    }

    for page in &pages {
        match &page.description {
            Some(desc) => println!("{:<24} {} - {}", page.slug, page.title, desc),
            None => println!("{:<24} {}", page.slug, page.title),
        }
    }
    println!("\n{} document(s)", pages.len());
    Ok(())
}
