//! Index command implementation.

use anyhow::{Context, Result};
use mdstudio_core::{build_search_index, DocumentStore};
use std::path::Path;

/// Build the search index and print it, or write it to a file.
pub fn build_index(config_path: &Path, output: Option<&Path>, pretty: bool) -> Result<()> {
    let config = super::load_config(config_path)?;
    let store = DocumentStore::new(&config);
    let index = build_search_index(&store);

    let json = if pretty {
        serde_json::to_string_pretty(&index)?
    } else {
        serde_json::to_string(&index)?
    };

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {:?}", parent))?;
            }
            std::fs::write(path, &json).with_context(|| format!("Failed to write {:?}", path))?;
            println!("✓ Indexed {} document(s) to {:?}", index.len(), path);
        }
        None => println!("{}", json),
    }
    Ok(())
}
