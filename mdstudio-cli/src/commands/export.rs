//! Export command implementation.

use anyhow::{Context, Result};
use mdstudio_core::{DocumentStore, SiteExporter};
use std::path::Path;

/// Export the store as a static site under the output directory.
pub fn export_site(config_path: &Path, output: Option<&Path>) -> Result<()> {
    let config = super::load_config(config_path)?;
    let store = DocumentStore::new(&config);
    let out_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| config.output_dir());

    let exporter = SiteExporter::new(&store, config.site_title.clone());
    let files = exporter.export();

    for file in &files {
        let dest = out_dir.join(&file.path);
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {:?}", parent))?;
        }
        std::fs::write(&dest, &file.content)
            .with_context(|| format!("Failed to write {:?}", dest))?;
        tracing::debug!("Wrote {:?}", dest);
    }

    println!("✓ Exported {} file(s) to {:?}", files.len(), out_dir);
    Ok(())
}
