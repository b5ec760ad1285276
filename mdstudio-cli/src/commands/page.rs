//! Read, write, and delete commands for single documents.

use anyhow::{anyhow, Context, Result};
use mdstudio_core::DocumentStore;
use std::io::Read as _;
use std::path::Path;

/// Print a document, raw or decoded.
pub fn read_page(config_path: &Path, slug: &str, parsed: bool, json: bool) -> Result<()> {
    let config = super::load_config(config_path)?;
    let store = DocumentStore::new(&config);

    if parsed || json {
        let (_, doc) = store
            .read_parsed(slug)
            .ok_or_else(|| anyhow!("Document not found: {}", slug))?;
        if json {
            println!("{}", serde_json::to_string_pretty(&doc)?);
        } else {
            let meta = serde_json::to_string_pretty(&doc.metadata)?;
            println!("{}\n\n{}", meta, doc.body);
        }
        return Ok(());
    }

    let raw = store
        .read_raw(slug)
        .ok_or_else(|| anyhow!("Document not found: {}", slug))?;
    print!("{}", raw);
    Ok(())
}

/// Create or fully replace a document from a file or stdin.
pub fn write_page(config_path: &Path, slug: &str, file: Option<&Path>) -> Result<()> {
    let config = super::load_config(config_path)?;
    let store = DocumentStore::new(&config);

    let raw = read_input(file)?;
    let stored = store
        .write(slug, &raw)
        .with_context(|| format!("Failed to write document {}", slug))?;
    println!("✓ Wrote {}", stored);
    Ok(())
}

/// Delete a document. Missing documents are reported, not errors.
pub fn delete_page(config_path: &Path, slug: &str) -> Result<()> {
    let config = super::load_config(config_path)?;
    let store = DocumentStore::new(&config);

    if store.delete(slug) {
        println!("✓ Deleted {}", slug);
    } else {
        println!("Not found: {}", slug);
    }
    Ok(())
}

/// Read an input document from a file, or stdin when no file is given.
pub(crate) fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}
