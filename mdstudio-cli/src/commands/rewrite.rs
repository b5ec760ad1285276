//! Rewrite command implementation.

use anyhow::{Context, Result};
use mdstudio_core::{DocumentStore, RewriteRule};
use std::path::Path;

use super::page::read_input;

/// Apply a rewrite rule to a file (or stdin) and print the result, or
/// persist it back to the store with `--write-to`.
pub fn run_rewrite(
    config_path: &Path,
    rule: &str,
    file: Option<&Path>,
    write_to: Option<&str>,
) -> Result<()> {
    let rule: RewriteRule = rule.parse()?;
    let input = read_input(file)?;
    let output = rule.apply(&input);

    match write_to {
        Some(slug) => {
            let config = super::load_config(config_path)?;
            let store = DocumentStore::new(&config);
            let stored = store
                .write(slug, &output)
                .with_context(|| format!("Failed to write document {}", slug))?;
            println!("✓ {} applied, wrote {}", rule.as_str(), stored);
        }
        None => print!("{}", output),
    }
    Ok(())
}
