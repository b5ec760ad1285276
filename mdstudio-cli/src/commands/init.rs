//! Init command implementation.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

const DEFAULT_CONFIG: &str = "\
site_title: Exported Site
content: content
output: dist
";

const SAMPLE_DOCUMENT: &str = "\
---
title: Welcome
description: A starting point for your documents
theme: docs
tags: [mdstudio, intro]
---

# Welcome

This is your content directory. Each document is a single markdown file
named after its slug, with a metadata block up top.

## Next steps

Edit `mdstudio.yml` to set a site title, then try:

```bash
mdstudio list
mdstudio rewrite normalize content/welcome.md
mdstudio export
```
";

/// Initialize a new mdstudio project
pub fn init_project(path: Option<&Path>) -> Result<()> {
    let root = path.unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(root).with_context(|| format!("Failed to create {:?}", root))?;

    write_config(root)?;
    scaffold_content(root)?;

    println!("✓ mdstudio initialized in {:?}", root);
    println!("  - Edit mdstudio.yml to customize the site title");
    println!("  - Write documents in content/ as <slug>.md");
    Ok(())
}

fn write_config(root: &Path) -> Result<()> {
    let config_path = root.join("mdstudio.yml");
    if config_path.exists() {
        println!("mdstudio.yml already exists at {:?}", config_path);
        return Ok(());
    }

    fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {:?}", config_path))?;
    println!("Created {:?}", config_path);
    Ok(())
}

fn scaffold_content(root: &Path) -> Result<()> {
    let content = root.join("content");
    fs::create_dir_all(&content).with_context(|| format!("Failed to create {:?}", content))?;

    let sample = content.join("welcome.md");
    if !sample.exists() {
        fs::write(&sample, SAMPLE_DOCUMENT)
            .with_context(|| format!("Failed to write {:?}", sample))?;
        println!("Created {:?}", sample);
    }

    Ok(())
}
