//! Assist command implementation.

use anyhow::Result;
use mdstudio_core::{AssistClient, AssistMode, Theme};
use std::path::Path;

use super::page::read_input;

/// Run one remote assist action over a file (or stdin) and print the
/// generated markdown. The store is never touched; redirect or use
/// `mdstudio write` to persist the result.
pub async fn run_assist(mode: &str, file: Option<&Path>, theme: &str) -> Result<()> {
    let mode: AssistMode = mode.parse()?;
    let theme = Theme::from_str(theme);
    let document = read_input(file)?;

    let client = AssistClient::from_env()?;
    let output = client.run(mode, theme, &document).await?;
    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}
