//! CLI command implementations.

pub mod assist;
pub mod export;
pub mod index;
pub mod init;
pub mod list;
pub mod page;
pub mod rewrite;

pub use assist::run_assist;
pub use export::export_site;
pub use index::build_index;
pub use init::init_project;
pub use list::list_pages;
pub use page::{delete_page, read_page, write_page};
pub use rewrite::run_rewrite;

use anyhow::{Context, Result};
use mdstudio_core::Config;
use std::path::Path;

/// Load the project config, falling back to defaults when the file is
/// absent so read-only commands work in a bare content directory.
pub(crate) fn load_config(path: &Path) -> Result<Config> {
    if path.exists() {
        Config::from_file(path).with_context(|| format!("Failed to load config {:?}", path))
    } else {
        tracing::debug!("No config at {:?}, using defaults", path);
        Ok(Config::default())
    }
}
