//! Configuration parsing and management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    ParseError(#[from] serde_yaml::Error),
}

/// Main configuration struct matching the mdstudio.yml schema.
///
/// All storage roots are explicit; nothing reads the working directory or
/// environment besides what the caller resolves here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_site_title")]
    pub site_title: String,

    /// Directory holding `<slug>.md` documents.
    #[serde(default = "default_content_dir")]
    pub content: PathBuf,

    /// Directory that `mdstudio export` writes into.
    #[serde(default = "default_output_dir")]
    pub output: PathBuf,

    // Internal: path to config file (for relative path resolution)
    #[serde(skip)]
    config_path: Option<PathBuf>,
}

fn default_site_title() -> String {
    String::from("Exported Site")
}

fn default_content_dir() -> PathBuf {
    PathBuf::from("content")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("dist")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_title: default_site_title(),
            content: default_content_dir(),
            output: default_output_dir(),
            config_path: None,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let mut config: Config = serde_yaml::from_str(&contents)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Build a config rooted at an explicit directory (used by tests and
    /// embedders that do not carry a config file).
    pub fn with_content_dir<P: Into<PathBuf>>(content: P) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Content directory, resolved relative to the config file.
    pub fn content_dir(&self) -> PathBuf {
        self.resolve_path(&self.content)
    }

    /// Output directory, resolved relative to the config file.
    pub fn output_dir(&self) -> PathBuf {
        self.resolve_path(&self.output)
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            return path.to_path_buf();
        }
        match &self.config_path {
            Some(config_path) => config_path
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .join(path),
            None => path.to_path_buf(),
        }
    }
}
