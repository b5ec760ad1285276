//! # mdstudio-core
//!
//! Core library for mdstudio, a markdown document studio: a slug-addressed
//! store of markdown documents carrying a leading metadata block, a family
//! of deterministic rewrite rules, a search indexer, and a static site
//! exporter.

pub mod assist;
pub mod config;
pub mod exporter;
pub mod frontmatter;
pub mod markdown;
pub mod models;
pub mod rewrite;
pub mod search;
pub mod slug;
pub mod store;

pub use assist::{build_instruction, AssistClient, AssistError, AssistMode};
pub use config::Config;
pub use exporter::SiteExporter;
pub use models::{ExportFile, Metadata, PageSummary, ParsedDocument, SearchDoc, Theme};
pub use rewrite::RewriteRule;
pub use search::build_search_index;
pub use slug::{sanitize_slug, SlugError};
pub use store::{DocumentStore, StoreError};
