//! # mdstudio CLI
//!
//! Command-line interface for the mdstudio markdown document studio.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mdstudio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "mdstudio.yml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new mdstudio project
    Init {
        /// Target directory (defaults to current directory)
        path: Option<PathBuf>,
    },

    /// List stored documents
    List {
        /// Return JSON for machine consumption
        #[arg(long)]
        json: bool,
    },

    /// Print a document
    Read {
        /// Document slug
        slug: String,

        /// Decode the metadata block instead of printing raw text
        #[arg(long)]
        parsed: bool,

        /// Return JSON (implies --parsed)
        #[arg(long)]
        json: bool,
    },

    /// Create or fully replace a document
    Write {
        /// Document slug
        slug: String,

        /// Input file (stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Delete a document
    Delete {
        /// Document slug
        slug: String,
    },

    /// Apply a rewrite rule to a document or file
    Rewrite {
        /// Rule name (normalize, convert-docs, convert-blog, summarize,
        /// outline, insert-diagram)
        rule: String,

        /// Input file (stdin when omitted)
        file: Option<PathBuf>,

        /// Write the result back to a stored document instead of stdout
        #[arg(long)]
        write_to: Option<String>,
    },

    /// Build the search index
    Index {
        /// Write to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Export the store as a static site
    Export {
        /// Output directory (defaults to the configured one)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Run a remote assist action over a document or file
    Assist {
        /// Assist mode (improve, summarize, expand, to_docs, to_blog,
        /// generate_outline, mermaid_from_text)
        mode: String,

        /// Input file (stdin when omitted)
        file: Option<PathBuf>,

        /// Writing style to ask for
        #[arg(long, default_value = "docs")]
        theme: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(if cli.verbose {
                tracing::Level::DEBUG.into()
            } else {
                tracing::Level::INFO.into()
            }),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Init { path } => commands::init_project(path.as_deref()),
        Commands::List { json } => commands::list_pages(&cli.config, json),
        Commands::Read { slug, parsed, json } => {
            commands::read_page(&cli.config, &slug, parsed, json)
        }
        Commands::Write { slug, file } => {
            commands::write_page(&cli.config, &slug, file.as_deref())
        }
        Commands::Delete { slug } => commands::delete_page(&cli.config, &slug),
        Commands::Rewrite {
            rule,
            file,
            write_to,
        } => commands::run_rewrite(&cli.config, &rule, file.as_deref(), write_to.as_deref()),
        Commands::Index { output, pretty } => {
            commands::build_index(&cli.config, output.as_deref(), pretty)
        }
        Commands::Export { output } => commands::export_site(&cli.config, output.as_deref()),
        Commands::Assist { mode, file, theme } => {
            commands::run_assist(&mode, file.as_deref(), &theme).await
        }
    }
}
