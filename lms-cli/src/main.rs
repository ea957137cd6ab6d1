//! LMS CLI - Command-line front end for the library catalog

mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::SourceConfig;
use lms_core::{parse_search_term, LoaderKind, SearchField};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse a data source kind (file or database)
fn parse_source(s: &str) -> Result<LoaderKind, String> {
    s.parse().map_err(|e: lms_core::InputError| e.to_string())
}

/// Parse a search field name
fn parse_field(s: &str) -> Result<SearchField, String> {
    s.parse().map_err(|e: lms_core::InputError| e.to_string())
}

/// Parse a search term (must not be blank)
fn parse_term(s: &str) -> Result<String, String> {
    parse_search_term(s).map_err(|e| e.to_string())
}

#[derive(Parser)]
#[command(name = "lms")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Data source kind (file, database) [env: LMS_SOURCE]
    #[arg(long, global = true, value_parser = parse_source)]
    source: Option<LoaderKind>,

    /// File path or connection string [env: LMS_PATH]
    #[arg(long, global = true)]
    path: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display all books in the catalog
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search the catalog
    Search {
        /// Text to look for
        #[arg(value_parser = parse_term)]
        term: String,

        /// Field to search (title, author, genre, isbn)
        #[arg(short, long, default_value = "title", value_parser = parse_field)]
        by: SearchField,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the most borrowed books
    ///
    /// Each run loads a fresh catalog with nothing borrowed yet, so the
    /// result is the first books in load order. Borrow inside `lms shell`
    /// and use its `top` command to rank by lending activity.
    Top {
        /// Number of books to show
        #[arg(short = 'n', long, default_value = "5")]
        count: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start an interactive session
    Shell,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; logs go to stderr so stdout stays parseable
    let default_filter = if cli.verbose {
        "lms_cli=debug,lms_core=debug"
    } else {
        "lms_cli=warn,lms_core=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let source = SourceConfig::resolve(cli.source, cli.path)?;
    tracing::debug!("Using source {}", source);

    match cli.command {
        Commands::List { json } => commands::list(&source, json),

        Commands::Search { term, by, json } => commands::search(&source, by, &term, json),

        Commands::Top { count, json } => commands::top(&source, count, json),

        Commands::Shell => commands::shell(&source),
    }
}
