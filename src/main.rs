//! # Stringlens CLI (`slens`)
//!
//! The `slens` binary drives the string-analysis service: database
//! initialization, analysis, lookups, filtered listing, natural-language
//! queries, deletion, and the HTTP server.
//!
//! ## Usage
//!
//! ```bash
//! slens --config ./config/slens.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `slens init` | Create the SQLite database and schema |
//! | `slens add "<text>"` | Analyze a string and store the result |
//! | `slens get <value>` | Look up a record by value (case-insensitive) |
//! | `slens list [--min-length N ...]` | List records with optional filters |
//! | `slens query "<text>"` | Filter records with a natural-language query |
//! | `slens delete <value>` | Delete a record by value (case-insensitive) |
//! | `slens serve` | Start the HTTP server |

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;

use stringlens::config::{load_config, Config};
use stringlens::db;
use stringlens::engine::Engine;
use stringlens::migrate;
use stringlens::models::{FilterSet, RecordResponse};
use stringlens::server;
use stringlens::store::sqlite::SqliteStore;

/// Stringlens CLI — analyze strings, store them by content hash, and
/// query them with structured or natural-language filters.
#[derive(Parser)]
#[command(
    name = "slens",
    about = "Stringlens — a string-analysis service with content-addressed storage",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/slens.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the database schema.
    ///
    /// Creates the SQLite database file and the strings table. Idempotent —
    /// running it multiple times is safe.
    Init,

    /// Analyze a string and store the result.
    ///
    /// Prints the stored record as JSON. Fails with a conflict when the
    /// exact same text (case-sensitive) was stored before.
    Add {
        /// The text to analyze.
        value: String,
    },

    /// Look up a stored record by its original value, case-insensitively.
    Get {
        /// The original text.
        value: String,
    },

    /// List stored records, optionally filtered.
    List {
        /// Keep only palindromes (or only non-palindromes with `false`).
        #[arg(long)]
        is_palindrome: Option<bool>,

        /// Inclusive minimum length.
        #[arg(long)]
        min_length: Option<i64>,

        /// Inclusive maximum length.
        #[arg(long)]
        max_length: Option<i64>,

        /// Exact word count.
        #[arg(long)]
        word_count: Option<i64>,

        /// Single character the value must contain (case-sensitive).
        #[arg(long)]
        contains_character: Option<String>,
    },

    /// Filter stored records with a natural-language query.
    ///
    /// Examples: "palindromic strings longer than 5 characters",
    /// "single word strings containing the letter z".
    Query {
        /// The free-text query.
        query: String,
    },

    /// Delete a stored record by its original value, case-insensitively.
    Delete {
        /// The original text.
        value: String,
    },

    /// Start the HTTP server.
    Serve,
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config: Config = load_config(&cli.config)?;

    if let Commands::Init = cli.command {
        let pool = db::connect(&config).await?;
        migrate::run_migrations(&pool).await?;
        pool.close().await;
        println!("Database initialized at {}", config.db.path.display());
        return Ok(());
    }

    let pool = db::connect(&config).await?;
    let engine = Arc::new(Engine::new(Arc::new(SqliteStore::new(pool))));

    match cli.command {
        Commands::Init => unreachable!(),
        Commands::Add { value } => {
            let record = engine.analyze_and_store(&value).await?;
            print_json(&RecordResponse::from(record))?;
        }
        Commands::Get { value } => {
            let record = engine.get_one(&value).await?;
            print_json(&RecordResponse::from(record))?;
        }
        Commands::List {
            is_palindrome,
            min_length,
            max_length,
            word_count,
            contains_character,
        } => {
            let filters = FilterSet {
                is_palindrome,
                min_length,
                max_length,
                word_count,
                contains_character,
            };
            let response = engine.list_filtered(filters).await?;
            print_json(&response)?;
        }
        Commands::Query { query } => {
            let response = engine.filter_by_natural_language(&query).await?;
            print_json(&response)?;
        }
        Commands::Delete { value } => {
            engine.delete(&value).await?;
            println!("Deleted.");
        }
        Commands::Serve => {
            server::run_server(&config.server.bind, engine).await?;
        }
    }

    Ok(())
}
