//! Command-line interface definition for recipefind
//!
//! This module defines the CLI structure using clap's derive API. Each
//! subcommand maps onto one controller trigger, plus an interactive session
//! that keeps the prompt open between searches.

use clap::{Parser, Subcommand};

/// recipefind - recipe search with remembered results
///
/// Searches a public recipe API, shows the results as cards and remembers
/// the last search and a short history between runs.
#[derive(Parser, Debug, Clone)]
#[command(name = "recipefind")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/recipefind.yaml")]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Override the SQLite file used to remember searches
    #[arg(long)]
    pub storage_path: Option<String>,

    /// Override the search API base URL
    #[arg(long)]
    pub api_base: Option<String>,

    /// Keep everything in memory for this run only
    #[arg(long, conflicts_with = "storage_path")]
    pub ephemeral: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for recipefind
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show the last results again, or the default query on first use
    Load {
        /// Print recipes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search for recipes and remember the query
    Search {
        /// Words to search for
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Print recipes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Forget the last results and the history, then show the default query
    Clear,

    /// Inspect or reuse the search history
    History {
        /// History subcommand
        #[command(subcommand)]
        command: HistoryCommand,
    },

    /// Start an interactive search session
    Interactive,
}

/// History subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum HistoryCommand {
    /// List recent searches, most recent first
    List,

    /// Search again for the N-th history entry (1 = most recent)
    Select {
        /// Position in the list shown by `history list`
        index: usize,

        /// Print recipes as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
