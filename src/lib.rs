//! recipefind - recipe search library
//!
//! This library provides the pieces behind the `recipefind` binary: a
//! fail-soft client for a public recipe search API, a key-value store for
//! remembering the last search and a short history, and a controller that
//! ties them together per user trigger.
//!
//! # Architecture
//!
//! - `store`: key-value persistence (`SqliteStore`, `MemoryStore`)
//! - `client`: the search API client and its typed `FetchOutcome`
//! - `history`: the bounded, case-insensitively unique search history
//! - `snapshot`: last query and results, restored without a network call
//! - `controller`: page load, submit, clear and history-selection triggers
//! - `render`: terminal output for controller views
//! - `config`, `cli`, `commands`, `error`: the application shell
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use recipefind::{Config, Controller, MemoryStore, RecipeClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     let client = RecipeClient::new(&config.api)?;
//!     let controller = Controller::new(
//!         Arc::new(MemoryStore::new()),
//!         Arc::new(client),
//!         config.search.clone(),
//!     );
//!
//!     let view = controller.submit("pad thai").await?;
//!     println!("{} recipes", view.results.recipes().len());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod controller;
pub mod error;
pub mod history;
pub mod recipe;
pub mod render;
pub mod snapshot;
pub mod store;

// Re-export commonly used types
pub use client::{FetchFailure, FetchOutcome, RecipeClient, RecipeSource};
pub use config::Config;
pub use controller::{sanitize_query, Controller, Results, Trigger, View};
pub use error::{RecipefindError, Result};
pub use history::SearchHistory;
pub use recipe::RecipeRecord;
pub use store::{KeyValueStore, MemoryStore, SqliteStore};
