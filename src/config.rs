//! Configuration management for recipefind
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.

use crate::error::{Result, RecipefindError};
use crate::history::DEFAULT_HISTORY_LIMIT;
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Main configuration structure for recipefind
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Search endpoint settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Query validation and history settings
    #[serde(default)]
    pub search: SearchConfig,
    /// Key-value store settings
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Recipe search endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme and host of the search API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the search resource, appended to `base_url`
    #[serde(default = "default_search_path")]
    pub search_path: String,
}

fn default_base_url() -> String {
    "https://forkify-api.herokuapp.com".to_string()
}

fn default_search_path() -> String {
    "/api/search".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            search_path: default_search_path(),
        }
    }
}

impl ApiConfig {
    /// Full search URL, without the query string
    pub fn search_url(&self) -> Result<Url> {
        let raw = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.search_path.trim_start_matches('/')
        );
        Url::parse(&raw).map_err(|e| {
            RecipefindError::Config(format!("Invalid search URL {}: {}", raw, e)).into()
        })
    }
}

/// Query validation and history behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Query fetched on first load and after clearing
    #[serde(default = "default_query")]
    pub default_query: String,

    /// Minimum sanitized query length accepted for a search
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,

    /// Number of past queries kept in the history list, at most 5
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn default_query() -> String {
    "pizza".to_string()
}

fn default_min_query_len() -> usize {
    3
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_query: default_query(),
            min_query_len: default_min_query_len(),
            history_limit: default_history_limit(),
        }
    }
}

/// Key-value store configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// SQLite file to use instead of the per-user data directory
    #[serde(default)]
    pub path: Option<String>,
}

impl Config {
    /// Load configuration from file with environment and CLI overrides
    ///
    /// A missing file is not an error; defaults are used instead.
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed
    pub fn load(path: &str, cli: &crate::cli::Cli) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::info!("Config file not found at {}, using defaults", path);
            Self::default()
        };

        config.apply_env_vars();
        config.apply_cli_overrides(cli);

        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| RecipefindError::Config(format!("Failed to read config file: {}", e)))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| RecipefindError::Config(format!("Failed to parse config: {}", e)).into())
    }

    fn apply_env_vars(&mut self) {
        if let Ok(base_url) = std::env::var("RECIPEFIND_API_BASE") {
            self.api.base_url = base_url;
        }

        if let Ok(query) = std::env::var("RECIPEFIND_DEFAULT_QUERY") {
            self.search.default_query = query;
        }

        if let Ok(limit) = std::env::var("RECIPEFIND_HISTORY_LIMIT") {
            if let Ok(value) = limit.parse() {
                self.search.history_limit = value;
            } else {
                tracing::warn!("Invalid RECIPEFIND_HISTORY_LIMIT: {}", limit);
            }
        }

        if let Ok(db_path) = std::env::var(crate::store::sqlite::STORE_DB_ENV) {
            self.storage.path = Some(db_path);
        }
    }

    fn apply_cli_overrides(&mut self, cli: &crate::cli::Cli) {
        if cli.verbose {
            tracing::debug!("Verbose mode enabled");
        }

        if let Some(api_base) = &cli.api_base {
            self.api.base_url = api_base.clone();
        }

        if let Some(storage_path) = &cli.storage_path {
            self.storage.path = Some(storage_path.clone());
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns error if any validation check fails
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(RecipefindError::Config("api.base_url cannot be empty".to_string()).into());
        }

        let url = self.api.search_url()?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(RecipefindError::Config(format!(
                "api.base_url must use http or https, got: {}",
                url.scheme()
            ))
            .into());
        }

        if self.search.default_query.trim().is_empty() {
            return Err(
                RecipefindError::Config("search.default_query cannot be empty".to_string()).into(),
            );
        }

        if self.search.min_query_len == 0 {
            return Err(RecipefindError::Config(
                "search.min_query_len must be greater than 0".to_string(),
            )
            .into());
        }

        if self.search.history_limit == 0 {
            return Err(RecipefindError::Config(
                "search.history_limit must be greater than 0".to_string(),
            )
            .into());
        }

        if self.search.history_limit > DEFAULT_HISTORY_LIMIT {
            return Err(RecipefindError::Config(format!(
                "search.history_limit cannot exceed {}",
                DEFAULT_HISTORY_LIMIT
            ))
            .into());
        }

        Ok(())
    }
}
