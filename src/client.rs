//! Recipe search client
//!
//! Issues a single `GET {base}{path}?q=<query>` per search and normalizes the
//! response into a list of [`RecipeRecord`]s. The client never returns an
//! error for a failed search: every failure is logged and reported through
//! [`FetchOutcome`], which collapses to an empty list for rendering.
//!
//! There are no retries, no timeouts and no cancellation of in-flight
//! requests.

use crate::config::ApiConfig;
use crate::error::{Result, RecipefindError};
use crate::recipe::{RecipeRecord, SearchResponse};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use url::Url;

/// Why a search produced no usable response
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchFailure {
    /// The request never produced a response (DNS, connect, TLS, ...)
    #[error("transport failure: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success status other than 400
    #[error("HTTP status {0}")]
    Status(u16),

    /// The body could not be decoded as a search response
    #[error("malformed response body: {0}")]
    Parse(String),
}

/// Result of a single search request
///
/// `Found(vec![])` is a legitimately empty result; `NoResults` is the
/// endpoint rejecting the query with 400. Both render the same way as
/// `Failed`, but callers can tell them apart.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Found(Vec<RecipeRecord>),
    NoResults,
    Failed(FetchFailure),
}

impl FetchOutcome {
    /// Collapse to the renderable list: the recipes, or empty on any failure
    pub fn into_recipes(self) -> Vec<RecipeRecord> {
        match self {
            FetchOutcome::Found(recipes) => recipes,
            FetchOutcome::NoResults | FetchOutcome::Failed(_) => Vec::new(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, FetchOutcome::Failed(_))
    }
}

/// Anything that can answer a recipe search
///
/// The controller only talks to this trait so tests can substitute a fake.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Run one search for `query`
    async fn search(&self, query: &str) -> FetchOutcome;
}

/// HTTP client for the recipe search endpoint
///
/// # Examples
///
/// ```no_run
/// use recipefind::client::RecipeClient;
/// use recipefind::config::ApiConfig;
///
/// # async fn example() -> recipefind::error::Result<()> {
/// let client = RecipeClient::new(&ApiConfig::default())?;
/// let recipes = client.fetch_recipes("pizza").await;
/// println!("{} recipes", recipes.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RecipeClient {
    client: Client,
    endpoint: Url,
}

impl RecipeClient {
    /// Create a client for the configured endpoint
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL and search path do not form a valid URL
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let endpoint = config.search_url()?;
        let client = Client::builder()
            .build()
            .map_err(|e| RecipefindError::Fetch(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, endpoint })
    }

    /// The URL searches are sent to (without the query string)
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fail-soft search: the recipes for `query`, or empty on any failure
    pub async fn fetch_recipes(&self, query: &str) -> Vec<RecipeRecord> {
        self.search(query).await.into_recipes()
    }
}

#[async_trait]
impl RecipeSource for RecipeClient {
    async fn search(&self, query: &str) -> FetchOutcome {
        tracing::debug!("Searching recipes at {} for {:?}", self.endpoint, query);

        let response = match self
            .client
            .get(self.endpoint.clone())
            .query(&[("q", query)])
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Error fetching recipes: {}", e);
                return FetchOutcome::Failed(FetchFailure::Transport(e.to_string()));
            }
        };

        let status = response.status();
        if status == StatusCode::BAD_REQUEST {
            tracing::warn!("API returned 400 for query: {:?}", query);
            return FetchOutcome::NoResults;
        }

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Recipe API returned error {}: {}", status, error_text);
            return FetchOutcome::Failed(FetchFailure::Status(status.as_u16()));
        }

        let body: SearchResponse = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                tracing::error!("Failed to parse recipe search response: {}", e);
                return FetchOutcome::Failed(FetchFailure::Parse(e.to_string()));
            }
        };

        let recipes = body.recipes.unwrap_or_default();
        tracing::info!("Found {} recipes for {:?}", recipes.len(), query);
        FetchOutcome::Found(recipes)
    }
}
