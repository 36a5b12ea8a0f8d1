//! Application controller
//!
//! Maps the four triggers (page load, query submission, clear, history
//! selection) onto the query client, the search history and the session
//! snapshot. Every handler re-reads the store, writes what changed and
//! returns a [`View`] describing what to render; nothing is cached on the
//! controller between triggers.

use crate::client::RecipeSource;
use crate::config::SearchConfig;
use crate::error::{Result, RecipefindError};
use crate::history::SearchHistory;
use crate::recipe::RecipeRecord;
use crate::snapshot;
use crate::store::KeyValueStore;

use regex::Regex;
use std::sync::{Arc, OnceLock};

fn disallowed_chars() -> &'static Regex {
    static DISALLOWED: OnceLock<Regex> = OnceLock::new();
    DISALLOWED.get_or_init(|| {
        Regex::new(r"[^a-zA-Z0-9\s]").expect("valid sanitization pattern")
    })
}

/// Strip every character that is not an ASCII letter, digit or whitespace
///
/// # Examples
///
/// ```
/// use recipefind::controller::sanitize_query;
///
/// assert_eq!(sanitize_query("mac & cheese!"), "mac  cheese");
/// ```
pub fn sanitize_query(input: &str) -> String {
    disallowed_chars().replace_all(input, "").into_owned()
}

/// Trim and sanitize raw input, rejecting it if fewer than `min_len`
/// characters survive
pub fn validate_query(raw: &str, min_len: usize) -> std::result::Result<String, RecipefindError> {
    let sanitized = sanitize_query(raw.trim());
    if sanitized.chars().count() < min_len {
        return Err(RecipefindError::Validation(validation_message(min_len)));
    }
    Ok(sanitized)
}

/// Message shown when a submission is too short
pub fn validation_message(min_len: usize) -> String {
    format!("Please type at least {} valid letters.", min_len)
}

/// What the results area should show
#[derive(Debug, Clone, PartialEq)]
pub enum Results {
    Recipes(Vec<RecipeRecord>),
    Empty,
    Invalid(String),
}

impl Results {
    pub fn from_recipes(recipes: Vec<RecipeRecord>) -> Self {
        if recipes.is_empty() {
            Results::Empty
        } else {
            Results::Recipes(recipes)
        }
    }

    /// The recipes on display, empty for `Empty` and `Invalid`
    pub fn recipes(&self) -> &[RecipeRecord] {
        match self {
            Results::Recipes(recipes) => recipes,
            Results::Empty | Results::Invalid(_) => &[],
        }
    }
}

/// Render instructions produced by a trigger
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    /// Query whose results are shown, if any
    pub query: Option<String>,
    pub results: Results,
    /// `Some` when the history list must be re-rendered
    pub history: Option<Vec<String>>,
}

/// The user-facing events the controller reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    PageLoad,
    Submit(String),
    Clear,
    /// 1-based position in the stored history
    SelectHistory(usize),
}

pub struct Controller {
    store: Arc<dyn KeyValueStore>,
    source: Arc<dyn RecipeSource>,
    history: SearchHistory,
    settings: SearchConfig,
}

impl Controller {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        source: Arc<dyn RecipeSource>,
        settings: SearchConfig,
    ) -> Self {
        let history = SearchHistory::new(store.clone(), settings.history_limit);
        Self {
            store,
            source,
            history,
            settings,
        }
    }

    pub async fn dispatch(&self, trigger: Trigger) -> Result<View> {
        match trigger {
            Trigger::PageLoad => self.page_load().await,
            Trigger::Submit(raw) => self.submit(&raw).await,
            Trigger::Clear => self.clear().await,
            Trigger::SelectHistory(index) => self.select_history_index(index).await,
        }
    }

    /// Stored history, most recent first
    pub fn history(&self) -> Result<Vec<String>> {
        self.history.get_history()
    }

    /// Restore the last session if one was saved, otherwise show the
    /// default query's results
    pub async fn page_load(&self) -> Result<View> {
        let history = self.history.get_history()?;

        if let Some(saved) = snapshot::load(self.store.as_ref())? {
            tracing::info!("Restoring cached results for {:?}", saved.last_query);
            return Ok(View {
                query: Some(saved.last_query),
                results: Results::from_recipes(saved.recipes),
                history: Some(history),
            });
        }

        let view = self.show_default().await?;
        Ok(View {
            history: Some(history),
            ..view
        })
    }

    /// Handle an explicit search submission
    ///
    /// Invalid input produces the validation message without touching the
    /// network or the store.
    pub async fn submit(&self, raw: &str) -> Result<View> {
        let query = match validate_query(raw, self.settings.min_query_len) {
            Ok(query) => query,
            Err(RecipefindError::Validation(message)) => {
                return Ok(View {
                    query: None,
                    results: Results::Invalid(message),
                    history: None,
                });
            }
            Err(e) => return Err(e.into()),
        };

        let recipes = self.fetch(&query).await;
        snapshot::save(self.store.as_ref(), &query, &recipes)?;
        let history = self.history.update_history(&query)?;

        Ok(View {
            query: Some(query),
            results: Results::from_recipes(recipes),
            history: Some(history),
        })
    }

    /// Forget the snapshot and history, then show the default query's results
    ///
    /// The default query is not added to the history.
    pub async fn clear(&self) -> Result<View> {
        snapshot::clear(self.store.as_ref())?;
        self.history.clear()?;
        tracing::info!("Cleared cached results and search history");

        let view = self.show_default().await?;
        Ok(View {
            history: Some(Vec::new()),
            ..view
        })
    }

    /// Search again for a history entry, verbatim
    ///
    /// The history order is left untouched.
    pub async fn select_history(&self, item: &str) -> Result<View> {
        let recipes = self.fetch(item).await;
        snapshot::save(self.store.as_ref(), item, &recipes)?;

        Ok(View {
            query: Some(item.to_string()),
            results: Results::from_recipes(recipes),
            history: None,
        })
    }

    /// Select the `index`-th (1-based) stored history entry
    ///
    /// # Errors
    ///
    /// Returns [`RecipefindError::HistorySelection`] if there is no such entry
    pub async fn select_history_index(&self, index: usize) -> Result<View> {
        let history = self.history.get_history()?;
        let item = index
            .checked_sub(1)
            .and_then(|i| history.get(i))
            .ok_or(RecipefindError::HistorySelection {
                index,
                len: history.len(),
            })?;

        self.select_history(item).await
    }

    async fn show_default(&self) -> Result<View> {
        let query = self.settings.default_query.clone();
        let recipes = self.fetch(&query).await;
        snapshot::save_recipes(self.store.as_ref(), &recipes)?;

        Ok(View {
            query: Some(query),
            results: Results::from_recipes(recipes),
            history: None,
        })
    }

    async fn fetch(&self, query: &str) -> Vec<RecipeRecord> {
        let outcome = self.source.search(query).await;
        if outcome.is_failure() {
            tracing::debug!("Search for {:?} failed, showing no results", query);
        }
        outcome.into_recipes()
    }
}
