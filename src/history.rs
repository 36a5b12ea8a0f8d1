//! Search history
//!
//! A short most-recent-first list of past queries, kept in the store under
//! [`HISTORY_KEY`] as a JSON array of strings. Entries are unique ignoring
//! case; re-submitting a query moves it to the front with its new casing.

use crate::error::Result;
use crate::store::{KeyValueStore, HISTORY_KEY};
use std::sync::Arc;

/// Default number of entries kept
pub const DEFAULT_HISTORY_LIMIT: usize = 5;

/// Move `query` to the front of `history`, dropping any case-insensitive
/// duplicate and anything past `limit`.
pub fn push_recent(history: &mut Vec<String>, query: &str, limit: usize) {
    let needle = query.to_lowercase();
    history.retain(|item| item.to_lowercase() != needle);
    history.insert(0, query.to_string());
    history.truncate(limit);
}

/// Reads and updates the persisted history list
pub struct SearchHistory {
    store: Arc<dyn KeyValueStore>,
    limit: usize,
}

impl SearchHistory {
    pub fn new(store: Arc<dyn KeyValueStore>, limit: usize) -> Self {
        Self { store, limit }
    }

    /// The stored history, most recent first
    ///
    /// Absent or unreadable JSON is treated as an empty history. A stored
    /// list longer than the limit is cut down to it.
    pub fn get_history(&self) -> Result<Vec<String>> {
        let Some(raw) = self.store.get(HISTORY_KEY)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(mut history) => {
                history.truncate(self.limit);
                Ok(history)
            }
            Err(e) => {
                tracing::warn!("Ignoring malformed search history: {}", e);
                Ok(Vec::new())
            }
        }
    }

    /// Record `query` as the most recent search and return the new list
    pub fn update_history(&self, query: &str) -> Result<Vec<String>> {
        let mut history = self.get_history()?;
        push_recent(&mut history, query, self.limit);

        self.store
            .set(HISTORY_KEY, &serde_json::to_string(&history)?)?;
        tracing::debug!("Search history now has {} entries", history.len());

        Ok(history)
    }

    /// Forget every stored query
    pub fn clear(&self) -> Result<()> {
        self.store.remove(HISTORY_KEY)
    }
}
