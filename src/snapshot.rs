//! Session snapshot: the last query and the recipes it produced.
//!
//! The two halves live under separate keys. A snapshot only counts as
//! restorable when both are present, which means a default-query fetch
//! (which writes recipes but no query) is fetched again on the next load.

use crate::error::Result;
use crate::recipe::RecipeRecord;
use crate::store::{KeyValueStore, LAST_SEARCH_KEY, RECIPES_KEY};

/// A restorable view: the query shown in the input and its results
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub last_query: String,
    pub recipes: Vec<RecipeRecord>,
}

/// Read the snapshot, if both halves are stored and decodable
///
/// A stored query whose recipe list is missing or malformed is removed, so
/// the default-query fetch that follows cannot be paired with it later.
pub fn load(store: &dyn KeyValueStore) -> Result<Option<SessionSnapshot>> {
    let last_query = match store.get(LAST_SEARCH_KEY)? {
        Some(query) if !query.is_empty() => query,
        _ => return Ok(None),
    };

    let Some(raw) = store.get(RECIPES_KEY)? else {
        tracing::debug!("Dropping last query {:?} without cached recipes", last_query);
        store.remove(LAST_SEARCH_KEY)?;
        return Ok(None);
    };

    match serde_json::from_str::<Vec<RecipeRecord>>(&raw) {
        Ok(recipes) => Ok(Some(SessionSnapshot {
            last_query,
            recipes,
        })),
        Err(e) => {
            tracing::warn!("Ignoring malformed cached recipes: {}", e);
            clear(store)?;
            Ok(None)
        }
    }
}

/// Overwrite the cached recipe list
pub fn save_recipes(store: &dyn KeyValueStore, recipes: &[RecipeRecord]) -> Result<()> {
    store.set(RECIPES_KEY, &serde_json::to_string(recipes)?)
}

/// Overwrite both the last query and the cached recipe list
pub fn save(store: &dyn KeyValueStore, query: &str, recipes: &[RecipeRecord]) -> Result<()> {
    store.set(LAST_SEARCH_KEY, query)?;
    save_recipes(store, recipes)
}

pub fn clear(store: &dyn KeyValueStore) -> Result<()> {
    store.remove(LAST_SEARCH_KEY)?;
    store.remove(RECIPES_KEY)
}
