//! Key-value persistence for recipefind
//!
//! Everything the application remembers between runs lives behind the
//! [`KeyValueStore`] trait as plain string entries. Structured values
//! (recipe lists, search history) are JSON-encoded by their owners.

use crate::error::Result;

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Key holding the last explicitly searched query
pub const LAST_SEARCH_KEY: &str = "lastSearch";

/// Key holding the JSON-encoded recipe list of the most recent fetch
pub const RECIPES_KEY: &str = "recipesData";

/// Key holding the JSON-encoded search history list
pub const HISTORY_KEY: &str = "searchHistory";

/// Synchronous string key-value store
///
/// Implementations must treat `remove` of an absent key as a no-op and
/// `set` of an existing key as an overwrite.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key` from the store
    fn remove(&self, key: &str) -> Result<()>;
}
