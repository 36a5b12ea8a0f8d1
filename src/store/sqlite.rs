use crate::error::{Result, RecipefindError};
use crate::store::KeyValueStore;
use anyhow::Context;
use directories::ProjectDirs;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the default database location
pub const STORE_DB_ENV: &str = "RECIPEFIND_STORE_DB";

/// Durable key-value store backed by a single SQLite table
pub struct SqliteStore {
    db_path: PathBuf,
}

impl SqliteStore {
    /// Create a store in the user's data directory
    ///
    /// The location can be overridden with `RECIPEFIND_STORE_DB`.
    pub fn new() -> Result<Self> {
        if let Ok(override_path) = std::env::var(STORE_DB_ENV) {
            return Self::new_with_path(override_path);
        }

        let proj_dirs = ProjectDirs::from("com", "recipefind", "recipefind")
            .ok_or_else(|| RecipefindError::Storage("Could not determine data directory".into()))?;

        let data_dir = proj_dirs.data_dir();
        std::fs::create_dir_all(data_dir)
            .context("Failed to create data directory")
            .map_err(|e| RecipefindError::Storage(e.to_string()))?;

        let storage = Self {
            db_path: data_dir.join("store.db"),
        };
        storage.init()?;

        Ok(storage)
    }

    /// Create a store that uses the specified database path.
    ///
    /// Parent directories are created as needed.
    ///
    /// # Examples
    ///
    /// ```
    /// use recipefind::store::{KeyValueStore, SqliteStore};
    ///
    /// let dir = tempfile::tempdir().unwrap();
    /// let store = SqliteStore::new_with_path(dir.path().join("store.db")).unwrap();
    /// store.set("lastSearch", "pizza").unwrap();
    /// ```
    pub fn new_with_path<P: Into<PathBuf>>(db_path: P) -> Result<Self> {
        let db_path = db_path.into();

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .context("Failed to create parent directory for database")
                .map_err(|e| RecipefindError::Storage(e.to_string()))?;
        }

        let storage = Self { db_path };
        storage.init()?;
        Ok(storage)
    }

    /// Path of the backing database file
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    fn open(&self) -> Result<Connection> {
        Connection::open(&self.db_path)
            .context("Failed to open database")
            .map_err(|e| RecipefindError::Storage(e.to_string()).into())
    }

    fn init(&self) -> Result<()> {
        let conn = self.open()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS entries (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )
        .context("Failed to create tables")
        .map_err(|e| RecipefindError::Storage(e.to_string()))?;

        tracing::debug!("Key-value store ready at {}", self.db_path.display());
        Ok(())
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.open()?;

        let value = conn
            .query_row(
                "SELECT value FROM entries WHERE key = ?",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()
            .context("Failed to read entry")
            .map_err(|e| RecipefindError::Storage(e.to_string()))?;

        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.open()?;

        conn.execute(
            "INSERT INTO entries (key, value) VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )
        .context("Failed to write entry")
        .map_err(|e| RecipefindError::Storage(e.to_string()))?;

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let conn = self.open()?;

        conn.execute("DELETE FROM entries WHERE key = ?", params![key])
            .context("Failed to delete entry")
            .map_err(|e| RecipefindError::Storage(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;
    use tempfile::tempdir;

    /// Returns the `TempDir` alongside the store so the directory outlives it.
    fn create_test_store() -> (SqliteStore, tempfile::TempDir) {
        let dir = tempdir().expect("failed to create tempdir");
        let store =
            SqliteStore::new_with_path(dir.path().join("store.db")).expect("failed to create store");
        (store, dir)
    }

    #[test]
    fn test_init_creates_table() {
        let (store, _dir) = create_test_store();
        let conn = Connection::open(store.path()).expect("open connection");
        let count: i64 = conn
            .query_row(
                "SELECT count(*) FROM sqlite_master WHERE type='table' AND name='entries'",
                [],
                |r| r.get(0),
            )
            .expect("query row");
        assert_eq!(count, 1);
    }

    #[test]
    fn test_get_missing_key_returns_none() {
        let (store, _dir) = create_test_store();
        assert!(store.get("lastSearch").expect("get failed").is_none());
    }

    #[test]
    fn test_set_then_overwrite() {
        let (store, _dir) = create_test_store();
        store.set("lastSearch", "pizza").expect("set failed");
        store.set("lastSearch", "pasta").expect("overwrite failed");
        assert_eq!(
            store.get("lastSearch").expect("get failed").as_deref(),
            Some("pasta")
        );
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (store, _dir) = create_test_store();
        store.set("recipesData", "[]").expect("set failed");
        store.remove("recipesData").expect("first remove failed");
        store.remove("recipesData").expect("second remove failed");
        assert!(store.get("recipesData").expect("get failed").is_none());
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempdir().expect("failed to create tempdir");
        let path = dir.path().join("store.db");
        {
            let store = SqliteStore::new_with_path(&path).expect("create failed");
            store
                .set("searchHistory", r#"["pasta","pizza"]"#)
                .expect("set failed");
        }
        let reopened = SqliteStore::new_with_path(&path).expect("reopen failed");
        assert_eq!(
            reopened.get("searchHistory").expect("get failed").as_deref(),
            Some(r#"["pasta","pizza"]"#)
        );
    }

    #[test]
    #[serial]
    fn test_new_respects_env_override() {
        let dir = tempdir().expect("failed to create tempdir");
        let db_path = dir.path().join("nested").join("store.db");
        env::set_var(STORE_DB_ENV, db_path.to_string_lossy().to_string());

        let store = SqliteStore::new().expect("new failed with env override");
        assert_eq!(store.path(), db_path.as_path());
        assert!(db_path.parent().unwrap().exists());

        env::remove_var(STORE_DB_ENV);
    }
}
