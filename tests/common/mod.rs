use async_trait::async_trait;
use recipefind::client::{FetchOutcome, RecipeSource};
use recipefind::recipe::RecipeRecord;
use recipefind::store::SqliteStore;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::TempDir;

#[allow(dead_code)]
pub fn create_temp_store() -> (SqliteStore, TempDir) {
    let tmp = TempDir::new().expect("failed to create tempdir");
    let db_path = tmp.path().join("store.db");
    let store = SqliteStore::new_with_path(db_path).expect("failed to create sqlite store");
    (store, tmp)
}

#[allow(dead_code)]
pub fn temp_config_file(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("failed to create tempdir");
    let config_path = temp_dir.path().join("config.yaml");
    fs::write(&config_path, contents).expect("failed to write config file");
    (temp_dir, config_path)
}

#[allow(dead_code)]
pub fn recipe(title: &str) -> RecipeRecord {
    RecipeRecord::new(
        title,
        "Test Kitchen",
        format!("http://img.example/{}.jpg", title.replace(' ', "_")),
        format!("http://recipes.example/{}", title.replace(' ', "_")),
    )
}

/// Recipe source answering from a fixed table and recording every query
#[allow(dead_code)]
#[derive(Default)]
pub struct FakeSource {
    answers: HashMap<String, Vec<RecipeRecord>>,
    calls: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_answer(mut self, query: &str, recipes: Vec<RecipeRecord>) -> Self {
        self.answers.insert(query.to_string(), recipes);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecipeSource for FakeSource {
    async fn search(&self, query: &str) -> FetchOutcome {
        self.calls.lock().unwrap().push(query.to_string());
        match self.answers.get(query) {
            Some(recipes) => FetchOutcome::Found(recipes.clone()),
            None => FetchOutcome::NoResults,
        }
    }
}
