//! Controller behaviour across restarts, backed by a real SQLite file
use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use recipefind::config::{ApiConfig, SearchConfig};
use recipefind::controller::{Controller, Results, Trigger};
use recipefind::store::{KeyValueStore, SqliteStore, HISTORY_KEY, LAST_SEARCH_KEY, RECIPES_KEY};
use recipefind::{RecipeClient, RecipefindError};

mod common;
use common::{create_temp_store, recipe, FakeSource};

fn controller_with(store: SqliteStore, source: Arc<FakeSource>) -> Controller {
    Controller::new(Arc::new(store), source, SearchConfig::default())
}

#[tokio::test]
async fn test_results_survive_restart_without_refetch() {
    let (store, tmp) = create_temp_store();
    let db_path = tmp.path().join("store.db");

    let first = Arc::new(FakeSource::new().with_answer("pasta", vec![recipe("Carbonara")]));
    let controller = controller_with(store, first.clone());
    let view = controller.dispatch(Trigger::Submit("pasta".into())).await.unwrap();
    assert_eq!(view.results.recipes()[0].title, "Carbonara");

    // A fresh controller over the same file stands in for the next run
    let second = Arc::new(FakeSource::new());
    let reopened = SqliteStore::new_with_path(&db_path).unwrap();
    let controller = controller_with(reopened, second.clone());
    let view = controller.dispatch(Trigger::PageLoad).await.unwrap();

    assert_eq!(view.query.as_deref(), Some("pasta"));
    assert_eq!(view.results.recipes()[0].title, "Carbonara");
    assert_eq!(view.history, Some(vec!["pasta".to_string()]));
    assert!(second.calls().is_empty());
}

#[tokio::test]
async fn test_first_load_fetches_default_without_recording_it() {
    let (store, _tmp) = create_temp_store();
    let source = Arc::new(FakeSource::new().with_answer("pizza", vec![recipe("Margherita")]));
    let store = Arc::new(store);
    let controller = Controller::new(store.clone(), source.clone(), SearchConfig::default());

    let view = controller.dispatch(Trigger::PageLoad).await.unwrap();

    assert_eq!(source.calls(), vec!["pizza"]);
    assert_eq!(view.results.recipes().len(), 1);
    assert!(store.get(RECIPES_KEY).unwrap().is_some());
    assert!(store.get(LAST_SEARCH_KEY).unwrap().is_none());
    assert!(controller.history().unwrap().is_empty());
}

#[tokio::test]
async fn test_clear_forgets_everything_and_shows_default() {
    let (store, _tmp) = create_temp_store();
    let source = Arc::new(
        FakeSource::new()
            .with_answer("curry", vec![recipe("Katsu Curry")])
            .with_answer("pizza", vec![recipe("Margherita")]),
    );
    let store = Arc::new(store);
    let controller = Controller::new(store.clone(), source.clone(), SearchConfig::default());

    controller.submit("curry").await.unwrap();
    let view = controller.dispatch(Trigger::Clear).await.unwrap();

    assert_eq!(view.history, Some(Vec::new()));
    assert_eq!(view.results.recipes()[0].title, "Margherita");
    assert!(store.get(LAST_SEARCH_KEY).unwrap().is_none());
    assert!(store.get(HISTORY_KEY).unwrap().is_none());
    assert!(controller.history().unwrap().is_empty());
}

#[tokio::test]
async fn test_history_is_bounded_and_deduplicated_on_disk() {
    let (store, _tmp) = create_temp_store();
    let controller = controller_with(store, Arc::new(FakeSource::new()));

    for query in ["soup", "salad", "bread", "cake", "tacos", "ramen", "SOUP"] {
        controller.submit(query).await.unwrap();
    }

    assert_eq!(
        controller.history().unwrap(),
        vec!["SOUP", "ramen", "tacos", "cake", "bread"]
    );
}

#[tokio::test]
async fn test_select_history_keeps_order() {
    let (store, _tmp) = create_temp_store();
    let source = Arc::new(FakeSource::new().with_answer("soup", vec![recipe("Pho")]));
    let controller = controller_with(store, source.clone());

    controller.submit("soup").await.unwrap();
    controller.submit("salad").await.unwrap();

    let view = controller
        .dispatch(Trigger::SelectHistory(2))
        .await
        .unwrap();
    assert_eq!(view.query.as_deref(), Some("soup"));
    assert_eq!(view.results.recipes()[0].title, "Pho");
    assert_eq!(controller.history().unwrap(), vec!["salad", "soup"]);
}

#[tokio::test]
async fn test_select_history_out_of_range() {
    let (store, _tmp) = create_temp_store();
    let controller = controller_with(store, Arc::new(FakeSource::new()));

    let err = controller
        .dispatch(Trigger::SelectHistory(1))
        .await
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<RecipefindError>(),
        Some(RecipefindError::HistorySelection { index: 1, len: 0 })
    ));
}

#[tokio::test]
async fn test_failed_search_is_remembered_as_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/search"))
        .and(query_param("q", "zz9x"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "error": "not found" })))
        .expect(1)
        .mount(&server)
        .await;

    let (store, _tmp) = create_temp_store();
    let store = Arc::new(store);
    let client = RecipeClient::new(&ApiConfig {
        base_url: server.uri(),
        ..Default::default()
    })
    .unwrap();
    let controller = Controller::new(store.clone(), Arc::new(client), SearchConfig::default());

    let view = controller.submit("  zz9x!! ").await.unwrap();

    assert_eq!(view.query.as_deref(), Some("zz9x"));
    assert_eq!(view.results, Results::Empty);
    assert_eq!(store.get(LAST_SEARCH_KEY).unwrap().as_deref(), Some("zz9x"));
    assert_eq!(store.get(RECIPES_KEY).unwrap().as_deref(), Some("[]"));
    assert_eq!(controller.history().unwrap(), vec!["zz9x"]);
}
