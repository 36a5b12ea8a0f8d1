/*!
Command handlers for the CLI

Each handler builds a [`Controller`] from the loaded configuration, fires
one trigger and prints the resulting view:

- `load`: restore the last results or show the default query
- `search`: explicit search, recorded in the history
- `clear`: forget everything and show the default query
- `history`: list or re-run past searches
- `interactive`: keep a prompt open and fire triggers per line
*/

use crate::client::RecipeClient;
use crate::config::Config;
use crate::controller::{Controller, Results, Trigger, View};
use crate::error::Result;
use crate::render;
use crate::store::{KeyValueStore, MemoryStore, SqliteStore};
use std::sync::Arc;

pub mod history;
pub mod session;

/// Open the configured store, or an in-memory one for `--ephemeral`
pub fn open_store(config: &Config, ephemeral: bool) -> Result<Arc<dyn KeyValueStore>> {
    if ephemeral {
        tracing::debug!("Using in-memory store");
        return Ok(Arc::new(MemoryStore::new()));
    }

    let store = match &config.storage.path {
        Some(path) => SqliteStore::new_with_path(path)?,
        None => SqliteStore::new()?,
    };
    tracing::debug!("Using store at {}", store.path().display());
    Ok(Arc::new(store))
}

/// Wire the store and the HTTP client into a controller
pub fn build_controller(config: &Config, ephemeral: bool) -> Result<Controller> {
    let store = open_store(config, ephemeral)?;
    let client = RecipeClient::new(&config.api)?;
    Ok(Controller::new(
        store,
        Arc::new(client),
        config.search.clone(),
    ))
}

/// Print a view either as cards or, with `json`, as the bare recipe list
pub fn print_view(view: &View, json: bool) -> Result<()> {
    if !json {
        print!("{}", render::render_view(view));
        return Ok(());
    }

    match &view.results {
        Results::Invalid(message) => eprintln!("{}", message),
        results => println!("{}", render::render_recipes_json(results.recipes())?),
    }
    Ok(())
}

/// `recipefind load`
pub async fn run_load(config: Config, ephemeral: bool, json: bool) -> Result<()> {
    let controller = build_controller(&config, ephemeral)?;
    let view = controller.dispatch(Trigger::PageLoad).await?;
    print_view(&view, json)
}

/// `recipefind search <words...>`
pub async fn run_search(
    config: Config,
    ephemeral: bool,
    words: Vec<String>,
    json: bool,
) -> Result<()> {
    let controller = build_controller(&config, ephemeral)?;
    let view = controller.dispatch(Trigger::Submit(words.join(" "))).await?;
    print_view(&view, json)
}

/// `recipefind clear`
pub async fn run_clear(config: Config, ephemeral: bool) -> Result<()> {
    let controller = build_controller(&config, ephemeral)?;
    let view = controller.dispatch(Trigger::Clear).await?;
    print_view(&view, false)
}
