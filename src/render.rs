//! Terminal rendering of controller views
//!
//! Everything here is a pure projection from data to text; the command
//! layer decides where the text goes.

use crate::controller::{Results, View};
use crate::error::Result;
use crate::recipe::RecipeRecord;
use colored::Colorize;
use prettytable::{format, row, Table};

/// Shown when a search produced nothing to display
pub const NO_RESULTS_MESSAGE: &str = "No recipes found. Try another word.";

/// Shown when the history list is empty
pub const NO_HISTORY_MESSAGE: &str = "No search history yet.";

/// Render a full view: heading, results and (when requested) history
pub fn render_view(view: &View) -> String {
    let mut out = String::new();

    if let Some(query) = &view.query {
        out.push_str(&format!("\nShowing results for {}\n", query.cyan().bold()));
    }

    out.push_str(&render_results(&view.results));

    if let Some(history) = &view.history {
        out.push('\n');
        out.push_str(&render_history(history));
    }

    out
}

pub fn render_results(results: &Results) -> String {
    match results {
        Results::Recipes(recipes) => render_recipes(recipes),
        Results::Empty => format!("{}\n", NO_RESULTS_MESSAGE.red()),
        Results::Invalid(message) => format!("{}\n", message.yellow()),
    }
}

/// Recipe cards as a bordered table
pub fn render_recipes(recipes: &[RecipeRecord]) -> String {
    if recipes.is_empty() {
        return format!("{}\n", NO_RESULTS_MESSAGE.red());
    }

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.set_titles(row![
        "#".bold(),
        "Title".bold(),
        "Publisher".bold(),
        "Image".bold(),
        "View Recipe".bold()
    ]);

    for (idx, recipe) in recipes.iter().enumerate() {
        table.add_row(row![
            idx + 1,
            recipe.title,
            recipe.publisher,
            recipe.image_url,
            recipe.source_url.green()
        ]);
    }

    table.to_string()
}

/// Numbered history list; the numbers are what `history select` takes
pub fn render_history(history: &[String]) -> String {
    if history.is_empty() {
        return format!("{}\n", NO_HISTORY_MESSAGE.yellow());
    }

    let mut out = format!("{}\n", "Recent searches:".bold());
    for (idx, item) in history.iter().enumerate() {
        out.push_str(&format!("  {} {}\n", format!("[{}]", idx + 1).cyan(), item));
    }
    out
}

/// Recipes as pretty-printed JSON, in the same shape the store caches
pub fn render_recipes_json(recipes: &[RecipeRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(recipes)?)
}
