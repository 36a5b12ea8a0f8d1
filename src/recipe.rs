use serde::{Deserialize, Serialize};

/// A single recipe as returned by the search API
///
/// Field names match the upstream JSON (`image_url`, `source_url`), which is
/// also the encoding used when the list is cached in the store. Extra
/// upstream fields are ignored and missing ones decode as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecipeRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub source_url: String,
}

impl RecipeRecord {
    pub fn new(
        title: impl Into<String>,
        publisher: impl Into<String>,
        image_url: impl Into<String>,
        source_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            publisher: publisher.into(),
            image_url: image_url.into(),
            source_url: source_url.into(),
        }
    }
}

/// Body of a search response; `recipes` may be absent
#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub recipes: Option<Vec<RecipeRecord>>,
}
