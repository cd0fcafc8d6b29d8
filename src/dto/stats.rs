use serde::{Deserialize, Serialize};

use crate::dto::categories::CategoryDto;

/// Dashboard aggregates over the whole catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStatsDto {
    pub total_games: usize,
    pub featured_games: usize,
    /// Title of the most recently added game.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_game: Option<String>,
    pub total_categories: usize,
    /// Category with the highest stored count; the first one wins ties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_category: Option<CategoryDto>,
}
