use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, CategoryName, CategorySlug, GameCount};

/// Named grouping of games.
///
/// `count` is a pre-computed tally maintained outside the catalog mutator; it
/// is not recomputed when games are added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub description: Option<String>,
    pub count: GameCount,
    pub slug: CategorySlug,
}
