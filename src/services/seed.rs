//! Initial catalog snapshot loaded into an empty store.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::category::Category;
use crate::domain::game::Game;
use crate::dto::categories::CategoryDto;
use crate::dto::games::GameDto;
use crate::repository::{CatalogSeeder, CategoryReader};

use super::{ServiceError, ServiceResult};

/// Seed file layout: the same category and game shapes the API serves.
#[derive(Debug, Deserialize)]
pub struct SeedCatalog {
    pub categories: Vec<CategoryDto>,
    #[serde(default)]
    pub games: Vec<GameDto>,
}

/// Load `path` into the store unless it already holds categories.
///
/// Returns the number of inserted records, `0` when seeding was skipped.
pub fn seed_catalog_from_file<R>(path: &Path, repo: &R) -> ServiceResult<usize>
where
    R: CategoryReader + CatalogSeeder,
{
    let existing = repo.list_categories().map_err(|e| {
        log::error!("Failed to list categories: {e}");
        ServiceError::Persistence
    })?;
    if !existing.is_empty() {
        log::info!("Catalog already populated, skipping seed");
        return Ok(0);
    }

    let raw = fs::read_to_string(path).map_err(|e| {
        log::error!("Failed to read seed file {}: {e}", path.display());
        ServiceError::invalid(format!("cannot read seed file {}", path.display()))
    })?;
    let catalog: SeedCatalog = serde_json::from_str(&raw)
        .map_err(|e| ServiceError::invalid(format!("invalid seed file: {e}")))?;

    seed_catalog(catalog, repo)
}

pub fn seed_catalog<R>(catalog: SeedCatalog, repo: &R) -> ServiceResult<usize>
where
    R: CatalogSeeder,
{
    let categories = catalog
        .categories
        .into_iter()
        .map(Category::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    let games = catalog
        .games
        .into_iter()
        .map(Game::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(orphan) = games
        .iter()
        .find(|g| !categories.iter().any(|c| c.id == g.category_id))
    {
        return Err(ServiceError::invalid(format!(
            "seed game {} references unknown category {}",
            orphan.id, orphan.category_id
        )));
    }

    match repo.seed_catalog(&categories, &games) {
        Ok(inserted) => {
            log::info!(
                "Seeded catalog with {} categories and {} games",
                categories.len(),
                games.len()
            );
            Ok(inserted)
        }
        Err(e) => {
            log::error!("Failed to seed catalog: {e}");
            Err(ServiceError::Persistence)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::GameReader;
    use crate::repository::test::TestRepository;

    fn catalog_json() -> serde_json::Value {
        serde_json::json!({
            "categories": [
                { "id": "1", "name": "休闲", "count": 125, "slug": "casual" }
            ],
            "games": [{
                "id": "2", "title": "贪吃蛇", "category": "休闲", "categoryId": "1",
                "thumbnail": "/games/thumbnails/snake.jpg", "path": "/games/snake",
                "featured": true, "type": "static", "staticPath": "/games/snake/index.html",
                "addedAt": "2023-06-20", "tags": ["经典", "休闲"]
            }]
        })
    }

    #[test]
    fn seeds_empty_store_preserving_ids_and_paths() {
        let repo = TestRepository::default();
        let catalog: SeedCatalog = serde_json::from_value(catalog_json()).unwrap();

        assert_eq!(seed_catalog(catalog, &repo).unwrap(), 2);

        let game = repo
            .get_game_by_id(crate::domain::types::GameId::new(2).unwrap())
            .unwrap()
            .unwrap();
        assert_eq!(game.path.as_str(), "/games/snake");
        assert_eq!(game.tags.len(), 2);
    }

    #[test]
    fn rejects_games_with_unknown_categories() {
        let repo = TestRepository::default();
        let mut value = catalog_json();
        value["games"][0]["categoryId"] = serde_json::json!("5");
        let catalog: SeedCatalog = serde_json::from_value(value).unwrap();

        assert!(matches!(
            seed_catalog(catalog, &repo),
            Err(ServiceError::InvalidInput(_))
        ));
        assert!(repo.games().is_empty());
    }

    #[test]
    fn skips_populated_store() {
        let repo = TestRepository::default();
        let catalog: SeedCatalog = serde_json::from_value(catalog_json()).unwrap();
        seed_catalog(catalog, &repo).unwrap();

        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), catalog_json().to_string()).unwrap();

        assert_eq!(seed_catalog_from_file(file.path(), &repo).unwrap(), 0);
        assert_eq!(repo.games().len(), 1);
    }
}
