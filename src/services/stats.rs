use crate::dto::categories::CategoryDto;
use crate::dto::stats::CatalogStatsDto;
use crate::repository::{CategoryReader, GameListQuery, GameOrder, GameReader, RepositoryError};

use super::{ServiceError, ServiceResult};

pub fn show_catalog_stats<R>(repo: &R) -> ServiceResult<CatalogStatsDto>
where
    R: CategoryReader + GameReader,
{
    let list_failed = |e: RepositoryError| {
        log::error!("Failed to list games: {e}");
        ServiceError::Persistence
    };

    let (total_games, latest) = repo
        .list_games(
            GameListQuery::default()
                .order(GameOrder::RecentlyAdded)
                .paginate(1, 1),
        )
        .map_err(list_failed)?;
    // Only the total is needed here.
    let (featured_games, _) = repo
        .list_games(GameListQuery::default().featured(true).paginate(1, 0))
        .map_err(list_failed)?;

    let categories = repo.list_categories().map_err(|e| {
        log::error!("Failed to list categories: {e}");
        ServiceError::Persistence
    })?;
    let total_categories = categories.len();
    let top_category = categories
        .into_iter()
        .min_by_key(|c| std::cmp::Reverse(c.count))
        .map(CategoryDto::from);

    Ok(CatalogStatsDto {
        total_games,
        featured_games,
        latest_game: latest.into_iter().next().map(|g| g.title.into_inner()),
        total_categories,
        top_category,
    })
}
