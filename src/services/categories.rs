use crate::domain::types::CategoryId;
use crate::dto::categories::CategoryDto;
use crate::dto::games::GameDto;
use crate::repository::{CategoryReader, GameListQuery, GameReader};

use super::games::list;
use super::{ServiceError, ServiceResult};

pub fn show_categories<R>(repo: &R) -> ServiceResult<Vec<CategoryDto>>
where
    R: CategoryReader,
{
    match repo.list_categories() {
        Ok(categories) => Ok(categories.into_iter().map(CategoryDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            Err(ServiceError::Persistence)
        }
    }
}

pub fn show_category<R>(category_id: &str, repo: &R) -> ServiceResult<CategoryDto>
where
    R: CategoryReader,
{
    let category_id = CategoryId::parse(category_id).map_err(|_| ServiceError::NotFound)?;

    match repo.get_category_by_id(category_id) {
        Ok(Some(category)) => Ok(category.into()),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            Err(ServiceError::Persistence)
        }
    }
}

/// Games of one category; an unknown category is `NotFound` rather than an
/// empty list.
pub fn show_category_games<R>(category_id: &str, repo: &R) -> ServiceResult<Vec<GameDto>>
where
    R: CategoryReader + GameReader,
{
    let category_id = CategoryId::parse(category_id).map_err(|_| ServiceError::NotFound)?;

    match repo.get_category_by_id(category_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            return Err(ServiceError::Persistence);
        }
    }

    list(GameListQuery::default().category(category_id), repo)
}
