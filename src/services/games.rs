use chrono::{NaiveDate, Utc};

use crate::domain::game::{Game, NewGame, Playback};
use crate::domain::types::{
    CategoryId, GameDescription, GameId, GamePath, GameTag, GameTitle, IframeUrl, PlaybackKind,
    StaticPath, ThumbnailPath,
};
use crate::dto::games::GameDto;
use crate::forms::games::{GameCandidate, GameListParams, ScrapeGamePayload};
use crate::repository::{CategoryReader, GameListQuery, GameOrder, GameReader, GameWriter};

use super::{ServiceError, ServiceResult};

/// Number of games returned by [`show_recent_games`] when no limit is given.
pub const DEFAULT_RECENT_LIMIT: usize = 8;

/// Number of games returned by [`show_popular_games`] when no limit is given.
pub const DEFAULT_POPULAR_LIMIT: usize = 12;

/// Validate a candidate and append it to the catalog.
///
/// Rules are checked in a fixed order and the first failure is returned:
/// title, category presence, category existence, thumbnail, type, then the
/// variant-specific location. Nothing is written unless every rule passes.
/// The id, path and `added_at` date are always derived here.
pub fn add_game<R>(candidate: GameCandidate, repo: &R) -> ServiceResult<Game>
where
    R: CategoryReader + GameWriter,
{
    let new_game = validate_candidate(candidate, repo, Utc::now().date_naive())?;

    match repo.create_game(&new_game) {
        Ok(game) => {
            log::info!("Added game {} ({})", game.id, game.title);
            Ok(game)
        }
        Err(e) => {
            log::error!("Failed to create game: {e}");
            Err(ServiceError::Persistence)
        }
    }
}

fn validate_candidate<R>(
    candidate: GameCandidate,
    repo: &R,
    added_at: NaiveDate,
) -> ServiceResult<NewGame>
where
    R: CategoryReader,
{
    let title =
        GameTitle::new(candidate.title).map_err(|_| ServiceError::invalid("title required"))?;

    if candidate.category_name.trim().is_empty() || candidate.category_id.trim().is_empty() {
        return Err(ServiceError::invalid("category required"));
    }

    // An id that does not even parse cannot reference a stored category.
    let category = match CategoryId::parse(&candidate.category_id) {
        Ok(category_id) => repo.get_category_by_id(category_id).map_err(|e| {
            log::error!("Failed to get category: {e}");
            ServiceError::Persistence
        })?,
        Err(_) => None,
    };
    let category = category.ok_or(ServiceError::UnknownCategory)?;

    let thumbnail = ThumbnailPath::new(candidate.thumbnail)
        .map_err(|_| ServiceError::invalid("thumbnail required"))?;

    let kind = candidate
        .kind
        .ok_or_else(|| ServiceError::invalid("type must be iframe or static"))?;

    let playback = match kind {
        PlaybackKind::Iframe => Playback::Iframe(
            IframeUrl::new(candidate.iframe_url.unwrap_or_default())
                .map_err(|_| ServiceError::invalid("iframeUrl required"))?,
        ),
        PlaybackKind::Static => Playback::Static(
            StaticPath::new(candidate.static_path.unwrap_or_default())
                .map_err(|_| ServiceError::invalid("staticPath required"))?,
        ),
    };

    let description = candidate
        .description
        .and_then(|description| GameDescription::new(description).ok());
    let tags = candidate
        .tags
        .into_iter()
        .filter_map(|tag| GameTag::new(tag).ok())
        .collect();

    Ok(NewGame {
        path: GamePath::from_title(&title),
        title,
        description,
        // The stored name always comes from the referenced category.
        category_name: category.name,
        category_id: category.id,
        thumbnail,
        featured: candidate.featured,
        playback,
        added_at,
        tags,
    })
}

/// Scrape a game page and add it to the catalog.
///
/// Scraping is not available; every request reports `NotImplemented`.
pub fn scrape_and_add_game(payload: ScrapeGamePayload) -> ServiceResult<Game> {
    log::warn!("Scrape requested for {} but scraping is not implemented", payload.url);
    Err(ServiceError::NotImplemented)
}

pub fn show_games<R>(params: GameListParams, repo: &R) -> ServiceResult<Vec<GameDto>>
where
    R: GameReader,
{
    let mut query = GameListQuery::default();

    if let Some(category) = params.category.as_deref().filter(|c| !c.trim().is_empty()) {
        match CategoryId::parse(category) {
            Ok(category_id) => query = query.category(category_id),
            Err(_) => return Ok(vec![]),
        }
    }

    if let Some(featured) = params.featured {
        query = query.featured(featured);
    }

    list(query, repo)
}

pub fn show_featured_games<R>(repo: &R) -> ServiceResult<Vec<GameDto>>
where
    R: GameReader,
{
    list(GameListQuery::default().featured(true), repo)
}

/// Most recently added games first.
pub fn show_recent_games<R>(limit: Option<usize>, repo: &R) -> ServiceResult<Vec<GameDto>>
where
    R: GameReader,
{
    let query = GameListQuery::default()
        .order(GameOrder::RecentlyAdded)
        .paginate(1, limit.unwrap_or(DEFAULT_RECENT_LIMIT));
    list(query, repo)
}

/// A random sample of the catalog.
pub fn show_popular_games<R>(limit: Option<usize>, repo: &R) -> ServiceResult<Vec<GameDto>>
where
    R: GameReader,
{
    let query = GameListQuery::default()
        .order(GameOrder::Random)
        .paginate(1, limit.unwrap_or(DEFAULT_POPULAR_LIMIT));
    list(query, repo)
}

pub fn show_game<R>(game_id: &str, repo: &R) -> ServiceResult<GameDto>
where
    R: GameReader,
{
    let game_id = GameId::parse(game_id).map_err(|_| ServiceError::NotFound)?;

    match repo.get_game_by_id(game_id) {
        Ok(Some(game)) => Ok(game.into()),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get game: {e}");
            Err(ServiceError::Persistence)
        }
    }
}

pub(crate) fn list<R>(query: GameListQuery, repo: &R) -> ServiceResult<Vec<GameDto>>
where
    R: GameReader,
{
    match repo.list_games(query) {
        Ok((_total, games)) => Ok(games.into_iter().map(GameDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list games: {e}");
            Err(ServiceError::Persistence)
        }
    }
}
