use crate::db::{DbConnection, DbPool};
use crate::domain::category::Category;
use crate::domain::game::{Game, NewGame};
use crate::domain::types::{CategoryId, GameId};

pub mod category;
pub mod errors;
pub mod game;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Page selection for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

/// Sort order applied when listing games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GameOrder {
    /// Insertion order.
    #[default]
    Id,
    /// Newest `added_at` first; ties broken by the newer id.
    RecentlyAdded,
    /// Shuffled on every query.
    Random,
}

/// Query parameters used when listing games.
#[derive(Debug, Clone, Default)]
pub struct GameListQuery {
    /// Filter by category identifier.
    pub category_id: Option<CategoryId>,
    /// Filter by the featured flag.
    pub featured: Option<bool>,
    /// Sort order of the result.
    pub order: GameOrder,
    /// Pagination parameters.
    pub pagination: Option<Pagination>,
}

impl GameListQuery {
    pub fn category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }
    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = Some(featured);
        self
    }
    pub fn order(mut self, order: GameOrder) -> Self {
        self.order = order;
        self
    }
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// List every category in insertion order.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
}

/// Read-only operations for game entities.
pub trait GameReader {
    /// List games matching the supplied query, returning the unpaginated total.
    fn list_games(&self, query: GameListQuery) -> RepositoryResult<(usize, Vec<Game>)>;
    /// Retrieve a game by its identifier.
    fn get_game_by_id(&self, id: GameId) -> RepositoryResult<Option<Game>>;
}

/// Write operations for game entities.
pub trait GameWriter {
    /// Append a game, assigning it the next identifier.
    ///
    /// The game and its tags become visible to readers atomically, and
    /// concurrent callers are serialized so no two games share an id.
    fn create_game(&self, game: &NewGame) -> RepositoryResult<Game>;
}

/// Bulk loading of a complete catalog snapshot.
pub trait CatalogSeeder {
    /// Insert categories and games with their identifiers preserved. Either
    /// everything is written or nothing is.
    fn seed_catalog(&self, categories: &[Category], games: &[Game]) -> RepositoryResult<usize>;
}
