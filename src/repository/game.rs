use std::collections::HashMap;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::category::Category;
use crate::domain::game::{Game, NewGame};
use crate::domain::types::GameId;
use crate::models::category::NewCategory as DbNewCategory;
use crate::models::game::{Game as DbGame, GameTag as DbGameTag, NewGame as DbNewGame};
use crate::repository::{
    CatalogSeeder, DieselRepository, GameListQuery, GameOrder, GameReader, GameWriter,
    RepositoryError, RepositoryResult,
};

diesel::define_sql_function!(fn random() -> diesel::sql_types::BigInt);

/// Load the tags of the given games keyed by game id, each list in position
/// order.
fn load_tags(
    conn: &mut SqliteConnection,
    game_ids: &[i32],
) -> RepositoryResult<HashMap<i32, Vec<String>>> {
    use crate::schema::game_tags;

    let rows = game_tags::table
        .filter(game_tags::game_id.eq_any(game_ids))
        .order((game_tags::game_id.asc(), game_tags::position.asc()))
        .load::<DbGameTag>(conn)?;

    let mut tags: HashMap<i32, Vec<String>> = HashMap::new();
    for row in rows {
        tags.entry(row.game_id).or_default().push(row.tag);
    }
    Ok(tags)
}

fn into_domain_games(conn: &mut SqliteConnection, rows: Vec<DbGame>) -> RepositoryResult<Vec<Game>> {
    let ids = rows.iter().map(|row| row.id).collect::<Vec<_>>();
    let mut tags = load_tags(conn, &ids)?;

    rows.into_iter()
        .map(|row| -> RepositoryResult<Game> {
            let row_tags = tags.remove(&row.id).unwrap_or_default();
            Ok(row.into_domain(row_tags)?)
        })
        .collect()
}

fn insert_game(
    conn: &mut SqliteConnection,
    game: &DbNewGame,
    tags: &[crate::domain::types::GameTag],
) -> RepositoryResult<i32> {
    use crate::schema::{game_tags, games};

    let id = diesel::insert_into(games::table)
        .values(game)
        .returning(games::id)
        .get_result::<i32>(conn)?;

    let tag_rows = DbGameTag::rows(id, tags);
    if !tag_rows.is_empty() {
        diesel::insert_into(game_tags::table)
            .values(&tag_rows)
            .execute(conn)?;
    }

    Ok(id)
}

impl GameReader for DieselRepository {
    fn list_games(&self, query: GameListQuery) -> RepositoryResult<(usize, Vec<Game>)> {
        use crate::schema::games;

        let mut conn = self.conn()?;

        let query_builder = || {
            let mut items = games::table.into_boxed::<diesel::sqlite::Sqlite>();

            if let Some(category_id) = query.category_id {
                items = items.filter(games::category_id.eq(category_id.get()));
            }

            if let Some(featured) = query.featured {
                items = items.filter(games::featured.eq(featured));
            }

            items
        };

        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items = query_builder();

        items = match query.order {
            GameOrder::Id => items.order(games::id.asc()),
            GameOrder::RecentlyAdded => items.order((games::added_at.desc(), games::id.desc())),
            GameOrder::Random => items.order(random()),
        };

        if let Some(pagination) = &query.pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            let limit = pagination.per_page as i64;
            items = items.offset(offset).limit(limit);
        }

        let rows = items.load::<DbGame>(&mut conn)?;
        let items = into_domain_games(&mut conn, rows)?;

        Ok((total, items))
    }

    fn get_game_by_id(&self, id: GameId) -> RepositoryResult<Option<Game>> {
        use crate::schema::games;

        let mut conn = self.conn()?;

        let row = games::table
            .filter(games::id.eq(id.get()))
            .first::<DbGame>(&mut conn)
            .optional()?;

        match row {
            Some(row) => Ok(into_domain_games(&mut conn, vec![row])?.pop()),
            None => Ok(None),
        }
    }
}

impl GameWriter for DieselRepository {
    fn create_game(&self, game: &NewGame) -> RepositoryResult<Game> {
        let mut conn = self.conn()?;
        let db_game: DbNewGame = game.into();

        // BEGIN IMMEDIATE: concurrent appends wait on the write lock.
        let id = conn.immediate_transaction::<_, RepositoryError, _>(|conn| {
            insert_game(conn, &db_game, &game.tags)
        })?;

        Ok(game.clone().with_id(GameId::new(id)?))
    }
}

impl CatalogSeeder for DieselRepository {
    fn seed_catalog(&self, categories: &[Category], games: &[Game]) -> RepositoryResult<usize> {
        use crate::schema::categories as categories_table;

        let mut conn = self.conn()?;

        conn.immediate_transaction::<_, RepositoryError, _>(|conn| {
            for category in categories {
                let db_category: DbNewCategory = category.clone().into();
                diesel::insert_into(categories_table::table)
                    .values(&db_category)
                    .execute(conn)?;
            }

            for game in games {
                let db_game: DbNewGame = game.into();
                insert_game(conn, &db_game, &game.tags)?;
            }

            Ok(categories.len() + games.len())
        })
    }
}
