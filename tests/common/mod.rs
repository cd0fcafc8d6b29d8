//! Helpers for integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use game_catalog::db::{DbPool, establish_connection_pool, run_migrations};
use game_catalog::domain::category::Category;
use game_catalog::domain::game::{NewGame, Playback};
use game_catalog::domain::types::{
    CategoryId, CategoryName, CategorySlug, GameCount, GamePath, GameTag, GameTitle, StaticPath,
    ThumbnailPath,
};
use tempfile::NamedTempFile;

/// Temporary database used in integration tests.
pub struct TestDb {
    _tempfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("Failed to create temp file");
        let pool = establish_connection_pool(tempfile.path().to_str().unwrap())
            .expect("Failed to establish SQLite connection.");
        run_migrations(&pool).expect("Migrations failed");
        TestDb {
            _tempfile: tempfile,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

pub fn category(id: i32, name: &str, slug: &str) -> Category {
    Category {
        id: CategoryId::new(id).expect("valid category id"),
        name: CategoryName::new(name).expect("valid category name"),
        description: None,
        count: GameCount::new(0).expect("valid count"),
        slug: CategorySlug::new(slug).expect("valid slug"),
    }
}

pub fn static_game(title: &str, category: &Category, added_at: NaiveDate) -> NewGame {
    let title = GameTitle::new(title).expect("valid title");
    let slug = GamePath::from_title(&title);
    let entry = format!("{}/index.html", slug.as_str());
    NewGame {
        path: slug,
        title,
        description: None,
        category_name: category.name.clone(),
        category_id: category.id,
        thumbnail: ThumbnailPath::new("/games/thumbnails/placeholder.jpg")
            .expect("valid thumbnail"),
        featured: false,
        playback: Playback::Static(StaticPath::new(entry).expect("valid static path")),
        added_at,
        tags: Vec::new(),
    }
}

pub fn tags(labels: &[&str]) -> Vec<GameTag> {
    labels
        .iter()
        .map(|label| GameTag::new(*label).expect("valid tag"))
        .collect()
}
