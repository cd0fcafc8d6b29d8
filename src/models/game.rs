use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::game::{Game as DomainGame, NewGame as DomainNewGame, Playback};
use crate::domain::types::{
    CategoryName, GameDescription, GamePath, GameTag as DomainGameTag, GameTitle, IframeUrl,
    PlaybackKind, StaticPath, ThumbnailPath, TypeConstraintError,
};

/// Diesel model representing the `games` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::games)]
pub struct Game {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub category_id: i32,
    pub category_name: String,
    pub thumbnail: String,
    pub path: String,
    pub featured: bool,
    pub kind: String,
    pub iframe_url: Option<String>,
    pub static_path: Option<String>,
    pub added_at: NaiveDate,
}

/// Insertable form of [`Game`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::games)]
pub struct NewGame {
    pub id: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    pub category_id: i32,
    pub category_name: String,
    pub thumbnail: String,
    pub path: String,
    pub featured: bool,
    pub kind: String,
    pub iframe_url: Option<String>,
    pub static_path: Option<String>,
    pub added_at: NaiveDate,
}

/// Diesel model representing the `game_tags` table.
#[derive(Debug, Clone, Queryable, Insertable)]
#[diesel(table_name = crate::schema::game_tags)]
pub struct GameTag {
    pub game_id: i32,
    pub position: i32,
    pub tag: String,
}

impl Game {
    /// Combines the row with its ordered tags into a domain game.
    pub fn into_domain(self, tags: Vec<String>) -> Result<DomainGame, TypeConstraintError> {
        let playback = match PlaybackKind::try_from(self.kind.as_str())? {
            PlaybackKind::Iframe => Playback::Iframe(IframeUrl::new(
                self.iframe_url.unwrap_or_default(),
            )?),
            PlaybackKind::Static => Playback::Static(StaticPath::new(
                self.static_path.unwrap_or_default(),
            )?),
        };

        Ok(DomainGame {
            id: self.id.try_into()?,
            title: GameTitle::new(self.title)?,
            description: self.description.map(GameDescription::new).transpose()?,
            category_name: CategoryName::new(self.category_name)?,
            category_id: self.category_id.try_into()?,
            thumbnail: ThumbnailPath::new(self.thumbnail)?,
            path: GamePath::new(self.path)?,
            featured: self.featured,
            playback,
            added_at: self.added_at,
            tags: tags
                .into_iter()
                .map(DomainGameTag::new)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

impl GameTag {
    /// Tag rows for a game, numbered in insertion order.
    pub fn rows(game_id: i32, tags: &[DomainGameTag]) -> Vec<Self> {
        tags.iter()
            .enumerate()
            .map(|(position, tag)| Self {
                game_id,
                position: position as i32,
                tag: tag.as_str().to_string(),
            })
            .collect()
    }
}

impl From<&DomainNewGame> for NewGame {
    fn from(game: &DomainNewGame) -> Self {
        Self {
            id: None,
            title: game.title.as_str().to_string(),
            description: game.description.as_ref().map(|d| d.as_str().to_string()),
            category_id: game.category_id.get(),
            category_name: game.category_name.as_str().to_string(),
            thumbnail: game.thumbnail.as_str().to_string(),
            path: game.path.as_str().to_string(),
            featured: game.featured,
            kind: game.playback.kind().into(),
            iframe_url: game.playback.iframe_url().map(|u| u.as_str().to_string()),
            static_path: game.playback.static_path().map(|p| p.as_str().to_string()),
            added_at: game.added_at,
        }
    }
}

impl From<&DomainGame> for NewGame {
    fn from(game: &DomainGame) -> Self {
        Self {
            id: Some(game.id.get()),
            title: game.title.as_str().to_string(),
            description: game.description.as_ref().map(|d| d.as_str().to_string()),
            category_id: game.category_id.get(),
            category_name: game.category_name.as_str().to_string(),
            thumbnail: game.thumbnail.as_str().to_string(),
            path: game.path.as_str().to_string(),
            featured: game.featured,
            kind: game.playback.kind().into(),
            iframe_url: game.playback.iframe_url().map(|u| u.as_str().to_string()),
            static_path: game.playback.static_path().map(|p| p.as_str().to_string()),
            added_at: game.added_at,
        }
    }
}
