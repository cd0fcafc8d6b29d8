use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    CategoryId, CategoryName, GameDescription, GameId, GamePath, GameTag, GameTitle, IframeUrl,
    PlaybackKind, StaticPath, ThumbnailPath,
};

/// How a game is played: embedded from an external URL or served from a
/// static path. Exactly one of the two locations exists per game.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Playback {
    Iframe(IframeUrl),
    Static(StaticPath),
}

impl Playback {
    pub fn kind(&self) -> PlaybackKind {
        match self {
            Self::Iframe(_) => PlaybackKind::Iframe,
            Self::Static(_) => PlaybackKind::Static,
        }
    }

    pub fn iframe_url(&self) -> Option<&IframeUrl> {
        match self {
            Self::Iframe(url) => Some(url),
            Self::Static(_) => None,
        }
    }

    pub fn static_path(&self) -> Option<&StaticPath> {
        match self {
            Self::Iframe(_) => None,
            Self::Static(path) => Some(path),
        }
    }
}

/// One playable entry of the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Game {
    pub id: GameId,
    pub title: GameTitle,
    pub description: Option<GameDescription>,
    /// Name of the referenced category, denormalized at creation time.
    pub category_name: CategoryName,
    pub category_id: CategoryId,
    pub thumbnail: ThumbnailPath,
    pub path: GamePath,
    pub featured: bool,
    pub playback: Playback,
    pub added_at: NaiveDate,
    pub tags: Vec<GameTag>,
}

/// A fully validated game awaiting an identifier from the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewGame {
    pub title: GameTitle,
    pub description: Option<GameDescription>,
    pub category_name: CategoryName,
    pub category_id: CategoryId,
    pub thumbnail: ThumbnailPath,
    pub path: GamePath,
    pub featured: bool,
    pub playback: Playback,
    pub added_at: NaiveDate,
    pub tags: Vec<GameTag>,
}

impl NewGame {
    /// Attaches the identifier assigned by the store.
    pub fn with_id(self, id: GameId) -> Game {
        Game {
            id,
            title: self.title,
            description: self.description,
            category_name: self.category_name,
            category_id: self.category_id,
            thumbnail: self.thumbnail,
            path: self.path,
            featured: self.featured,
            playback: self.playback,
            added_at: self.added_at,
            tags: self.tags,
        }
    }
}
