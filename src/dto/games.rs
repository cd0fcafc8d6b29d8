use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::game::{Game, Playback};
use crate::domain::types::{
    CategoryId, CategoryName, GameDescription, GameId, GamePath, GameTag, GameTitle, IframeUrl,
    PlaybackKind, StaticPath, ThumbnailPath, TypeConstraintError,
};
use crate::services::{ServiceError, ServiceResult};

/// Wire representation of a game. Exactly one of `iframeUrl` and
/// `staticPath` is present, matching `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDto {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: String,
    pub category_id: String,
    pub thumbnail: String,
    pub path: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(rename = "type")]
    pub kind: PlaybackKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iframe_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_path: Option<String>,
    pub added_at: NaiveDate,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<Game> for GameDto {
    fn from(value: Game) -> Self {
        let kind = value.playback.kind();
        let (iframe_url, static_path) = match value.playback {
            Playback::Iframe(url) => (Some(url.into_inner()), None),
            Playback::Static(path) => (None, Some(path.into_inner())),
        };

        Self {
            id: value.id.to_string(),
            title: value.title.into_inner(),
            description: value.description.map(GameDescription::into_inner),
            category: value.category_name.into_inner(),
            category_id: value.category_id.to_string(),
            thumbnail: value.thumbnail.into_inner(),
            path: value.path.into_inner(),
            featured: value.featured,
            kind,
            iframe_url,
            static_path,
            added_at: value.added_at,
            tags: value.tags.into_iter().map(GameTag::into_inner).collect(),
        }
    }
}

impl TryFrom<GameDto> for Game {
    type Error = TypeConstraintError;

    fn try_from(value: GameDto) -> Result<Self, Self::Error> {
        let playback = match value.kind {
            PlaybackKind::Iframe => {
                Playback::Iframe(IframeUrl::new(value.iframe_url.unwrap_or_default())?)
            }
            PlaybackKind::Static => {
                Playback::Static(StaticPath::new(value.static_path.unwrap_or_default())?)
            }
        };

        Ok(Self {
            id: GameId::parse(&value.id)?,
            title: GameTitle::new(value.title)?,
            description: value
                .description
                .filter(|d| !d.trim().is_empty())
                .map(GameDescription::new)
                .transpose()?,
            category_name: CategoryName::new(value.category)?,
            category_id: CategoryId::parse(&value.category_id)?,
            thumbnail: ThumbnailPath::new(value.thumbnail)?,
            path: GamePath::new(value.path)?,
            featured: value.featured,
            playback,
            added_at: value.added_at,
            tags: value
                .tags
                .into_iter()
                .map(GameTag::new)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

/// Result shape shared by the add and scrape endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl MutationResponse {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            id: None,
        }
    }
}

impl From<&ServiceResult<Game>> for MutationResponse {
    fn from(result: &ServiceResult<Game>) -> Self {
        match result {
            Ok(game) => Self {
                success: true,
                message: format!("added game: {}", game.title),
                id: Some(game.id.to_string()),
            },
            Err(err) => Self::failure(err.to_string()),
        }
    }
}

impl From<&ServiceError> for MutationResponse {
    fn from(err: &ServiceError) -> Self {
        Self::failure(err.to_string())
    }
}

/// Outcome of a directory import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportResponse {
    pub success: bool,
    pub message: String,
    pub imported: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_game() -> Game {
        Game {
            id: GameId::new(4).unwrap(),
            title: GameTitle::new("跳跃忍者").unwrap(),
            description: None,
            category_name: CategoryName::new("动作").unwrap(),
            category_id: CategoryId::new(3).unwrap(),
            thumbnail: ThumbnailPath::new("/games/thumbnails/ninja.jpg").unwrap(),
            path: GamePath::new("/games/ninja").unwrap(),
            featured: false,
            playback: Playback::Iframe(
                IframeUrl::new("https://www.example-game.com/ninja-jump").unwrap(),
            ),
            added_at: NaiveDate::from_ymd_opt(2023, 7, 5).unwrap(),
            tags: vec![GameTag::new("动作").unwrap()],
        }
    }

    #[test]
    fn serializes_game_in_catalog_shape() {
        let value = serde_json::to_value(GameDto::from(sample_game())).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "id": "4",
                "title": "跳跃忍者",
                "category": "动作",
                "categoryId": "3",
                "thumbnail": "/games/thumbnails/ninja.jpg",
                "path": "/games/ninja",
                "featured": false,
                "type": "iframe",
                "iframeUrl": "https://www.example-game.com/ninja-jump",
                "addedAt": "2023-07-05",
                "tags": ["动作"]
            })
        );
    }

    #[test]
    fn special_characters_survive_encoding() {
        let mut game = sample_game();
        game.title = GameTitle::new("It's a \"quoted\" \\ title',\n];").unwrap();

        let encoded = serde_json::to_string(&GameDto::from(game.clone())).unwrap();
        let decoded: GameDto = serde_json::from_str(&encoded).unwrap();

        assert_eq!(Game::try_from(decoded).unwrap(), game);
    }

    #[test]
    fn dto_with_mismatched_variant_is_rejected() {
        let mut dto = GameDto::from(sample_game());
        dto.kind = PlaybackKind::Static;

        assert!(Game::try_from(dto).is_err());
    }

    #[test]
    fn mutation_response_reports_success_and_failure() {
        let ok: ServiceResult<Game> = Ok(sample_game());
        let response = MutationResponse::from(&ok);
        assert!(response.success);
        assert_eq!(response.message, "added game: 跳跃忍者");
        assert_eq!(response.id.as_deref(), Some("4"));

        let err: ServiceResult<Game> = Err(ServiceError::UnknownCategory);
        let response = MutationResponse::from(&err);
        assert!(!response.success);
        assert_eq!(response.message, "unknown category");
        assert!(response.id.is_none());
    }
}
