use std::path::{Component, Path};

use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::types::{CategoryId, PlaybackKind, TypeConstraintError};

/// Scalar form value that may arrive as a JSON bool, number or string.
///
/// HTML forms post checkboxes as `"on"` and ids as strings, while API clients
/// send native JSON types.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FormScalar {
    Bool(bool),
    Number(i64),
    Text(String),
}

impl FormScalar {
    pub fn into_text(self) -> String {
        match self {
            Self::Bool(value) => value.to_string(),
            Self::Number(value) => value.to_string(),
            Self::Text(value) => value,
        }
    }

    pub fn is_checked(&self) -> bool {
        match self {
            Self::Bool(value) => *value,
            Self::Number(value) => *value != 0,
            Self::Text(value) => matches!(value.trim(), "on" | "true" | "1"),
        }
    }
}

/// JSON body of the add-game endpoint.
///
/// Every field is optional so that missing or `null` values surface as the
/// catalog's own validation messages rather than as deserialization errors.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddGameForm {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category_id: Option<FormScalar>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub featured: Option<FormScalar>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub iframe_url: Option<String>,
    #[serde(default)]
    pub static_path: Option<String>,
    /// Comma separated labels.
    #[serde(default)]
    pub tags: Option<String>,
}

/// A proposed catalog entry: every game field except the derived `id`,
/// `path` and `added_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct GameCandidate {
    pub title: String,
    pub description: Option<String>,
    pub category_name: String,
    pub category_id: String,
    pub thumbnail: String,
    pub featured: bool,
    /// `None` when the submitted type is missing or not a known variant.
    pub kind: Option<PlaybackKind>,
    pub iframe_url: Option<String>,
    pub static_path: Option<String>,
    pub tags: Vec<String>,
}

impl From<AddGameForm> for GameCandidate {
    fn from(value: AddGameForm) -> Self {
        let kind = value
            .kind
            .and_then(|kind| PlaybackKind::try_from(kind.as_str()).ok());

        let tags = value
            .tags
            .map(|tags| split_tags(&tags))
            .unwrap_or_default();

        Self {
            title: value.title.unwrap_or_default(),
            description: value.description,
            category_name: value.category_name.unwrap_or_default(),
            category_id: value
                .category_id
                .map(FormScalar::into_text)
                .unwrap_or_default(),
            thumbnail: value.thumbnail.unwrap_or_default(),
            featured: value.featured.is_some_and(|f| f.is_checked()),
            kind,
            iframe_url: value.iframe_url,
            static_path: value.static_path,
            tags,
        }
    }
}

fn split_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// JSON body of the scrape endpoint.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ScrapeGameForm {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrapeGamePayload {
    pub url: String,
}

#[derive(Debug, Error)]
pub enum ScrapeGameFormError {
    #[error("url required")]
    MissingUrl,
}

impl From<ValidationErrors> for ScrapeGameFormError {
    fn from(_: ValidationErrors) -> Self {
        Self::MissingUrl
    }
}

impl TryFrom<ScrapeGameForm> for ScrapeGamePayload {
    type Error = ScrapeGameFormError;

    fn try_from(value: ScrapeGameForm) -> Result<Self, Self::Error> {
        value.validate()?;
        let url = value.url.trim();
        if url.is_empty() {
            return Err(ScrapeGameFormError::MissingUrl);
        }
        Ok(Self {
            url: url.to_string(),
        })
    }
}

/// JSON body of the directory import endpoint.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ImportGamesForm {
    #[validate(length(min = 1))]
    pub directory: String,
    pub category_id: FormScalar,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportGamesPayload {
    /// Directory relative to the public root, without surrounding slashes.
    pub directory: String,
    pub category_id: CategoryId,
}

#[derive(Debug, Error)]
pub enum ImportGamesFormError {
    #[error("Import form validation failed: {0}")]
    Validation(String),
    #[error("Import form contains invalid data: {0}")]
    TypeConstraint(String),
    #[error("directory must be a relative path inside the public folder")]
    UnsafeDirectory,
}

impl From<ValidationErrors> for ImportGamesFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for ImportGamesFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<ImportGamesForm> for ImportGamesPayload {
    type Error = ImportGamesFormError;

    fn try_from(value: ImportGamesForm) -> Result<Self, Self::Error> {
        value.validate()?;

        let directory = value.directory.trim().trim_matches('/').to_string();
        let only_normal_components = Path::new(&directory)
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
        if directory.is_empty() || !only_normal_components {
            return Err(ImportGamesFormError::UnsafeDirectory);
        }

        Ok(Self {
            directory,
            category_id: CategoryId::parse(&value.category_id.into_text())?,
        })
    }
}

/// Query string of the game listing endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct GameListParams {
    pub category: Option<String>,
    pub featured: Option<bool>,
}

/// Query string of the recent and popular games endpoints.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct LimitParams {
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(kind: &str) -> AddGameForm {
        AddGameForm {
            title: Some("Test".to_string()),
            category_id: Some(FormScalar::Text("1".to_string())),
            category_name: Some("休闲".to_string()),
            thumbnail: Some("/t.jpg".to_string()),
            kind: Some(kind.to_string()),
            static_path: Some("/g/test/index.html".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn add_game_form_splits_and_trims_tags() {
        let mut value = form("static");
        value.tags = Some(" classic, puzzle ,,  ".to_string());

        let candidate = GameCandidate::from(value);
        assert_eq!(candidate.tags, vec!["classic", "puzzle"]);
    }

    #[test]
    fn add_game_form_accepts_checkbox_and_numeric_ids() {
        let mut value = form("static");
        value.featured = Some(FormScalar::Text("on".to_string()));
        value.category_id = Some(FormScalar::Number(3));

        let candidate = GameCandidate::from(value);
        assert!(candidate.featured);
        assert_eq!(candidate.category_id, "3");
    }

    #[test]
    fn add_game_form_leaves_unknown_type_unset() {
        assert_eq!(GameCandidate::from(form("flash")).kind, None);
        assert_eq!(
            GameCandidate::from(form(" static ")).kind,
            Some(PlaybackKind::Static)
        );
    }

    #[test]
    fn add_game_form_treats_null_fields_as_missing() {
        let value: AddGameForm = serde_json::from_value(serde_json::json!({
            "title": null,
            "categoryId": null,
            "categoryName": null,
            "thumbnail": null,
            "type": null
        }))
        .unwrap();

        let candidate = GameCandidate::from(value);
        assert_eq!(candidate.title, "");
        assert_eq!(candidate.category_id, "");
        assert_eq!(candidate.thumbnail, "");
        assert_eq!(candidate.kind, None);
    }

    #[test]
    fn add_game_form_deserializes_from_camel_case_json() {
        let value: AddGameForm = serde_json::from_value(serde_json::json!({
            "title": "Fruit Ninja",
            "categoryId": "1",
            "categoryName": "休闲",
            "thumbnail": "/games/thumbnails/fruit-ninja.jpg",
            "featured": true,
            "type": "iframe",
            "iframeUrl": "https://example.com/fruit-ninja",
            "tags": "休闲,切水果"
        }))
        .unwrap();

        let candidate = GameCandidate::from(value);
        assert_eq!(candidate.kind, Some(PlaybackKind::Iframe));
        assert_eq!(
            candidate.iframe_url.as_deref(),
            Some("https://example.com/fruit-ninja")
        );
        assert!(candidate.featured);
        assert_eq!(candidate.tags.len(), 2);
    }

    #[test]
    fn scrape_form_requires_url() {
        let payload: Result<ScrapeGamePayload, _> = ScrapeGameForm {
            url: "   ".to_string(),
        }
        .try_into();
        assert!(matches!(payload, Err(ScrapeGameFormError::MissingUrl)));

        let payload: ScrapeGamePayload = ScrapeGameForm {
            url: " https://example.com/game ".to_string(),
        }
        .try_into()
        .unwrap();
        assert_eq!(payload.url, "https://example.com/game");
    }

    #[test]
    fn import_form_rejects_parent_directories() {
        let form = ImportGamesForm {
            directory: "../secrets".to_string(),
            category_id: FormScalar::Text("1".to_string()),
        };
        let payload: Result<ImportGamesPayload, _> = form.try_into();
        assert!(matches!(payload, Err(ImportGamesFormError::UnsafeDirectory)));
    }

    #[test]
    fn import_form_normalizes_slashes() {
        let form = ImportGamesForm {
            directory: "/games/new/".to_string(),
            category_id: FormScalar::Number(2),
        };
        let payload: ImportGamesPayload = form.try_into().unwrap();
        assert_eq!(payload.directory, "games/new");
        assert_eq!(payload.category_id.get(), 2);
    }

    #[test]
    fn limit_params_are_bounded() {
        assert!(LimitParams { limit: Some(8) }.validate().is_ok());
        assert!(LimitParams { limit: None }.validate().is_ok());
        assert!(LimitParams { limit: Some(0) }.validate().is_err());
        assert!(LimitParams { limit: Some(101) }.validate().is_err());
    }
}
