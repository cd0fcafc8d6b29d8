//! Strongly-typed value objects used by domain entities.
//!
//! Domain structs should carry these wrappers instead of raw primitives so that
//! identifiers, text values and numeric constraints are enforced at the
//! boundary.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// An identifier was zero or negative.
    #[error("{0} must be greater than zero")]
    NonPositiveId(&'static str),
    /// An identifier could not be parsed from its textual form.
    #[error("{0} must be a positive integer")]
    MalformedId(&'static str),
    /// A numeric value required to be non-negative was negative.
    #[error("{0} must be zero or greater")]
    NegativeNumber(&'static str),
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// Catch-all for custom validation failures.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

fn trim_and_require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(trimmed)
    }
}

/// Macro to generate lightweight newtypes for positive identifiers.
///
/// Identifiers travel as decimal strings on the wire, so each newtype can also
/// be parsed from text.
macro_rules! id_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId($field))
                }
            }

            /// Parses a trimmed decimal string into an identifier.
            pub fn parse(value: &str) -> Result<Self, TypeConstraintError> {
                let raw = value
                    .trim()
                    .parse::<i32>()
                    .map_err(|_| TypeConstraintError::MalformedId($field))?;
                Self::new(raw)
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<i32> for $name {
            fn eq(&self, other: &i32) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$name> for i32 {
            fn eq(&self, other: &$name) -> bool {
                *self == other.0
            }
        }
    };
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                trim_and_require_non_empty(value, $field).map(Self)
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl PartialEq<$name> for &str {
            fn eq(&self, other: &$name) -> bool {
                *self == other.as_str()
            }
        }
    };
}

macro_rules! non_negative_i32_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Constructs a value that must be zero or greater.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value >= 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NegativeNumber($field))
                }
            }

            /// Returns the raw `i32` value.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(GameId, "Unique identifier for a catalog game.", "game id");
id_newtype!(
    CategoryId,
    "Unique identifier for a category.",
    "category id"
);

non_empty_string_newtype!(GameTitle, "Human readable game title.", "title");
non_empty_string_newtype!(
    GameDescription,
    "Free text describing a game.",
    "description"
);
non_empty_string_newtype!(CategoryName, "Category display name.", "category");
non_empty_string_newtype!(CategorySlug, "URL slug of a category.", "slug");
non_empty_string_newtype!(
    ThumbnailPath,
    "Path or URL of a preview image.",
    "thumbnail"
);
non_empty_string_newtype!(IframeUrl, "URL embedded in an iframe.", "iframeUrl");
non_empty_string_newtype!(
    StaticPath,
    "Path of a statically hosted game entry point.",
    "staticPath"
);
non_empty_string_newtype!(GameTag, "Free text label attached to a game.", "tag");

non_negative_i32_newtype!(
    GameCount,
    "Pre-computed number of games in a category.",
    "count"
);

/// Site-relative path of a game's detail page.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct GamePath(String);

impl GamePath {
    pub const PREFIX: &'static str = "/games/";

    /// Derives the path from a title: surrounding whitespace is dropped, inner
    /// whitespace runs become a single hyphen and the result is lower-cased.
    pub fn from_title(title: &GameTitle) -> Self {
        let slug = title
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
            .to_lowercase();
        Self(format!("{}{slug}", Self::PREFIX))
    }

    /// Accepts a stored path verbatim as long as it lives under `/games/`.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = trim_and_require_non_empty(value, "path")?;
        if value.len() > Self::PREFIX.len() && value.starts_with(Self::PREFIX) {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::InvalidValue(format!("game path: {value}")))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for GamePath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Discriminator of a game's playback mechanism.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackKind {
    Iframe,
    Static,
}

impl PlaybackKind {
    /// String representation used in persistence and on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Iframe => "iframe",
            Self::Static => "static",
        }
    }
}

impl Display for PlaybackKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for PlaybackKind {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "iframe" => Ok(Self::Iframe),
            "static" => Ok(Self::Static),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "game type: {other}"
            ))),
        }
    }
}

impl TryFrom<String> for PlaybackKind {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<PlaybackKind> for String {
    fn from(value: PlaybackKind) -> Self {
        value.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_titles() {
        let value = GameTitle::new("  2048  ").unwrap();
        assert_eq!(value.as_str(), "2048");
    }

    #[test]
    fn rejects_blank_titles() {
        assert_eq!(
            GameTitle::new("   ").unwrap_err(),
            TypeConstraintError::EmptyString("title")
        );
    }

    #[test]
    fn rejects_non_positive_ids() {
        let err = GameId::new(0).unwrap_err();
        assert_eq!(err, TypeConstraintError::NonPositiveId("game id"));
    }

    #[test]
    fn parses_ids_from_strings() {
        assert_eq!(CategoryId::parse(" 3 ").unwrap().get(), 3);
        assert_eq!(
            CategoryId::parse("abc").unwrap_err(),
            TypeConstraintError::MalformedId("category id")
        );
        assert_eq!(
            CategoryId::parse("-1").unwrap_err(),
            TypeConstraintError::NonPositiveId("category id")
        );
    }

    #[test]
    fn derives_path_from_title() {
        let title = GameTitle::new("Fruit Ninja").unwrap();
        assert_eq!(GamePath::from_title(&title).as_str(), "/games/fruit-ninja");
    }

    #[test]
    fn derived_path_collapses_and_trims_whitespace() {
        let title = GameTitle::new("  Multi   Space  ").unwrap();
        assert_eq!(GamePath::from_title(&title).as_str(), "/games/multi-space");

        let title = GameTitle::new("Tab\tand\nNewline").unwrap();
        assert_eq!(
            GamePath::from_title(&title).as_str(),
            "/games/tab-and-newline"
        );
    }

    #[test]
    fn stored_paths_must_live_under_games() {
        assert!(GamePath::new("/games/snake").is_ok());
        assert!(GamePath::new("/games/").is_err());
        assert!(GamePath::new("/other/snake").is_err());
    }

    #[test]
    fn playback_kind_round_trips_through_strings() {
        assert_eq!(PlaybackKind::try_from("iframe").unwrap(), PlaybackKind::Iframe);
        assert_eq!(PlaybackKind::try_from(" static ").unwrap(), PlaybackKind::Static);
        assert!(PlaybackKind::try_from("flash").is_err());
    }

    #[test]
    fn game_count_rejects_negative_numbers() {
        assert_eq!(
            GameCount::new(-1).unwrap_err(),
            TypeConstraintError::NegativeNumber("count")
        );
    }
}
