use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::types::{CategoryId, CategoryName, CategorySlug, GameCount, TypeConstraintError};

/// Wire representation of a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDto {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub count: i32,
    pub slug: String,
}

impl From<Category> for CategoryDto {
    fn from(value: Category) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name.into_inner(),
            description: value.description,
            count: value.count.get(),
            slug: value.slug.into_inner(),
        }
    }
}

impl TryFrom<CategoryDto> for Category {
    type Error = TypeConstraintError;

    fn try_from(value: CategoryDto) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CategoryId::parse(&value.id)?,
            name: CategoryName::new(value.name)?,
            description: value.description.filter(|d| !d.trim().is_empty()),
            count: GameCount::new(value.count)?,
            slug: CategorySlug::new(value.slug)?,
        })
    }
}
