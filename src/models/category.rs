use diesel::prelude::*;

use crate::domain::category::Category as DomainCategory;
use crate::domain::types::{CategoryName, CategorySlug, TypeConstraintError};

/// Diesel model representing the `categories` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::categories)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub count: i32,
    pub slug: String,
}

/// Insertable form of [`Category`]. Categories are only written by seeding,
/// which keeps their original identifiers.
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::categories)]
pub struct NewCategory {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub count: i32,
    pub slug: String,
}

impl TryFrom<Category> for DomainCategory {
    type Error = TypeConstraintError;

    fn try_from(category: Category) -> Result<Self, Self::Error> {
        Ok(Self {
            id: category.id.try_into()?,
            name: CategoryName::new(category.name)?,
            description: category.description,
            count: category.count.try_into()?,
            slug: CategorySlug::new(category.slug)?,
        })
    }
}

impl From<DomainCategory> for NewCategory {
    fn from(category: DomainCategory) -> Self {
        Self {
            id: category.id.get(),
            name: category.name.into_inner(),
            description: category.description,
            count: category.count.get(),
            slug: category.slug.into_inner(),
        }
    }
}
