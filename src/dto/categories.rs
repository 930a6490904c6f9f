use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::category::Category;
use crate::domain::types::CategoryId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateCategoryOutput {
    pub id: CategoryId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateCategoryOutput {
    pub id: CategoryId,
}

/// Full view of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryOutput {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

/// Row of a category listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryListOutput {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
    pub created_at: NaiveDateTime,
    pub deleted_at: Option<NaiveDateTime>,
}

impl From<&Category> for CreateCategoryOutput {
    fn from(value: &Category) -> Self {
        Self {
            id: value.id().clone(),
        }
    }
}

impl From<Category> for CategoryOutput {
    fn from(value: Category) -> Self {
        Self {
            id: value.id().clone(),
            name: value.name().unwrap_or_default().to_string(),
            description: value.description().map(str::to_string),
            active: value.is_active(),
            created_at: value.created_at(),
            updated_at: value.updated_at(),
            deleted_at: value.deleted_at(),
        }
    }
}

impl From<Category> for CategoryListOutput {
    fn from(value: Category) -> Self {
        Self {
            id: value.id().clone(),
            name: value.name().unwrap_or_default().to_string(),
            description: value.description().map(str::to_string),
            active: value.is_active(),
            created_at: value.created_at(),
            deleted_at: value.deleted_at(),
        }
    }
}
