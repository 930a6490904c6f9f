//! Category use cases.
//!
//! Create and update report invalid input and persistence failures as a
//! [`Notification`]; the two cannot be told apart without reading the
//! message. Lookups, listing and deletion fail with a typed [`ServiceError`].

use crate::commands::categories::{CreateCategoryCommand, UpdateCategoryCommand};
use crate::domain::category::Category;
use crate::domain::pagination::{Pagination, SearchQuery};
use crate::domain::types::CategoryId;
use crate::domain::validation::{Notification, ValidationHandler};
use crate::dto::categories::{
    CategoryListOutput, CategoryOutput, CreateCategoryOutput, UpdateCategoryOutput,
};
use crate::repository::{CategoryReader, CategoryWriter, RepositoryError};

use super::{ServiceError, ServiceResult};

pub fn create_category<R>(
    command: CreateCategoryCommand,
    repo: &R,
) -> Result<CreateCategoryOutput, Notification>
where
    R: CategoryWriter,
{
    let category = Category::new_category(command.name, command.description, command.active);

    let notification = Notification::collect(|handler| category.validate(handler));
    if notification.has_errors() {
        return Err(notification);
    }

    match repo.create_category(&category) {
        Ok(created) => {
            log::debug!("Created category {}", created.id());
            Ok(CreateCategoryOutput::from(&created))
        }
        Err(e) => {
            log::error!("Failed to create category: {e}");
            Err(Notification::from_message(e.message()))
        }
    }
}

/// Updates an existing category.
///
/// An unknown id fails with [`ServiceError::NotFound`] before any validation
/// runs. Everything after the lookup reports through the inner result.
pub fn update_category<R>(
    command: UpdateCategoryCommand,
    repo: &R,
) -> ServiceResult<Result<UpdateCategoryOutput, Notification>>
where
    R: CategoryReader + CategoryWriter,
{
    let id = CategoryId::new(command.id)?;
    let mut category = find_category(&id, repo)?;

    category.update(command.name, command.description, command.active);

    let notification = Notification::collect(|handler| category.validate(handler));
    if notification.has_errors() {
        return Ok(Err(notification));
    }

    match repo.update_category(&category) {
        Ok(_) => {
            log::debug!("Updated category {id}");
            Ok(Ok(UpdateCategoryOutput { id }))
        }
        Err(e) => {
            log::error!("Failed to update category {id}: {e}");
            Ok(Err(Notification::from_message(e.message())))
        }
    }
}

pub fn get_category<R>(id: &str, repo: &R) -> ServiceResult<CategoryOutput>
where
    R: CategoryReader,
{
    let id = CategoryId::new(id)?;
    find_category(&id, repo).map(CategoryOutput::from)
}

pub fn list_categories<R>(
    query: SearchQuery,
    repo: &R,
) -> ServiceResult<Pagination<CategoryListOutput>>
where
    R: CategoryReader,
{
    match repo.list_categories(&query) {
        Ok(page) => Ok(page.map(CategoryListOutput::from)),
        Err(RepositoryError::InvalidQuery(message)) => Err(ServiceError::InvalidQuery(message)),
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Deletes a category. Deleting an unknown id succeeds.
pub fn delete_category<R>(id: &str, repo: &R) -> ServiceResult<()>
where
    R: CategoryWriter,
{
    let id = CategoryId::new(id)?;

    match repo.delete_category(&id) {
        Ok(0) => {
            log::debug!("Category {id} was already absent");
            Ok(())
        }
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete category {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

fn find_category<R>(id: &CategoryId, repo: &R) -> ServiceResult<Category>
where
    R: CategoryReader,
{
    match repo.get_category_by_id(id) {
        Ok(Some(category)) => Ok(category),
        Ok(None) => Err(ServiceError::not_found(Category::ENTITY_NAME, id)),
        Err(e) => {
            log::error!("Failed to get category {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}
