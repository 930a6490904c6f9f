use crate::db::{DbConnection, DbPool};
use crate::domain::category::Category;
use crate::domain::pagination::{Pagination, SearchQuery};
use crate::domain::types::CategoryId;

pub mod category;
pub mod errors;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// Page through categories matching the query's search terms.
    fn list_categories(&self, query: &SearchQuery) -> RepositoryResult<Pagination<Category>>;
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: &CategoryId) -> RepositoryResult<Option<Category>>;
}

/// Write operations for category entities.
pub trait CategoryWriter {
    /// Persist a new, already validated category.
    fn create_category(&self, category: &Category) -> RepositoryResult<Category>;
    /// Overwrite a stored category with the given state.
    fn update_category(&self, category: &Category) -> RepositoryResult<Category>;
    /// Delete a category by id. Unknown ids remove nothing.
    fn delete_category(&self, id: &CategoryId) -> RepositoryResult<usize>;
}
