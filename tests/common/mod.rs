//! Helpers for integration tests.

use catalog_admin::db::{DbPool, establish_connection_pool, run_migrations};
use catalog_admin::domain::category::Category;
use catalog_admin::repository::{CategoryWriter, DieselRepository};
use tempfile::NamedTempFile;

/// Temporary database used in integration tests.
pub struct TestDb {
    _tempfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("Failed to create temp file");
        let pool = establish_connection_pool(tempfile.path().to_str().unwrap())
            .expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        run_migrations(&mut conn).expect("Migrations failed");
        TestDb {
            _tempfile: tempfile,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    #[allow(dead_code)]
    pub fn repository(&self) -> DieselRepository {
        DieselRepository::new(self.pool())
    }
}

/// Store a new category with the given name and description.
#[allow(dead_code)]
pub fn seed_category(repo: &DieselRepository, name: &str, description: Option<&str>) -> Category {
    let category = Category::new_category(
        Some(name.to_string()),
        description.map(str::to_string),
        true,
    );
    repo.create_category(&category)
        .expect("should create category")
}
