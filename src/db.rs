//! SQLite connection pool and embedded migrations.

use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::define_sql_function;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::sql_types::{Nullable, Text};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use crate::repository::errors::{RepositoryError, RepositoryResult};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub const DEFAULT_POOL_SIZE: u32 = 8;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

define_sql_function! {
    /// Unicode-aware lower-casing. SQLite's built-in `lower` and `LIKE`
    /// only fold ASCII letters.
    fn unicode_lower(text: Nullable<Text>) -> Nullable<Text>;
}

/// Applied to every connection handed out by the pool.
#[derive(Debug, Clone, Copy)]
struct ConnectionOptions {
    busy_timeout: Duration,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(&format!(
            "PRAGMA busy_timeout = {};",
            self.busy_timeout.as_millis()
        ))
        .map_err(diesel::r2d2::Error::QueryError)?;

        unicode_lower_utils::register_impl(conn, |text: Option<String>| {
            text.map(|text| text.to_lowercase())
        })
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Build a pool with [`DEFAULT_POOL_SIZE`] connections.
pub fn establish_connection_pool(database_url: &str) -> RepositoryResult<DbPool> {
    establish_connection_pool_with_size(database_url, DEFAULT_POOL_SIZE)
}

pub fn establish_connection_pool_with_size(
    database_url: &str,
    max_size: u32,
) -> RepositoryResult<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder()
        .max_size(max_size)
        .connection_customizer(Box::new(ConnectionOptions {
            busy_timeout: BUSY_TIMEOUT,
        }))
        .build(manager)?;
    Ok(pool)
}

/// Apply pending migrations, returning how many ran.
pub fn run_migrations(conn: &mut SqliteConnection) -> RepositoryResult<usize> {
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| RepositoryError::Migration(e.to_string()))?;
    Ok(applied.len())
}

/// Check out a connection and apply pending migrations on it.
pub fn run_pool_migrations(pool: &DbPool) -> RepositoryResult<usize> {
    let mut conn = pool.get()?;
    run_migrations(&mut conn)
}
