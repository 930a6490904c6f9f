use thiserror::Error;

/// Errors reported by the persistence gateway.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No connection could be checked out of the pool.
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    /// The database rejected or failed a statement.
    #[error("{0}")]
    Database(#[from] diesel::result::Error),
    /// A value does not satisfy a domain constraint.
    #[error("constraint violation: {0}")]
    Constraint(String),
    /// The search query names an unknown sort field or direction.
    #[error("invalid query: {0}")]
    InvalidQuery(String),
    /// Embedded migrations could not be applied.
    #[error("migration failed: {0}")]
    Migration(String),
}

impl RepositoryError {
    /// Message of the underlying failure, without the variant prefix.
    pub fn message(&self) -> String {
        match self {
            Self::Pool(e) => e.to_string(),
            Self::Database(e) => e.to_string(),
            Self::Constraint(message) | Self::InvalidQuery(message) | Self::Migration(message) => {
                message.clone()
            }
        }
    }
}

/// Convenient alias for results returned from repository functions.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
