use thiserror::Error;

use crate::domain::types::CategoryId;

/// Typed failures of the use-case layer.
///
/// Validation and persistence problems of create/update never appear here;
/// they are returned as a [`Notification`](crate::domain::validation::Notification).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Requested resource was not found.
    #[error("{entity} with ID {id} was not found")]
    NotFound { entity: &'static str, id: String },
    /// An input value could not be turned into a domain type.
    #[error("{0}")]
    TypeConstraint(String),
    /// The listing query was rejected by the gateway.
    #[error("invalid query: {0}")]
    InvalidQuery(String),
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

impl ServiceError {
    pub fn not_found(entity: &'static str, id: &CategoryId) -> Self {
        Self::NotFound {
            entity,
            id: id.as_str().to_string(),
        }
    }
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
