//! Error conversion glue between layers.
//!
//! The domain layer must not depend on service or repository error types, so
//! the conversions live here.

use crate::domain::types::TypeConstraintError;
use crate::repository::RepositoryError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::Constraint(val.to_string())
    }
}
