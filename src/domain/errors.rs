use thiserror::Error;

use crate::domain::validation::ValidationError;

/// Failure raised by a fail-fast validation handler.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more rules were violated; the first entry is the one that
    /// stopped validation.
    #[error("{}", first_message(.0))]
    Validation(Vec<ValidationError>),
}

impl DomainError {
    /// Errors carried by this failure, in the order they were raised.
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            Self::Validation(errors) => errors,
        }
    }
}

fn first_message(errors: &[ValidationError]) -> &str {
    errors.first().map(ValidationError::message).unwrap_or_default()
}
