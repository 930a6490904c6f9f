//! Validation handlers shared by domain aggregates.
//!
//! A [`Validator`] runs the rules of one aggregate and reports each violation
//! to a [`ValidationHandler`]. The handler decides what a violation means:
//! [`ThrowsValidationHandler`] stops at the first one by returning
//! [`DomainError`], while [`Notification`] records every violation and lets
//! the rules continue.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::domain::errors::DomainError;

/// A single human-readable rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Error-collection strategy used while validating an aggregate.
pub trait ValidationHandler {
    /// Report one violation.
    fn append(&mut self, error: ValidationError) -> Result<(), DomainError>;

    /// Report a batch produced by a nested validation.
    fn append_all(&mut self, errors: Vec<ValidationError>) -> Result<(), DomainError>;

    /// Violations recorded so far.
    fn errors(&self) -> &[ValidationError];

    fn has_errors(&self) -> bool {
        !self.errors().is_empty()
    }

    fn first_error(&self) -> Option<&ValidationError> {
        self.errors().first()
    }
}

/// Executes the rules of one aggregate snapshot against one handler.
pub trait Validator {
    /// Run every rule. Returns early only when the handler raises.
    fn validate(&mut self) -> Result<(), DomainError>;
}

/// Fail-fast handler: the first violation becomes a [`DomainError`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ThrowsValidationHandler;

impl ValidationHandler for ThrowsValidationHandler {
    fn append(&mut self, error: ValidationError) -> Result<(), DomainError> {
        Err(DomainError::Validation(vec![error]))
    }

    fn append_all(&mut self, errors: Vec<ValidationError>) -> Result<(), DomainError> {
        if errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(errors))
        }
    }

    fn errors(&self) -> &[ValidationError] {
        &[]
    }
}

/// Accumulating handler returned to callers as a value.
///
/// Use cases only hand a notification back when it holds at least one error.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    errors: Vec<ValidationError>,
}

impl Notification {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_error(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    pub fn from_message<S: Into<String>>(message: S) -> Self {
        Self::from_error(ValidationError::new(message))
    }

    /// Runs `validation` against a fresh notification.
    ///
    /// A batch raised by a nested fail-fast handler is folded into the
    /// notification instead of being propagated.
    pub fn collect<F>(validation: F) -> Self
    where
        F: FnOnce(&mut dyn ValidationHandler) -> Result<(), DomainError>,
    {
        let mut notification = Self::new();
        if let Err(DomainError::Validation(errors)) = validation(&mut notification) {
            notification.errors.extend(errors);
        }
        notification
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl ValidationHandler for Notification {
    fn append(&mut self, error: ValidationError) -> Result<(), DomainError> {
        self.errors.push(error);
        Ok(())
    }

    fn append_all(&mut self, errors: Vec<ValidationError>) -> Result<(), DomainError> {
        self.errors.extend(errors);
        Ok(())
    }

    fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}

impl Display for Notification {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            f.write_str(error.message())?;
        }
        Ok(())
    }
}
