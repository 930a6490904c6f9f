//! Strongly-typed value objects used by domain entities.
//!
//! Domain structs should carry these wrappers instead of raw primitives so that
//! identifiers are enforced at the boundary.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
}

fn trim_and_require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else if trimmed.len() == value.len() {
        Ok(value)
    } else {
        Ok(trimmed.to_string())
    }
}

/// Opaque identifier of a [`Category`](crate::domain::category::Category).
///
/// Generated identifiers are lowercase, hyphenated UUID v4 strings. Parsed
/// identifiers only need to be non-blank: the shape is not checked, so an id
/// that was never issued is a valid value that simply matches no record.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryId(String);

impl CategoryId {
    /// Generates a fresh random identifier.
    pub fn unique() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wraps an externally supplied identifier, rejecting blank input.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        trim_and_require_non_empty(value, "category id").map(Self)
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CategoryId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for CategoryId {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CategoryId {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for CategoryId {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CategoryId> for String {
    fn from(value: CategoryId) -> Self {
        value.0
    }
}

impl PartialEq<&str> for CategoryId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<CategoryId> for &str {
    fn eq(&self, other: &CategoryId) -> bool {
        *self == other.as_str()
    }
}
