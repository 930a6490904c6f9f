use chrono::{NaiveDateTime, TimeDelta, Utc};
use serde::Serialize;
use validator::ValidateLength;

use crate::domain::errors::DomainError;
use crate::domain::types::CategoryId;
use crate::domain::validation::{ValidationError, ValidationHandler, Validator};

pub const NAME_MIN_LENGTH: u64 = 3;
pub const NAME_MAX_LENGTH: u64 = 255;

/// Catalog category aggregate.
///
/// Construction and mutation never validate: a category may hold an invalid
/// name until [`Category::validate`] runs against a handler. `deleted_at` is
/// the soft-delete marker and is set exactly when the category is inactive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    id: CategoryId,
    name: Option<String>,
    description: Option<String>,
    active: bool,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
    deleted_at: Option<NaiveDateTime>,
}

impl Category {
    /// Entity name used in error messages.
    pub const ENTITY_NAME: &'static str = "Category";

    /// Creates a category with a fresh identifier.
    pub fn new_category(name: Option<String>, description: Option<String>, active: bool) -> Self {
        let now = now();
        Self {
            id: CategoryId::unique(),
            name,
            description,
            active,
            created_at: now,
            updated_at: now,
            deleted_at: if active { None } else { Some(now) },
        }
    }

    /// Rehydrates a stored category.
    pub fn with(
        id: CategoryId,
        name: Option<String>,
        description: Option<String>,
        active: bool,
        created_at: NaiveDateTime,
        updated_at: NaiveDateTime,
        deleted_at: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            active,
            created_at,
            updated_at,
            deleted_at,
        }
    }

    pub fn id(&self) -> &CategoryId {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    pub fn updated_at(&self) -> NaiveDateTime {
        self.updated_at
    }

    pub fn deleted_at(&self) -> Option<NaiveDateTime> {
        self.deleted_at
    }

    /// Overwrites the mutable fields and applies the requested activation
    /// state.
    pub fn update(
        &mut self,
        name: Option<String>,
        description: Option<String>,
        active: bool,
    ) -> &mut Self {
        self.name = name;
        self.description = description;
        if active {
            self.activate()
        } else {
            self.deactivate()
        }
    }

    pub fn activate(&mut self) -> &mut Self {
        self.active = true;
        self.deleted_at = None;
        self.touch();
        self
    }

    /// Marks the category inactive. An existing deactivation timestamp is
    /// kept.
    pub fn deactivate(&mut self) -> &mut Self {
        if self.deleted_at.is_none() {
            self.deleted_at = Some(now());
        }
        self.active = false;
        self.touch();
        self
    }

    /// Runs the category rules, reporting violations to `handler`.
    pub fn validate(&self, handler: &mut dyn ValidationHandler) -> Result<(), DomainError> {
        CategoryValidator::new(self, handler).validate()
    }

    fn touch(&mut self) {
        let now = now();
        // Never move backwards, even if the wall clock does.
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + TimeDelta::microseconds(1)
        };
    }
}

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Rules for [`Category`], bound to one snapshot and one handler.
pub struct CategoryValidator<'a> {
    category: &'a Category,
    handler: &'a mut dyn ValidationHandler,
}

impl<'a> CategoryValidator<'a> {
    pub fn new(category: &'a Category, handler: &'a mut dyn ValidationHandler) -> Self {
        Self { category, handler }
    }

    fn check_name_constraints(&mut self) -> Result<(), DomainError> {
        let Some(name) = self.category.name() else {
            return self
                .handler
                .append(ValidationError::new("'name' should not be null"));
        };

        let trimmed = name.trim().to_string();
        if trimmed.is_empty() {
            return self
                .handler
                .append(ValidationError::new("'name' should not be empty"));
        }

        if !trimmed.validate_length(Some(NAME_MIN_LENGTH), Some(NAME_MAX_LENGTH), None) {
            return self.handler.append(ValidationError::new(format!(
                "'name' must be between {NAME_MIN_LENGTH} and {NAME_MAX_LENGTH} characters"
            )));
        }

        Ok(())
    }
}

impl Validator for CategoryValidator<'_> {
    fn validate(&mut self) -> Result<(), DomainError> {
        self.check_name_constraints()
    }
}
