//! Accumulating validation handler.

use super::{ValidationError, ValidationHandler};
use crate::domain::DomainError;
use serde::{Deserialize, Serialize};

/// Ordered list of validation errors from one validation pass.
/// Empty means the validated object is committable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Notification {
    errors: Vec<ValidationError>,
}

impl Notification {
    pub fn create() -> Self {
        Self::default()
    }

    pub fn from_error(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    pub fn push(&mut self, error: ValidationError) -> &mut Self {
        self.errors.push(error);
        self
    }

    /// Move all errors of `other` to the end of this notification.
    pub fn merge(&mut self, other: Notification) -> &mut Self {
        self.errors.extend(other.errors);
        self
    }

    /// Errors in insertion order.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
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

    /// `Ok(())` when empty, otherwise the whole notification as a validation failure.
    pub fn into_result(self) -> Result<(), DomainError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(self))
        }
    }
}

impl From<Vec<ValidationError>> for Notification {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }
}

impl ValidationHandler for Notification {
    fn append(&mut self, error: ValidationError) -> Result<(), DomainError> {
        self.errors.push(error);
        Ok(())
    }

    fn append_all(&mut self, other: &dyn ValidationHandler) -> Result<(), DomainError> {
        self.errors.extend(other.errors().iter().cloned());
        Ok(())
    }

    fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    fn validate<T, F>(&mut self, check: F) -> Result<Option<T>, DomainError>
    where
        F: FnOnce() -> Result<T, DomainError>,
    {
        match check() {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                self.errors.extend(e.into_notification().into_errors());
                Ok(None)
            }
        }
    }
}
