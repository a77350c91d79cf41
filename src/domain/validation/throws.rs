//! Fail-fast validation handler.

use super::{Notification, ValidationError, ValidationHandler};
use crate::domain::DomainError;

/// Propagates the first reported error. Holds no state of its own, so
/// `errors()` is always empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThrowsValidationHandler;

impl ValidationHandler for ThrowsValidationHandler {
    fn append(&mut self, error: ValidationError) -> Result<(), DomainError> {
        Err(DomainError::Validation(Notification::from_error(error)))
    }

    fn append_all(&mut self, other: &dyn ValidationHandler) -> Result<(), DomainError> {
        match other.first_error() {
            Some(_) => Err(DomainError::Validation(Notification::from(
                other.errors().to_vec(),
            ))),
            None => Ok(()),
        }
    }

    fn errors(&self) -> &[ValidationError] {
        &[]
    }

    fn validate<T, F>(&mut self, check: F) -> Result<Option<T>, DomainError>
    where
        F: FnOnce() -> Result<T, DomainError>,
    {
        check().map(Some)
    }
}
