//! Validation primitives shared by every aggregate.
//!
//! An aggregate reports invariant violations through a `ValidationHandler`.
//! The handler decides what a violation means: `Notification` collects them
//! all, `ThrowsValidationHandler` stops at the first one.

pub mod notification;
pub mod rules;
pub mod throws;

pub use notification::Notification;
pub use throws::ThrowsValidationHandler;

use crate::domain::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single invariant violation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationError {
    pub code: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Strategy for reporting validation failures.
pub trait ValidationHandler {
    /// Record one error. Accumulating handlers always return `Ok`.
    fn append(&mut self, error: ValidationError) -> Result<(), DomainError>;

    /// Record every error held by another handler, in its order.
    fn append_all(&mut self, other: &dyn ValidationHandler) -> Result<(), DomainError>;

    fn errors(&self) -> &[ValidationError];

    fn has_errors(&self) -> bool {
        !self.errors().is_empty()
    }

    fn first_error(&self) -> Option<&ValidationError> {
        self.errors().first()
    }

    /// Run a check. A failing check's errors are either captured (`Ok(None)`)
    /// or propagated, depending on the handler.
    fn validate<T, F>(&mut self, check: F) -> Result<Option<T>, DomainError>
    where
        Self: Sized,
        F: FnOnce() -> Result<T, DomainError>;
}

/// Checks one aggregate's invariants against a handler.
pub trait Validator {
    fn validate(&mut self) -> Result<(), DomainError>;
}
