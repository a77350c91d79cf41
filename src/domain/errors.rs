//! Domain errors. Returned by use cases and ports.
//!
//! Adapters map infrastructure errors into `StorageError`; use cases lift
//! everything into `DomainError`, which always renders as a Notification.

use crate::domain::validation::{Notification, ValidationError};
use thiserror::Error;

/// Error code for a missing aggregate.
pub const NOT_FOUND_CODE: &str = "not_found";

/// Error code for a translated storage failure.
pub const STORAGE_CODE: &str = "storage";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// One or more invariant violations, all of them collected.
    #[error("validation failed with {} error(s)", .0.len())]
    Validation(Notification),

    #[error("{aggregate} with id {id} not found")]
    NotFound { aggregate: &'static str, id: String },

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl DomainError {
    pub fn not_found(aggregate: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            aggregate,
            id: id.to_string(),
        }
    }

    /// Every failure renders as a Notification. Not-found and storage
    /// failures become exactly one entry.
    pub fn notification(&self) -> Notification {
        match self {
            Self::Validation(n) => n.clone(),
            Self::NotFound { .. } => {
                Notification::from_error(ValidationError::new(NOT_FOUND_CODE, self.to_string()))
            }
            Self::Storage(e) => {
                Notification::from_error(ValidationError::new(STORAGE_CODE, e.to_string()))
            }
        }
    }

    pub fn into_notification(self) -> Notification {
        match self {
            Self::Validation(n) => n,
            other => other.notification(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Failure reported by a repository port.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("conflict: {0}")]
    Conflict(String),

    #[error("unavailable: {0}")]
    Unavailable(String),

    /// A stored record no longer satisfies its aggregate's invariants.
    #[error("corrupted record: {0}")]
    Corrupted(String),

    #[error("io: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::ValidationHandler;

    #[test]
    fn test_not_found_renders_single_entry() {
        let err = DomainError::not_found("Category", "abc");
        let n = err.notification();
        assert_eq!(n.len(), 1);
        let first = n.first_error().unwrap();
        assert_eq!(first.code, NOT_FOUND_CODE);
        assert_eq!(first.message, "Category with id abc not found");
    }

    #[test]
    fn test_storage_renders_single_entry() {
        let err: DomainError = StorageError::Conflict("duplicate id".into()).into();
        let n = err.into_notification();
        assert_eq!(n.len(), 1);
        assert_eq!(n.errors()[0].code, STORAGE_CODE);
        assert_eq!(n.errors()[0].message, "conflict: duplicate id");
    }

    #[test]
    fn test_validation_keeps_all_entries() {
        let mut n = Notification::create();
        n.push(ValidationError::new("required", "name must not be empty"));
        n.push(ValidationError::new("range", "position must be between 0 and 1000"));
        let err = DomainError::Validation(n.clone());
        assert!(err.is_validation());
        assert_eq!(err.notification(), n);
        assert_eq!(err.to_string(), "validation failed with 2 error(s)");
    }
}
