//! Application use cases. Orchestrate aggregates via ports.
//!
//! Every use case owns its Notification and aggregate for the duration of
//! one call: validate, and only persist when nothing was reported.

pub mod category;
pub mod genre;

#[cfg(test)]
pub(crate) mod testing;

pub use category::{
    DefaultActivateCategoryUseCase, DefaultCreateCategoryUseCase, DefaultDeactivateCategoryUseCase,
    DefaultDeleteCategoryUseCase, DefaultGetCategoryByIdUseCase, DefaultListCategoriesUseCase,
    DefaultUpdateCategoryUseCase,
};
pub use genre::{
    DefaultActivateGenreUseCase, DefaultCreateGenreUseCase, DefaultDeactivateGenreUseCase,
    DefaultDeleteGenreUseCase, DefaultGetGenreByIdUseCase, DefaultListGenresUseCase,
    DefaultUpdateGenreUseCase,
};

use crate::domain::{AggregateRoot, DomainError, Notification, StorageError};
use tracing::{error, warn};

/// Success payload or a failure that renders as a Notification.
pub type UseCaseResult<T> = Result<T, DomainError>;

/// Validate `aggregate` into `notification`; fail with every collected error.
pub(crate) fn ensure_valid<A: AggregateRoot>(
    aggregate: &A,
    mut notification: Notification,
) -> Result<(), DomainError> {
    aggregate.validate(&mut notification)?;
    if !notification.is_empty() {
        warn!(
            aggregate = A::NAME,
            id = %aggregate.id(),
            errors = notification.len(),
            "validation failed"
        );
    }
    notification.into_result()
}

/// Translate a port failure into the single-entry storage failure.
pub(crate) fn storage_failure(aggregate: &'static str, err: StorageError) -> DomainError {
    error!(aggregate, error = %err, "storage operation failed");
    DomainError::Storage(err)
}
