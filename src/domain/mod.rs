//! Core domain layer. No external I/O dependencies.
//!
//! Aggregates validate themselves through a `ValidationHandler`; nothing in
//! here touches storage.

pub mod aggregate;
pub mod category;
pub mod clock;
pub mod errors;
pub mod genre;
pub mod identifier;
pub mod pagination;
pub mod validation;

pub use aggregate::AggregateRoot;
pub use category::{Category, CategoryId};
pub use errors::{DomainError, StorageError};
pub use genre::{Genre, GenreId};
pub use identifier::Identifier;
pub use pagination::{Pagination, SearchQuery, SortDirection};
pub use validation::{Notification, ThrowsValidationHandler, ValidationError, ValidationHandler};
