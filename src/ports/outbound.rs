//! Outbound ports. Use cases call into persistence through these.
//!
//! Implemented by adapters. Any storage failure is reported as a
//! `StorageError`; use cases never see adapter-specific errors.

use crate::domain::{
    Category, CategoryId, Genre, GenreId, Pagination, SearchQuery, StorageError,
};

/// Category persistence.
#[async_trait::async_trait]
pub trait CategoryGateway: Send + Sync {
    /// Store a new category. An existing id is a `StorageError::Conflict`.
    async fn create(&self, category: Category) -> Result<Category, StorageError>;

    /// Replace a stored category. An absent id is a `StorageError::Conflict`.
    async fn update(&self, category: Category) -> Result<Category, StorageError>;

    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, StorageError>;

    /// Remove a category. Absent ids are not an error.
    async fn delete_by_id(&self, id: &CategoryId) -> Result<(), StorageError>;

    async fn find_all(&self, query: &SearchQuery) -> Result<Pagination<Category>, StorageError>;

    /// The subset of `ids` that exist, in the order given.
    async fn exists_by_ids(&self, ids: &[CategoryId]) -> Result<Vec<CategoryId>, StorageError>;
}

/// Genre persistence.
#[async_trait::async_trait]
pub trait GenreGateway: Send + Sync {
    async fn create(&self, genre: Genre) -> Result<Genre, StorageError>;

    /// Replace a stored genre. An absent id is a `StorageError::Conflict`.
    async fn update(&self, genre: Genre) -> Result<Genre, StorageError>;

    async fn find_by_id(&self, id: &GenreId) -> Result<Option<Genre>, StorageError>;

    async fn delete_by_id(&self, id: &GenreId) -> Result<(), StorageError>;

    async fn find_all(&self, query: &SearchQuery) -> Result<Pagination<Genre>, StorageError>;
}
