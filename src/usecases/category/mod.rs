//! Category use cases.

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod status;
pub mod update;

pub use create::{CreateCategoryCommand, CreateCategoryOutput, DefaultCreateCategoryUseCase};
pub use delete::DefaultDeleteCategoryUseCase;
pub use get::{CategoryOutput, DefaultGetCategoryByIdUseCase};
pub use list::{CategoryListOutput, DefaultListCategoriesUseCase};
pub use status::{DefaultActivateCategoryUseCase, DefaultDeactivateCategoryUseCase};
pub use update::{DefaultUpdateCategoryUseCase, UpdateCategoryCommand, UpdateCategoryOutput};

use super::{UseCaseResult, ensure_valid, storage_failure};
use crate::domain::{AggregateRoot, Category, CategoryId, DomainError, Notification};
use crate::ports::CategoryGateway;
use tracing::{info, warn};

/// Load a category or fail with a single not-found error.
async fn load(gateway: &dyn CategoryGateway, id: &CategoryId) -> UseCaseResult<Category> {
    gateway
        .find_by_id(id)
        .await
        .map_err(|e| storage_failure(Category::NAME, e))?
        .ok_or_else(|| {
            warn!(id = %id, "category not found");
            DomainError::not_found(Category::NAME, id)
        })
}

/// Validate a mutated category and store it.
async fn store_changes(
    gateway: &dyn CategoryGateway,
    category: Category,
) -> UseCaseResult<UpdateCategoryOutput> {
    ensure_valid(&category, Notification::create())?;
    let updated = gateway
        .update(category)
        .await
        .map_err(|e| storage_failure(Category::NAME, e))?;
    info!(id = %updated.id(), active = updated.is_active(), "category updated");
    Ok(UpdateCategoryOutput::from(&updated))
}
