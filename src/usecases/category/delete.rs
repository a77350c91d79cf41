//! Delete a category. Deleting an absent id succeeds.

use crate::domain::{AggregateRoot, Category, CategoryId};
use crate::ports::{CategoryGateway, UseCase};
use crate::usecases::{UseCaseResult, storage_failure};
use std::sync::Arc;
use tracing::info;

pub struct DefaultDeleteCategoryUseCase {
    gateway: Arc<dyn CategoryGateway>,
}

impl DefaultDeleteCategoryUseCase {
    pub fn new(gateway: Arc<dyn CategoryGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait::async_trait]
impl UseCase<String, UseCaseResult<()>> for DefaultDeleteCategoryUseCase {
    async fn execute(&self, id: String) -> UseCaseResult<()> {
        let id = CategoryId::from(id);
        self.gateway
            .delete_by_id(&id)
            .await
            .map_err(|e| storage_failure(Category::NAME, e))?;
        info!(id = %id, "category deleted");
        Ok(())
    }
}
