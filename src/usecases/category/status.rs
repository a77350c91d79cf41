//! Activate / deactivate a category.

use super::{UpdateCategoryOutput, load, store_changes};
use crate::domain::CategoryId;
use crate::ports::{CategoryGateway, UseCase};
use crate::usecases::UseCaseResult;
use std::sync::Arc;

pub struct DefaultActivateCategoryUseCase {
    gateway: Arc<dyn CategoryGateway>,
}

impl DefaultActivateCategoryUseCase {
    pub fn new(gateway: Arc<dyn CategoryGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait::async_trait]
impl UseCase<String, UseCaseResult<UpdateCategoryOutput>> for DefaultActivateCategoryUseCase {
    async fn execute(&self, id: String) -> UseCaseResult<UpdateCategoryOutput> {
        let id = CategoryId::from(id);
        let mut category = load(self.gateway.as_ref(), &id).await?;
        category.activate();
        store_changes(self.gateway.as_ref(), category).await
    }
}

pub struct DefaultDeactivateCategoryUseCase {
    gateway: Arc<dyn CategoryGateway>,
}

impl DefaultDeactivateCategoryUseCase {
    pub fn new(gateway: Arc<dyn CategoryGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait::async_trait]
impl UseCase<String, UseCaseResult<UpdateCategoryOutput>> for DefaultDeactivateCategoryUseCase {
    async fn execute(&self, id: String) -> UseCaseResult<UpdateCategoryOutput> {
        let id = CategoryId::from(id);
        let mut category = load(self.gateway.as_ref(), &id).await?;
        category.deactivate();
        store_changes(self.gateway.as_ref(), category).await
    }
}
