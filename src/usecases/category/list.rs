//! Search categories page by page.

use crate::domain::{AggregateRoot, Category, CategoryId, Pagination, SearchQuery};
use crate::ports::{CategoryGateway, UseCase};
use crate::usecases::{UseCaseResult, storage_failure};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryListOutput {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub position: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Category> for CategoryListOutput {
    fn from(c: Category) -> Self {
        Self {
            id: c.id().clone(),
            name: c.name().to_string(),
            description: c.description().map(String::from),
            position: c.position(),
            active: c.is_active(),
            created_at: c.created_at(),
            deleted_at: c.deleted_at(),
        }
    }
}

pub struct DefaultListCategoriesUseCase {
    gateway: Arc<dyn CategoryGateway>,
}

impl DefaultListCategoriesUseCase {
    pub fn new(gateway: Arc<dyn CategoryGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait::async_trait]
impl UseCase<SearchQuery, UseCaseResult<Pagination<CategoryListOutput>>>
    for DefaultListCategoriesUseCase
{
    async fn execute(&self, query: SearchQuery) -> UseCaseResult<Pagination<CategoryListOutput>> {
        query.validate()?;
        let page = self
            .gateway
            .find_all(&query)
            .await
            .map_err(|e| storage_failure(Category::NAME, e))?;
        debug!(page = query.page, total = page.total, "categories listed");
        Ok(page.map(CategoryListOutput::from))
    }
}
