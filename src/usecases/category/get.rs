//! Retrieve one category by id.

use super::load;
use crate::domain::{AggregateRoot, Category, CategoryId};
use crate::ports::{CategoryGateway, UseCase};
use crate::usecases::UseCaseResult;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryOutput {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub position: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<&Category> for CategoryOutput {
    fn from(c: &Category) -> Self {
        Self {
            id: c.id().clone(),
            name: c.name().to_string(),
            description: c.description().map(String::from),
            position: c.position(),
            active: c.is_active(),
            created_at: c.created_at(),
            updated_at: c.updated_at(),
            deleted_at: c.deleted_at(),
        }
    }
}

pub struct DefaultGetCategoryByIdUseCase {
    gateway: Arc<dyn CategoryGateway>,
}

impl DefaultGetCategoryByIdUseCase {
    pub fn new(gateway: Arc<dyn CategoryGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait::async_trait]
impl UseCase<String, UseCaseResult<CategoryOutput>> for DefaultGetCategoryByIdUseCase {
    async fn execute(&self, id: String) -> UseCaseResult<CategoryOutput> {
        let id = CategoryId::from(id);
        let category = load(self.gateway.as_ref(), &id).await?;
        Ok(CategoryOutput::from(&category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::testing::RecordingGateway;

    fn use_case(gateway: &Arc<RecordingGateway>) -> DefaultGetCategoryByIdUseCase {
        DefaultGetCategoryByIdUseCase::new(Arc::clone(gateway) as Arc<dyn CategoryGateway>)
    }

    #[tokio::test]
    async fn test_get_existing() {
        let gateway = Arc::new(RecordingGateway::new());
        let seeded = gateway
            .seed_category(Category::new_category("Filmes", Some("longas".into()), 3, true))
            .await;

        let output = use_case(&gateway)
            .execute(seeded.id().to_string())
            .await
            .unwrap();

        assert_eq!(output, CategoryOutput::from(&seeded));
        assert_eq!(gateway.categories.finds(), 1);
    }

    #[tokio::test]
    async fn test_get_missing() {
        let gateway = Arc::new(RecordingGateway::new());
        let err = use_case(&gateway)
            .execute("123".to_string())
            .await
            .unwrap_err();
        assert_eq!(
            err.notification().errors()[0].message,
            "Category with id 123 not found"
        );
    }
}
