//! Create a category.

use crate::domain::{AggregateRoot, Category, CategoryId, Notification};
use crate::ports::{CategoryGateway, UseCase};
use crate::usecases::{UseCaseResult, ensure_valid, storage_failure};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCategoryCommand {
    pub name: String,
    pub description: Option<String>,
    pub position: i32,
    pub active: bool,
}

impl CreateCategoryCommand {
    pub fn with(
        name: impl Into<String>,
        description: Option<&str>,
        position: i32,
        active: bool,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.map(String::from),
            position,
            active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateCategoryOutput {
    pub id: CategoryId,
}

impl From<&Category> for CreateCategoryOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id().clone(),
        }
    }
}

pub struct DefaultCreateCategoryUseCase {
    gateway: Arc<dyn CategoryGateway>,
}

impl DefaultCreateCategoryUseCase {
    pub fn new(gateway: Arc<dyn CategoryGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait::async_trait]
impl UseCase<CreateCategoryCommand, UseCaseResult<CreateCategoryOutput>>
    for DefaultCreateCategoryUseCase
{
    async fn execute(&self, command: CreateCategoryCommand) -> UseCaseResult<CreateCategoryOutput> {
        let category = Category::new_category(
            command.name,
            command.description,
            command.position,
            command.active,
        );
        ensure_valid(&category, Notification::create())?;

        let created = self
            .gateway
            .create(category)
            .await
            .map_err(|e| storage_failure(Category::NAME, e))?;
        info!(id = %created.id(), name = created.name(), "category created");
        Ok(CreateCategoryOutput::from(&created))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainError, Identifier, StorageError};
    use crate::usecases::testing::RecordingGateway;

    fn use_case(gateway: &Arc<RecordingGateway>) -> DefaultCreateCategoryUseCase {
        DefaultCreateCategoryUseCase::new(Arc::clone(gateway) as Arc<dyn CategoryGateway>)
    }

    #[tokio::test]
    async fn test_valid_command_creates_category() {
        let gateway = Arc::new(RecordingGateway::new());
        let command =
            CreateCategoryCommand::with("Filmes", Some("A categoria mais assistida"), 1, true);

        let output = use_case(&gateway).execute(command).await.unwrap();

        assert!(!output.id.value().is_empty());
        assert_eq!(gateway.categories.creates(), 1);
        let stored = gateway.stored_category(&output.id).await.expect("stored");
        assert_eq!(stored.name(), "Filmes");
        assert_eq!(stored.description(), Some("A categoria mais assistida"));
        assert_eq!(stored.position(), 1);
        assert!(stored.is_active());
        assert!(stored.deleted_at().is_none());
    }

    #[tokio::test]
    async fn test_inactive_command_creates_deleted_category() {
        let gateway = Arc::new(RecordingGateway::new());
        let command = CreateCategoryCommand::with("Filmes", None, 0, false);

        let output = use_case(&gateway).execute(command).await.unwrap();

        let stored = gateway.stored_category(&output.id).await.unwrap();
        assert!(!stored.is_active());
        assert!(stored.deleted_at().is_some());
    }

    #[tokio::test]
    async fn test_empty_name_fails_without_create() {
        let gateway = Arc::new(RecordingGateway::new());
        let command = CreateCategoryCommand::with("", None, 0, true);

        let err = use_case(&gateway).execute(command).await.unwrap_err();

        let n = err.notification();
        assert_eq!(n.len(), 1);
        assert_eq!(n.errors()[0].code, "required");
        assert_eq!(n.errors()[0].message, "name must not be empty");
        assert_eq!(gateway.categories.creates(), 0);
    }

    #[tokio::test]
    async fn test_position_out_of_range_fails_with_one_error() {
        let gateway = Arc::new(RecordingGateway::new());
        let command = CreateCategoryCommand::with("Filmes", None, 5000, true);

        let err = use_case(&gateway).execute(command).await.unwrap_err();

        let n = err.notification();
        assert_eq!(n.len(), 1);
        assert_eq!(n.errors()[0].code, "range");
        assert_eq!(gateway.categories.creates(), 0);
    }

    #[tokio::test]
    async fn test_all_violations_reported_at_once() {
        let gateway = Arc::new(RecordingGateway::new());
        let command = CreateCategoryCommand::with("  ", None, -1, true);

        let err = use_case(&gateway).execute(command).await.unwrap_err();

        assert!(err.is_validation());
        assert_eq!(err.notification().len(), 2);
        assert_eq!(gateway.categories.creates(), 0);
    }

    #[tokio::test]
    async fn test_storage_error_is_translated() {
        let gateway = Arc::new(RecordingGateway::failing_writes(StorageError::Unavailable(
            "gateway error".into(),
        )));
        let command = CreateCategoryCommand::with("Filmes", None, 0, true);

        let err = use_case(&gateway).execute(command).await.unwrap_err();

        assert!(matches!(err, DomainError::Storage(_)));
        let n = err.notification();
        assert_eq!(n.len(), 1);
        assert_eq!(n.errors()[0].code, "storage");
        assert_eq!(n.errors()[0].message, "unavailable: gateway error");
        assert_eq!(gateway.categories.creates(), 1);
    }

    #[tokio::test]
    async fn test_created_then_found_with_same_attributes() {
        let gateway = Arc::new(RecordingGateway::new());
        let command = CreateCategoryCommand::with("Séries", Some("episódios"), 12, true);

        let output = use_case(&gateway).execute(command.clone()).await.unwrap();

        let found = CategoryGateway::find_by_id(gateway.as_ref(), &output.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id(), &output.id);
        assert_eq!(found.name(), command.name);
        assert_eq!(found.description(), command.description.as_deref());
        assert_eq!(found.position(), command.position);
        assert_eq!(found.is_active(), command.active);
    }
}
