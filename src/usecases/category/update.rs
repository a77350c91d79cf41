//! Update a category's attributes and status.

use super::{load, store_changes};
use crate::domain::{AggregateRoot, Category, CategoryId};
use crate::ports::{CategoryGateway, UseCase};
use crate::usecases::UseCaseResult;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCategoryCommand {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub position: i32,
    pub active: bool,
}

impl UpdateCategoryCommand {
    pub fn with(
        id: impl Into<String>,
        name: impl Into<String>,
        description: Option<&str>,
        position: i32,
        active: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.map(String::from),
            position,
            active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateCategoryOutput {
    pub id: CategoryId,
}

impl From<&Category> for UpdateCategoryOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id().clone(),
        }
    }
}

pub struct DefaultUpdateCategoryUseCase {
    gateway: Arc<dyn CategoryGateway>,
}

impl DefaultUpdateCategoryUseCase {
    pub fn new(gateway: Arc<dyn CategoryGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait::async_trait]
impl UseCase<UpdateCategoryCommand, UseCaseResult<UpdateCategoryOutput>>
    for DefaultUpdateCategoryUseCase
{
    async fn execute(&self, command: UpdateCategoryCommand) -> UseCaseResult<UpdateCategoryOutput> {
        let id = CategoryId::from(command.id);
        let mut category = load(self.gateway.as_ref(), &id).await?;
        category.update(
            command.name,
            command.description,
            command.position,
            command.active,
        );
        store_changes(self.gateway.as_ref(), category).await
    }
}
