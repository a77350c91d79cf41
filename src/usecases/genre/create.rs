//! Create a genre linked to existing categories.

use super::{check_categories, to_category_ids};
use crate::domain::{AggregateRoot, Genre, GenreId};
use crate::ports::{CategoryGateway, GenreGateway, UseCase};
use crate::usecases::{UseCaseResult, ensure_valid, storage_failure};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGenreCommand {
    pub name: String,
    pub active: bool,
    /// Raw category ids.
    pub categories: Vec<String>,
}

impl CreateGenreCommand {
    pub fn with(name: impl Into<String>, active: bool, categories: Vec<String>) -> Self {
        Self {
            name: name.into(),
            active,
            categories,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateGenreOutput {
    pub id: GenreId,
}

pub struct DefaultCreateGenreUseCase {
    categories: Arc<dyn CategoryGateway>,
    genres: Arc<dyn GenreGateway>,
}

impl DefaultCreateGenreUseCase {
    pub fn new(categories: Arc<dyn CategoryGateway>, genres: Arc<dyn GenreGateway>) -> Self {
        Self { categories, genres }
    }
}

#[async_trait::async_trait]
impl UseCase<CreateGenreCommand, UseCaseResult<CreateGenreOutput>> for DefaultCreateGenreUseCase {
    async fn execute(&self, command: CreateGenreCommand) -> UseCaseResult<CreateGenreOutput> {
        let category_ids = to_category_ids(command.categories);
        let notification = check_categories(self.categories.as_ref(), &category_ids).await?;

        let mut genre = Genre::new_genre(command.name, command.active);
        genre.add_categories(category_ids);
        ensure_valid(&genre, notification)?;

        let created = self
            .genres
            .create(genre)
            .await
            .map_err(|e| storage_failure(Genre::NAME, e))?;
        info!(
            id = %created.id(),
            categories = created.categories().len(),
            "genre created"
        );
        Ok(CreateGenreOutput {
            id: created.id().clone(),
        })
    }
}
