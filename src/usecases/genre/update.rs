//! Replace a genre's name, status and linked categories.

use super::{check_categories, load, to_category_ids};
use crate::domain::{AggregateRoot, Genre, GenreId};
use crate::ports::{CategoryGateway, GenreGateway, UseCase};
use crate::usecases::{UseCaseResult, ensure_valid, storage_failure};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateGenreCommand {
    pub id: String,
    pub name: String,
    pub active: bool,
    pub categories: Vec<String>,
}

impl UpdateGenreCommand {
    pub fn with(
        id: impl Into<String>,
        name: impl Into<String>,
        active: bool,
        categories: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            active,
            categories,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateGenreOutput {
    pub id: GenreId,
}

impl From<&Genre> for UpdateGenreOutput {
    fn from(genre: &Genre) -> Self {
        Self {
            id: genre.id().clone(),
        }
    }
}

pub struct DefaultUpdateGenreUseCase {
    categories: Arc<dyn CategoryGateway>,
    genres: Arc<dyn GenreGateway>,
}

impl DefaultUpdateGenreUseCase {
    pub fn new(categories: Arc<dyn CategoryGateway>, genres: Arc<dyn GenreGateway>) -> Self {
        Self { categories, genres }
    }
}

#[async_trait::async_trait]
impl UseCase<UpdateGenreCommand, UseCaseResult<UpdateGenreOutput>> for DefaultUpdateGenreUseCase {
    async fn execute(&self, command: UpdateGenreCommand) -> UseCaseResult<UpdateGenreOutput> {
        let id = GenreId::from(command.id);
        let mut genre = load(self.genres.as_ref(), &id).await?;

        let category_ids = to_category_ids(command.categories);
        let notification = check_categories(self.categories.as_ref(), &category_ids).await?;
        genre.update(command.name, command.active, category_ids);
        ensure_valid(&genre, notification)?;

        let updated = self
            .genres
            .update(genre)
            .await
            .map_err(|e| storage_failure(Genre::NAME, e))?;
        info!(
            id = %updated.id(),
            categories = updated.categories().len(),
            "genre updated"
        );
        Ok(UpdateGenreOutput::from(&updated))
    }
}
