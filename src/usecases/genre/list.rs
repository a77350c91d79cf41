//! Search genres page by page.

use crate::domain::{AggregateRoot, CategoryId, Genre, GenreId, Pagination, SearchQuery};
use crate::ports::{GenreGateway, UseCase};
use crate::usecases::{UseCaseResult, storage_failure};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreListOutput {
    pub id: GenreId,
    pub name: String,
    pub active: bool,
    pub categories: Vec<CategoryId>,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Genre> for GenreListOutput {
    fn from(g: Genre) -> Self {
        Self {
            id: g.id().clone(),
            name: g.name().to_string(),
            active: g.is_active(),
            categories: g.categories().to_vec(),
            created_at: g.created_at(),
            deleted_at: g.deleted_at(),
        }
    }
}

pub struct DefaultListGenresUseCase {
    gateway: Arc<dyn GenreGateway>,
}

impl DefaultListGenresUseCase {
    pub fn new(gateway: Arc<dyn GenreGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait::async_trait]
impl UseCase<SearchQuery, UseCaseResult<Pagination<GenreListOutput>>> for DefaultListGenresUseCase {
    async fn execute(&self, query: SearchQuery) -> UseCaseResult<Pagination<GenreListOutput>> {
        query.validate()?;
        let page = self
            .gateway
            .find_all(&query)
            .await
            .map_err(|e| storage_failure(Genre::NAME, e))?;
        debug!(page = query.page, total = page.total, "genres listed");
        Ok(page.map(GenreListOutput::from))
    }
}
