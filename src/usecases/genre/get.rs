use super::load;
use crate::domain::{AggregateRoot, CategoryId, Genre, GenreId};
use crate::ports::{GenreGateway, UseCase};
use crate::usecases::UseCaseResult;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreOutput {
    pub id: GenreId,
    pub name: String,
    pub active: bool,
    pub categories: Vec<CategoryId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<&Genre> for GenreOutput {
    fn from(g: &Genre) -> Self {
        Self {
            id: g.id().clone(),
            name: g.name().to_string(),
            active: g.is_active(),
            categories: g.categories().to_vec(),
            created_at: g.created_at(),
            updated_at: g.updated_at(),
            deleted_at: g.deleted_at(),
        }
    }
}

pub struct DefaultGetGenreByIdUseCase {
    gateway: Arc<dyn GenreGateway>,
}

impl DefaultGetGenreByIdUseCase {
    pub fn new(gateway: Arc<dyn GenreGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait::async_trait]
impl UseCase<String, UseCaseResult<GenreOutput>> for DefaultGetGenreByIdUseCase {
    async fn execute(&self, id: String) -> UseCaseResult<GenreOutput> {
        let id = GenreId::from(id);
        let genre = load(self.gateway.as_ref(), &id).await?;
        Ok(GenreOutput::from(&genre))
    }
}
