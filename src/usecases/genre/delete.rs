//! Delete a genre. Deleting an absent id succeeds.

use crate::domain::{AggregateRoot, Genre, GenreId};
use crate::ports::{GenreGateway, UseCase};
use crate::usecases::{UseCaseResult, storage_failure};
use std::sync::Arc;
use tracing::info;

pub struct DefaultDeleteGenreUseCase {
    gateway: Arc<dyn GenreGateway>,
}

impl DefaultDeleteGenreUseCase {
    pub fn new(gateway: Arc<dyn GenreGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait::async_trait]
impl UseCase<String, UseCaseResult<()>> for DefaultDeleteGenreUseCase {
    async fn execute(&self, id: String) -> UseCaseResult<()> {
        let id = GenreId::from(id);
        self.gateway
            .delete_by_id(&id)
            .await
            .map_err(|e| storage_failure(Genre::NAME, e))?;
        info!(id = %id, "genre deleted");
        Ok(())
    }
}
