//! Activate / deactivate a genre.

use super::{UpdateGenreOutput, load, store_changes};
use crate::domain::GenreId;
use crate::ports::{GenreGateway, UseCase};
use crate::usecases::UseCaseResult;
use std::sync::Arc;

pub struct DefaultActivateGenreUseCase {
    gateway: Arc<dyn GenreGateway>,
}

impl DefaultActivateGenreUseCase {
    pub fn new(gateway: Arc<dyn GenreGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait::async_trait]
impl UseCase<String, UseCaseResult<UpdateGenreOutput>> for DefaultActivateGenreUseCase {
    async fn execute(&self, id: String) -> UseCaseResult<UpdateGenreOutput> {
        let id = GenreId::from(id);
        let mut genre = load(self.gateway.as_ref(), &id).await?;
        genre.activate();
        store_changes(self.gateway.as_ref(), genre).await
    }
}

pub struct DefaultDeactivateGenreUseCase {
    gateway: Arc<dyn GenreGateway>,
}

impl DefaultDeactivateGenreUseCase {
    pub fn new(gateway: Arc<dyn GenreGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait::async_trait]
impl UseCase<String, UseCaseResult<UpdateGenreOutput>> for DefaultDeactivateGenreUseCase {
    async fn execute(&self, id: String) -> UseCaseResult<UpdateGenreOutput> {
        let id = GenreId::from(id);
        let mut genre = load(self.gateway.as_ref(), &id).await?;
        genre.deactivate();
        store_changes(self.gateway.as_ref(), genre).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AggregateRoot, Genre};
    use crate::usecases::testing::RecordingGateway;

    #[tokio::test]
    async fn test_deactivate_keeps_first_deleted_at() {
        let gateway = Arc::new(RecordingGateway::new());
        let seeded = gateway.seed_genre(Genre::new_genre("Ação", false)).await;
        let first = seeded.deleted_at();
        assert!(first.is_some());

        DefaultDeactivateGenreUseCase::new(Arc::clone(&gateway) as Arc<dyn GenreGateway>)
            .execute(seeded.id().to_string())
            .await
            .unwrap();

        let stored = gateway.stored_genre(seeded.id()).await.unwrap();
        assert_eq!(stored.deleted_at(), first);
        assert_eq!(gateway.genres.updates(), 1);
    }

    #[tokio::test]
    async fn test_activate_clears_deleted_at() {
        let gateway = Arc::new(RecordingGateway::new());
        let seeded = gateway.seed_genre(Genre::new_genre("Ação", false)).await;

        let output = DefaultActivateGenreUseCase::new(Arc::clone(&gateway) as Arc<dyn GenreGateway>)
            .execute(seeded.id().to_string())
            .await
            .unwrap();

        assert_eq!(&output.id, seeded.id());
        let stored = gateway.stored_genre(seeded.id()).await.unwrap();
        assert!(stored.is_active());
        assert!(stored.deleted_at().is_none());
    }

    #[tokio::test]
    async fn test_missing_genre() {
        let gateway = Arc::new(RecordingGateway::new());
        let err = DefaultDeactivateGenreUseCase::new(Arc::clone(&gateway) as Arc<dyn GenreGateway>)
            .execute("123".to_string())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(gateway.genres.updates(), 0);
    }
}
