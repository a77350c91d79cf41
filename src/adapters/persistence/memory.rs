//! In-memory catalog. Implements CategoryGateway and GenreGateway.
//!
//! Nothing survives the process; useful for tests and local runs.

use super::state::CatalogState;
use crate::domain::{
    AggregateRoot, Category, CategoryId, Genre, GenreId, Pagination, SearchQuery, StorageError,
};
use crate::ports::{CategoryGateway, GenreGateway};
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    state: RwLock<CatalogState>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl CategoryGateway for InMemoryCatalog {
    async fn create(&self, category: Category) -> Result<Category, StorageError> {
        debug!(id = %category.id(), "insert category");
        self.state.write().await.insert_category(category)
    }

    async fn update(&self, category: Category) -> Result<Category, StorageError> {
        debug!(id = %category.id(), "update category");
        self.state.write().await.replace_category(category)
    }

    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, StorageError> {
        Ok(self.state.read().await.category(id))
    }

    async fn delete_by_id(&self, id: &CategoryId) -> Result<(), StorageError> {
        self.state.write().await.remove_category(id);
        Ok(())
    }

    async fn find_all(&self, query: &SearchQuery) -> Result<Pagination<Category>, StorageError> {
        Ok(self.state.read().await.search_categories(query))
    }

    async fn exists_by_ids(&self, ids: &[CategoryId]) -> Result<Vec<CategoryId>, StorageError> {
        Ok(self.state.read().await.existing_categories(ids))
    }
}

#[async_trait::async_trait]
impl GenreGateway for InMemoryCatalog {
    async fn create(&self, genre: Genre) -> Result<Genre, StorageError> {
        debug!(id = %genre.id(), "insert genre");
        self.state.write().await.insert_genre(genre)
    }

    async fn update(&self, genre: Genre) -> Result<Genre, StorageError> {
        debug!(id = %genre.id(), "update genre");
        self.state.write().await.replace_genre(genre)
    }

    async fn find_by_id(&self, id: &GenreId) -> Result<Option<Genre>, StorageError> {
        Ok(self.state.read().await.genre(id))
    }

    async fn delete_by_id(&self, id: &GenreId) -> Result<(), StorageError> {
        self.state.write().await.remove_genre(id);
        Ok(())
    }

    async fn find_all(&self, query: &SearchQuery) -> Result<Pagination<Genre>, StorageError> {
        Ok(self.state.read().await.search_genres(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_category_round_trip() {
        let repo = InMemoryCatalog::new();
        let c = Category::new_category("Filmes", Some("longas".into()), 4, true);
        CategoryGateway::create(&repo, c.clone()).await.unwrap();

        let found = CategoryGateway::find_by_id(&repo, c.id())
            .await
            .unwrap()
            .expect("stored");
        assert_eq!(found, c);
        assert_eq!(found.name(), c.name());
        assert_eq!(found.description(), c.description());
        assert_eq!(found.position(), c.position());
        assert_eq!(found.created_at(), c.created_at());
    }

    #[tokio::test]
    async fn test_delete_missing_is_ok() {
        let repo = InMemoryCatalog::new();
        assert!(
            GenreGateway::delete_by_id(&repo, &GenreId::from("missing"))
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_update_missing_id_fails() {
        let repo = InMemoryCatalog::new();
        let c = Category::new_category("Filmes", None, 0, true);
        let err = CategoryGateway::update(&repo, c.clone()).await.unwrap_err();
        assert!(matches!(err, StorageError::Conflict(_)));
        assert!(
            CategoryGateway::find_by_id(&repo, c.id())
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_update_after_delete_does_not_resurrect() {
        let repo = InMemoryCatalog::new();
        let mut c = Category::new_category("Filmes", None, 0, true);
        CategoryGateway::create(&repo, c.clone()).await.unwrap();
        CategoryGateway::delete_by_id(&repo, c.id()).await.unwrap();

        c.deactivate();
        let err = CategoryGateway::update(&repo, c.clone()).await.unwrap_err();
        assert!(matches!(err, StorageError::Conflict(_)));
        assert!(
            CategoryGateway::find_by_id(&repo, c.id())
                .await
                .unwrap()
                .is_none()
        );

        let g = Genre::new_genre("Ação", true);
        GenreGateway::create(&repo, g.clone()).await.unwrap();
        GenreGateway::delete_by_id(&repo, g.id()).await.unwrap();
        assert!(GenreGateway::update(&repo, g).await.is_err());
    }

    #[tokio::test]
    async fn test_duplicate_genre_conflicts() {
        let repo = InMemoryCatalog::new();
        let g = Genre::new_genre("Ação", true);
        GenreGateway::create(&repo, g.clone()).await.unwrap();
        let err = GenreGateway::create(&repo, g).await.unwrap_err();
        assert!(matches!(err, StorageError::Conflict(_)));
    }
}
