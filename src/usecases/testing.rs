//! Test double: in-memory gateways that count calls and can fail writes.

use crate::adapters::persistence::InMemoryCatalog;
use crate::domain::{
    Category, CategoryId, Genre, GenreId, Pagination, SearchQuery, StorageError,
};
use crate::ports::{CategoryGateway, GenreGateway};
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
pub struct Calls {
    pub create: AtomicUsize,
    pub update: AtomicUsize,
    pub delete: AtomicUsize,
    pub find: AtomicUsize,
    pub exists: AtomicUsize,
}

impl Calls {
    fn bump(counter: &AtomicUsize) {
        counter.fetch_add(1, Ordering::SeqCst);
    }

    pub fn creates(&self) -> usize {
        self.create.load(Ordering::SeqCst)
    }

    pub fn updates(&self) -> usize {
        self.update.load(Ordering::SeqCst)
    }

    pub fn deletes(&self) -> usize {
        self.delete.load(Ordering::SeqCst)
    }

    pub fn finds(&self) -> usize {
        self.find.load(Ordering::SeqCst)
    }

    pub fn exists(&self) -> usize {
        self.exists.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Default)]
pub struct RecordingGateway {
    inner: InMemoryCatalog,
    write_failure: Option<StorageError>,
    pub categories: Calls,
    pub genres: Calls,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every create/update/delete fails with `err`; reads still work.
    pub fn failing_writes(err: StorageError) -> Self {
        Self {
            write_failure: Some(err),
            ..Self::default()
        }
    }

    fn write_guard(&self) -> Result<(), StorageError> {
        match &self.write_failure {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }

    /// Store directly, bypassing counters.
    pub async fn seed_category(&self, category: Category) -> Category {
        CategoryGateway::create(&self.inner, category)
            .await
            .expect("seed category")
    }

    pub async fn seed_genre(&self, genre: Genre) -> Genre {
        GenreGateway::create(&self.inner, genre)
            .await
            .expect("seed genre")
    }

    pub async fn stored_category(&self, id: &CategoryId) -> Option<Category> {
        CategoryGateway::find_by_id(&self.inner, id)
            .await
            .expect("read category")
    }

    pub async fn stored_genre(&self, id: &GenreId) -> Option<Genre> {
        GenreGateway::find_by_id(&self.inner, id)
            .await
            .expect("read genre")
    }
}

#[async_trait::async_trait]
impl CategoryGateway for RecordingGateway {
    async fn create(&self, category: Category) -> Result<Category, StorageError> {
        Calls::bump(&self.categories.create);
        self.write_guard()?;
        CategoryGateway::create(&self.inner, category).await
    }

    async fn update(&self, category: Category) -> Result<Category, StorageError> {
        Calls::bump(&self.categories.update);
        self.write_guard()?;
        CategoryGateway::update(&self.inner, category).await
    }

    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, StorageError> {
        Calls::bump(&self.categories.find);
        CategoryGateway::find_by_id(&self.inner, id).await
    }

    async fn delete_by_id(&self, id: &CategoryId) -> Result<(), StorageError> {
        Calls::bump(&self.categories.delete);
        self.write_guard()?;
        CategoryGateway::delete_by_id(&self.inner, id).await
    }

    async fn find_all(&self, query: &SearchQuery) -> Result<Pagination<Category>, StorageError> {
        CategoryGateway::find_all(&self.inner, query).await
    }

    async fn exists_by_ids(&self, ids: &[CategoryId]) -> Result<Vec<CategoryId>, StorageError> {
        Calls::bump(&self.categories.exists);
        self.inner.exists_by_ids(ids).await
    }
}

#[async_trait::async_trait]
impl GenreGateway for RecordingGateway {
    async fn create(&self, genre: Genre) -> Result<Genre, StorageError> {
        Calls::bump(&self.genres.create);
        self.write_guard()?;
        GenreGateway::create(&self.inner, genre).await
    }

    async fn update(&self, genre: Genre) -> Result<Genre, StorageError> {
        Calls::bump(&self.genres.update);
        self.write_guard()?;
        GenreGateway::update(&self.inner, genre).await
    }

    async fn find_by_id(&self, id: &GenreId) -> Result<Option<Genre>, StorageError> {
        Calls::bump(&self.genres.find);
        GenreGateway::find_by_id(&self.inner, id).await
    }

    async fn delete_by_id(&self, id: &GenreId) -> Result<(), StorageError> {
        Calls::bump(&self.genres.delete);
        self.write_guard()?;
        GenreGateway::delete_by_id(&self.inner, id).await
    }

    async fn find_all(&self, query: &SearchQuery) -> Result<Pagination<Genre>, StorageError> {
        GenreGateway::find_all(&self.inner, query).await
    }
}
