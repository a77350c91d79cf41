//! Implements CategoryGateway and GenreGateway on a single JSON file.
//!
//! The whole catalog is cached in memory and rewritten after every mutation.

use super::state::CatalogState;
use crate::domain::{Category, CategoryId, Genre, GenreId, Pagination, SearchQuery, StorageError};
use crate::ports::{CategoryGateway, GenreGateway};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// JSON file-based catalog storage.
pub struct JsonFileCatalog {
    path: PathBuf,
    cache: RwLock<CatalogState>,
}

impl JsonFileCatalog {
    /// Open the catalog at `path`. A missing file is an empty catalog.
    /// Stored records are re-validated; any invalid one fails the open
    /// with `StorageError::Corrupted`.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        let data = match fs::read_to_string(&path).await {
            Ok(s) => serde_json::from_str::<CatalogState>(&s)
                .map_err(|e| StorageError::Corrupted(format!("{}: {}", path.display(), e)))?,
            Err(e) if e.kind() == ErrorKind::NotFound => CatalogState::default(),
            Err(e) => return Err(StorageError::Io(e.to_string())),
        };
        data.verify()?;
        info!(
            path = %path.display(),
            categories = data.category_count(),
            genres = data.genre_count(),
            "catalog loaded"
        );
        Ok(Self {
            path,
            cache: RwLock::new(data),
        })
    }

    /// Atomic save using write-replace:
    /// write a temp file, sync_all(), then rename over the target.
    async fn save(&self, data: &CatalogState) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(data).map_err(|e| StorageError::Io(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::Io(format!("create dir: {}", e)))?;
        }

        let temp_path = self.path.with_extension("json.tmp");
        if let Err(e) = write_synced(&temp_path, json.as_bytes()).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e);
        }

        if let Err(e) = fs::rename(&temp_path, &self.path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(StorageError::Io(format!("atomic rename failed: {}", e)));
        }
        debug!(path = %self.path.display(), bytes = json.len(), "catalog saved");
        Ok(())
    }

    /// Apply `f` to a copy of the cache, persist it, then publish it.
    /// A failed write leaves the cache untouched.
    async fn mutate<T>(
        &self,
        f: impl FnOnce(&mut CatalogState) -> Result<T, StorageError>,
    ) -> Result<T, StorageError> {
        let mut cache = self.cache.write().await;
        let mut next = cache.clone();
        let out = f(&mut next)?;
        self.save(&next).await?;
        *cache = next;
        Ok(out)
    }
}

async fn write_synced(path: &Path, bytes: &[u8]) -> Result<(), StorageError> {
    let mut f = fs::File::create(path)
        .await
        .map_err(|e| StorageError::Io(format!("create temp file: {}", e)))?;
    f.write_all(bytes)
        .await
        .map_err(|e| StorageError::Io(format!("write temp file: {}", e)))?;
    f.sync_all()
        .await
        .map_err(|e| StorageError::Io(format!("sync temp file: {}", e)))
}

#[async_trait::async_trait]
impl CategoryGateway for JsonFileCatalog {
    async fn create(&self, category: Category) -> Result<Category, StorageError> {
        self.mutate(|s| s.insert_category(category)).await
    }

    async fn update(&self, category: Category) -> Result<Category, StorageError> {
        self.mutate(|s| s.replace_category(category)).await
    }

    async fn find_by_id(&self, id: &CategoryId) -> Result<Option<Category>, StorageError> {
        Ok(self.cache.read().await.category(id))
    }

    async fn delete_by_id(&self, id: &CategoryId) -> Result<(), StorageError> {
        if self.cache.read().await.category(id).is_none() {
            return Ok(());
        }
        self.mutate(|s| {
            s.remove_category(id);
            Ok(())
        })
        .await
    }

    async fn find_all(&self, query: &SearchQuery) -> Result<Pagination<Category>, StorageError> {
        Ok(self.cache.read().await.search_categories(query))
    }

    async fn exists_by_ids(&self, ids: &[CategoryId]) -> Result<Vec<CategoryId>, StorageError> {
        Ok(self.cache.read().await.existing_categories(ids))
    }
}

#[async_trait::async_trait]
impl GenreGateway for JsonFileCatalog {
    async fn create(&self, genre: Genre) -> Result<Genre, StorageError> {
        self.mutate(|s| s.insert_genre(genre)).await
    }

    async fn update(&self, genre: Genre) -> Result<Genre, StorageError> {
        self.mutate(|s| s.replace_genre(genre)).await
    }

    async fn find_by_id(&self, id: &GenreId) -> Result<Option<Genre>, StorageError> {
        Ok(self.cache.read().await.genre(id))
    }

    async fn delete_by_id(&self, id: &GenreId) -> Result<(), StorageError> {
        if self.cache.read().await.genre(id).is_none() {
            return Ok(());
        }
        self.mutate(|s| {
            s.remove_genre(id);
            Ok(())
        })
        .await
    }

    async fn find_all(&self, query: &SearchQuery) -> Result<Pagination<Genre>, StorageError> {
        Ok(self.cache.read().await.search_genres(query))
    }
}

impl std::fmt::Debug for JsonFileCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonFileCatalog")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}
