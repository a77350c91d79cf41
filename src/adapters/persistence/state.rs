//! Catalog contents shared by the in-memory and JSON-file adapters.
//!
//! Pure data plus the query semantics both adapters implement.

use crate::domain::{
    AggregateRoot, Category, CategoryId, DomainError, Genre, GenreId, Pagination, SearchQuery,
    SortDirection, StorageError, ThrowsValidationHandler, ValidationHandler,
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CatalogState {
    #[serde(default)]
    categories: BTreeMap<CategoryId, Category>,
    #[serde(default)]
    genres: BTreeMap<GenreId, Genre>,
}

impl CatalogState {
    pub fn insert_category(&mut self, category: Category) -> Result<Category, StorageError> {
        if self.categories.contains_key(category.id()) {
            return Err(StorageError::Conflict(format!(
                "category {} already exists",
                category.id()
            )));
        }
        self.categories
            .insert(category.id().clone(), category.clone());
        Ok(category)
    }

    /// Overwrite a stored category. An absent id is a `Conflict`; ids are
    /// never brought back after a delete.
    pub fn replace_category(&mut self, category: Category) -> Result<Category, StorageError> {
        match self.categories.get_mut(category.id()) {
            Some(slot) => {
                *slot = category.clone();
                Ok(category)
            }
            None => Err(StorageError::Conflict(format!(
                "category {} does not exist",
                category.id()
            ))),
        }
    }

    pub fn category(&self, id: &CategoryId) -> Option<Category> {
        self.categories.get(id).cloned()
    }

    pub fn remove_category(&mut self, id: &CategoryId) {
        self.categories.remove(id);
    }

    pub fn existing_categories(&self, ids: &[CategoryId]) -> Vec<CategoryId> {
        ids.iter()
            .filter(|id| self.categories.contains_key(*id))
            .cloned()
            .collect()
    }

    pub fn insert_genre(&mut self, genre: Genre) -> Result<Genre, StorageError> {
        if self.genres.contains_key(genre.id()) {
            return Err(StorageError::Conflict(format!(
                "genre {} already exists",
                genre.id()
            )));
        }
        self.genres.insert(genre.id().clone(), genre.clone());
        Ok(genre)
    }

    pub fn replace_genre(&mut self, genre: Genre) -> Result<Genre, StorageError> {
        match self.genres.get_mut(genre.id()) {
            Some(slot) => {
                *slot = genre.clone();
                Ok(genre)
            }
            None => Err(StorageError::Conflict(format!(
                "genre {} does not exist",
                genre.id()
            ))),
        }
    }

    pub fn genre(&self, id: &GenreId) -> Option<Genre> {
        self.genres.get(id).cloned()
    }

    pub fn remove_genre(&mut self, id: &GenreId) {
        self.genres.remove(id);
    }

    pub fn search_categories(&self, query: &SearchQuery) -> Pagination<Category> {
        let terms = query.normalized_terms();
        let mut matches: Vec<&Category> = self
            .categories
            .values()
            .filter(|c| match &terms {
                None => true,
                Some(t) => {
                    c.name().to_lowercase().contains(t)
                        || c.description()
                            .is_some_and(|d| d.to_lowercase().contains(t))
                }
            })
            .collect();
        matches.sort_by(|a, b| {
            let ord = match query.sort.as_str() {
                "created_at" => a.created_at().cmp(&b.created_at()),
                "position" => a.position().cmp(&b.position()),
                _ => cmp_names(a.name(), b.name()),
            };
            directed(ord, query.direction)
        });
        paginate(matches, query)
    }

    pub fn search_genres(&self, query: &SearchQuery) -> Pagination<Genre> {
        let terms = query.normalized_terms();
        let mut matches: Vec<&Genre> = self
            .genres
            .values()
            .filter(|g| match &terms {
                None => true,
                Some(t) => g.name().to_lowercase().contains(t),
            })
            .collect();
        matches.sort_by(|a, b| {
            let ord = match query.sort.as_str() {
                "created_at" => a.created_at().cmp(&b.created_at()),
                _ => cmp_names(a.name(), b.name()),
            };
            directed(ord, query.direction)
        });
        paginate(matches, query)
    }

    /// Fail-fast check of every stored aggregate. Used when loading from disk.
    pub fn verify(&self) -> Result<(), StorageError> {
        let mut handler = ThrowsValidationHandler;
        for c in self.categories.values() {
            c.validate(&mut handler).map_err(|e| {
                StorageError::Corrupted(format!("category {}: {}", c.id(), describe(&e)))
            })?;
        }
        for g in self.genres.values() {
            g.validate(&mut handler).map_err(|e| {
                StorageError::Corrupted(format!("genre {}: {}", g.id(), describe(&e)))
            })?;
        }
        Ok(())
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn genre_count(&self) -> usize {
        self.genres.len()
    }
}

fn describe(err: &DomainError) -> String {
    err.notification()
        .first_error()
        .map(|e| e.to_string())
        .unwrap_or_else(|| err.to_string())
}

fn cmp_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn directed(ord: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Asc => ord,
        SortDirection::Desc => ord.reverse(),
    }
}

fn paginate<T: Clone>(matches: Vec<&T>, query: &SearchQuery) -> Pagination<T> {
    let total = matches.len();
    let items = matches[query.window(total)]
        .iter()
        .map(|&item| item.clone())
        .collect();
    Pagination {
        current_page: query.page,
        per_page: query.per_page,
        total: total as u64,
        items,
    }
}
