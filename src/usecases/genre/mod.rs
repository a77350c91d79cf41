//! Genre use cases.

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod status;
pub mod update;

pub use create::{CreateGenreCommand, CreateGenreOutput, DefaultCreateGenreUseCase};
pub use delete::DefaultDeleteGenreUseCase;
pub use get::{DefaultGetGenreByIdUseCase, GenreOutput};
pub use list::{DefaultListGenresUseCase, GenreListOutput};
pub use status::{DefaultActivateGenreUseCase, DefaultDeactivateGenreUseCase};
pub use update::{DefaultUpdateGenreUseCase, UpdateGenreCommand, UpdateGenreOutput};

use super::{UseCaseResult, ensure_valid, storage_failure};
use crate::domain::validation::rules;
use crate::domain::{AggregateRoot, Category, CategoryId, DomainError, Genre, GenreId, Notification};
use crate::ports::{CategoryGateway, GenreGateway};
use tracing::{info, warn};

async fn load(gateway: &dyn GenreGateway, id: &GenreId) -> UseCaseResult<Genre> {
    gateway
        .find_by_id(id)
        .await
        .map_err(|e| storage_failure(Genre::NAME, e))?
        .ok_or_else(|| {
            warn!(id = %id, "genre not found");
            DomainError::not_found(Genre::NAME, id)
        })
}

async fn store_changes(
    gateway: &dyn GenreGateway,
    genre: Genre,
) -> UseCaseResult<UpdateGenreOutput> {
    ensure_valid(&genre, Notification::create())?;
    let updated = gateway
        .update(genre)
        .await
        .map_err(|e| storage_failure(Genre::NAME, e))?;
    info!(id = %updated.id(), active = updated.is_active(), "genre updated");
    Ok(UpdateGenreOutput::from(&updated))
}

fn to_category_ids(raw: Vec<String>) -> Vec<CategoryId> {
    raw.into_iter().map(CategoryId::from).collect()
}

/// Notification holding one `reference` error if any of `ids` is unknown.
/// Skips the gateway entirely for an empty list.
async fn check_categories(
    gateway: &dyn CategoryGateway,
    ids: &[CategoryId],
) -> UseCaseResult<Notification> {
    let mut notification = Notification::create();
    if ids.is_empty() {
        return Ok(notification);
    }
    let found = gateway
        .exists_by_ids(ids)
        .await
        .map_err(|e| storage_failure(Category::NAME, e))?;
    let mut missing: Vec<&CategoryId> = Vec::new();
    for id in ids {
        if !found.contains(id) && !missing.contains(&id) {
            missing.push(id);
        }
    }
    rules::all_present(&mut notification, "categories", &missing)?;
    Ok(notification)
}
