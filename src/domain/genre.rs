//! Genre aggregate. Groups categories under a name.

use crate::domain::category::CategoryId;
use crate::domain::clock;
use crate::domain::identifier::string_identifier;
use crate::domain::validation::{ValidationHandler, Validator, rules};
use crate::domain::{AggregateRoot, DomainError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const NAME_MIN_LENGTH: usize = 1;
pub const NAME_MAX_LENGTH: usize = 255;

string_identifier!(
    /// Identity of a [`Genre`].
    GenreId
);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genre {
    id: GenreId,
    name: String,
    active: bool,
    categories: Vec<CategoryId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl Genre {
    pub fn new_genre(name: impl Into<String>, active: bool) -> Self {
        let now = clock::now();
        Self {
            id: GenreId::unique(),
            name: name.into(),
            active,
            categories: Vec::new(),
            created_at: now,
            updated_at: now,
            deleted_at: (!active).then_some(now),
        }
    }

    /// Rehydrate a genre from stored state.
    pub fn with(
        id: GenreId,
        name: String,
        active: bool,
        categories: Vec<CategoryId>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name,
            active,
            categories,
            created_at,
            updated_at,
            deleted_at,
        }
    }

    pub fn activate(&mut self) -> &mut Self {
        self.deleted_at = None;
        self.active = true;
        self.updated_at = clock::now();
        self
    }

    pub fn deactivate(&mut self) -> &mut Self {
        let now = clock::now();
        if self.deleted_at.is_none() {
            self.deleted_at = Some(now);
        }
        self.active = false;
        self.updated_at = now;
        self
    }

    /// Replace name, status and the full category list.
    pub fn update(
        &mut self,
        name: impl Into<String>,
        active: bool,
        categories: Vec<CategoryId>,
    ) -> &mut Self {
        self.name = name.into();
        self.categories.clear();
        self.add_categories(categories);
        if active {
            self.activate();
        } else {
            self.deactivate();
        }
        self
    }

    /// Append categories not yet linked, keeping first-seen order.
    pub fn add_categories(&mut self, ids: impl IntoIterator<Item = CategoryId>) -> &mut Self {
        for id in ids {
            if !self.categories.contains(&id) {
                self.categories.push(id);
            }
        }
        self.updated_at = clock::now();
        self
    }

    pub fn remove_category(&mut self, id: &CategoryId) -> &mut Self {
        self.categories.retain(|c| c != id);
        self.updated_at = clock::now();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn categories(&self) -> &[CategoryId] {
        &self.categories
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }
}

impl AggregateRoot for Genre {
    type Id = GenreId;
    const NAME: &'static str = "Genre";

    fn id(&self) -> &GenreId {
        &self.id
    }

    fn validate(&self, handler: &mut dyn ValidationHandler) -> Result<(), DomainError> {
        GenreValidator {
            genre: self,
            handler,
        }
        .validate()
    }
}

impl PartialEq for Genre {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Genre {}

struct GenreValidator<'a, 'h> {
    genre: &'a Genre,
    handler: &'h mut dyn ValidationHandler,
}

impl Validator for GenreValidator<'_, '_> {
    fn validate(&mut self) -> Result<(), DomainError> {
        rules::required_text(
            self.handler,
            "name",
            &self.genre.name,
            NAME_MIN_LENGTH,
            NAME_MAX_LENGTH,
        )
    }
}
