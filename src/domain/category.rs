//! Category aggregate.

use crate::domain::clock;
use crate::domain::identifier::string_identifier;
use crate::domain::validation::{ValidationHandler, Validator, rules};
use crate::domain::{AggregateRoot, DomainError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const NAME_MIN_LENGTH: usize = 3;
pub const NAME_MAX_LENGTH: usize = 255;
pub const POSITION_MIN: i32 = 0;
pub const POSITION_MAX: i32 = 1000;

string_identifier!(
    /// Identity of a [`Category`].
    CategoryId
);

/// A catalog category. Inactive categories carry a `deleted_at` timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    name: String,
    description: Option<String>,
    /// Listing order inside the catalog.
    position: i32,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl Category {
    pub fn new_category(
        name: impl Into<String>,
        description: Option<String>,
        position: i32,
        active: bool,
    ) -> Self {
        let now = clock::now();
        Self {
            id: CategoryId::unique(),
            name: name.into(),
            description,
            position,
            active,
            created_at: now,
            updated_at: now,
            deleted_at: (!active).then_some(now),
        }
    }

    /// Rehydrate a category from stored state.
    #[allow(clippy::too_many_arguments)]
    pub fn with(
        id: CategoryId,
        name: String,
        description: Option<String>,
        position: i32,
        active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            position,
            active,
            created_at,
            updated_at,
            deleted_at,
        }
    }

    pub fn activate(&mut self) -> &mut Self {
        self.active = true;
        self.deleted_at = None;
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

    pub fn update(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
        position: i32,
        active: bool,
    ) -> &mut Self {
        self.name = name.into();
        self.description = description;
        self.position = position;
        if active {
            self.activate();
        } else {
            self.deactivate();
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn position(&self) -> i32 {
        self.position
    }

    pub fn is_active(&self) -> bool {
        self.active
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

impl AggregateRoot for Category {
    type Id = CategoryId;
    const NAME: &'static str = "Category";

    fn id(&self) -> &CategoryId {
        &self.id
    }

    fn validate(&self, handler: &mut dyn ValidationHandler) -> Result<(), DomainError> {
        CategoryValidator {
            category: self,
            handler,
        }
        .validate()
    }
}

/// Identity equality.
impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Category {}

struct CategoryValidator<'a, 'h> {
    category: &'a Category,
    handler: &'h mut dyn ValidationHandler,
}

impl Validator for CategoryValidator<'_, '_> {
    fn validate(&mut self) -> Result<(), DomainError> {
        rules::required_text(
            self.handler,
            "name",
            &self.category.name,
            NAME_MIN_LENGTH,
            NAME_MAX_LENGTH,
        )?;
        rules::in_range(
            self.handler,
            "position",
            i64::from(self.category.position),
            i64::from(POSITION_MIN),
            i64::from(POSITION_MAX),
        )
    }
}
