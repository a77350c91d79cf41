//! Search queries and paged results.

use crate::domain::DomainError;
use crate::domain::validation::{Notification, rules};
use serde::{Deserialize, Serialize};

pub const MAX_PER_PAGE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Page request. `page` is zero-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub page: u32,
    pub per_page: u32,
    /// Case-insensitive substring filter; blank means no filter.
    pub terms: String,
    pub sort: String,
    pub direction: SortDirection,
}

impl SearchQuery {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page,
            per_page,
            ..Self::default()
        }
    }

    pub fn with_terms(mut self, terms: impl Into<String>) -> Self {
        self.terms = terms.into();
        self
    }

    pub fn sorted_by(mut self, sort: impl Into<String>, direction: SortDirection) -> Self {
        self.sort = sort.into();
        self.direction = direction;
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let mut notification = Notification::create();
        rules::in_range(
            &mut notification,
            "per_page",
            i64::from(self.per_page),
            1,
            i64::from(MAX_PER_PAGE),
        )?;
        notification.into_result()
    }

    /// Lower-cased terms, or `None` when blank.
    pub fn normalized_terms(&self) -> Option<String> {
        let t = self.terms.trim();
        (!t.is_empty()).then(|| t.to_lowercase())
    }

    /// Index range of the requested page inside `total` items.
    pub fn window(&self, total: usize) -> std::ops::Range<usize> {
        let start = (self.page as usize)
            .saturating_mul(self.per_page as usize)
            .min(total);
        let end = start.saturating_add(self.per_page as usize).min(total);
        start..end
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            page: 0,
            per_page: 10,
            terms: String::new(),
            sort: "name".to_string(),
            direction: SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pagination<T> {
    pub current_page: u32,
    pub per_page: u32,
    pub total: u64,
    pub items: Vec<T>,
}

impl<T> Pagination<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Pagination<U> {
        Pagination {
            current_page: self.current_page,
            per_page: self.per_page,
            total: self.total,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}
