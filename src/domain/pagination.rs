//! Generic page request and page result shared by listing operations.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PER_PAGE: u32 = 10;

/// Page request passed through to the gateway unmodified.
///
/// `page` is zero-based. `sort` and `direction` are interpreted by the
/// gateway, which rejects values it does not know.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchQuery {
    pub page: u32,
    pub per_page: u32,
    pub terms: String,
    pub sort: String,
    pub direction: String,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            page: 0,
            per_page: DEFAULT_PER_PAGE,
            terms: String::new(),
            sort: "name".to_string(),
            direction: "asc".to_string(),
        }
    }
}

impl SearchQuery {
    pub fn new(
        page: u32,
        per_page: u32,
        terms: impl Into<String>,
        sort: impl Into<String>,
        direction: impl Into<String>,
    ) -> Self {
        Self {
            page,
            per_page,
            terms: terms.into(),
            sort: sort.into(),
            direction: direction.into(),
        }
    }

    pub fn paginate(mut self, page: u32, per_page: u32) -> Self {
        self.page = page;
        self.per_page = per_page;
        self
    }

    pub fn search(mut self, terms: impl Into<String>) -> Self {
        self.terms = terms.into();
        self
    }

    pub fn sort_by(mut self, sort: impl Into<String>, direction: impl Into<String>) -> Self {
        self.sort = sort.into();
        self.direction = direction.into();
        self
    }
}

/// One page of results plus the total number of matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination<T> {
    pub current_page: u32,
    pub per_page: u32,
    pub total: u64,
    pub items: Vec<T>,
}

impl<T> Pagination<T> {
    pub fn new(current_page: u32, per_page: u32, total: u64, items: Vec<T>) -> Self {
        Self {
            current_page,
            per_page,
            total,
            items,
        }
    }

    /// Transforms every item in order, keeping the page metadata.
    pub fn map<U, F>(self, f: F) -> Pagination<U>
    where
        F: FnMut(T) -> U,
    {
        Pagination {
            current_page: self.current_page,
            per_page: self.per_page,
            total: self.total,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}
