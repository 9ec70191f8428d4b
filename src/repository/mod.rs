use chrono::NaiveDateTime;

use crate::db::{DbConnection, DbPool};
use crate::domain::advertisement::Advertisement;
use crate::domain::types::AdvertisementId;

pub mod advertisement;
pub mod errors;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Offset-based page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Maximum number of records to return.
    pub limit: i64,
    /// Number of matching records to skip first.
    pub skip: i64,
}

/// Predicate for publicly visible listings.
///
/// Every query built here requires `is_active` and a subscription ending at
/// or after `now`. The optional clauses are exact string matches and are only
/// recorded for non-empty values.
#[derive(Debug, Clone, PartialEq)]
pub struct AdvertisementListQuery {
    /// Reference instant for the subscription check.
    pub now: NaiveDateTime,
    /// Exact match on `category`.
    pub category: Option<String>,
    /// Exact match on `sub_category`.
    pub sub_category: Option<String>,
    /// Exact match on `governorate`.
    pub governorate: Option<String>,
    /// Page window; `None` returns every match.
    pub pagination: Option<Pagination>,
}

fn non_empty(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    (!value.is_empty()).then_some(value)
}

impl AdvertisementListQuery {
    /// Starts a query for listings visible at `now`.
    pub fn visible_at(now: NaiveDateTime) -> Self {
        Self {
            now,
            category: None,
            sub_category: None,
            governorate: None,
            pagination: None,
        }
    }
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = non_empty(category);
        self
    }
    pub fn sub_category(mut self, sub_category: impl Into<String>) -> Self {
        self.sub_category = non_empty(sub_category);
        self
    }
    pub fn governorate(mut self, governorate: impl Into<String>) -> Self {
        self.governorate = non_empty(governorate);
        self
    }
    pub fn paginate(mut self, limit: i64, skip: i64) -> Self {
        self.pagination = Some(Pagination { limit, skip });
        self
    }

    /// Evaluates the predicate against an in-memory listing.
    pub fn matches(&self, advertisement: &Advertisement) -> bool {
        advertisement.is_visible_at(self.now)
            && self
                .category
                .as_ref()
                .is_none_or(|category| &advertisement.category == category)
            && self
                .sub_category
                .as_ref()
                .is_none_or(|sub| advertisement.sub_category.as_ref() == Some(sub))
            && self
                .governorate
                .as_ref()
                .is_none_or(|governorate| &advertisement.governorate == governorate)
    }
}

/// Read-only operations for advertisement entities.
///
/// Results are ordered by `display_order` descending, then `created_at`
/// descending, then `id` descending.
pub trait AdvertisementReader {
    /// Returns the total number of matches and the requested page.
    ///
    /// The total comes from a separate count query and is not guaranteed to
    /// agree with the page under concurrent writes.
    fn list_advertisements(
        &self,
        query: AdvertisementListQuery,
    ) -> RepositoryResult<(usize, Vec<Advertisement>)>;
    /// Returns every match, ignoring any pagination on the query.
    fn find_advertisements(
        &self,
        query: AdvertisementListQuery,
    ) -> RepositoryResult<Vec<Advertisement>>;
    /// Retrieve an advertisement by its identifier, visible or not.
    fn get_advertisement_by_id(
        &self,
        id: AdvertisementId,
    ) -> RepositoryResult<Option<Advertisement>>;
}
