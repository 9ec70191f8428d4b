use chrono::NaiveDateTime;

use crate::domain::types::{AdvertisementId, MediaBaseUrl};
use crate::dto::advertisements::{CategoryListResponse, ItemResponse, ListResponse};
use crate::repository::{AdvertisementListQuery, AdvertisementReader};

use super::{ServiceError, ServiceResult};

/// Page size used when `limit` is absent or unusable.
pub const DEFAULT_LIMIT: i64 = 50;
/// Offset used when `skip` is absent or unusable.
pub const DEFAULT_SKIP: i64 = 0;

/// Query parameters accepted by the list endpoint.
///
/// Pagination values stay raw text so that malformed input falls back to the
/// defaults instead of failing extraction.
#[derive(Debug, Default)]
pub struct ListQueryParams {
    pub category: Option<String>,
    pub sub_category: Option<String>,
    pub governorate: Option<String>,
    pub limit: Option<String>,
    pub skip: Option<String>,
}

impl ListQueryParams {
    /// Collects the known keys from decoded query pairs. Unknown keys are
    /// ignored and a repeated key keeps its first value.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "category" => &mut params.category,
                "subCategory" => &mut params.sub_category,
                "governorate" => &mut params.governorate,
                "limit" => &mut params.limit,
                "skip" => &mut params.skip,
                _ => continue,
            };
            keep_first(slot, value);
        }
        params
    }
}

/// Query parameters accepted by the category endpoint.
#[derive(Debug, Default)]
pub struct CategoryQueryParams {
    pub sub_category: Option<String>,
    pub governorate: Option<String>,
}

impl CategoryQueryParams {
    /// Same rules as [`ListQueryParams::from_pairs`].
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "subCategory" => &mut params.sub_category,
                "governorate" => &mut params.governorate,
                _ => continue,
            };
            keep_first(slot, value);
        }
        params
    }
}

fn keep_first(slot: &mut Option<String>, value: String) {
    if slot.is_none() {
        *slot = Some(value);
    }
}

/// Parses a pagination value, keeping it only when it is an integer of at
/// least `min`.
fn parse_bound(raw: Option<&str>, min: i64, default: i64) -> i64 {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|value| *value >= min)
        .unwrap_or(default)
}

/// Resolves the `(limit, skip)` window from raw query text.
pub fn parse_pagination(limit: Option<&str>, skip: Option<&str>) -> (i64, i64) {
    (
        parse_bound(limit, 1, DEFAULT_LIMIT),
        parse_bound(skip, 0, DEFAULT_SKIP),
    )
}

fn apply_filters(
    mut query: AdvertisementListQuery,
    sub_category: Option<String>,
    governorate: Option<String>,
) -> AdvertisementListQuery {
    if let Some(sub_category) = sub_category {
        query = query.sub_category(sub_category);
    }
    if let Some(governorate) = governorate {
        query = query.governorate(governorate);
    }
    query
}

/// Core business logic for the paginated list endpoint.
///
/// Only listings visible at `now` are returned, optionally narrowed by exact
/// category, sub-category and governorate matches.
pub fn list_advertisements<R>(
    params: ListQueryParams,
    now: NaiveDateTime,
    media_base_url: &MediaBaseUrl,
    repo: &R,
) -> ServiceResult<ListResponse>
where
    R: AdvertisementReader,
{
    let (limit, skip) = parse_pagination(params.limit.as_deref(), params.skip.as_deref());

    let mut query = AdvertisementListQuery::visible_at(now);
    if let Some(category) = params.category {
        query = query.category(category);
    }
    let query = apply_filters(query, params.sub_category, params.governorate).paginate(limit, skip);

    match repo.list_advertisements(query) {
        Ok((total, items)) => Ok(ListResponse::new(total, items, media_base_url)),
        Err(e) => {
            log::error!("Failed to list advertisements: {e}");
            Err(e.into())
        }
    }
}

/// Core business logic for a single listing.
///
/// Visibility is not checked here: direct access by id returns inactive and
/// expired listings too. Identifiers that cannot name a record are reported
/// as not found.
pub fn get_advertisement<R>(
    id: &str,
    media_base_url: &MediaBaseUrl,
    repo: &R,
) -> ServiceResult<ItemResponse>
where
    R: AdvertisementReader,
{
    let Ok(id) = id.parse::<AdvertisementId>() else {
        return Err(ServiceError::NotFound);
    };

    match repo.get_advertisement_by_id(id) {
        Ok(Some(item)) => Ok(ItemResponse::new(item, media_base_url)),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get advertisement {id}: {e}");
            Err(e.into())
        }
    }
}

/// Core business logic for the category endpoint.
///
/// Returns every visible listing of `category`, without pagination.
pub fn list_advertisements_by_category<R>(
    category: &str,
    params: CategoryQueryParams,
    now: NaiveDateTime,
    media_base_url: &MediaBaseUrl,
    repo: &R,
) -> ServiceResult<CategoryListResponse>
where
    R: AdvertisementReader,
{
    let query = AdvertisementListQuery::visible_at(now).category(category);
    let query = apply_filters(query, params.sub_category, params.governorate);

    match repo.find_advertisements(query) {
        Ok(items) => Ok(CategoryListResponse::new(items, media_base_url)),
        Err(e) => {
            log::error!("Failed to list advertisements for category '{category}': {e}");
            Err(e.into())
        }
    }
}
