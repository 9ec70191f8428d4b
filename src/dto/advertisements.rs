//! Wire representation of listings and the response envelopes around them.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::advertisement::{Advertisement, TIKTOK_PLATFORM};
use crate::domain::category_key::{category_key_source, derive_category_key};
use crate::domain::media::normalize_media_urls;
use crate::domain::types::MediaBaseUrl;

/// A listing as presented to clients.
///
/// Mirrors every stored field, with media resolved against the public base
/// URL, a derived `category_key` and `socialMedia.tiktok` always present.
/// Stored timestamps are UTC and serialize as RFC 3339 with a `Z` suffix.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdvertisementView {
    #[serde(rename = "_id")]
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub sub_category: Option<String>,
    pub governorate: String,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub images: Vec<String>,
    pub videos: Vec<String>,
    pub social_media: BTreeMap<String, String>,
    pub is_active: bool,
    pub subscription_end_date: DateTime<Utc>,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "category_key")]
    pub category_key: String,
}

impl AdvertisementView {
    pub fn assemble(advertisement: Advertisement, media_base_url: &MediaBaseUrl) -> Self {
        let category_key = derive_category_key(Some(category_key_source(
            &advertisement.category,
            advertisement.sub_category.as_deref(),
        )));

        let mut social_media = advertisement.social_media;
        social_media
            .entry(TIKTOK_PLATFORM.to_string())
            .or_default();

        Self {
            id: advertisement.id.get(),
            title: advertisement.title,
            description: advertisement.description,
            category: advertisement.category,
            sub_category: advertisement.sub_category,
            governorate: advertisement.governorate,
            phone: advertisement.phone,
            whatsapp: advertisement.whatsapp,
            images: normalize_media_urls(&advertisement.images, media_base_url.as_str()),
            videos: normalize_media_urls(&advertisement.videos, media_base_url.as_str()),
            social_media,
            is_active: advertisement.is_active,
            subscription_end_date: advertisement.subscription_end_date.and_utc(),
            display_order: advertisement.display_order,
            created_at: advertisement.created_at.and_utc(),
            updated_at: advertisement.updated_at.and_utc(),
            category_key,
        }
    }
}

fn assemble_all(items: Vec<Advertisement>, media_base_url: &MediaBaseUrl) -> Vec<AdvertisementView> {
    items
        .into_iter()
        .map(|item| AdvertisementView::assemble(item, media_base_url))
        .collect()
}

/// Envelope for the paginated list operation.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ListResponse {
    pub success: bool,
    /// Number of records in this page.
    pub count: usize,
    /// Number of records matching the filters.
    pub total: usize,
    pub data: Vec<AdvertisementView>,
}

impl ListResponse {
    pub fn new(total: usize, items: Vec<Advertisement>, media_base_url: &MediaBaseUrl) -> Self {
        let data = assemble_all(items, media_base_url);
        Self {
            success: true,
            count: data.len(),
            total,
            data,
        }
    }
}

/// Envelope for the category-scoped operation, which is never paginated.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<AdvertisementView>,
}

impl CategoryListResponse {
    pub fn new(items: Vec<Advertisement>, media_base_url: &MediaBaseUrl) -> Self {
        let data = assemble_all(items, media_base_url);
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}

/// Envelope for a single listing.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ItemResponse {
    pub success: bool,
    pub data: AdvertisementView,
}

impl ItemResponse {
    pub fn new(item: Advertisement, media_base_url: &MediaBaseUrl) -> Self {
        Self {
            success: true,
            data: AdvertisementView::assemble(item, media_base_url),
        }
    }
}

/// Envelope for failed requests.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::AdvertisementId;

    fn base() -> MediaBaseUrl {
        MediaBaseUrl::new("https://cdn.example/").unwrap()
    }

    fn sample(sub_category: Option<&str>) -> Advertisement {
        let ts = DateTime::from_timestamp(0, 0).unwrap().naive_utc();
        Advertisement {
            id: AdvertisementId::new(3).unwrap(),
            title: "Hot Stone Center".into(),
            description: Some("Relax".into()),
            category: "Spa".into(),
            sub_category: sub_category.map(Into::into),
            governorate: "Giza".into(),
            phone: Some("0100".into()),
            whatsapp: None,
            images: vec!["/uploads/a.jpg".into(), "https://other.test/b.jpg".into()],
            videos: vec![],
            social_media: BTreeMap::from([("facebook".to_string(), "fb.com/x".to_string())]),
            is_active: false,
            subscription_end_date: ts,
            display_order: 4,
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn overrides_media_key_and_tiktok_only() {
        let stored = sample(Some("Hot Stone!"));
        let view = AdvertisementView::assemble(stored.clone(), &base());

        assert_eq!(
            view.images,
            vec!["https://cdn.example/a.jpg", "https://other.test/b.jpg"]
        );
        assert!(view.videos.is_empty());
        assert_eq!(view.category_key, "hot_stone_");
        assert_eq!(view.social_media.get("tiktok").unwrap(), "");
        assert_eq!(view.social_media.get("facebook").unwrap(), "fb.com/x");

        assert_eq!(view.id, 3);
        assert_eq!(view.title, stored.title);
        assert_eq!(view.description, stored.description);
        assert_eq!(view.sub_category, stored.sub_category);
        assert_eq!(view.is_active, stored.is_active);
        assert_eq!(view.display_order, stored.display_order);
    }

    #[test]
    fn keeps_existing_tiktok_handle() {
        let mut stored = sample(None);
        stored
            .social_media
            .insert("tiktok".into(), "@spa".into());
        let view = AdvertisementView::assemble(stored, &base());
        assert_eq!(view.social_media.get("tiktok").unwrap(), "@spa");
        assert_eq!(view.category_key, "spa");
    }

    #[test]
    fn serializes_client_field_names() {
        let view = AdvertisementView::assemble(sample(None), &base());
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["_id"], 3);
        assert_eq!(json["category_key"], "spa");
        assert_eq!(json["socialMedia"]["tiktok"], "");
        assert!(json["subCategory"].is_null());
        assert_eq!(json["isActive"], false);
        assert_eq!(json["displayOrder"], 4);
        assert_eq!(json["subscriptionEndDate"], "1970-01-01T00:00:00Z");
        assert_eq!(json["createdAt"], "1970-01-01T00:00:00Z");
        assert_eq!(json["updatedAt"], "1970-01-01T00:00:00Z");
    }

    #[test]
    fn envelopes_count_returned_records() {
        let list = ListResponse::new(12, vec![sample(None)], &base());
        assert!(list.success);
        assert_eq!(list.count, 1);
        assert_eq!(list.total, 12);

        let category = CategoryListResponse::new(vec![sample(None), sample(None)], &base());
        let json = serde_json::to_value(&category).unwrap();
        assert_eq!(json["count"], 2);
        assert!(json.get("total").is_none());
    }

    #[test]
    fn error_envelope_omits_missing_detail() {
        let json = serde_json::to_value(ErrorResponse::new("Advertisement not found")).unwrap();
        assert_eq!(json["success"], false);
        assert!(json.get("error").is_none());
    }
}
