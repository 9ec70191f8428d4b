use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::AdvertisementId;

/// Social platform key that every outgoing listing carries, even when empty.
pub const TIKTOK_PLATFORM: &str = "tiktok";

/// A paid listing as stored, with its media and social links attached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Advertisement {
    pub id: AdvertisementId,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub sub_category: Option<String>,
    pub governorate: String,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    /// Stored image references in display order, absolute or storage-relative.
    pub images: Vec<String>,
    /// Stored video references in display order, absolute or storage-relative.
    pub videos: Vec<String>,
    /// Platform name to link or handle.
    pub social_media: BTreeMap<String, String>,
    pub is_active: bool,
    pub subscription_end_date: NaiveDateTime,
    pub display_order: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Advertisement {
    /// Whether the listing may appear in public list results at `now`.
    pub fn is_visible_at(&self, now: NaiveDateTime) -> bool {
        self.is_active && self.subscription_end_date >= now
    }
}
