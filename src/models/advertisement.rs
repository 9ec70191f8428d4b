use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::advertisement::Advertisement as DomainAdvertisement;
use crate::domain::types::{MediaKind, TypeConstraintError};

/// Diesel model representing the `advertisements` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::advertisements)]
pub struct Advertisement {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub sub_category: Option<String>,
    pub governorate: String,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub is_active: bool,
    pub subscription_end_date: NaiveDateTime,
    pub display_order: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Advertisement`].
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::advertisements)]
pub struct NewAdvertisement {
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub sub_category: Option<String>,
    pub governorate: String,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub is_active: bool,
    pub subscription_end_date: NaiveDateTime,
    pub display_order: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Diesel model representing the `advertisement_media` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::advertisement_media)]
pub struct AdvertisementMedia {
    pub id: i32,
    pub advertisement_id: i32,
    pub kind: String,
    pub position: i32,
    pub url: String,
}

/// Insertable form of [`AdvertisementMedia`].
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::advertisement_media)]
pub struct NewAdvertisementMedia {
    pub advertisement_id: i32,
    pub kind: String,
    pub position: i32,
    pub url: String,
}

/// Diesel model representing the `advertisement_social_links` table.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = crate::schema::advertisement_social_links)]
pub struct AdvertisementSocialLink {
    pub advertisement_id: i32,
    pub platform: String,
    pub handle: String,
}

impl Advertisement {
    /// Builds the domain listing from the row and its related media and
    /// social link rows.
    pub fn into_domain(
        self,
        mut media: Vec<AdvertisementMedia>,
        social_links: Vec<AdvertisementSocialLink>,
    ) -> Result<DomainAdvertisement, TypeConstraintError> {
        media.sort_by_key(|item| (item.position, item.id));

        let mut images = Vec::new();
        let mut videos = Vec::new();
        for item in media {
            match MediaKind::try_from(item.kind.as_str())? {
                MediaKind::Image => images.push(item.url),
                MediaKind::Video => videos.push(item.url),
            }
        }

        Ok(DomainAdvertisement {
            id: self.id.try_into()?,
            title: self.title,
            description: self.description,
            category: self.category,
            sub_category: self.sub_category,
            governorate: self.governorate,
            phone: self.phone,
            whatsapp: self.whatsapp,
            images,
            videos,
            social_media: social_links
                .into_iter()
                .map(|link| (link.platform, link.handle))
                .collect(),
            is_active: self.is_active,
            subscription_end_date: self.subscription_end_date,
            display_order: self.display_order,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
