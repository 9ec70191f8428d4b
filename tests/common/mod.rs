//! Helpers for integration tests.
#![allow(dead_code)]

use chrono::{Duration, NaiveDateTime, Utc};
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use pushkind_adverts::db::{DbPool, establish_connection_pool};
use pushkind_adverts::domain::types::MediaKind;
use pushkind_adverts::models::advertisement::{
    AdvertisementSocialLink, NewAdvertisement, NewAdvertisementMedia,
};
use pushkind_adverts::schema::{advertisement_media, advertisement_social_links, advertisements};
use tempfile::NamedTempFile;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Temporary database used in integration tests.
pub struct TestDb {
    _tempfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("Failed to create temp file");
        let pool = establish_connection_pool(tempfile.path().to_str().unwrap())
            .expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");
        TestDb {
            _tempfile: tempfile,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    /// Inserts an advertisement with its media and social links, returning
    /// the new id.
    pub fn insert(&self, fixture: Fixture) -> i32 {
        let mut conn = self.pool.get().expect("should acquire DB connection");
        insert_fixture(&mut conn, fixture)
    }

    /// Inserts many advertisements in a single transaction.
    pub fn insert_all(&self, fixtures: Vec<Fixture>) -> Vec<i32> {
        let mut conn = self.pool.get().expect("should acquire DB connection");
        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            Ok(fixtures
                .into_iter()
                .map(|fixture| insert_fixture(conn, fixture))
                .collect())
        })
        .expect("should insert advertisements")
    }
}

fn insert_fixture(conn: &mut SqliteConnection, fixture: Fixture) -> i32 {
    let id: i32 = diesel::insert_into(advertisements::table)
        .values(&fixture.advertisement)
        .returning(advertisements::id)
        .get_result(conn)
        .expect("should insert advertisement");

    let media = fixture
        .images
        .iter()
        .map(|url| (MediaKind::Image, url))
        .chain(fixture.videos.iter().map(|url| (MediaKind::Video, url)))
        .enumerate()
        .map(|(position, (kind, url))| NewAdvertisementMedia {
            advertisement_id: id,
            kind: kind.as_str().to_string(),
            position: position as i32,
            url: url.clone(),
        })
        .collect::<Vec<_>>();
    if !media.is_empty() {
        diesel::insert_into(advertisement_media::table)
            .values(&media)
            .execute(conn)
            .expect("should insert media");
    }

    let links = fixture
        .social_media
        .iter()
        .map(|(platform, handle)| AdvertisementSocialLink {
            advertisement_id: id,
            platform: platform.clone(),
            handle: handle.clone(),
        })
        .collect::<Vec<_>>();
    if !links.is_empty() {
        diesel::insert_into(advertisement_social_links::table)
            .values(&links)
            .execute(conn)
            .expect("should insert social links");
    }

    id
}

/// Builder for seeded advertisements.
pub struct Fixture {
    pub advertisement: NewAdvertisement,
    pub images: Vec<String>,
    pub videos: Vec<String>,
    pub social_media: Vec<(String, String)>,
}

pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

impl Fixture {
    pub fn new(title: &str, category: &str) -> Self {
        let created_at = now() - Duration::days(10);
        Self {
            advertisement: NewAdvertisement {
                title: title.to_string(),
                description: None,
                category: category.to_string(),
                sub_category: None,
                governorate: "Cairo".to_string(),
                phone: None,
                whatsapp: None,
                is_active: true,
                subscription_end_date: now() + Duration::days(30),
                display_order: 0,
                created_at,
                updated_at: created_at,
            },
            images: Vec::new(),
            videos: Vec::new(),
            social_media: Vec::new(),
        }
    }

    pub fn sub_category(mut self, sub_category: &str) -> Self {
        self.advertisement.sub_category = Some(sub_category.to_string());
        self
    }

    pub fn governorate(mut self, governorate: &str) -> Self {
        self.advertisement.governorate = governorate.to_string();
        self
    }

    pub fn display_order(mut self, display_order: i32) -> Self {
        self.advertisement.display_order = display_order;
        self
    }

    pub fn created_days_ago(mut self, days: i64) -> Self {
        self.advertisement.created_at = now() - Duration::days(days);
        self
    }

    pub fn inactive(mut self) -> Self {
        self.advertisement.is_active = false;
        self
    }

    pub fn expired(mut self) -> Self {
        self.advertisement.subscription_end_date = now() - Duration::days(1);
        self
    }

    pub fn image(mut self, url: &str) -> Self {
        self.images.push(url.to_string());
        self
    }

    pub fn video(mut self, url: &str) -> Self {
        self.videos.push(url.to_string());
        self
    }

    pub fn social(mut self, platform: &str, handle: &str) -> Self {
        self.social_media
            .push((platform.to_string(), handle.to_string()));
        self
    }
}
