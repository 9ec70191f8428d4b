use std::collections::HashMap;

use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::db::DbConnection;
use crate::domain::advertisement::Advertisement;
use crate::domain::types::AdvertisementId;
use crate::models::advertisement::{
    Advertisement as DbAdvertisement, AdvertisementMedia as DbAdvertisementMedia,
    AdvertisementSocialLink as DbAdvertisementSocialLink,
};
use crate::repository::{
    AdvertisementListQuery, AdvertisementReader, DieselRepository, RepositoryResult,
};
use crate::schema::advertisements;

type BoxedAdvertisements<'a> = advertisements::BoxedQuery<'a, Sqlite>;

/// Upper bound on ids bound into a single `IN (...)` clause. SQLite caps bind
/// parameters per statement.
const ID_BATCH_SIZE: usize = 500;

/// Translates the visibility predicate into a boxed Diesel query.
fn filtered(query: &AdvertisementListQuery) -> BoxedAdvertisements<'static> {
    let mut items = advertisements::table
        .filter(advertisements::is_active.eq(true))
        .filter(advertisements::subscription_end_date.ge(query.now))
        .into_boxed::<Sqlite>();

    if let Some(category) = &query.category {
        items = items.filter(advertisements::category.eq(category.clone()));
    }

    if let Some(sub_category) = &query.sub_category {
        items = items.filter(advertisements::sub_category.eq(sub_category.clone()));
    }

    if let Some(governorate) = &query.governorate {
        items = items.filter(advertisements::governorate.eq(governorate.clone()));
    }

    items
}

fn ordered(items: BoxedAdvertisements<'static>) -> BoxedAdvertisements<'static> {
    items.order((
        advertisements::display_order.desc(),
        advertisements::created_at.desc(),
        advertisements::id.desc(),
    ))
}

/// Attaches media and social links to a batch of rows with one query per
/// related table and id batch.
fn load_related(
    conn: &mut DbConnection,
    rows: Vec<DbAdvertisement>,
) -> RepositoryResult<Vec<Advertisement>> {
    use crate::schema::{advertisement_media, advertisement_social_links};

    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<i32> = rows.iter().map(|row| row.id).collect();

    let mut media_by_ad: HashMap<i32, Vec<DbAdvertisementMedia>> = HashMap::new();
    let mut links_by_ad: HashMap<i32, Vec<DbAdvertisementSocialLink>> = HashMap::new();

    for batch in ids.chunks(ID_BATCH_SIZE) {
        for item in advertisement_media::table
            .filter(advertisement_media::advertisement_id.eq_any(batch.to_vec()))
            .order((
                advertisement_media::advertisement_id.asc(),
                advertisement_media::position.asc(),
                advertisement_media::id.asc(),
            ))
            .load::<DbAdvertisementMedia>(conn)?
        {
            media_by_ad
                .entry(item.advertisement_id)
                .or_default()
                .push(item);
        }

        for link in advertisement_social_links::table
            .filter(advertisement_social_links::advertisement_id.eq_any(batch.to_vec()))
            .load::<DbAdvertisementSocialLink>(conn)?
        {
            links_by_ad
                .entry(link.advertisement_id)
                .or_default()
                .push(link);
        }
    }

    let items = rows
        .into_iter()
        .map(|row| {
            let media = media_by_ad.remove(&row.id).unwrap_or_default();
            let links = links_by_ad.remove(&row.id).unwrap_or_default();
            row.into_domain(media, links)
        })
        .collect::<Result<Vec<Advertisement>, _>>()?;

    Ok(items)
}

impl AdvertisementReader for DieselRepository {
    fn list_advertisements(
        &self,
        query: AdvertisementListQuery,
    ) -> RepositoryResult<(usize, Vec<Advertisement>)> {
        let mut conn = self.conn()?;

        let total = filtered(&query).count().get_result::<i64>(&mut conn)? as usize;

        let mut items = ordered(filtered(&query));

        // Apply pagination if requested
        if let Some(pagination) = &query.pagination {
            items = items.offset(pagination.skip).limit(pagination.limit);
        }

        let rows = items.load::<DbAdvertisement>(&mut conn)?;
        let items = load_related(&mut conn, rows)?;

        Ok((total, items))
    }

    fn find_advertisements(
        &self,
        query: AdvertisementListQuery,
    ) -> RepositoryResult<Vec<Advertisement>> {
        let mut conn = self.conn()?;

        let rows = ordered(filtered(&query)).load::<DbAdvertisement>(&mut conn)?;

        load_related(&mut conn, rows)
    }

    fn get_advertisement_by_id(
        &self,
        id: AdvertisementId,
    ) -> RepositoryResult<Option<Advertisement>> {
        let mut conn = self.conn()?;

        let row = advertisements::table
            .find(id.get())
            .first::<DbAdvertisement>(&mut conn)
            .optional()?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(load_related(&mut conn, vec![row])?.pop())
    }
}
