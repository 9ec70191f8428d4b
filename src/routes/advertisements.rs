use actix_web::error::BlockingError;
use actix_web::{HttpResponse, Responder, get, web};
use chrono::Utc;
use serde::Serialize;

use crate::domain::types::MediaBaseUrl;
use crate::dto::advertisements::ErrorResponse;
use crate::repository::DieselRepository;
use crate::services::advertisements::{
    CategoryQueryParams, ListQueryParams, get_advertisement as get_advertisement_service,
    list_advertisements as list_advertisements_service,
    list_advertisements_by_category as list_advertisements_by_category_service,
};
use crate::services::{ServiceError, ServiceResult};

/// Raw decoded query string. Repeated keys are resolved by the service
/// parameter types rather than rejected during extraction.
type QueryPairs = web::Query<Vec<(String, String)>>;

/// Maps a service outcome onto the JSON envelope and status code.
fn respond<T: Serialize>(result: Result<ServiceResult<T>, BlockingError>) -> HttpResponse {
    match result {
        Ok(Ok(body)) => HttpResponse::Ok().json(body),
        Ok(Err(ServiceError::NotFound)) => {
            HttpResponse::NotFound().json(ErrorResponse::new("Advertisement not found"))
        }
        Ok(Err(ServiceError::StoreFailure(detail))) => HttpResponse::InternalServerError()
            .json(ErrorResponse::new("Server error").with_error(detail)),
        Err(e) => {
            log::error!("Blocking task failed: {e}");
            HttpResponse::InternalServerError().json(ErrorResponse::new("Server error"))
        }
    }
}

pub async fn list_advertisements(
    params: QueryPairs,
    repo: web::Data<DieselRepository>,
    media_base_url: web::Data<MediaBaseUrl>,
) -> impl Responder {
    let now = Utc::now().naive_utc();
    let params = ListQueryParams::from_pairs(params.into_inner());
    let result = web::block(move || {
        list_advertisements_service(params, now, media_base_url.get_ref(), repo.get_ref())
    })
    .await;
    respond(result)
}

#[get("/category/{category}")]
pub async fn list_advertisements_by_category(
    category: web::Path<String>,
    params: QueryPairs,
    repo: web::Data<DieselRepository>,
    media_base_url: web::Data<MediaBaseUrl>,
) -> impl Responder {
    let now = Utc::now().naive_utc();
    let category = category.into_inner();
    let params = CategoryQueryParams::from_pairs(params.into_inner());
    let result = web::block(move || {
        list_advertisements_by_category_service(
            &category,
            params,
            now,
            media_base_url.get_ref(),
            repo.get_ref(),
        )
    })
    .await;
    respond(result)
}

#[get("/{id}")]
pub async fn get_advertisement(
    id: web::Path<String>,
    repo: web::Data<DieselRepository>,
    media_base_url: web::Data<MediaBaseUrl>,
) -> impl Responder {
    let id = id.into_inner();
    let result = web::block(move || {
        get_advertisement_service(&id, media_base_url.get_ref(), repo.get_ref())
    })
    .await;
    respond(result)
}
