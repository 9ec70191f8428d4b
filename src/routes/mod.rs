use actix_web::web;

pub mod advertisements;

/// Registers the advertisement endpoints under `/api/advertisements`.
///
/// The category route is registered before `/{id}` so that the literal
/// `category` segment is never captured as an identifier.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/advertisements")
            .service(
                web::resource(["", "/"]).route(web::get().to(advertisements::list_advertisements)),
            )
            .service(advertisements::list_advertisements_by_category)
            .service(advertisements::get_advertisement),
    );
}
