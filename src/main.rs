use std::env;

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use config::{Config, Environment, File};
use env_logger::Env;

use pushkind_adverts::db::establish_connection_pool;
use pushkind_adverts::domain::types::MediaBaseUrl;
use pushkind_adverts::models::config::ServerConfig;
use pushkind_adverts::repository::DieselRepository;
use pushkind_adverts::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        .add_source(File::with_name("config/default"))
        .add_source(File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(Environment::with_prefix("APP"))
        .build();

    let server_config = match settings.and_then(|s| s.try_deserialize::<ServerConfig>()) {
        Ok(server_config) => server_config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let media_base_url = match MediaBaseUrl::new(&server_config.media_base_url) {
        Ok(media_base_url) => media_base_url,
        Err(e) => {
            log::error!("Invalid media base url: {e}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    log::info!(
        "Serving advertisements on {}:{} with media from {media_base_url}",
        server_config.address,
        server_config.port
    );

    let repo = web::Data::new(DieselRepository::new(pool));
    let media_base_url = web::Data::new(media_base_url);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(repo.clone())
            .app_data(media_base_url.clone())
            .configure(routes::configure)
    })
    .bind((server_config.address.as_str(), server_config.port))?
    .run()
    .await
}
