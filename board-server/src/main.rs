mod application;
mod domain;
mod infrastructure;
mod presentation;

use actix_cors::Cors;
use actix_web::middleware::DefaultHeaders;
use actix_web::{App, HttpServer, web};
use application::listing_service::ListingService;
use board_core::{BoardClientHttp, PageProps};
use infrastructure::config::AppConfig;
use infrastructure::logging::init_logging;
use presentation::middleware::{RequestIdMiddleware, TimingMiddleware};
use tracing::{info, warn};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = AppConfig::from_env()?;

    // The listing is built once, ahead of serving any page.
    let client = BoardClientHttp::connect(&config.api_base_url)?;
    let props = PageProps::build(&client).await;
    if props.has_error() {
        warn!(api = %config.api_base_url, "serving an empty listing");
    }
    let listing = ListingService::new(props, config.default_page_size);

    info!(host = %config.host, port = config.port, "HTTP server starting");

    let config_data = config.clone();
    HttpServer::new(move || {
        let cors = build_cors(&config_data);
        App::new()
            .wrap(TimingMiddleware)
            .wrap(RequestIdMiddleware)
            .wrap(
                DefaultHeaders::new()
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("Referrer-Policy", "no-referrer"))
                    .add(("Cross-Origin-Opener-Policy", "same-origin")),
            )
            .wrap(cors)
            .app_data(web::Data::new(listing.clone()))
            .configure(presentation::routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}

fn build_cors(config: &AppConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET"])
        .allowed_headers(vec![actix_web::http::header::CONTENT_TYPE])
        .max_age(3600);

    for origin in &config.cors_origins {
        cors = cors.allowed_origin(origin);
    }

    cors
}
