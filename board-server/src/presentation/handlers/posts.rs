use actix_web::{HttpMessage, HttpRequest, HttpResponse, get, web};
use chrono::Utc;
use tracing::info;

use crate::application::listing_service::ListingService;
use crate::domain::error::ApiError;
use crate::presentation::dto::{HealthResponse, ListPostsQuery};
use crate::presentation::middleware::RequestId;

#[get("/posts")]
async fn get_posts(
    req: HttpRequest,
    listing: web::Data<ListingService>,
    query: web::Query<ListPostsQuery>,
) -> Result<HttpResponse, ApiError> {
    let query = query.into_inner();
    let page = listing.list(&query.search, query.page, query.page_size)?;

    info!(
        request_id = %request_id(&req),
        search = %query.search,
        page = page.page,
        total = page.total,
        "posts listed"
    );

    Ok(HttpResponse::Ok().json(page))
}

#[get("/props")]
async fn get_props(listing: web::Data<ListingService>) -> HttpResponse {
    HttpResponse::Ok().json(listing.props())
}

#[get("/health")]
async fn health(listing: web::Data<ListingService>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: if listing.props().has_error() {
            "degraded"
        } else {
            "ok"
        },
        posts: listing.props().posts.len(),
        timestamp: Utc::now(),
    })
}

fn request_id(req: &HttpRequest) -> String {
    req.extensions()
        .get::<RequestId>()
        .map(|rid| rid.0.clone())
        .unwrap_or_else(|| "unknown".into())
}
