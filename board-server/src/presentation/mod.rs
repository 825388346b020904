use actix_web::web;

pub mod dto;
pub mod handlers;
pub mod middleware;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(handlers::posts::health)
            .service(handlers::posts::get_props)
            .service(handlers::posts::get_posts),
    );
}
