use actix_web::web;
use super::handlers;

pub fn configure(cfg: &mut web::ServiceConfig, development: bool) {
    cfg.route("/health", web::get().to(handlers::health_check))
        .route("/start-httpClient", web::get().to(handlers::start_http_client))
        .route("/start-IHttpClientFactory", web::get().to(handlers::start_client_factory));

    // API description is only exposed to developers
    if development {
        cfg.route("/openapi.json", web::get().to(handlers::api_description));
    }
}
