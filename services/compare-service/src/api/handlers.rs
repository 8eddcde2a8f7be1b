use actix_web::{web, HttpResponse, Responder};
use common::{AppConfig, PooledClientFactory};
use serde::Serialize;

use crate::service::requester::{self, RunLimits};

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    service: String,
}

pub async fn health_check(config: web::Data<AppConfig>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        service: config.service_name.clone(),
    })
}

/// New client for every downstream call. Surfaces the first failure with the
/// number of calls that made it through.
pub async fn start_http_client(
    config: web::Data<AppConfig>,
    limits: web::Data<RunLimits>,
) -> impl Responder {
    match requester::run_unpooled(&config.downstream_url, limits.unpooled).await {
        Ok(report) => {
            tracing::info!("Unpooled run finished after {} calls", report.completed);
            HttpResponse::Ok().finish()
        }
        Err(failure) => {
            tracing::error!("Unpooled run failed: {}", failure);
            HttpResponse::BadRequest().json(failure.to_string())
        }
    }
}

/// Pooled clients from the shared factory. Always answers 200, even when the
/// loop was cut short.
pub async fn start_client_factory(
    config: web::Data<AppConfig>,
    limits: web::Data<RunLimits>,
    factory: web::Data<PooledClientFactory>,
) -> impl Responder {
    let report =
        requester::run_pooled(factory.get_ref(), &config.downstream_url, limits.pooled).await;

    if report.stopped_by.is_some() {
        tracing::warn!("Pooled run stopped early after {} calls", report.completed);
    }

    HttpResponse::Ok().finish()
}

pub async fn api_description() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "openapi": "3.0.1",
        "info": { "title": "compare-service", "version": env!("CARGO_PKG_VERSION") },
        "paths": {
            "/start-httpClient": {
                "get": {
                    "summary": "Call the downstream API with a new client per request",
                    "responses": {
                        "200": { "description": "All calls succeeded" },
                        "400": { "description": "First failure and number of successful calls" }
                    }
                }
            },
            "/start-IHttpClientFactory": {
                "get": {
                    "summary": "Call the downstream API with pooled clients",
                    "responses": { "200": { "description": "Run finished" } }
                }
            }
        }
    }))
}
