mod api;
mod domain;
mod service;

use actix_web::{web, App, HttpServer};
use common::{AppConfig, PooledClientFactory};
use service::requester::RunLimits;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let (config, config_errors) = AppConfig::from_env();

    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    for error in &config_errors {
        tracing::warn!("{}", error);
    }

    // One pool for the whole process, shared by every worker
    let factory = PooledClientFactory::new().map_err(std::io::Error::other)?;
    let limits = RunLimits::default();

    let server_address = config.server_address();
    let development = config.is_development();
    tracing::info!("🔁 Compare Service starting on http://{}", server_address);
    tracing::info!("Downstream target: {}", config.downstream_url);
    if development {
        tracing::info!("Development mode: API description at /openapi.json");
    }

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(factory.clone()))
            .app_data(web::Data::new(limits))
            .configure(|cfg| api::routes::configure(cfg, development))
    })
    .bind(&server_address)?
    .run()
    .await
}
