// Shared building blocks for the comparison service
pub mod config;
pub mod errors;
pub mod http_client;

pub use config::AppConfig;
pub use errors::{ConfigError, RequestError};
pub use http_client::{fetch_text, fresh_client, ClientFactory, PooledClientFactory};
