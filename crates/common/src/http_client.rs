// Outbound HTTP clients: one shared pool, or a brand new client per call
use reqwest::Client;

use crate::errors::RequestError;

/// Hands out clients for outbound calls. Implementations decide how the
/// underlying connections are owned and reused.
pub trait ClientFactory: Send + Sync {
    fn create_client(&self) -> Client;
}

/// Process-wide provider backed by a single connection pool. Every client it
/// returns is a handle onto the same pool, so idle keep-alive connections are
/// picked up again by later calls.
#[derive(Clone)]
pub struct PooledClientFactory {
    client: Client,
}

impl PooledClientFactory {
    pub fn new() -> Result<Self, RequestError> {
        let client = Client::builder()
            .build()
            .map_err(RequestError::ClientBuild)?;
        Ok(Self { client })
    }
}

impl ClientFactory for PooledClientFactory {
    fn create_client(&self) -> Client {
        self.client.clone()
    }
}

/// Builds a standalone client with its own pool. The connections it opens are
/// torn down when the client is dropped.
pub fn fresh_client() -> Result<Client, RequestError> {
    Client::builder().build().map_err(RequestError::ClientBuild)
}

/// GET `url` and read the whole body as text. Non-2xx statuses are not
/// treated as failures.
pub async fn fetch_text(client: &Client, url: &str) -> Result<String, RequestError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(RequestError::from_transport)?;

    let status = response.status();
    if !status.is_success() {
        tracing::debug!("Downstream answered {} for {}", status, url);
    }

    response.text().await.map_err(RequestError::from_transport)
}
