use std::time::Duration;

use business::domain::errors::TransportError;
use business::domain::product::value_objects::ProductId;
use reqwest::Client;
use url::Url;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared HTTP client configuration for the products API.
pub struct ApiClient {
    pub client: Client,
    pub base_url: Url,
}

impl ApiClient {
    /// Builds a client for `base_url` (e.g. `http://localhost:3000/api`).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, url::ParseError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self::with_client(client, base_url)
    }

    /// Uses a preconfigured `reqwest` client.
    pub fn with_client(client: Client, base_url: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            client,
            base_url: Url::parse(base_url)?,
        })
    }

    /// Returns the products collection endpoint URL.
    pub fn products_url(&self) -> String {
        format!("{}/products", self.base_url.as_str().trim_end_matches('/'))
    }

    /// Returns the endpoint URL of a single product.
    pub fn product_url(&self, id: ProductId) -> String {
        format!("{}/{}", self.products_url(), id)
    }
}

/// Collapses every `reqwest` failure into the domain transport error.
pub fn to_transport_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::timeout()
    } else if err.is_decode() {
        TransportError::malformed_body()
    } else if let Some(status) = err.status() {
        TransportError::status(status.as_u16())
    } else {
        TransportError::network()
    }
}
