//! Product catalog API client.
//!
//! The catalog is a plain REST service: `GET stock/{id}` returns the
//! available quantity and `GET products/{id}` returns display metadata.
//! Both endpoints are read-only from this system's perspective.

use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;
use tracing::instrument;

use rocket_shoes_core::{CatalogProduct, ProductId, StockRecord};

use crate::config::CatalogConfig;

/// Errors that can occur when talking to the catalog API.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("unexpected status {status}: {body}")]
    Status {
        /// HTTP status code returned.
        status: StatusCode,
        /// Response body, truncated for logging.
        body: String,
    },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),
}

/// Read-only access to product metadata and stock levels.
///
/// The cart store is generic over this port so tests can script stock
/// responses without a network.
pub trait ProductCatalogClient {
    /// Current available quantity for a product.
    fn fetch_stock(
        &self,
        id: ProductId,
    ) -> impl Future<Output = Result<StockRecord, CatalogError>> + Send;

    /// Display metadata for a product.
    fn fetch_product(
        &self,
        id: ProductId,
    ) -> impl Future<Output = Result<CatalogProduct, CatalogError>> + Send;
}

// =============================================================================
// HttpCatalogClient
// =============================================================================

/// `reqwest`-backed client for the catalog REST API.
#[derive(Clone)]
pub struct HttpCatalogClient {
    inner: Arc<HttpCatalogClientInner>,
}

struct HttpCatalogClientInner {
    client: reqwest::Client,
    /// Base URL, always with a trailing slash.
    base_url: String,
}

impl HttpCatalogClient {
    /// Create a new catalog client.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let mut base_url = config.base_url.to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Ok(Self {
            inner: Arc::new(HttpCatalogClientInner { client, base_url }),
        })
    }

    /// Execute a GET request and decode the JSON response.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, CatalogError> {
        let url = format!("{}{path}", self.inner.base_url);
        let response = self.inner.client.get(&url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(path.to_string()));
        }

        // Read the body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            let body: String = response_text.chars().take(200).collect();
            tracing::error!(
                status = %status,
                body = %body,
                "catalog API returned non-success status"
            );
            return Err(CatalogError::Status { status, body });
        }

        serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %response_text.chars().take(200).collect::<String>(),
                "failed to parse catalog response"
            );
            CatalogError::Parse(e)
        })
    }
}

impl ProductCatalogClient for HttpCatalogClient {
    #[instrument(skip(self))]
    async fn fetch_stock(&self, id: ProductId) -> Result<StockRecord, CatalogError> {
        self.get_json(&format!("stock/{id}")).await
    }

    #[instrument(skip(self))]
    async fn fetch_product(&self, id: ProductId) -> Result<CatalogProduct, CatalogError> {
        self.get_json(&format!("products/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_display() {
        let err = CatalogError::NotFound("stock/7".to_string());
        assert_eq!(err.to_string(), "not found: stock/7");

        let err = CatalogError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "unexpected status 500 Internal Server Error: boom");
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let config = CatalogConfig::new("http://localhost:3333/api".parse().expect("url"), 10);
        let client = HttpCatalogClient::new(&config).expect("client");
        assert!(client.inner.base_url.ends_with('/'));
    }
}
