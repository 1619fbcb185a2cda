//! One-shot catalog fetch.

use thiserror::Error;

use crate::product::{Product, ProductRecord};

/// File name of the catalog document under the configured base path.
pub const DATA_FILE: &str = "data.json";

/// Failure loading the product catalog.
///
/// All variants are recovered locally by leaving the catalog empty; there is
/// no retry. The load is attempted exactly once per application session.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Network/request-level failure.
    #[error("catalog request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The catalog source answered with a non-success status.
    #[error("catalog fetch returned status {status}")]
    Fetch { status: u16 },

    /// The response body was not a well-formed product sequence.
    #[error("catalog payload malformed: {0}")]
    Parse(String),
}

/// Client for the external catalog source.
///
/// The base path is fixed at construction (the frontend bakes it in at build
/// time); the client never polls and never retries.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    data_url: String,
}

impl CatalogClient {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        let data_url = if base.is_empty() {
            format!("/{DATA_FILE}")
        } else {
            format!("{}/{DATA_FILE}", base.trim_end_matches('/'))
        };

        Self {
            http: reqwest::Client::new(),
            data_url,
        }
    }

    /// The resolved URL of the catalog document.
    pub fn data_url(&self) -> &str {
        &self.data_url
    }

    /// Fetch and parse the catalog.
    ///
    /// Issues exactly one GET. The caller is responsible for surfacing the
    /// failure; the convention here is log-and-ignore, leaving the catalog
    /// empty.
    pub async fn load(&self) -> Result<Vec<Product>, CatalogError> {
        tracing::debug!(url = %self.data_url, "loading product catalog");

        let response = self
            .http
            .get(&self.data_url)
            .send()
            .await
            .map_err(CatalogError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Fetch {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(CatalogError::Transport)?;
        parse_catalog(&body)
    }
}

/// Parse a catalog document into validated products, preserving order.
pub fn parse_catalog(body: &[u8]) -> Result<Vec<Product>, CatalogError> {
    let records: Vec<ProductRecord> =
        serde_json::from_slice(body).map_err(|err| CatalogError::Parse(err.to_string()))?;

    records.into_iter().map(Product::try_from).collect()
}
