//! HTTP client for the remote catalog API.

use catalog_config::ApiConfig;
use catalog_core::entities::Item;
use futures::StreamExt;
use futures::stream::BoxStream;

use crate::{ItemSource, error::FetchError, http::check_response};

/// Fetches the catalog from `GET {base_url}/objects`.
///
/// Cloning is cheap; the underlying `reqwest::Client` is reference counted.
#[derive(Debug, Clone)]
pub struct HttpItemSource {
    http: reqwest::Client,
    base_url: String,
}

impl HttpItemSource {
    /// Build a client from API configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the underlying `reqwest::Client` fails
    /// to build (e.g. no TLS backend available).
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full catalog once.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the HTTP request fails, the API returns a
    /// non-success status, or the body is not a JSON array of items.
    pub async fn fetch_items(&self) -> Result<Vec<Item>, FetchError> {
        let url = format!("{}/objects", self.base_url);
        tracing::debug!(%url, "fetching catalog");
        let resp = check_response(self.http.get(&url).send().await?).await?;
        let body = resp.text().await?;
        let items = parse_items(&body)?;
        tracing::info!(count = items.len(), "catalog fetched");
        Ok(items)
    }
}

impl ItemSource for HttpItemSource {
    fn fetch(&self) -> BoxStream<'static, Result<Vec<Item>, FetchError>> {
        let this = self.clone();
        futures::stream::once(async move { this.fetch_items().await }).boxed()
    }
}

/// Decode a catalog listing body.
///
/// # Errors
///
/// Returns [`FetchError::Parse`] if `body` is not a JSON array of items.
pub fn parse_items(body: &str) -> Result<Vec<Item>, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))
}
