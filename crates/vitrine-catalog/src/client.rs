//! Catalog fetch client.

use async_trait::async_trait;
use tracing::debug;

use vitrine_core::product::RawProduct;

use crate::error::CatalogError;
use crate::retry::RetryPolicy;

/// The remote product catalog, as seen by the search core.
///
/// Object-safe so controllers can hold `&dyn ProductCatalog` and tests
/// can substitute an in-memory collaborator.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Fetch the products matching `query`, in server order.
    async fn search(&self, query: &str) -> Result<Vec<RawProduct>, CatalogError>;
}

/// HTTP implementation of [`ProductCatalog`].
///
/// Issues `GET {base_url}/products?q={query}` with the query value
/// percent-encoded.
pub struct HttpCatalog {
    base_url: String,
    http: reqwest::Client,
    retry: RetryPolicy,
}

impl HttpCatalog {
    /// Create a client for the given catalog base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
            retry: RetryPolicy::default(),
        }
    }

    /// Set the retry policy for retryable failures.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the request target for a query.
    fn search_url(&self, query: &str) -> String {
        format!("{}/products?q={}", self.base_url, urlencoding::encode(query))
    }

    async fn fetch_once(&self, url: &str) -> Result<Vec<RawProduct>, CatalogError> {
        let response = self
            .http
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| CatalogError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response
            .json::<Vec<RawProduct>>()
            .await
            .map_err(|e| CatalogError::InvalidBody(e.to_string()))
    }
}

#[async_trait]
impl ProductCatalog for HttpCatalog {
    async fn search(&self, query: &str) -> Result<Vec<RawProduct>, CatalogError> {
        let url = self.search_url(query);
        let mut attempt = 0u32;
        loop {
            debug!(%url, attempt, "catalog request");
            match self.fetch_once(&url).await {
                Ok(products) => {
                    debug!(count = products.len(), "catalog response");
                    return Ok(products);
                }
                Err(err) if self.retry.should_retry(&err, attempt) => {
                    let delay = self.retry.backoff.delay_for_attempt(attempt);
                    debug!(error = %err, delay_ms = delay.as_millis() as u64, "retrying");
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}
