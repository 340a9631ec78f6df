//! Error type for catalog operations.

use thiserror::Error;

/// Errors surfaced by a catalog fetch.
///
/// These never crash the caller; the search controller records them as a
/// visible error state for the presenter.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog answered with a non-success status.
    #[error("catalog returned status {status} for {url}")]
    Http { status: u16, url: String },

    /// The request never completed (DNS, connect, transport failure).
    #[error("connection error: {0}")]
    Connection(String),

    /// The response body was not a JSON array of products.
    #[error("invalid response body: {0}")]
    InvalidBody(String),
}

impl CatalogError {
    /// Whether a retry could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            CatalogError::Http { status, .. } => (500..600).contains(status),
            CatalogError::Connection(_) => true,
            CatalogError::InvalidBody(_) => false,
        }
    }
}
