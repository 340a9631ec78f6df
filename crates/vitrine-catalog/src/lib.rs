//! Catalog API access layer for Vitrine product search.
//!
//! The remote catalog is an opaque collaborator behind the
//! [`ProductCatalog`] trait; [`HttpCatalog`] is the production
//! implementation, with timeout-free single-shot fetches by default and
//! an opt-in retry policy for retryable failures.

mod client;
mod error;
mod retry;

pub use client::{HttpCatalog, ProductCatalog};
pub use error::CatalogError;
pub use retry::{BackoffStrategy, RetryPolicy};
