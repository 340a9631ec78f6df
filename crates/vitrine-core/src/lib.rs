//! Core domain types for Vitrine product search.
//!
//! - **Money**: cents-based monetary values with locale-aware formatting
//! - **Product**: wire shapes and display-ready view models
//! - **Config**: search configuration (endpoint, view mode, price format)

pub mod config;
pub mod money;
pub mod product;

pub use config::{SearchConfig, ViewMode};
pub use money::{Currency, Locale, Money, PriceFormat};
pub use product::{RawProduct, ResultItem, ResultSet};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{SearchConfig, ViewMode};
    pub use crate::money::{Currency, Locale, Money, PriceFormat};
    pub use crate::product::{RawProduct, ResultItem, ResultSet};
}
