//! Search configuration.
//!
//! The catalog endpoint and result-shaping behavior are injected
//! configuration, never hard-coded at the call site.

use serde::{Deserialize, Serialize};

use crate::money::{Currency, Locale, PriceFormat};

/// How fetched products are shaped for rendering.
///
/// Both variants are first-class; which one runs is a configuration
/// decision, not a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Pass products through with no formatted price and no total.
    Plain,
    /// Attach a locale-formatted price to each item and an aggregate total.
    #[default]
    Enriched,
}

/// Configuration for the search core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Base URL of the catalog API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Result-shaping mode.
    #[serde(default)]
    pub mode: ViewMode,

    /// Currency prices are denominated in.
    #[serde(default)]
    pub currency: Currency,

    /// Locale used for price display strings.
    #[serde(default)]
    pub locale: Locale,
}

fn default_base_url() -> String {
    "http://localhost:3333".to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            mode: ViewMode::default(),
            currency: Currency::default(),
            locale: Locale::default(),
        }
    }
}

impl SearchConfig {
    /// Build the price formatter for this configuration.
    pub fn price_format(&self) -> PriceFormat {
        PriceFormat::new(self.currency, self.locale)
    }
}
