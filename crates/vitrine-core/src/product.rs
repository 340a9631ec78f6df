//! Product wire shapes and display-ready view models.

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Unprocessed item shape as received from the catalog endpoint.
///
/// Lives only for the duration of one fetch; the pipeline turns it into
/// a [`ResultItem`] and never retains it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawProduct {
    pub id: u64,
    pub title: String,
    pub price: f64,
}

/// A product shaped for rendering.
///
/// `price_display` is always recomputed from `price` by the pipeline; it
/// is `None` when the plain view mode is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultItem {
    pub id: u64,
    pub title: String,
    pub price: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_display: Option<String>,
}

/// The committed, renderable outcome of the latest completed search.
///
/// Replaced wholesale on each successful commit, never merged. Item order
/// is the server response order. In enriched mode `total` is the exact
/// cent-sum of the item prices; in plain mode it is absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResultSet {
    pub items: Vec<ResultItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<Money>,
}

impl ResultSet {
    /// Create an empty result set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}
