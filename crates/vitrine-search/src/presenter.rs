//! Presenter contract.
//!
//! A presenter is an external collaborator: a pure projection of the
//! committed search state. It must not mutate its inputs; the only
//! action it may take is invoking the wishlist callback with a clicked
//! item's id.

use vitrine_catalog::CatalogError;
use vitrine_core::money::Money;
use vitrine_core::product::ResultItem;

/// Props surface handed to a presenter on each render.
#[derive(Debug)]
pub struct RenderProps<'a> {
    /// Result items in server order.
    pub results: &'a [ResultItem],
    /// Aggregate total, present in enriched mode.
    pub total: Option<Money>,
    /// Error from the most recent commit, if it failed.
    pub error: Option<&'a CatalogError>,
}

/// Renders a committed result set.
pub trait ResultsPresenter {
    /// Project the given props. Must not mutate the inputs.
    fn render(&mut self, props: RenderProps<'_>);
}
