//! Search orchestration: query, fetch, transform, commit.

use std::sync::Arc;

use tracing::debug;

use vitrine_catalog::{CatalogError, ProductCatalog};
use vitrine_core::config::{SearchConfig, ViewMode};
use vitrine_core::money::PriceFormat;
use vitrine_core::product::{RawProduct, ResultSet};

use crate::pipeline::build_result_set;
use crate::presenter::RenderProps;
use crate::wishlist::{TracingWishlist, WishlistSink};

/// Lifecycle of the search state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// A request for the latest generation is outstanding.
    Fetching,
    /// The latest generation has been committed.
    Settled,
}

/// Snapshot of one submitted search.
///
/// Captures the query at the moment of submission, so edits made while
/// the fetch is in flight do not change what was searched for. The
/// generation is a monotonically increasing token used to discard
/// out-of-order completions.
#[derive(Debug, Clone)]
pub struct SearchTicket {
    generation: u64,
    query: String,
}

impl SearchTicket {
    /// The query captured at submission.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The generation token for this submission.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What happened to a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Blank query; no request issued, no state changed.
    Skipped,
    /// The completion was committed as the renderable state.
    Applied,
    /// The completion belonged to a superseded generation and was discarded.
    Stale,
}

/// Owns the query string and the committed result view-model.
///
/// Single-writer: all mutation goes through `&mut self`. The only
/// suspension point is the catalog fetch inside [`search`](Self::search).
pub struct SearchController {
    query: String,
    phase: SearchPhase,
    results: ResultSet,
    last_error: Option<CatalogError>,
    mode: ViewMode,
    price_format: PriceFormat,
    latest_generation: u64,
    wishlist: Arc<dyn WishlistSink>,
}

impl SearchController {
    /// Create a controller from configuration.
    ///
    /// Starts idle with an empty query and an empty result set; wishlist
    /// additions are reported to the tracing layer unless a sink is
    /// injected with [`with_wishlist`](Self::with_wishlist).
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            query: String::new(),
            phase: SearchPhase::Idle,
            results: ResultSet::empty(),
            last_error: None,
            mode: config.mode,
            price_format: config.price_format(),
            latest_generation: 0,
            wishlist: Arc::new(TracingWishlist),
        }
    }

    /// Replace the wishlist sink.
    pub fn with_wishlist(mut self, sink: Arc<dyn WishlistSink>) -> Self {
        self.wishlist = sink;
        self
    }

    /// Replace the query verbatim. No validation, no trimming.
    pub fn set_query(&mut self, value: impl Into<String>) {
        self.query = value.into();
    }

    /// The current query string.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The current lifecycle phase.
    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    /// The committed result set.
    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    /// Error from the most recent commit, if it failed.
    pub fn last_error(&self) -> Option<&CatalogError> {
        self.last_error.as_ref()
    }

    /// The stable wishlist handle passed to presenters.
    pub fn wishlist(&self) -> Arc<dyn WishlistSink> {
        Arc::clone(&self.wishlist)
    }

    /// Report a product id to the wishlist sink.
    ///
    /// Side-channel action: mutates no search state, issues no request.
    pub fn add_to_wishlist(&self, product_id: u64) {
        self.wishlist.add(product_id);
    }

    /// Borrow the committed state as presenter props.
    pub fn render_props(&self) -> RenderProps<'_> {
        RenderProps {
            results: &self.results.items,
            total: self.results.total,
            error: self.last_error.as_ref(),
        }
    }

    /// Start a submission.
    ///
    /// Returns `None` without touching any state when the trimmed query
    /// is blank. Otherwise issues a new generation, moves to `Fetching`,
    /// and returns the ticket the eventual completion must present to
    /// [`commit`](Self::commit).
    pub fn begin_search(&mut self) -> Option<SearchTicket> {
        if self.query.trim().is_empty() {
            debug!("blank query, submit skipped");
            return None;
        }
        self.latest_generation += 1;
        self.phase = SearchPhase::Fetching;
        debug!(generation = self.latest_generation, query = %self.query, "search submitted");
        Some(SearchTicket {
            generation: self.latest_generation,
            query: self.query.clone(),
        })
    }

    /// Apply a completed fetch.
    ///
    /// Last writer wins: a ticket whose generation is not the latest
    /// issued one is discarded, so a slow early request can never
    /// clobber a later request's result. A successful completion
    /// replaces the result set wholesale and clears any prior error; a
    /// failed one keeps the previous result set and records the error
    /// for the presenter.
    pub fn commit(
        &mut self,
        ticket: &SearchTicket,
        outcome: Result<Vec<RawProduct>, CatalogError>,
    ) -> Outcome {
        if ticket.generation != self.latest_generation {
            debug!(
                generation = ticket.generation,
                latest = self.latest_generation,
                "stale completion discarded"
            );
            return Outcome::Stale;
        }

        self.phase = SearchPhase::Settled;
        match outcome {
            Ok(raw) => {
                self.results = build_result_set(raw, self.mode, &self.price_format);
                self.last_error = None;
                debug!(
                    generation = ticket.generation,
                    items = self.results.len(),
                    "results committed"
                );
            }
            Err(err) => {
                debug!(generation = ticket.generation, error = %err, "search failed");
                self.last_error = Some(err);
            }
        }
        Outcome::Applied
    }

    /// Submit the current query against the catalog and commit the result.
    ///
    /// Blank queries are skipped; fetch failures surface through
    /// [`last_error`](Self::last_error), never as a panic or an `Err`.
    pub async fn search(&mut self, catalog: &dyn ProductCatalog) -> Outcome {
        let Some(ticket) = self.begin_search() else {
            return Outcome::Skipped;
        };
        let outcome = catalog.search(ticket.query()).await;
        self.commit(&ticket, outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::money::{Currency, Money};

    fn controller() -> SearchController {
        SearchController::new(&SearchConfig::default())
    }

    fn raw(id: u64, title: &str, price: f64) -> RawProduct {
        RawProduct {
            id,
            title: title.to_string(),
            price,
        }
    }

    #[test]
    fn test_blank_query_is_a_no_op() {
        let mut c = controller();
        assert!(c.begin_search().is_none());
        c.set_query("   ");
        assert!(c.begin_search().is_none());
        assert_eq!(c.phase(), SearchPhase::Idle);
        assert!(c.results().is_empty());
    }

    #[test]
    fn test_set_query_is_verbatim() {
        let mut c = controller();
        c.set_query("  shirt ");
        assert_eq!(c.query(), "  shirt ");
        // Submission captures the raw, untrimmed value.
        let ticket = c.begin_search().unwrap();
        assert_eq!(ticket.query(), "  shirt ");
    }

    #[test]
    fn test_successful_commit_replaces_results() {
        let mut c = controller();
        c.set_query("shirt");
        let ticket = c.begin_search().unwrap();
        assert_eq!(c.phase(), SearchPhase::Fetching);

        let outcome = c.commit(&ticket, Ok(vec![raw(1, "Shirt", 19.9)]));
        assert_eq!(outcome, Outcome::Applied);
        assert_eq!(c.phase(), SearchPhase::Settled);
        assert_eq!(c.results().len(), 1);
        assert_eq!(
            c.results().total,
            Some(Money::new(1990, Currency::BRL))
        );
        assert!(c.last_error().is_none());
    }

    #[test]
    fn test_stale_generation_is_discarded() {
        let mut c = controller();
        c.set_query("shirt");
        let first = c.begin_search().unwrap();
        c.set_query("shoes");
        let second = c.begin_search().unwrap();

        // The slower first request completes after the second one.
        assert_eq!(
            c.commit(&second, Ok(vec![raw(2, "Shoes", 50.0)])),
            Outcome::Applied
        );
        assert_eq!(
            c.commit(&first, Ok(vec![raw(1, "Shirt", 19.9)])),
            Outcome::Stale
        );
        assert_eq!(c.results().items[0].id, 2);
    }

    #[test]
    fn test_stale_discard_also_before_latest_commits() {
        let mut c = controller();
        c.set_query("shirt");
        let first = c.begin_search().unwrap();
        c.set_query("shoes");
        let second = c.begin_search().unwrap();

        assert_eq!(
            c.commit(&first, Ok(vec![raw(1, "Shirt", 19.9)])),
            Outcome::Stale
        );
        assert!(c.results().is_empty());
        assert_eq!(
            c.commit(&second, Ok(vec![raw(2, "Shoes", 50.0)])),
            Outcome::Applied
        );
        assert_eq!(c.results().items[0].id, 2);
    }

    #[test]
    fn test_failed_commit_keeps_previous_results() {
        let mut c = controller();
        c.set_query("shirt");
        let ticket = c.begin_search().unwrap();
        c.commit(&ticket, Ok(vec![raw(1, "Shirt", 19.9)]));

        let ticket = c.begin_search().unwrap();
        let outcome = c.commit(
            &ticket,
            Err(CatalogError::Connection("refused".to_string())),
        );
        assert_eq!(outcome, Outcome::Applied);
        assert_eq!(c.results().len(), 1);
        assert!(matches!(
            c.last_error(),
            Some(CatalogError::Connection(_))
        ));

        // The next successful commit clears the error state.
        let ticket = c.begin_search().unwrap();
        c.commit(&ticket, Ok(vec![]));
        assert!(c.last_error().is_none());
    }

    #[test]
    fn test_wishlist_handle_is_stable_across_query_edits() {
        let mut c = controller();
        let before = c.wishlist();
        c.set_query("sh");
        c.set_query("shi");
        c.set_query("shirt");
        let after = c.wishlist();
        assert!(Arc::ptr_eq(&before, &after));
    }

    #[test]
    fn test_render_props_reflect_committed_state() {
        let mut c = controller();
        c.set_query("shirt");
        let ticket = c.begin_search().unwrap();
        c.commit(&ticket, Ok(vec![raw(1, "Shirt", 19.9)]));

        let props = c.render_props();
        assert_eq!(props.results.len(), 1);
        assert_eq!(props.total, Some(Money::new(1990, Currency::BRL)));
        assert!(props.error.is_none());
    }
}
