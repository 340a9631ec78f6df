//! End-to-end controller flows against an in-memory catalog.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use vitrine_catalog::{CatalogError, ProductCatalog};
use vitrine_core::config::{SearchConfig, ViewMode};
use vitrine_core::money::{Currency, Money};
use vitrine_core::product::RawProduct;
use vitrine_search::{Outcome, RecordingWishlist, SearchController, SearchPhase};

/// In-memory catalog that serves queued responses and records queries.
#[derive(Default)]
struct FakeCatalog {
    responses: Mutex<VecDeque<Result<Vec<RawProduct>, CatalogError>>>,
    queries: Mutex<Vec<String>>,
}

impl FakeCatalog {
    fn push(&self, response: Result<Vec<RawProduct>, CatalogError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProductCatalog for FakeCatalog {
    async fn search(&self, query: &str) -> Result<Vec<RawProduct>, CatalogError> {
        self.queries.lock().unwrap().push(query.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("no queued response")
    }
}

fn raw(id: u64, title: &str, price: f64) -> RawProduct {
    RawProduct {
        id,
        title: title.to_string(),
        price,
    }
}

#[tokio::test]
async fn shirt_query_yields_formatted_result_set() {
    let catalog = FakeCatalog::default();
    catalog.push(Ok(vec![raw(1, "Shirt", 19.9)]));

    let mut controller = SearchController::new(&SearchConfig::default());
    controller.set_query("shirt");
    assert_eq!(controller.search(&catalog).await, Outcome::Applied);

    assert_eq!(catalog.queries(), vec!["shirt".to_string()]);
    let results = controller.results();
    assert_eq!(results.len(), 1);
    assert_eq!(results.items[0].title, "Shirt");
    assert_eq!(results.items[0].price_display.as_deref(), Some("R$ 19,90"));
    assert_eq!(results.total, Some(Money::new(1990, Currency::BRL)));
    assert_eq!(controller.phase(), SearchPhase::Settled);
}

#[tokio::test]
async fn blank_query_issues_no_request_and_keeps_state() {
    let catalog = FakeCatalog::default();
    catalog.push(Ok(vec![raw(1, "Shirt", 19.9)]));

    let mut controller = SearchController::new(&SearchConfig::default());
    controller.set_query("shirt");
    controller.search(&catalog).await;
    let before = controller.results().clone();

    controller.set_query("   ");
    assert_eq!(controller.search(&catalog).await, Outcome::Skipped);

    assert_eq!(catalog.queries().len(), 1);
    assert_eq!(controller.results(), &before);
}

#[tokio::test]
async fn resubmitting_unchanged_query_is_idempotent() {
    let catalog = FakeCatalog::default();
    let page = vec![raw(1, "A", 10.5), raw(2, "B", 5.25)];
    catalog.push(Ok(page.clone()));
    catalog.push(Ok(page));

    let mut controller = SearchController::new(&SearchConfig::default());
    controller.set_query("anything");
    controller.search(&catalog).await;
    let first = controller.results().clone();
    controller.search(&catalog).await;

    assert_eq!(controller.results(), &first);
    assert_eq!(
        controller.results().total,
        Some(Money::new(1575, Currency::BRL))
    );
}

#[tokio::test]
async fn empty_catalog_response_settles_to_zero_total() {
    let catalog = FakeCatalog::default();
    catalog.push(Ok(vec![]));

    let mut controller = SearchController::new(&SearchConfig::default());
    controller.set_query("nothing");
    controller.search(&catalog).await;

    assert!(controller.results().is_empty());
    assert_eq!(
        controller.results().total,
        Some(Money::zero(Currency::BRL))
    );
}

#[tokio::test]
async fn plain_mode_passes_products_through() {
    let catalog = FakeCatalog::default();
    catalog.push(Ok(vec![raw(1, "Shirt", 19.9)]));

    let config = SearchConfig {
        mode: ViewMode::Plain,
        ..SearchConfig::default()
    };
    let mut controller = SearchController::new(&config);
    controller.set_query("shirt");
    controller.search(&catalog).await;

    let results = controller.results();
    assert_eq!(results.items[0].price_display, None);
    assert_eq!(results.total, None);
}

#[tokio::test]
async fn fetch_failure_surfaces_as_error_state() {
    let catalog = FakeCatalog::default();
    catalog.push(Err(CatalogError::Connection("refused".to_string())));

    let mut controller = SearchController::new(&SearchConfig::default());
    controller.set_query("shirt");
    assert_eq!(controller.search(&catalog).await, Outcome::Applied);

    assert!(controller.last_error().is_some());
    assert!(controller.render_props().error.is_some());
}

#[tokio::test]
async fn wishlist_records_ids_without_touching_results() {
    let catalog = FakeCatalog::default();
    catalog.push(Ok(vec![raw(1, "Shirt", 19.9)]));

    let wishlist = Arc::new(RecordingWishlist::new());
    let mut controller =
        SearchController::new(&SearchConfig::default()).with_wishlist(wishlist.clone());
    controller.set_query("shirt");
    controller.search(&catalog).await;
    let before = controller.results().clone();

    controller.add_to_wishlist(1);
    controller.add_to_wishlist(1);

    assert_eq!(wishlist.ids(), vec![1, 1]);
    assert_eq!(controller.results(), &before);
    assert_eq!(catalog.queries().len(), 1);
}
