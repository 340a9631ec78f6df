//! Search controller and view-model pipeline for Vitrine.
//!
//! The flow is linear: a query string is submitted, the catalog is
//! fetched, the response is shaped into a [`ResultSet`](vitrine_core::ResultSet),
//! and the result is committed as the renderable state. Presenters are
//! external collaborators consuming the [`RenderProps`] contract.

pub mod controller;
pub mod pipeline;
pub mod presenter;
pub mod wishlist;

pub use controller::{Outcome, SearchController, SearchPhase, SearchTicket};
pub use pipeline::build_result_set;
pub use presenter::{RenderProps, ResultsPresenter};
pub use wishlist::{RecordingWishlist, TracingWishlist, WishlistSink};
