//! Wishlist side-channel.
//!
//! Adding to the wishlist is decoupled from the render path: it mutates
//! no search state and issues no catalog call. The controller holds one
//! sink handle for its whole lifetime, so the callback identity handed
//! to presenters is stable across query edits.

use std::sync::Mutex;

/// Receiver for "add to wishlist" actions.
pub trait WishlistSink: Send + Sync {
    /// Record that `product_id` was added.
    fn add(&self, product_id: u64);
}

/// Sink that reports additions to the tracing layer.
///
/// The observed baseline behavior: the id is reported, nothing else.
#[derive(Debug, Default)]
pub struct TracingWishlist;

impl WishlistSink for TracingWishlist {
    fn add(&self, product_id: u64) {
        tracing::info!(product_id, "added to wishlist");
    }
}

/// Sink that accumulates added ids, e.g. for a session summary.
#[derive(Debug, Default)]
pub struct RecordingWishlist {
    ids: Mutex<Vec<u64>>,
}

impl RecordingWishlist {
    /// Create an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded ids, in insertion order.
    pub fn ids(&self) -> Vec<u64> {
        self.ids.lock().expect("wishlist lock poisoned").clone()
    }

    /// Number of recorded additions.
    pub fn len(&self) -> usize {
        self.ids.lock().expect("wishlist lock poisoned").len()
    }

    /// Check if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl WishlistSink for RecordingWishlist {
    fn add(&self, product_id: u64) {
        tracing::info!(product_id, "added to wishlist");
        self.ids.lock().expect("wishlist lock poisoned").push(product_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_wishlist_keeps_order() {
        let sink = RecordingWishlist::new();
        sink.add(3);
        sink.add(1);
        sink.add(3);
        assert_eq!(sink.ids(), vec![3, 1, 3]);
        assert_eq!(sink.len(), 3);
    }
}
