//! Linear substring filtering and the latency hook that precedes it.

use std::time::Duration;

use catalog_core::entities::Item;
use futures::future::BoxFuture;

/// Items whose name contains `term` case-insensitively, in original order.
///
/// An empty term keeps every item.
#[must_use]
pub fn filter_items(items: &[Item], term: &str) -> Vec<Item> {
    let folded = term.to_lowercase();
    items
        .iter()
        .filter(|item| item.matches_folded(&folded))
        .cloned()
        .collect()
}

/// Asynchronous delay applied before filtering a non-empty term.
///
/// Stands in for a real search backend round trip. Once started it is never
/// cancelled by a newer term; the pipeline discards stale results instead.
pub trait FilterDelay: Send + Sync {
    fn wait(&self, term: &str) -> BoxFuture<'static, ()>;
}

/// Sleeps for the same duration regardless of the term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDelay(pub Duration);

impl FixedDelay {
    #[must_use]
    pub const fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }
}

impl FilterDelay for FixedDelay {
    fn wait(&self, _term: &str) -> BoxFuture<'static, ()> {
        Box::pin(tokio::time::sleep(self.0))
    }
}

/// Filters as soon as a term settles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoDelay;

impl FilterDelay for NoDelay {
    fn wait(&self, _term: &str) -> BoxFuture<'static, ()> {
        Box::pin(std::future::ready(()))
    }
}
