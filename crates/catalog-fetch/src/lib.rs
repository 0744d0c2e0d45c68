//! # catalog-fetch
//!
//! Sources of catalog items for the search pipeline.
//!
//! The pipeline only depends on [`ItemSource`]: a lazy stream of full-catalog
//! snapshots, each either a decoded item list or a [`FetchError`]. Two
//! implementations ship here:
//! - [`HttpItemSource`]: `GET {base_url}/objects` over reqwest
//! - [`StaticItemSource`]: scripted in-memory snapshots (tests, `--fixture`)

mod client;
mod error;
mod fixture;
mod http;

pub use client::{HttpItemSource, parse_items};
pub use error::FetchError;
pub use fixture::{Snapshot, StaticItemSource};

use catalog_core::entities::Item;
use futures::stream::BoxStream;

/// A fetch collaborator.
///
/// `fetch` starts nothing by itself: the returned stream performs the
/// retrieval when polled and may yield several successive snapshots of the
/// full list. Consumers adopt the latest `Ok` snapshot and keep their previous
/// list on `Err`.
pub trait ItemSource: Send + Sync {
    fn fetch(&self) -> BoxStream<'static, Result<Vec<Item>, FetchError>>;
}
