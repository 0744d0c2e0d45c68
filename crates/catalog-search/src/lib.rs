//! # catalog-search
//!
//! Debounced, loading-aware search over a fetched catalog.
//!
//! [`SearchPipeline`] has two inputs, the search term and the raw item list,
//! and three outputs: the filtered items, an `is_searching` flag, and an echo
//! of the term. A driver task connects them:
//!
//! 1. Every term change re-arms a quiet-period timer ([`Debouncer`]).
//! 2. When the timer settles, `is_searching` goes `true`.
//! 3. Non-empty terms wait on the [`FilterDelay`] hook, then filter by
//!    case-insensitive substring match on the item name. The empty term
//!    publishes the full list at once.
//! 4. The result is published, then `is_searching` goes `false`.
//!
//! Computations are sequence numbered. A result whose term has been
//! superseded is dropped, so the last settled term always wins even when
//! delays resolve out of order.
//!
//! The raw list is filled through a [`catalog_fetch::ItemSource`] by
//! [`SearchPipeline::fetch_data`]. Fetch failures keep the previous list and
//! surface only through [`catalog_core::enums::FetchState`].

mod debounce;
mod driver;
mod filter;
mod pipeline;

pub use debounce::Debouncer;
pub use filter::{FilterDelay, FixedDelay, NoDelay, filter_items};
pub use pipeline::{FilteredItems, PipelineSettings, PipelineSubscription, SearchPipeline};
