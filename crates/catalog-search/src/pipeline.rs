//! Public pipeline handle, its subscriptions and the idle-subscriber lifecycle.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use catalog_config::SearchConfig;
use catalog_core::entities::Item;
use catalog_core::enums::FetchState;
use catalog_core::errors::CoreError;
use catalog_fetch::ItemSource;
use futures::StreamExt;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::driver::Driver;
use crate::filter::{FilterDelay, FixedDelay};

/// Timing knobs for a [`SearchPipeline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineSettings {
    /// Quiet period a term must survive before it is filtered.
    pub debounce: Duration,
    /// How long the driver stays warm after the last subscriber leaves.
    pub idle_grace: Duration,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(500),
            idle_grace: Duration::from_millis(3000),
        }
    }
}

impl From<&SearchConfig> for PipelineSettings {
    fn from(config: &SearchConfig) -> Self {
        Self {
            debounce: config.debounce(),
            idle_grace: config.idle_grace(),
        }
    }
}

/// The last published filter result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredItems {
    /// Settled term the items were computed for. `None` until the first
    /// computation publishes.
    pub term: Option<String>,
    pub items: Arc<[Item]>,
    /// Raw catalog snapshot the items were filtered from.
    pub(crate) catalog: Arc<[Item]>,
}

impl FilteredItems {
    /// Whether this result was computed for `term` against `raw` itself,
    /// not merely an equal list.
    fn answers(&self, term: &str, raw: &Arc<[Item]>) -> bool {
        self.term.as_deref() == Some(term) && Arc::ptr_eq(&self.catalog, raw)
    }
}

/// Observable state shared between the handle and the driver task.
pub(crate) struct Shared {
    pub(crate) term: watch::Sender<String>,
    pub(crate) raw: watch::Sender<Arc<[Item]>>,
    pub(crate) filtered: watch::Sender<FilteredItems>,
    pub(crate) searching: watch::Sender<bool>,
    pub(crate) fetch_state: watch::Sender<FetchState>,
}

impl Shared {
    fn new() -> Self {
        Self {
            term: watch::Sender::new(String::new()),
            raw: watch::Sender::new(Arc::from(Vec::new())),
            filtered: watch::Sender::new(FilteredItems::default()),
            searching: watch::Sender::new(false),
            fetch_state: watch::Sender::new(FetchState::Idle),
        }
    }

    /// Replace the catalog. An identical list is not a change.
    fn adopt(&self, items: Vec<Item>) -> bool {
        self.raw.send_if_modified(|current| {
            if current.as_ref() == items.as_slice() {
                false
            } else {
                *current = items.into();
                true
            }
        })
    }
}

#[derive(Default)]
struct Lifecycle {
    subscribers: usize,
    /// Bumped on every subscribe so a stale release timer can tell it lost.
    epoch: u64,
    driver: Option<JoinHandle<()>>,
    release: Option<JoinHandle<()>>,
}

struct Inner {
    shared: Arc<Shared>,
    source: Arc<dyn ItemSource>,
    delay: Arc<dyn FilterDelay>,
    settings: PipelineSettings,
    lifecycle: Mutex<Lifecycle>,
}

impl Inner {
    fn lock(&self) -> MutexGuard<'_, Lifecycle> {
        self.lifecycle.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn attach(&self) {
        let mut lifecycle = self.lock();
        lifecycle.subscribers += 1;
        lifecycle.epoch += 1;

        if let Some(release) = lifecycle.release.take() {
            release.abort();
            debug!("subscriber returned within idle grace");
        }

        let running = lifecycle.driver.as_ref().is_some_and(|d| !d.is_finished());
        if !running {
            let driver = Driver::new(
                Arc::clone(&self.shared),
                Arc::clone(&self.delay),
                self.settings.debounce,
            );
            lifecycle.driver = Some(tokio::spawn(driver.run()));
            debug!("search driver started");
        }
    }

    fn detach(self: &Arc<Self>) {
        let mut lifecycle = self.lock();
        lifecycle.subscribers = lifecycle.subscribers.saturating_sub(1);
        if lifecycle.subscribers > 0 {
            return;
        }

        let grace = self.settings.idle_grace;
        match Handle::try_current() {
            Ok(handle) if !grace.is_zero() => {
                let epoch = lifecycle.epoch;
                let inner = Arc::clone(self);
                lifecycle.release = Some(handle.spawn(async move {
                    tokio::time::sleep(grace).await;
                    inner.release_if_idle(epoch);
                }));
                debug!(grace_ms = grace.as_millis(), "last subscriber left");
            }
            _ => self.stop_driver(&mut lifecycle),
        }
    }

    fn release_if_idle(&self, epoch: u64) {
        let mut lifecycle = self.lock();
        if lifecycle.subscribers == 0 && lifecycle.epoch == epoch {
            lifecycle.release = None;
            self.stop_driver(&mut lifecycle);
        }
    }

    /// Aborting the driver drops its in-flight computations with it.
    fn stop_driver(&self, lifecycle: &mut Lifecycle) {
        if let Some(driver) = lifecycle.driver.take() {
            driver.abort();
            debug!("search driver released");
        }
        self.shared.searching.send_replace(false);
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        let lifecycle = self
            .lifecycle
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(driver) = lifecycle.driver.take() {
            driver.abort();
        }
        if let Some(release) = lifecycle.release.take() {
            release.abort();
        }
    }
}

/// Debounced, loading-aware search over a fetched catalog.
///
/// Inputs are the search term and the raw catalog. Outputs are the filtered
/// items, the `is_searching` flag and an echo of the term. Outputs are only
/// recomputed while at least one [`PipelineSubscription`] is alive; see
/// [`SearchPipeline::subscribe`].
///
/// Cloning yields another handle to the same pipeline.
#[derive(Clone)]
pub struct SearchPipeline {
    inner: Arc<Inner>,
}

impl SearchPipeline {
    #[must_use]
    pub fn new(
        source: Arc<dyn ItemSource>,
        delay: Arc<dyn FilterDelay>,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                shared: Arc::new(Shared::new()),
                source,
                delay,
                settings,
                lifecycle: Mutex::new(Lifecycle::default()),
            }),
        }
    }

    /// A pipeline whose filter delay is a fixed sleep of
    /// `config.filter_latency`.
    #[must_use]
    pub fn from_config(source: Arc<dyn ItemSource>, config: &SearchConfig) -> Self {
        Self::new(
            source,
            Arc::new(FixedDelay(config.filter_latency())),
            PipelineSettings::from(config),
        )
    }

    /// Record a keystroke. Setting the current value again is a no-op.
    pub fn set_search_term(&self, term: impl Into<String>) {
        let term = term.into();
        self.inner.shared.term.send_if_modified(|current| {
            if *current == term {
                false
            } else {
                *current = term;
                true
            }
        });
    }

    /// Replace the raw catalog directly, bypassing the item source.
    pub fn set_raw_items(&self, items: Vec<Item>) {
        self.inner.shared.adopt(items);
    }

    /// Collect the item source into the raw catalog.
    ///
    /// Runs on its own task. Every `Ok` snapshot replaces the catalog; an
    /// `Err` is logged, recorded in [`fetch_state`](Self::fetch_state) and
    /// leaves the previous catalog in place. Each call starts an independent
    /// collection.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn fetch_data(&self) -> JoinHandle<()> {
        let shared = Arc::clone(&self.inner.shared);
        let mut snapshots = self.inner.source.fetch();
        shared.fetch_state.send_replace(FetchState::Loading);

        tokio::spawn(async move {
            while let Some(snapshot) = snapshots.next().await {
                match snapshot {
                    Ok(items) => {
                        let count = items.len();
                        shared.adopt(items);
                        shared.fetch_state.send_replace(FetchState::Loaded { count });
                        info!(count, "catalog snapshot adopted");
                    }
                    Err(error) => {
                        warn!(%error, "catalog fetch failed; keeping previous items");
                        shared.fetch_state.send_replace(FetchState::Failed {
                            message: error.to_string(),
                        });
                    }
                }
            }
            shared.fetch_state.send_if_modified(|state| {
                if *state == FetchState::Loading {
                    *state = FetchState::Idle;
                    true
                } else {
                    false
                }
            });
        })
    }

    /// Attach a subscriber, starting the driver if it is not running.
    ///
    /// When the last subscription drops, the driver keeps running for the
    /// idle grace period. A subscriber arriving inside that window resumes it
    /// untouched. After the window the driver is released: in-flight
    /// computations are abandoned, `is_searching` resets to `false` and the
    /// next subscriber starts cold by debouncing the current term.
    ///
    /// # Panics
    ///
    /// Panics if the driver has to be started outside a Tokio runtime.
    #[must_use]
    pub fn subscribe(&self) -> PipelineSubscription {
        self.inner.attach();
        let shared = &self.inner.shared;
        PipelineSubscription {
            filtered: shared.filtered.subscribe(),
            searching: shared.searching.subscribe(),
            term: shared.term.subscribe(),
            fetch_state: shared.fetch_state.subscribe(),
            inner: Arc::clone(&self.inner),
        }
    }

    /// Look an item up in the current raw catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if no item carries `id`.
    pub fn get_item_by_id(&self, id: &str) -> Result<Item, CoreError> {
        self.inner
            .shared
            .raw
            .borrow()
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or_else(|| CoreError::item_not_found(id))
    }

    #[must_use]
    pub fn search_term(&self) -> String {
        self.inner.shared.term.borrow().clone()
    }

    #[must_use]
    pub fn raw_items(&self) -> Arc<[Item]> {
        self.inner.shared.raw.borrow().clone()
    }

    #[must_use]
    pub fn filtered_items(&self) -> FilteredItems {
        self.inner.shared.filtered.borrow().clone()
    }

    #[must_use]
    pub fn is_searching(&self) -> bool {
        *self.inner.shared.searching.borrow()
    }

    #[must_use]
    pub fn fetch_state(&self) -> FetchState {
        self.inner.shared.fetch_state.borrow().clone()
    }

    /// Whether the driver is currently maintaining the outputs.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.inner
            .lock()
            .driver
            .as_ref()
            .is_some_and(|d| !d.is_finished())
    }
}

/// A live view of the pipeline outputs.
///
/// Keeps the driver attached for as long as it is held.
pub struct PipelineSubscription {
    inner: Arc<Inner>,
    filtered: watch::Receiver<FilteredItems>,
    searching: watch::Receiver<bool>,
    term: watch::Receiver<String>,
    fetch_state: watch::Receiver<FetchState>,
}

impl PipelineSubscription {
    #[must_use]
    pub fn filtered_items(&self) -> watch::Receiver<FilteredItems> {
        self.filtered.clone()
    }

    #[must_use]
    pub fn is_searching(&self) -> watch::Receiver<bool> {
        self.searching.clone()
    }

    #[must_use]
    pub fn search_term(&self) -> watch::Receiver<String> {
        self.term.clone()
    }

    #[must_use]
    pub fn fetch_state(&self) -> watch::Receiver<FetchState> {
        self.fetch_state.clone()
    }

    /// Wait until `term` has been filtered against the current catalog and
    /// nothing newer is in flight, then return the result.
    ///
    /// A result computed before the latest catalog change does not count,
    /// even when the term matches.
    pub async fn results_for(&mut self, term: &str) -> Arc<[Item]> {
        let raw = &self.inner.shared.raw;
        loop {
            if self
                .filtered
                .wait_for(|f| f.answers(term, &raw.borrow()))
                .await
                .is_err()
            {
                break;
            }
            if self.searching.wait_for(|busy| !*busy).await.is_err() {
                break;
            }
            let settled = {
                let current = self.filtered.borrow();
                current
                    .answers(term, &raw.borrow())
                    .then(|| Arc::clone(&current.items))
            };
            if let Some(items) = settled {
                return items;
            }
        }
        self.inner.shared.filtered.borrow().items.clone()
    }

    /// Wait for the current fetch to yield a snapshot, fail, or end empty.
    pub async fn fetch_settled(&mut self) -> FetchState {
        match self
            .fetch_state
            .wait_for(|state| *state != FetchState::Loading)
            .await
        {
            Ok(state) => state.clone(),
            Err(_) => self.inner.shared.fetch_state.borrow().clone(),
        }
    }
}

impl Drop for PipelineSubscription {
    fn drop(&mut self) {
        self.inner.detach();
    }
}
