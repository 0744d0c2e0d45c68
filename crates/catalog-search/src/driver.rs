//! The task that turns term and catalog changes into filtered output.

use std::sync::Arc;
use std::time::Duration;

use catalog_core::entities::Item;
use tokio::sync::watch;
use tokio::task::{self, JoinError, JoinSet};
use tracing::{debug, warn};

use crate::debounce::Debouncer;
use crate::filter::{FilterDelay, filter_items};
use crate::pipeline::{FilteredItems, Shared};

/// A finished filter computation, tagged with the sequence number it was
/// started under.
struct Computation {
    seq: u64,
    term: String,
    catalog: Arc<[Item]>,
    items: Arc<[Item]>,
}

/// Owns the debounce timer and the in-flight computations.
///
/// Every computation gets a fresh sequence number when it starts. Only a
/// completion whose number is still the latest may publish, so the output
/// always reflects the most recently settled term against the most recent
/// catalog, whatever order the delays resolve in.
pub(crate) struct Driver {
    shared: Arc<Shared>,
    delay: Arc<dyn FilterDelay>,
    debouncer: Debouncer,
    settled: Option<String>,
    latest: u64,
    /// Task running the latest computation, if it has not finished yet.
    latest_task: Option<task::Id>,
    tasks: JoinSet<Computation>,
}

impl Driver {
    pub(crate) fn new(shared: Arc<Shared>, delay: Arc<dyn FilterDelay>, debounce: Duration) -> Self {
        Self {
            shared,
            delay,
            debouncer: Debouncer::new(debounce),
            settled: None,
            latest: 0,
            latest_task: None,
            tasks: JoinSet::new(),
        }
    }

    /// Run until aborted.
    ///
    /// A fresh driver treats the current term as just typed, so a cold start
    /// waits one debounce period before its first computation.
    pub(crate) async fn run(mut self) {
        let mut term_rx = self.shared.term.subscribe();
        let mut raw_rx = self.shared.raw.subscribe();
        self.debouncer.arm();

        loop {
            tokio::select! {
                biased;

                changed = term_rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    self.debouncer.arm();
                }
                changed = raw_rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    self.on_raw_changed();
                }
                () = self.debouncer.settled(), if self.debouncer.is_pending() => {
                    self.on_settled(&mut term_rx);
                }
                Some(joined) = self.tasks.join_next() => {
                    self.on_joined(joined);
                }
            }
        }
    }

    /// Filters the term the quiet period was armed for. An edit that raced
    /// the deadline re-arms instead.
    fn on_settled(&mut self, term_rx: &mut watch::Receiver<String>) {
        let (term, edited) = {
            let current = term_rx.borrow_and_update();
            (current.clone(), current.has_changed())
        };
        if edited {
            self.debouncer.arm();
            return;
        }
        debug!(term = %term, "search term settled");
        self.settled = Some(term.clone());
        self.start(term);
    }

    /// A new catalog re-runs the settled term. A pending debounce will pick
    /// the new catalog up on its own.
    fn on_raw_changed(&mut self) {
        if self.debouncer.is_pending() {
            return;
        }
        if let Some(term) = self.settled.clone() {
            debug!(term = %term, "catalog changed; refiltering");
            self.start(term);
        }
    }

    fn start(&mut self, term: String) {
        self.latest += 1;
        let seq = self.latest;
        let catalog = self.shared.raw.borrow().clone();
        self.latest_task = None;
        self.shared.searching.send_replace(true);

        if term.is_empty() {
            let items = Arc::clone(&catalog);
            self.publish(Computation { seq, term, catalog, items });
            return;
        }

        debug!(seq, term = %term, items = catalog.len(), "filter started");
        let delay = self.delay.wait(&term);
        let handle = self.tasks.spawn(async move {
            delay.await;
            let items = filter_items(&catalog, &term).into();
            Computation { seq, term, catalog, items }
        });
        self.latest_task = Some(handle.id());
    }

    fn on_joined(&mut self, joined: Result<Computation, JoinError>) {
        match joined {
            Ok(done) if done.seq == self.latest => {
                self.latest_task = None;
                self.publish(done);
            }
            Ok(done) => {
                debug!(
                    seq = done.seq,
                    latest = self.latest,
                    term = %done.term,
                    "discarding stale filter result"
                );
            }
            Err(error) => {
                warn!(%error, "filter task failed");
                if self.latest_task == Some(error.id()) {
                    self.latest_task = None;
                    self.shared.searching.send_replace(false);
                }
            }
        }
    }

    fn publish(&self, done: Computation) {
        debug!(seq = done.seq, term = %done.term, count = done.items.len(), "filter published");
        self.shared.filtered.send_replace(FilteredItems {
            term: Some(done.term),
            items: done.items,
            catalog: done.catalog,
        });
        self.shared.searching.send_replace(false);
    }
}
