//! Debounced search-as-you-type.
//!
//! Each keystroke schedules a query to run after a short delay. A new
//! query supersedes any pending one: the in-flight task is aborted before
//! the next is scheduled, so results are never published out of order.

use crate::catalog::{Catalog, Product};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

/// Published state of the live search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchSnapshot {
    /// The query the snapshot answers.
    pub query: String,
    /// Matching products; empty while `searching`.
    pub results: Vec<Product>,
    /// True between scheduling and publication.
    pub searching: bool,
}

/// Debounced search over a shared catalog.
///
/// Consumers watch the snapshot channel; the search itself runs on a
/// scheduled tokio task, so [`LiveSearch::search`] must be called from
/// within a runtime.
pub struct LiveSearch {
    catalog: Arc<Catalog>,
    delay: Duration,
    tx: Arc<watch::Sender<SearchSnapshot>>,
    pending: Option<JoinHandle<()>>,
}

impl LiveSearch {
    /// Create a live search with the given debounce delay.
    pub fn new(catalog: Arc<Catalog>, delay: Duration) -> Self {
        let (tx, _rx) = watch::channel(SearchSnapshot::default());
        Self {
            catalog,
            delay,
            tx: Arc::new(tx),
            pending: None,
        }
    }

    /// Subscribe to snapshot updates.
    pub fn subscribe(&self) -> watch::Receiver<SearchSnapshot> {
        self.tx.subscribe()
    }

    /// The most recently published snapshot.
    pub fn snapshot(&self) -> SearchSnapshot {
        self.tx.borrow().clone()
    }

    /// Schedule a search for `query`, superseding any pending one.
    ///
    /// A blank query clears the results immediately without scheduling.
    pub fn search(&mut self, query: &str) {
        self.cancel_pending();

        let query = query.trim().to_string();
        if query.is_empty() {
            self.tx.send_replace(SearchSnapshot::default());
            return;
        }

        self.tx.send_replace(SearchSnapshot {
            query: query.clone(),
            results: Vec::new(),
            searching: true,
        });

        let catalog = Arc::clone(&self.catalog);
        let tx = Arc::clone(&self.tx);
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let results: Vec<Product> = catalog.search(&query).into_iter().cloned().collect();
            debug!(%query, hits = results.len(), "search completed");
            tx.send_replace(SearchSnapshot {
                query,
                results,
                searching: false,
            });
        }));
    }

    /// Clear the query and results, superseding any pending search.
    pub fn clear(&mut self) {
        self.cancel_pending();
        self.tx.send_replace(SearchSnapshot::default());
    }

    fn cancel_pending(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }
}

impl Drop for LiveSearch {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    fn live_search() -> LiveSearch {
        LiveSearch::new(Arc::new(Catalog::demo()), DELAY)
    }

    async fn settled(rx: &mut watch::Receiver<SearchSnapshot>) -> SearchSnapshot {
        loop {
            let snapshot = rx.borrow_and_update().clone();
            if !snapshot.searching {
                return snapshot;
            }
            rx.changed().await.unwrap();
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_publishes_results_after_the_delay() {
        let mut search = live_search();
        let mut rx = search.subscribe();

        search.search("headphones");
        assert!(search.snapshot().searching);
        assert!(search.snapshot().results.is_empty());

        let snapshot = settled(&mut rx).await;
        assert_eq!(snapshot.query, "headphones");
        assert_eq!(snapshot.results.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_query_clears_without_scheduling() {
        let mut search = live_search();
        search.search("   ");

        let snapshot = search.snapshot();
        assert!(!snapshot.searching);
        assert!(snapshot.query.is_empty());
        assert!(snapshot.results.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_typing_publishes_only_the_latest_query() {
        let mut search = live_search();
        let mut rx = search.subscribe();

        search.search("headphones");
        search.search("laptop");

        let snapshot = settled(&mut rx).await;
        assert_eq!(snapshot.query, "laptop");
        assert!(!snapshot.results.is_empty());

        // The superseded query never lands, even after its delay elapses.
        tokio::time::sleep(DELAY * 2).await;
        assert_eq!(search.snapshot().query, "laptop");
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_supersedes_pending_search() {
        let mut search = live_search();

        search.search("headphones");
        search.clear();

        tokio::time::sleep(DELAY * 2).await;
        let snapshot = search.snapshot();
        assert!(snapshot.query.is_empty());
        assert!(snapshot.results.is_empty());
        assert!(!snapshot.searching);
    }

    #[tokio::test(start_paused = true)]
    async fn test_query_miss_publishes_empty_results() {
        let mut search = live_search();
        let mut rx = search.subscribe();

        search.search("zzz-no-such-product");
        let snapshot = settled(&mut rx).await;
        assert!(snapshot.results.is_empty());
        assert!(!snapshot.searching);
    }
}
