//! Debounced predictive search with a stale-response guard.

use crate::error::SearchError;
use crate::results::SearchResults;
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex as StdMutex, MutexGuard};
use std::time::Duration;

/// Delay between the last keystroke and the request.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

/// Queries shorter than this clear the panel without a request.
pub const MIN_QUERY_LEN: usize = 2;

/// Maximum suggestions requested per query.
pub const RESULT_LIMIT: usize = 10;

/// Async port over the remote suggestion endpoint.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Fetch up to `limit` suggestions for a query.
    async fn search(&self, query: &str, limit: usize) -> Result<SearchResults, SearchError>;
}

#[async_trait]
impl<B: SearchBackend + ?Sized> SearchBackend for std::sync::Arc<B> {
    async fn search(&self, query: &str, limit: usize) -> Result<SearchResults, SearchError> {
        (**self).search(query, limit).await
    }
}

/// What the suggestion panel currently shows.
#[derive(Debug, Default)]
struct Panel {
    /// Sequence number of the input that produced the panel content.
    applied_seq: u64,
    results: Option<SearchResults>,
}

/// Type-ahead controller over a [`SearchBackend`].
///
/// Every call to [`input`](Self::input) gets a monotonically increasing
/// sequence number. A request is issued only if no newer input arrived
/// during the debounce window, and a response is applied to the panel only
/// if nothing newer has been applied — an issued request is never
/// cancelled, but its late response cannot overwrite a fresher one.
pub struct PredictiveSearch<B: SearchBackend> {
    backend: B,
    debounce: Duration,
    seq: AtomicU64,
    panel: StdMutex<Panel>,
}

impl<B: SearchBackend> PredictiveSearch<B> {
    /// Create a controller with the default debounce delay.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            debounce: DEBOUNCE_DELAY,
            seq: AtomicU64::new(0),
            panel: StdMutex::new(Panel::default()),
        }
    }

    /// Override the debounce delay.
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Results currently shown in the panel, if any.
    pub fn results(&self) -> Option<SearchResults> {
        lock(&self.panel).results.clone()
    }

    /// Feed one input-field change.
    ///
    /// Returns the results this call applied to the panel, or `None` when
    /// the input was too short, superseded during the debounce window,
    /// failed, or lost to a fresher response.
    pub async fn input(&self, raw: &str) -> Option<SearchResults> {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        let query = raw.trim().to_string();

        if query.chars().count() < MIN_QUERY_LEN {
            let mut panel = lock(&self.panel);
            if seq > panel.applied_seq {
                panel.applied_seq = seq;
                panel.results = None;
            }
            return None;
        }

        tokio::time::sleep(self.debounce).await;
        if self.seq.load(Ordering::SeqCst) != seq {
            // Superseded while debouncing; no request issued.
            return None;
        }

        match self.backend.search(&query, RESULT_LIMIT).await {
            Ok(results) => {
                let mut panel = lock(&self.panel);
                if seq > panel.applied_seq {
                    panel.applied_seq = seq;
                    panel.results = Some(results.clone());
                    Some(results)
                } else {
                    // A fresher response already landed.
                    None
                }
            }
            Err(error) => {
                tracing::warn!(%error, query = %query, "predictive search failed, keeping last results");
                None
            }
        }
    }
}

fn lock(panel: &StdMutex<Panel>) -> MutexGuard<'_, Panel> {
    panel.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::SearchHit;
    use std::collections::HashMap;
    use std::sync::atomic::AtomicBool;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct FakeBackend {
        delays: HashMap<String, Duration>,
        requests: Mutex<Vec<(String, usize)>>,
        fail: AtomicBool,
    }

    impl FakeBackend {
        fn requests(&self) -> Vec<(String, usize)> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl SearchBackend for FakeBackend {
        async fn search(&self, query: &str, limit: usize) -> Result<SearchResults, SearchError> {
            self.requests
                .lock()
                .unwrap()
                .push((query.to_string(), limit));
            if let Some(delay) = self.delays.get(query) {
                tokio::time::sleep(*delay).await;
            }
            if self.fail.load(Ordering::Acquire) {
                return Err(SearchError::Remote { status: 500 });
            }
            Ok(SearchResults {
                query: query.to_string(),
                hits: vec![SearchHit {
                    title: format!("{} shirt", query),
                    url: format!("/products/{}-shirt", query),
                    price: None,
                }],
            })
        }
    }

    #[tokio::test]
    async fn test_short_query_clears_panel_without_request() {
        let backend = Arc::new(FakeBackend::default());
        let search = PredictiveSearch::new(Arc::clone(&backend))
            .with_debounce(Duration::ZERO);

        search.input("rust").await.unwrap();
        assert!(search.results().is_some());

        assert_eq!(search.input("r").await, None);
        assert_eq!(search.results(), None);
        assert_eq!(backend.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_debounce_suppresses_superseded_input() {
        let backend = Arc::new(FakeBackend::default());
        let search = Arc::new(
            PredictiveSearch::new(Arc::clone(&backend))
                .with_debounce(Duration::from_millis(50)),
        );

        let first = tokio::spawn({
            let search = Arc::clone(&search);
            async move { search.input("ru").await }
        });
        tokio::time::sleep(Duration::from_millis(10)).await;
        let second = search.input("rust").await;

        assert_eq!(first.await.unwrap(), None);
        assert_eq!(second.unwrap().query, "rust");
        // Only the settled input reached the backend.
        assert_eq!(backend.requests(), vec![("rust".to_string(), RESULT_LIMIT)]);
    }

    #[tokio::test]
    async fn test_stale_response_cannot_overwrite_fresher_one() {
        let mut fake = FakeBackend::default();
        fake.delays
            .insert("slow".to_string(), Duration::from_millis(60));
        fake.delays
            .insert("fast".to_string(), Duration::from_millis(5));
        let backend = Arc::new(fake);
        let search = Arc::new(
            PredictiveSearch::new(Arc::clone(&backend)).with_debounce(Duration::ZERO),
        );

        // "slow" is issued first but its response lands after "fast"'s.
        let slow = tokio::spawn({
            let search = Arc::clone(&search);
            async move { search.input("slow").await }
        });
        tokio::time::sleep(Duration::from_millis(20)).await;
        let fast = search.input("fast").await;

        assert_eq!(fast.unwrap().query, "fast");
        assert_eq!(slow.await.unwrap(), None);
        assert_eq!(search.results().unwrap().query, "fast");
    }

    #[tokio::test]
    async fn test_failure_keeps_last_results() {
        let backend = Arc::new(FakeBackend::default());
        let search = PredictiveSearch::new(Arc::clone(&backend))
            .with_debounce(Duration::ZERO);

        search.input("rust").await.unwrap();
        backend.fail.store(true, Ordering::Release);

        assert_eq!(search.input("rusty").await, None);
        assert_eq!(search.results().unwrap().query, "rust");
    }

    #[tokio::test]
    async fn test_query_is_trimmed_and_limit_forwarded() {
        let backend = Arc::new(FakeBackend::default());
        let search = PredictiveSearch::new(Arc::clone(&backend))
            .with_debounce(Duration::ZERO);

        search.input("  rust  ").await.unwrap();
        assert_eq!(backend.requests(), vec![("rust".to_string(), RESULT_LIMIT)]);
    }
}
