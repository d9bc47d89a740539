//! The search coordinator.
//!
//! [`SearchService`] is the async query surface callers hold. It owns the
//! lifecycle around the shared [`SearchState`]: one-time lazy provisioning
//! of the index from its packed blob, serialized query execution, and the
//! post-operation refresh notification.
//!
//! Two critical sections, both plain mutual exclusion:
//! - the **init lock** collapses concurrent first-use calls into a single
//!   unpack-and-open; later callers hit the initialized fast path
//! - the **search lock** serializes queries to one at a time against the
//!   shared handle, assuming nothing about the retrieval layer's thread
//!   safety
//!
//! The refresh observer runs outside both locks, so a stuck or failing
//! observer cannot deadlock later queries. There is no cancellation: a
//! caller that abandons a query leaves it to complete unobserved.

use std::{path::PathBuf, sync::Arc, time::Instant};

use depo_index::{
    DEFAULT_RESULT_CAP, IndexError, SearchIndex, SearchMatch, SearchQuery, Stopwords,
    format_matches, unpack,
};
use tokio::task;
use tracing::{debug, info, warn};

use crate::{
    ServiceError,
    loader::BlobLoader,
    notify::{NullObserver, RefreshObserver},
    state::SearchState,
};

/// Configuration for a search service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Loader-relative path of the packed index blob.
    pub blob_path: String,
    /// Directory the blob is unpacked into.
    pub index_dir: PathBuf,
    /// Maximum candidates retrieved per query.
    pub result_cap: usize,
}

impl ServiceConfig {
    /// Creates a configuration with the default result cap.
    pub fn new(blob_path: impl Into<String>, index_dir: impl Into<PathBuf>) -> Self {
        Self {
            blob_path: blob_path.into(),
            index_dir: index_dir.into(),
            result_cap: DEFAULT_RESULT_CAP,
        }
    }

    /// Overrides the per-query result cap.
    pub fn with_result_cap(mut self, cap: usize) -> Self {
        self.result_cap = cap;
        self
    }
}

/// Async search coordinator over the shared index state.
pub struct SearchService {
    /// Shared process-wide state (locks + handle).
    state: Arc<SearchState>,
    /// Source of the packed index blob.
    loader: Arc<dyn BlobLoader>,
    /// Observer poked after initialization and each query.
    observer: Arc<dyn RefreshObserver>,
    /// Stop-word filter applied at query construction.
    stopwords: Stopwords,
    /// Service configuration.
    config: ServiceConfig,
}

impl SearchService {
    /// Creates a service with no refresh observer.
    pub fn new(state: Arc<SearchState>, loader: Arc<dyn BlobLoader>, config: ServiceConfig) -> Self {
        Self::with_observer(state, loader, Arc::new(NullObserver), config)
    }

    /// Creates a service with a refresh observer.
    pub fn with_observer(
        state: Arc<SearchState>,
        loader: Arc<dyn BlobLoader>,
        observer: Arc<dyn RefreshObserver>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            state,
            loader,
            observer,
            stopwords: Stopwords::new(),
            config,
        }
    }

    /// Returns true once the shared index is provisioned and opened.
    pub fn is_initialized(&self) -> bool {
        self.state.is_initialized()
    }

    /// Provisions and opens the index if that has not happened yet.
    ///
    /// Concurrent first-use calls collapse into one unpack-and-open; all
    /// of them return once it finishes. Failure leaves the state
    /// uninitialized, so a later call simply tries again.
    pub async fn initialize(&self) -> Result<(), ServiceError> {
        if self.state.is_initialized() {
            return Ok(());
        }

        {
            let _guard = self.state.init_lock.lock().await;
            if self.state.is_initialized() {
                return Ok(());
            }

            info!("starting search initialization");
            let started = Instant::now();

            let blob =
                self.loader
                    .load(&self.config.blob_path)
                    .map_err(|source| ServiceError::LoadBlob {
                        path: self.config.blob_path.clone(),
                        source,
                    })?;

            let index_dir = self.config.index_dir.clone();
            let index = task::spawn_blocking(move || -> Result<SearchIndex, IndexError> {
                unpack(&blob, &index_dir)?;
                SearchIndex::open(&index_dir)
            })
            .await
            .map_err(|e| ServiceError::Task(e.to_string()))??;

            self.state.handle.set(Arc::new(index)).ok();

            info!(
                elapsed_ms = started.elapsed().as_millis() as u64,
                "search initialization complete"
            );
        }

        self.notify_refresh().await;
        Ok(())
    }

    /// Answers a query, selecting exact mode when the text is quoted.
    pub async fn find_matches(&self, text: &str) -> Result<Vec<SearchMatch>, ServiceError> {
        match SearchQuery::parse(text, &self.stopwords) {
            Some(query) => self.execute(query).await,
            None => Ok(Vec::new()),
        }
    }

    /// Answers an exact-phrase query.
    pub async fn find_exact_matches(&self, text: &str) -> Result<Vec<SearchMatch>, ServiceError> {
        match SearchQuery::exact(text, &self.stopwords) {
            Some(query) => self.execute(query).await,
            None => Ok(Vec::new()),
        }
    }

    /// Answers an unordered-AND query.
    pub async fn find_phrase_matches(&self, text: &str) -> Result<Vec<SearchMatch>, ServiceError> {
        match SearchQuery::phrase(text, &self.stopwords) {
            Some(query) => self.execute(query).await,
            None => Ok(Vec::new()),
        }
    }

    /// Runs one query under the search lock and notifies the observer.
    async fn execute(&self, query: SearchQuery) -> Result<Vec<SearchMatch>, ServiceError> {
        let handle = self.state.handle().ok_or(ServiceError::NotReady)?;
        let cap = self.config.result_cap;
        let started = Instant::now();

        let matches = {
            let _guard = self.state.search_lock.lock().await;
            task::spawn_blocking(move || -> Result<Vec<SearchMatch>, IndexError> {
                let hits = handle.search(&query, cap)?;
                Ok(format_matches(hits, &query))
            })
            .await
            .map_err(|e| ServiceError::Task(e.to_string()))??
        };

        debug!(
            results = matches.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "query complete"
        );

        self.notify_refresh().await;
        Ok(matches)
    }

    /// Best-effort observer notification; failures are logged and dropped.
    async fn notify_refresh(&self) {
        if let Err(error) = self.observer.refresh().await {
            warn!(%error, "refresh observer failed");
        }
    }
}
