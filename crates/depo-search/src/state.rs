//! Shared index state.
//!
//! One [`SearchState`] holds everything that must be process-wide: the
//! lazily created index handle and the two locks that serialize
//! initialization and query execution. Services share it via `Arc`, so
//! every coordinator built from the same state sees one initialization
//! and one handle.

use std::sync::{Arc, OnceLock};

use depo_index::SearchIndex;
use tokio::sync::Mutex;

/// Process-wide search state shared by all coordinator instances.
pub struct SearchState {
    /// Guards the provision-and-open sequence.
    pub(crate) init_lock: Mutex<()>,
    /// Guards query execution against the shared handle.
    pub(crate) search_lock: Mutex<()>,
    /// The opened index, set exactly once. Torn down at process exit.
    pub(crate) handle: OnceLock<Arc<SearchIndex>>,
}

impl SearchState {
    /// Creates fresh, uninitialized state.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            init_lock: Mutex::new(()),
            search_lock: Mutex::new(()),
            handle: OnceLock::new(),
        })
    }

    /// Returns true once the index has been provisioned and opened.
    pub fn is_initialized(&self) -> bool {
        self.handle.get().is_some()
    }

    /// Returns the opened index handle, if initialized.
    pub(crate) fn handle(&self) -> Option<Arc<SearchIndex>> {
        self.handle.get().cloned()
    }
}
