//! Error types for the search coordinator.

use std::io;

use depo_index::IndexError;
use thiserror::Error;

/// Errors surfaced by the search coordinator.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A query arrived before the index was initialized.
    #[error("search index is not initialized")]
    NotReady,

    /// The packed index blob could not be loaded.
    #[error("failed to load index blob {path}: {source}")]
    LoadBlob {
        /// Loader-relative path of the blob.
        path: String,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The witness metadata list could not be parsed.
    #[error("failed to parse witness list {path}: {source}")]
    WitnessList {
        /// Loader-relative path of the list.
        path: String,
        /// Underlying parse error.
        source: serde_json::Error,
    },

    /// Unpacking or opening the index failed.
    #[error("failed to provision search index: {0}")]
    Index(#[from] IndexError),

    /// A background task running index work panicked or was cancelled.
    #[error("index task failed: {0}")]
    Task(String),
}
