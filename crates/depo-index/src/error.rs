//! Error types for the depo-index crate.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when building, packaging, or querying the index.
#[derive(Debug, Error)]
pub enum IndexError {
    /// Failed to open or create the index.
    #[error("failed to open index at {path}: {message}")]
    OpenIndex {
        /// Path to the index directory.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Failed to write to the index.
    #[error("failed to write to index: {0}")]
    Write(String),

    /// Failed to commit the index.
    #[error("failed to commit index: {0}")]
    Commit(String),

    /// Failed to execute a search against the index.
    #[error("search failed: {0}")]
    Search(String),

    /// Failed to pack the index directory into an archive blob.
    #[error("failed to pack index at {path}: {source}")]
    Pack {
        /// Path to the index directory being packed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to unpack an archive blob into an index directory.
    #[error("failed to unpack index archive to {path}: {source}")]
    Unpack {
        /// Target directory of the unpack.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl IndexError {
    /// Creates an `OpenIndex` error from a path and Tantivy error.
    pub(crate) fn open_index(path: PathBuf, source: &tantivy::TantivyError) -> Self {
        Self::OpenIndex {
            path,
            message: source.to_string(),
        }
    }

    /// Creates a `Write` error from a Tantivy error.
    pub(crate) fn write(source: &tantivy::TantivyError) -> Self {
        Self::Write(source.to_string())
    }

    /// Creates a `Commit` error from a Tantivy error.
    pub(crate) fn commit(source: &tantivy::TantivyError) -> Self {
        Self::Commit(source.to_string())
    }

    /// Creates a `Search` error from a Tantivy error.
    pub(crate) fn search(source: &tantivy::TantivyError) -> Self {
        Self::Search(source.to_string())
    }
}
