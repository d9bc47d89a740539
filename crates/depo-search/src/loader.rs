//! Byte-loader collaborator.
//!
//! The coordinator never touches storage directly: the packed index blob
//! and the witness metadata list arrive through a [`BlobLoader`]. The
//! filesystem implementation covers the common case; embedded or remote
//! backends implement the same trait.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::ServiceError;

/// Loads opaque byte blobs by loader-relative path.
pub trait BlobLoader: Send + Sync {
    /// Loads the blob at `path`, failing if the path is unresolvable.
    fn load(&self, path: &str) -> io::Result<Vec<u8>>;
}

/// A blob loader rooted at a data directory.
#[derive(Debug, Clone)]
pub struct FsBlobLoader {
    /// Root directory all paths resolve against.
    root: PathBuf,
}

impl FsBlobLoader {
    /// Creates a loader rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the loader's root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl BlobLoader for FsBlobLoader {
    fn load(&self, path: &str) -> io::Result<Vec<u8>> {
        fs::read(self.root.join(path))
    }
}

/// One entry of the witness metadata list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WitnessEntry {
    /// 1-based witness number.
    pub number: u32,
    /// Witness display name.
    pub name: String,
    /// Corpus file the witness's testimony lives in.
    pub file: String,
}

/// Loads and parses the witness metadata list.
pub fn load_witness_list(
    loader: &dyn BlobLoader,
    path: &str,
) -> Result<Vec<WitnessEntry>, ServiceError> {
    let bytes = loader.load(path).map_err(|source| ServiceError::LoadBlob {
        path: path.to_string(),
        source,
    })?;

    serde_json::from_slice(&bytes).map_err(|source| ServiceError::WitnessList {
        path: path.to_string(),
        source,
    })
}
