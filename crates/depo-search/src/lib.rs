//! Async search coordinator for depo.
//!
//! This crate owns the online lifecycle of the testimony index:
//! - Lazy, one-time provisioning: fetch the packed index blob through a
//!   [`BlobLoader`], unpack it, and open it, collapsed to a single
//!   initialization even under concurrent first use
//! - Serialized query execution against the shared index handle
//! - Best-effort refresh notification to an external observer after
//!   initialization and after every query
//!
//! The opened index lives in a [`SearchState`] shared by `Arc`; every
//! [`SearchService`] built from the same state observes the same handle.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use depo_search::{FsBlobLoader, SearchService, SearchState, ServiceConfig};
//!
//! # async fn run() -> Result<(), depo_search::ServiceError> {
//! let loader = Arc::new(FsBlobLoader::new("./data"));
//! let config = ServiceConfig::new("witnesses/full-index.bin", "./data/search-index");
//! let service = SearchService::new(SearchState::new(), loader, config);
//!
//! service.initialize().await?;
//! let matches = service.find_matches("\"joseph smith\"").await?;
//! # let _ = matches;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod loader;
mod notify;
mod service;
mod state;

pub use error::ServiceError;
pub use loader::{BlobLoader, FsBlobLoader, WitnessEntry, load_witness_list};
pub use notify::{BoxError, NullObserver, RefreshFuture, RefreshObserver};
pub use service::{SearchService, ServiceConfig};
pub use state::SearchState;
