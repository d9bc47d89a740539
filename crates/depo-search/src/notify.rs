//! Refresh observer collaborator.
//!
//! After initialization and after each query the coordinator pokes an
//! external observer so the host can refresh whatever is watching the
//! results. The call is best-effort: it runs outside the coordinator's
//! locks and a failing observer is logged and otherwise ignored.

use std::{error::Error, future::Future, pin::Pin};

/// Error type observers may fail with.
pub type BoxError = Box<dyn Error + Send + Sync>;

/// Future returned by [`RefreshObserver::refresh`].
pub type RefreshFuture = Pin<Box<dyn Future<Output = Result<(), BoxError>> + Send>>;

/// External observer notified after initialization and after each query.
pub trait RefreshObserver: Send + Sync {
    /// Signals the observer that fresh results may be available.
    fn refresh(&self) -> RefreshFuture;
}

/// Any async closure works as an observer.
impl<F, Fut> RefreshObserver for F
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<(), BoxError>> + Send + 'static,
{
    fn refresh(&self) -> RefreshFuture {
        Box::pin(self())
    }
}

/// An observer that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl RefreshObserver for NullObserver {
    fn refresh(&self) -> RefreshFuture {
        Box::pin(async { Ok(()) })
    }
}
