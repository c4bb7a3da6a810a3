//! Ordered teardown of cleanup actions.
//!
//! A [`FinalizerRegistry`] collects cleanup actions as resources are
//! acquired and runs them in reverse at shutdown, so the last resource
//! acquired is the first released. A finalizer may therefore assume every
//! resource registered after it has already been torn down.
//!
//! Failures never stop teardown. Each failure is handed to every callback
//! passed to [`FinalizerRegistry::run_all`], and the loop moves on.
//!
//! # Example
//!
//! ```ignore
//! let registry = FinalizerRegistry::new();
//!
//! provider.open().await?;
//! let closing = Arc::clone(&provider);
//! registry.register("service provider", move || {
//!     let provider = Arc::clone(&closing);
//!     async move { provider.close().await }
//! });
//!
//! // ... serve until shutdown ...
//!
//! let report = registry
//!     .run_all(&[&|err: &FinalizerError| tracing::error!(error = %err, "teardown step failed")])
//!     .await;
//! ```

use std::error::Error;
use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::future::{BoxFuture, FutureExt};
use thiserror::Error;

use crate::domain::auth::BoxedCause;

type BoxError = Box<dyn Error + Send + Sync>;

type FinalizerFn = dyn Fn() -> BoxFuture<'static, Result<(), BoxError>> + Send + Sync;

/// Callback invoked with each finalizer failure.
pub type FailureCallback<'a> = &'a (dyn Fn(&FinalizerError) + Send + Sync);

/// A teardown action that failed.
#[derive(Debug, Clone, Error)]
#[error("finalizer '{label}' failed: {source}")]
pub struct FinalizerError {
    pub label: String,
    #[source]
    pub source: BoxedCause,
}

/// Outcome of a teardown pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeardownReport {
    /// Finalizers invoked.
    pub ran: usize,
    /// Finalizers that returned an error.
    pub failed: usize,
}

impl TeardownReport {
    /// Returns true if every finalizer succeeded.
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

#[derive(Clone)]
struct Finalizer {
    label: String,
    run: Arc<FinalizerFn>,
}

/// Reverse-order registry of cleanup actions.
///
/// Owned by the process root and passed by reference; there is no global
/// instance. `register` is safe to call from concurrent tasks. `run_all`
/// is meant to run once, after request processing has stopped.
///
/// The registry does not deduplicate: an action registered twice runs twice.
/// `run_all` does not clear the registry, so a second call replays every
/// finalizer. Service providers make `close` idempotent for this reason.
#[derive(Default)]
pub struct FinalizerRegistry {
    finalizers: Mutex<Vec<Finalizer>>,
}

impl FinalizerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an async cleanup action.
    pub fn register<F, Fut, E>(&self, label: impl Into<String>, finalizer: F)
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), E>> + Send + 'static,
        E: Into<BoxError> + 'static,
    {
        let run: Arc<FinalizerFn> = Arc::new(move || {
            let fut = finalizer();
            async move { fut.await.map_err(Into::<BoxError>::into) }.boxed()
        });
        self.push(label.into(), run);
    }

    /// Registers a synchronous cleanup action.
    pub fn register_sync<F, E>(&self, label: impl Into<String>, finalizer: F)
    where
        F: Fn() -> Result<(), E> + Send + Sync + 'static,
        E: Into<BoxError> + 'static,
    {
        let finalizer = Arc::new(finalizer);
        let run: Arc<FinalizerFn> = Arc::new(move || {
            let finalizer = Arc::clone(&finalizer);
            async move { finalizer().map_err(Into::<BoxError>::into) }.boxed()
        });
        self.push(label.into(), run);
    }

    /// Runs every finalizer, last registered first.
    ///
    /// Each finalizer is invoked exactly once per call. When one fails, every
    /// callback receives the error; the remaining finalizers still run.
    pub async fn run_all(&self, callbacks: &[FailureCallback<'_>]) -> TeardownReport {
        // Snapshot so no lock is held across awaits.
        let finalizers = self.lock().clone();
        let mut report = TeardownReport::default();

        for finalizer in finalizers.iter().rev() {
            tracing::debug!(finalizer = %finalizer.label, "running finalizer");
            report.ran += 1;

            if let Err(source) = (finalizer.run)().await {
                report.failed += 1;
                let err = FinalizerError {
                    label: finalizer.label.clone(),
                    source: Arc::from(source),
                };
                tracing::warn!(finalizer = %err.label, error = %err.source, "finalizer failed");
                for callback in callbacks {
                    callback(&err);
                }
            }
        }

        report
    }

    /// Number of registered finalizers.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Registration labels, in registration order.
    pub fn labels(&self) -> Vec<String> {
        self.lock().iter().map(|f| f.label.clone()).collect()
    }

    fn push(&self, label: String, run: Arc<FinalizerFn>) {
        tracing::trace!(finalizer = %label, "registered finalizer");
        self.lock().push(Finalizer { label, run });
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Finalizer>> {
        self.finalizers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for FinalizerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FinalizerRegistry")
            .field("finalizers", &self.labels())
            .finish()
    }
}
