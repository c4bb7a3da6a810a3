//! Process lifecycle - ordered teardown of acquired resources.

mod finalizer;

pub use finalizer::{FailureCallback, FinalizerError, FinalizerRegistry, TeardownReport};
