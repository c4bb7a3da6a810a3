//! Service provider port - lifecycle plus domain capabilities.
//!
//! A provider bundles connections to external resources (databases, API
//! sessions) with the domain services built on top of them. The server
//! depends on a single provider object for both service logic and teardown.
//!
//! ```text
//! ServiceProvider = Lifecycle + MoodService
//! ```
//!
//! # Lifecycle contract
//!
//! - `open` moves resources from unready to ready. If it fails part-way,
//!   whatever was acquired is released before the error is returned, so a
//!   caller that never calls `close` leaks nothing.
//! - `close` releases everything `open` acquired. It succeeds without a
//!   prior `open` and is idempotent: teardown may run more than once.
//! - Domain methods called while the provider is not open fail with
//!   [`ProviderError::NotOpen`].
//!
//! `close` is typically registered as a finalizer right after a successful
//! `open` so it takes part in reverse-order teardown.

use std::error::Error;

use async_trait::async_trait;
use thiserror::Error;

use super::MoodService;

/// Errors raised by service providers and the domain services they embed.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// A domain method was called before `open` or after `close`.
    #[error("provider is not open")]
    NotOpen,

    /// Acquiring or releasing an external resource failed.
    #[error("provider connection failed: {context}")]
    Connection {
        context: String,
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },

    /// A read or write against an open resource failed.
    #[error("provider query failed: {context}")]
    Query {
        context: String,
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}

impl ProviderError {
    /// Wraps a connection failure with context.
    pub fn connection(
        context: impl Into<String>,
        source: impl Into<Box<dyn Error + Send + Sync>>,
    ) -> Self {
        ProviderError::Connection {
            context: context.into(),
            source: source.into(),
        }
    }

    /// Wraps a query failure with context.
    pub fn query(
        context: impl Into<String>,
        source: impl Into<Box<dyn Error + Send + Sync>>,
    ) -> Self {
        ProviderError::Query {
            context: context.into(),
            source: source.into(),
        }
    }
}

/// Explicit open/close lifecycle for external resources.
#[async_trait]
pub trait Lifecycle: Send + Sync {
    /// Acquire all external resources.
    async fn open(&self) -> Result<(), ProviderError>;

    /// Release all external resources. Safe without a prior `open`.
    async fn close(&self) -> Result<(), ProviderError>;
}

/// The union of a lifecycle and the domain services a server needs.
///
/// Implemented automatically for anything that is both.
pub trait ServiceProvider: Lifecycle + MoodService {}

impl<T> ServiceProvider for T where T: Lifecycle + MoodService {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_error_keeps_context_and_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = ProviderError::connection("connecting to store", io);

        assert_eq!(err.to_string(), "provider connection failed: connecting to store");
        assert_eq!(err.source().unwrap().to_string(), "refused");
    }

    #[test]
    fn service_provider_trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn ServiceProvider>();
    }
}
