//! Authorization errors.

use std::error::Error;
use std::sync::Arc;

use thiserror::Error;

/// Shared, cloneable error cause.
pub type BoxedCause = Arc<dyn Error + Send + Sync>;

/// Errors returned by an `AuthorizationService`.
///
/// Only two kinds exist: the caller's code is no good, or the backing
/// store could not answer. Handlers map the first to 401 and the second
/// to a generic 500.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The code is missing, unknown, expired, or malformed.
    #[error("auth: invalid code")]
    InvalidCode,

    /// The backing store failed for reasons unrelated to the caller's input.
    #[error("auth: {context}")]
    Backend {
        context: String,
        #[source]
        source: BoxedCause,
    },
}

impl AuthError {
    /// Wraps a backend failure with context.
    pub fn backend(
        context: impl Into<String>,
        source: impl Into<Box<dyn Error + Send + Sync>>,
    ) -> Self {
        AuthError::Backend {
            context: context.into(),
            source: Arc::from(source.into()),
        }
    }

    /// Creates a backend failure from a plain message.
    pub fn unavailable(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::backend(message.clone(), message)
    }

    /// User-facing detail, safe to return to callers.
    pub fn detail(&self) -> &'static str {
        match self {
            AuthError::InvalidCode => "Code is invalid or expired.",
            AuthError::Backend { .. } => "Authorization is temporarily unavailable.",
        }
    }

    /// Returns true if this is a transient error that may succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, AuthError::Backend { .. })
    }
}
