//! Mood-specific errors.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, MoodId, ValidationError};

/// Errors from mood queries and commands.
#[derive(Debug, Clone, Error)]
pub enum MoodError {
    #[error("Mood not found: {0}")]
    NotFound(MoodId),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Mood storage is not available")]
    Unavailable,

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl MoodError {
    pub fn infrastructure(message: impl Into<String>) -> Self {
        MoodError::Infrastructure(message.into())
    }

    /// Machine-readable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            MoodError::NotFound(_) => ErrorCode::MoodNotFound,
            MoodError::Validation(e) => ErrorCode::from(e),
            MoodError::Unavailable => ErrorCode::ServiceUnavailable,
            MoodError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Message safe to return to API clients.
    pub fn message(&self) -> String {
        match self {
            MoodError::Infrastructure(_) => "An internal error occurred.".to_string(),
            other => other.to_string(),
        }
    }
}
