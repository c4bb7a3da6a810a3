//! HTTP error responses.
//!
//! Every rejection leaves the API as a JSON [`ErrorResponse`] with a status
//! code chosen here. Backend causes are logged, never returned.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::domain::auth::{AuthError, Permission};
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::domain::mood::MoodError;

// ════════════════════════════════════════════════════════════════════════════════
// Error Response DTO
// ════════════════════════════════════════════════════════════════════════════════

/// Standard error body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: None,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Precondition Errors
// ════════════════════════════════════════════════════════════════════════════════

/// A request failed a structural precondition before reaching its handler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreconditionError {
    #[error("Missing Content-Type header")]
    MissingContentTypeHeader,

    #[error("Unexpected Content-Type header '{0}'")]
    UnexpectedContentType(String),

    #[error("Missing required header '{0}'")]
    MissingHeader(String),
}

impl PreconditionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            PreconditionError::MissingContentTypeHeader => ErrorCode::MissingContentType,
            PreconditionError::UnexpectedContentType(_) => ErrorCode::UnexpectedContentType,
            PreconditionError::MissingHeader(_) => ErrorCode::MissingHeader,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// ApiError
// ════════════════════════════════════════════════════════════════════════════════

/// An error ready to be sent to the client.
#[derive(Debug, Clone)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorResponse::new(code.to_string(), message),
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.body.details = Some(details);
        self
    }

    /// No access code was supplied.
    pub fn missing_code() -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            ErrorCode::MissingCode,
            "An access code is required.",
        )
    }

    /// The code is valid but lacks `permission`.
    pub fn forbidden(permission: &Permission) -> Self {
        Self::new(
            StatusCode::FORBIDDEN,
            ErrorCode::Forbidden,
            "Code does not grant access to this resource.",
        )
        .with_details(serde_json::json!({ "permission": permission.as_str() }))
    }

    /// Generic 500 with no cause attached.
    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::InternalError,
            "An internal error occurred.",
        )
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn error_code(&self) -> &str {
        &self.body.error_code
    }

    pub fn message(&self) -> &str {
        &self.body.message
    }
}

impl From<PreconditionError> for ApiError {
    fn from(err: PreconditionError) -> Self {
        Self::new(StatusCode::BAD_REQUEST, err.code(), err.to_string())
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match &err {
            AuthError::InvalidCode => {
                Self::new(StatusCode::UNAUTHORIZED, ErrorCode::InvalidCode, err.detail())
            }
            AuthError::Backend { context, source } => {
                tracing::error!(context = %context, cause = %source, "authorization backend failed");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::InternalError,
                    err.detail(),
                )
            }
        }
    }
}

impl From<MoodError> for ApiError {
    fn from(err: MoodError) -> Self {
        let status = match &err {
            MoodError::NotFound(_) => StatusCode::NOT_FOUND,
            MoodError::Validation(_) => StatusCode::BAD_REQUEST,
            MoodError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            MoodError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, err.code(), err.message())
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        DomainError::from(err).into()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let status = match err.code {
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat
            | ErrorCode::MissingContentType
            | ErrorCode::UnexpectedContentType
            | ErrorCode::MissingHeader => StatusCode::BAD_REQUEST,
            ErrorCode::MoodNotFound => StatusCode::NOT_FOUND,
            ErrorCode::InvalidCode | ErrorCode::MissingCode => StatusCode::UNAUTHORIZED,
            ErrorCode::Forbidden => StatusCode::FORBIDDEN,
            ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorCode::DatabaseError | ErrorCode::InternalError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let mut api = Self::new(status, err.code, err.message);
        if !err.details.is_empty() {
            api = api.with_details(serde_json::json!(err.details));
        }
        api
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::MOOD_WRITE;
    use crate::domain::foundation::MoodId;

    #[test]
    fn missing_content_type_is_bad_request() {
        let err = ApiError::from(PreconditionError::MissingContentTypeHeader);

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "MISSING_CONTENT_TYPE");
    }

    #[test]
    fn unexpected_content_type_names_the_value() {
        let err = ApiError::from(PreconditionError::UnexpectedContentType(
            "application/xml".to_string(),
        ));

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "UNEXPECTED_CONTENT_TYPE");
        assert!(err.message().contains("application/xml"));
    }

    #[test]
    fn invalid_code_is_unauthorized_with_detail() {
        let err = ApiError::from(AuthError::InvalidCode);

        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.message(), "Code is invalid or expired.");
    }

    #[test]
    fn backend_failure_is_generic_500() {
        let err = ApiError::from(AuthError::unavailable("pg at 10.1.1.1 refused"));

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.message().contains("10.1.1.1"));
    }

    #[test]
    fn forbidden_names_permission() {
        let err = ApiError::forbidden(&MOOD_WRITE);

        assert_eq!(err.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            err.body.details,
            Some(serde_json::json!({ "permission": "mood:write" }))
        );
    }

    #[test]
    fn mood_not_found_is_404() {
        let err = ApiError::from(MoodError::NotFound(MoodId::new()));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_code(), "MOOD_NOT_FOUND");
    }

    #[test]
    fn validation_error_is_400_with_field_code() {
        let err = ApiError::from(ValidationError::invalid_format("limit", "must be an integer"));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "INVALID_FORMAT");
    }

    #[test]
    fn error_body_omits_absent_details() {
        let json = serde_json::to_value(ErrorResponse::new("X", "y")).unwrap();
        assert!(json.get("details").is_none());
        assert_eq!(json["error_code"], "X");
    }
}
