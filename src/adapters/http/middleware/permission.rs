//! Access-code permission gate and extractor.
//!
//! Callers present their code in the `X-Access-Code` header or, failing
//! that, the `code` query parameter.
//!
//! | Outcome                       | Status |
//! |-------------------------------|--------|
//! | no code                       | 401 `MISSING_CODE` |
//! | unknown or expired code       | 401 `INVALID_CODE` |
//! | code lacks the permission     | 403 `FORBIDDEN` |
//! | authorization backend failure | 500 `INTERNAL_ERROR` |

use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::Deserialize;

use super::gate::{Gate, GateRejection};
use crate::adapters::http::error::ApiError;
use crate::domain::auth::{AccessCode, AuthError, Permission};
use crate::ports::AuthorizationService;

/// Header carrying the caller's access code.
pub const ACCESS_CODE_HEADER: &str = "x-access-code";

/// Query parameter carrying the caller's access code.
pub const ACCESS_CODE_PARAM: &str = "code";

#[derive(Debug, Deserialize)]
struct CodeParam {
    code: Option<String>,
}

/// Pulls the access code out of a request head.
///
/// Returns `Ok(None)` when no non-blank code is present.
pub fn access_code_from_parts(parts: &Parts) -> Result<Option<AccessCode>, AuthError> {
    let from_header = parts
        .headers
        .get(ACCESS_CODE_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    let raw = match from_header {
        Some(code) => Some(code),
        None => Query::<CodeParam>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(p)| p.code)
            .filter(|s| !s.trim().is_empty()),
    };

    raw.map(AccessCode::parse).transpose()
}

/// Allows a request only if its access code grants `permission`.
#[derive(Clone)]
pub struct PermissionGate {
    auth: Arc<dyn AuthorizationService>,
    permission: Permission,
}

impl PermissionGate {
    pub fn new(auth: Arc<dyn AuthorizationService>, permission: Permission) -> Self {
        Self { auth, permission }
    }
}

#[async_trait]
impl Gate for PermissionGate {
    fn name(&self) -> &'static str {
        "permission"
    }

    async fn check(&self, parts: &Parts) -> Result<(), GateRejection> {
        let code = access_code_from_parts(parts)?.ok_or_else(ApiError::missing_code)?;

        match self.auth.has_permission(&code, &self.permission).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(ApiError::forbidden(&self.permission)),
            Err(e) => Err(e.into()),
        }
    }
}

/// Extractor for handlers that need the caller's code itself.
///
/// Rejects with 401 when no code is present. Validity is not checked here.
#[derive(Debug, Clone)]
pub struct RequireCode(pub AccessCode);

#[async_trait]
impl<S> FromRequestParts<S> for RequireCode
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        access_code_from_parts(parts)?
            .map(RequireCode)
            .ok_or_else(ApiError::missing_code)
    }
}
