//! HTTP handlers for access-code introspection.

use axum::extract::{Json, State};
use axum::response::IntoResponse;
use serde::Serialize;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireCode;
use crate::adapters::http::state::AppState;
use crate::domain::auth::PermissionSet;

#[derive(Debug, Serialize)]
pub struct PermissionsResponse {
    pub permissions: PermissionSet,
}

/// GET /auth/permissions - Permissions granted to the caller's code
pub async fn get_permissions(
    State(state): State<AppState>,
    RequireCode(code): RequireCode,
) -> Result<impl IntoResponse, ApiError> {
    let permissions = state.auth.get_permissions(&code).await?;
    Ok(Json(PermissionsResponse { permissions }))
}
