//! Routes for access-code introspection.

use axum::routing::get;
use axum::Router;

use crate::adapters::http::state::AppState;

use super::handlers::get_permissions;

/// - `GET /auth/permissions` - List the caller's permissions (code required)
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/auth/permissions", get(get_permissions))
}
