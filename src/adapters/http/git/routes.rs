//! Routes for commit activity. Public; no access code required.

use axum::routing::get;
use axum::Router;

use crate::adapters::http::state::AppState;

use super::handlers::recent_commits;

pub fn git_routes() -> Router<AppState> {
    Router::new().route("/commits", get(recent_commits))
}
