//! HTTP handlers for commit activity.

use axum::extract::{Json, Query, State};
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::application::handlers::git::DEFAULT_COMMIT_LIMIT;
use crate::application::RecentCommitsQuery;
use crate::domain::foundation::PageRequest;

#[derive(Debug, Default, Deserialize)]
pub struct RecentCommitsParams {
    pub limit: Option<String>,
}

/// GET /commits - Recent commits, newest first
pub async fn recent_commits(
    State(state): State<AppState>,
    Query(params): Query<RecentCommitsParams>,
) -> Result<impl IntoResponse, ApiError> {
    let page = PageRequest::parse(params.limit.as_deref(), None, DEFAULT_COMMIT_LIMIT)?;

    let commits = state
        .recent_commits_handler()
        .handle(RecentCommitsQuery { page })
        .await?;

    Ok(Json(commits))
}
