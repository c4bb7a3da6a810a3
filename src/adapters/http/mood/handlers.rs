//! HTTP handlers for mood endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::application::handlers::mood::DEFAULT_MOOD_LIMIT;
use crate::application::{CreateMoodCommand, GetMoodQuery, ListMoodsQuery};
use crate::domain::foundation::{DomainError, ErrorCode, MoodId, PageRequest};

use super::dto::{CreateMoodRequest, ListMoodsParams, MoodResponse};

/// GET /moods - Page through moods, newest first
pub async fn list_moods(
    State(state): State<AppState>,
    Query(params): Query<ListMoodsParams>,
) -> Result<impl IntoResponse, ApiError> {
    let page = PageRequest::parse(
        params.limit.as_deref(),
        params.offset.as_deref(),
        DEFAULT_MOOD_LIMIT,
    )?;

    let moods = state
        .list_moods_handler()
        .handle(ListMoodsQuery { page })
        .await?;

    let response: Vec<MoodResponse> = moods.into_iter().map(MoodResponse::from).collect();
    Ok(Json(response))
}

/// GET /moods/:id - Fetch a single mood
pub async fn get_mood(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: MoodId = id.parse()?;

    let mood = state.get_mood_handler().handle(GetMoodQuery { id }).await?;

    Ok(Json(MoodResponse::from(mood)))
}

/// POST /moods - Record a mood
pub async fn create_mood(
    State(state): State<AppState>,
    body: Result<Json<CreateMoodRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = body.map_err(|rejection| {
        ApiError::from(DomainError::new(
            ErrorCode::ValidationFailed,
            rejection.body_text(),
        ))
    })?;

    let mood = state
        .create_mood_handler()
        .handle(CreateMoodCommand {
            mood: request.into(),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(MoodResponse::from(mood))))
}
