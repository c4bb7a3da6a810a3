//! End-to-end tests for the HTTP surface.
//!
//! Requests go through the full router (gates, handlers, error mapping)
//! against in-memory adapters.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use personal_api::adapters::auth::InMemoryAuthorizationService;
use personal_api::adapters::git::InMemoryCommitSource;
use personal_api::adapters::http::{build_router, AppState, RouterOptions, ServiceInfo};
use personal_api::adapters::mood::InMemoryMoodProvider;
use personal_api::domain::auth::{MOOD_READ, MOOD_WRITE};
use personal_api::ports::Lifecycle;

// =============================================================================
// Test Infrastructure
// =============================================================================

const READER: &str = "reader-code";
const WRITER: &str = "writer-code";

async fn app() -> Router {
    let provider = Arc::new(InMemoryMoodProvider::new());
    provider.open().await.unwrap();

    let auth = InMemoryAuthorizationService::new()
        .with_grant(READER, [MOOD_READ])
        .with_grant(WRITER, [MOOD_READ, MOOD_WRITE]);

    let state = AppState::new(
        provider,
        Arc::new(auth),
        Arc::new(InMemoryCommitSource::new()),
        ServiceInfo::current("test"),
    );
    build_router(state, RouterOptions::default())
}

fn post_mood(content_type: Option<&str>, code: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::post("/moods");
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    if let Some(code) = code {
        builder = builder.header("x-access-code", code);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get(uri: &str, code: Option<&str>) -> Request<Body> {
    let mut builder = Request::get(uri);
    if let Some(code) = code {
        builder = builder.header("x-access-code", code);
    }
    builder.body(Body::empty()).unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn sample_mood() -> Value {
    json!({ "extId": 1, "moods": ["Happy"], "valence": 2, "reason": "sunny" })
}

// =============================================================================
// Content-Type gating
// =============================================================================

#[tokio::test]
async fn json_post_with_write_code_is_created() {
    let response = app()
        .await
        .oneshot(post_mood(Some("application/json"), Some(WRITER), &sample_mood()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    assert_eq!(body["moods"], json!(["happy"]));
    assert!(body.get("reason").is_none());
}

#[tokio::test]
async fn content_type_with_parameters_matches_by_prefix() {
    let response = app()
        .await
        .oneshot(post_mood(
            Some("application/json; charset=utf-8"),
            Some(WRITER),
            &sample_mood(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn missing_content_type_is_rejected() {
    let response = app()
        .await
        .oneshot(post_mood(None, Some(WRITER), &sample_mood()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error_code"], "MISSING_CONTENT_TYPE");
    assert_eq!(body["message"], "Missing Content-Type header");
}

#[tokio::test]
async fn unexpected_content_type_is_rejected_by_name() {
    let response = app()
        .await
        .oneshot(post_mood(Some("application/xml"), Some(WRITER), &sample_mood()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error_code"], "UNEXPECTED_CONTENT_TYPE");
    assert_eq!(body["message"], "Unexpected Content-Type header 'application/xml'");
}

#[tokio::test]
async fn content_type_is_checked_before_the_code() {
    let response = app()
        .await
        .oneshot(post_mood(Some("text/plain"), None, &sample_mood()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Permission gating
// =============================================================================

#[tokio::test]
async fn missing_code_is_unauthorized() {
    let response = app().await.oneshot(get("/moods", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(response).await["error_code"], "MISSING_CODE");
}

#[tokio::test]
async fn unknown_code_is_unauthorized() {
    let response = app()
        .await
        .oneshot(get("/moods", Some("nobody")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(response).await["error_code"], "INVALID_CODE");
}

#[tokio::test]
async fn read_code_cannot_write() {
    let response = app()
        .await
        .oneshot(post_mood(Some("application/json"), Some(READER), &sample_mood()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(
        json_body(response).await["details"],
        json!({ "permission": "mood:write" })
    );
}

#[tokio::test]
async fn code_may_come_from_query_string() {
    let response = app()
        .await
        .oneshot(get(&format!("/moods?code={READER}"), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn permissions_endpoint_lists_grants() {
    let response = app()
        .await
        .oneshot(get("/auth/permissions", Some(WRITER)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({ "permissions": ["mood:read", "mood:write"] })
    );
}

// =============================================================================
// Mood reads
// =============================================================================

#[tokio::test]
async fn created_mood_is_listed_and_fetchable() {
    let app = app().await;

    let created = app
        .clone()
        .oneshot(post_mood(Some("application/json"), Some(WRITER), &sample_mood()))
        .await
        .unwrap();
    let id = json_body(created).await["id"].as_str().unwrap().to_string();

    let listed = app.clone().oneshot(get("/moods", Some(READER))).await.unwrap();
    assert_eq!(listed.status(), StatusCode::OK);
    let listed = json_body(listed).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["id"], id.as_str());

    let fetched = app
        .oneshot(get(&format!("/moods/{id}"), Some(READER)))
        .await
        .unwrap();
    assert_eq!(fetched.status(), StatusCode::OK);
    assert_eq!(json_body(fetched).await["extId"], 1);
}

#[tokio::test]
async fn invalid_limit_is_bad_request() {
    for uri in ["/moods?limit=0", "/moods?limit=abc", "/moods?offset=-1"] {
        let response = app().await.oneshot(get(uri, Some(READER))).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
    }
}

#[tokio::test]
async fn unknown_mood_is_not_found() {
    let response = app()
        .await
        .oneshot(get(
            "/moods/00000000-0000-4000-8000-000000000000",
            Some(READER),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn out_of_range_valence_is_bad_request() {
    let body = json!({ "extId": 1, "moods": ["tired"], "valence": 9 });
    let response = app()
        .await
        .oneshot(post_mood(Some("application/json"), Some(WRITER), &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Public routes
// =============================================================================

#[tokio::test]
async fn healthz_needs_no_code() {
    let response = app().await.oneshot(get("/healthz", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn commits_are_public() {
    let response = app().await.oneshot(get("/commits", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!([]));
}
