//! Top-level router assembly.
//!
//! # Routes
//!
//! - `GET /` - Service info
//! - `GET /healthz` - Liveness probe
//! - `GET /auth/permissions` - Caller's permissions
//! - `GET /commits` - Recent commit activity
//! - `GET|POST /moods`, `GET /moods/:id` - Moods

use std::time::Duration;

use axum::extract::State;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::auth::auth_routes;
use super::git::git_routes;
use super::mood::mood_routes;
use super::state::{AppState, ServiceInfo};

/// Cross-cutting layer settings.
#[derive(Debug, Clone)]
pub struct RouterOptions {
    /// Allowed CORS origins. Empty allows any origin.
    pub cors_origins: Vec<String>,
    pub request_timeout: Duration,
}

impl RouterOptions {
    pub fn from_config(server: &ServerConfig) -> Self {
        Self {
            cors_origins: server.cors_origins_list(),
            request_timeout: server.request_timeout(),
        }
    }
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            cors_origins: Vec::new(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

async fn index(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(state.info)
}

async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Any origin may read; writes need an explicitly configured origin.
fn cors(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_headers(Any);

    if origins.is_empty() {
        return layer.allow_methods([Method::GET]).allow_origin(Any);
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring unparseable CORS origin");
                None
            }
        })
        .collect();
    layer
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(AllowOrigin::list(parsed))
}

/// Builds the full application router.
pub fn build_router(state: AppState, options: RouterOptions) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
        .merge(auth_routes())
        .merge(git_routes())
        .merge(mood_routes(state.auth.clone()))
        .with_state(state)
        .layer(TimeoutLayer::new(options.request_timeout))
        .layer(cors(&options.cors_origins))
        .layer(TraceLayer::new_for_http())
}
