//! Axum router configuration for mood endpoints.

use std::sync::Arc;

use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::Router;

use crate::adapters::http::middleware::{
    gate_middleware, ContentTypeGate, GateChain, PermissionGate,
};
use crate::adapters::http::state::AppState;
use crate::domain::auth::{MOOD_READ, MOOD_WRITE};
use crate::ports::AuthorizationService;

use super::handlers::{create_mood, get_mood, list_moods};

/// Create the mood router.
///
/// # Routes
///
/// - `GET /moods` - List moods (`mood:read`)
/// - `GET /moods/:id` - Get one mood (`mood:read`)
/// - `POST /moods` - Record a mood (JSON body, `mood:write`)
pub fn mood_routes(auth: Arc<dyn AuthorizationService>) -> Router<AppState> {
    let read = GateChain::new().with(PermissionGate::new(auth.clone(), MOOD_READ));
    let write = GateChain::new()
        .with(ContentTypeGate::new(["application/json"]))
        .with(PermissionGate::new(auth, MOOD_WRITE));

    Router::new()
        .route(
            "/moods",
            get(list_moods).route_layer(from_fn_with_state(read.clone(), gate_middleware)),
        )
        .route(
            "/moods",
            post(create_mood).route_layer(from_fn_with_state(write, gate_middleware)),
        )
        .route(
            "/moods/:id",
            get(get_mood).route_layer(from_fn_with_state(read, gate_middleware)),
        )
}
