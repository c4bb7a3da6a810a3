//! Ordered request gates.
//!
//! A [`GateChain`] is a list of checks run before a handler. The first gate
//! to reject ends the request with its error response; if every gate
//! allows, the request reaches the handler unmodified and the handler's
//! response is returned as-is.
//!
//! ```text
//! Start ──► gate 1 ──► gate 2 ──► ... ──► handler   (Delegated)
//!              │          │
//!              └──────────┴──► error response        (Rejected)
//! ```
//!
//! # Example
//!
//! ```ignore
//! let chain = GateChain::new()
//!     .with(ContentTypeGate::new(["application/json"]))
//!     .with(PermissionGate::new(auth.clone(), MOOD_WRITE));
//!
//! let route = post(create_mood).route_layer(middleware::from_fn_with_state(chain, gate_middleware));
//! ```

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::{Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use super::super::error::ApiError;

/// Error returned by a gate that refuses a request.
pub type GateRejection = ApiError;

/// A single precondition checked before a handler runs.
///
/// Gates see the request head only and never consume the body.
#[async_trait]
pub trait Gate: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Allows the request with `Ok(())` or rejects it.
    async fn check(&self, parts: &Parts) -> Result<(), GateRejection>;
}

/// An immutable, ordered list of gates.
#[derive(Clone, Default)]
pub struct GateChain {
    gates: Vec<Arc<dyn Gate>>,
}

impl GateChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a gate; gates run in the order they were added.
    pub fn with(mut self, gate: impl Gate + 'static) -> Self {
        self.gates.push(Arc::new(gate));
        self
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Runs each gate in order, stopping at the first rejection.
    pub async fn check(&self, parts: &Parts) -> Result<(), GateRejection> {
        for gate in &self.gates {
            if let Err(rejection) = gate.check(parts).await {
                tracing::debug!(
                    gate = gate.name(),
                    method = %parts.method,
                    path = %parts.uri.path(),
                    status = rejection.status().as_u16(),
                    "request rejected"
                );
                return Err(rejection);
            }
        }
        Ok(())
    }
}

impl fmt::Debug for GateChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.gates.iter().map(|g| g.name()))
            .finish()
    }
}

/// Axum middleware running a [`GateChain`] in front of the wrapped route.
pub async fn gate_middleware(
    State(chain): State<GateChain>,
    request: Request,
    next: Next,
) -> Response {
    let (parts, body) = request.into_parts();
    if let Err(rejection) = chain.check(&parts).await {
        return rejection.into_response();
    }
    next.run(Request::from_parts(parts, body)).await
}
