//! HTTP adapters - REST API implementations.
//!
//! Each domain area has its own submodule with DTOs, handlers and routes;
//! [`build_router`] stitches them together with the shared layers.

pub mod auth;
pub mod error;
pub mod git;
pub mod middleware;
pub mod mood;
pub mod router;
pub mod state;

pub use error::{ApiError, ErrorResponse, PreconditionError};
pub use router::{build_router, RouterOptions};
pub use state::{AppState, ServiceInfo};
