//! HTTP middleware for axum.
//!
//! Request gating is built from small [`Gate`]s composed into a
//! [`GateChain`] and mounted per route with [`gate_middleware`]:
//!
//! - `content_type` - Content-Type prefix allow-list
//! - `headers` - Required header presence
//! - `permission` - Access-code permission checks, plus the `RequireCode` extractor

mod content_type;
mod gate;
mod headers;
mod permission;

pub use content_type::ContentTypeGate;
pub use gate::{gate_middleware, Gate, GateChain, GateRejection};
pub use headers::RequiredHeaderGate;
pub use permission::{
    access_code_from_parts, PermissionGate, RequireCode, ACCESS_CODE_HEADER, ACCESS_CODE_PARAM,
};
