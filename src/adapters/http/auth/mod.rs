//! HTTP adapter for access-code introspection.

mod handlers;
mod routes;

pub use handlers::PermissionsResponse;
pub use routes::auth_routes;
