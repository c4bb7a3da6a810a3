//! HTTP adapter for commit activity.

mod handlers;
mod routes;

pub use handlers::RecentCommitsParams;
pub use routes::git_routes;
