//! Adapters - Implementations of port interfaces.
//!
//! - `auth` - Authorization services (in-memory, grants file, timeout wrapper)
//! - `git` - Commit activity sources
//! - `http` - axum REST API
//! - `mood` - Mood service providers (in-memory, PostgreSQL)

pub mod auth;
pub mod git;
pub mod http;
pub mod mood;
