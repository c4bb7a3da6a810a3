//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `auth` - Permissions, access codes, and authorization errors
//! - `mood` - Mood records
//! - `git` - Commit activity

pub mod auth;
pub mod foundation;
pub mod git;
pub mod mood;
