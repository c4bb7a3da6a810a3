//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Query handlers read through a port; command handlers validate domain
//! input before writing through one.

pub mod handlers;

pub use handlers::git::{RecentCommitsHandler, RecentCommitsQuery};
pub use handlers::mood::{
    CreateMoodCommand, CreateMoodHandler, GetMoodHandler, GetMoodQuery, ListMoodsHandler,
    ListMoodsQuery,
};
