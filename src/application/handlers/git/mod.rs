//! Commit activity queries.

mod recent_commits;

pub use recent_commits::{RecentCommitsHandler, RecentCommitsQuery, DEFAULT_COMMIT_LIMIT};
