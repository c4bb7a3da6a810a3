//! Application handlers.
//!
//! - `mood` - List, fetch, and record moods
//! - `git` - Recent commit activity

pub mod git;
pub mod mood;
