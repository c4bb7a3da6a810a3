//! Commit activity sources.

mod in_memory;

pub use in_memory::InMemoryCommitSource;
