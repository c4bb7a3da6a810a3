//! Mood service providers.
//!
//! - `in_memory` - Process-local storage, used without a database
//! - `postgres` - PostgreSQL storage via a pool opened on `open`

mod in_memory;
mod postgres;

pub use in_memory::InMemoryMoodProvider;
pub use postgres::PostgresMoodProvider;
