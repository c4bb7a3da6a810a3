//! Authorization adapters.
//!
//! Implementations of the `AuthorizationService` port:
//!
//! - `in_memory` - Grant table keyed by code digest, with optional expiry
//! - `grants_file` - Seeds the in-memory service from a YAML file
//! - `timeout` - Deadline decorator for any implementation

mod grants_file;
mod in_memory;
mod timeout;

pub use grants_file::{GrantsFile, GrantsFileError};
pub use in_memory::{Grant, InMemoryAuthorizationService};
pub use timeout::TimeoutAuthorizationService;
