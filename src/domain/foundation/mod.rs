//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the personal API domain.

mod errors;
mod ids;
mod page;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::MoodId;
pub use page::{PageRequest, MAX_PAGE_LIMIT};
pub use timestamp::Timestamp;
