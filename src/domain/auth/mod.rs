//! Authorization vocabulary.
//!
//! This module only covers *authorization*: deciding what an already-issued
//! access code may do. Identity verification happens elsewhere, if at all.
//!
//! - [`Permission`] / [`PermissionSet`] - grantable capabilities
//! - [`AccessCode`] - the opaque token a caller presents
//! - [`AuthError`] - invalid code vs. backend failure

mod access_code;
mod errors;
mod permission;

pub use access_code::AccessCode;
pub use errors::{AuthError, BoxedCause};
pub use permission::{Permission, PermissionSet, COMMITS_READ, MOOD_READ, MOOD_WRITE};
