//! In-memory authorization service.
//!
//! Grants are keyed by the SHA-256 digest of the access code, so raw codes
//! are never retained in memory after a grant is added. Each grant may carry
//! an expiry, checked on every lookup.
//!
//! # Example
//!
//! ```ignore
//! use personal_api::adapters::auth::InMemoryAuthorizationService;
//! use personal_api::domain::auth::{AccessCode, MOOD_READ};
//!
//! let auth = InMemoryAuthorizationService::new()
//!     .with_grant("letmein", [MOOD_READ]);
//!
//! let code = AccessCode::parse("letmein")?;
//! assert!(auth.has_permission(&code, &MOOD_READ).await?);
//! ```

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use sha2::{Digest, Sha256};

use crate::domain::auth::{AccessCode, AuthError, Permission, PermissionSet};
use crate::domain::foundation::Timestamp;
use crate::ports::AuthorizationService;

/// Permissions granted to one access code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grant {
    pub permissions: PermissionSet,
    pub expires_at: Option<Timestamp>,
}

impl Grant {
    /// A grant that never expires.
    pub fn new(permissions: impl IntoIterator<Item = Permission>) -> Self {
        Self {
            permissions: permissions.into_iter().collect(),
            expires_at: None,
        }
    }

    /// Sets the instant after which the grant is no longer honoured.
    pub fn expiring_at(mut self, expires_at: Timestamp) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    fn is_live(&self) -> bool {
        !self.permissions.is_empty() && !self.expires_at.is_some_and(|t| t.has_passed())
    }
}

/// Authorization backed by an in-process grant table.
#[derive(Debug, Default)]
pub struct InMemoryAuthorizationService {
    /// Grants keyed by hex SHA-256 of the trimmed code
    grants: RwLock<HashMap<String, Grant>>,
    /// Optional error returned by every lookup (for error testing)
    force_error: RwLock<Option<AuthError>>,
}

impl InMemoryAuthorizationService {
    /// Creates an empty service. Every code is invalid until granted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a non-expiring grant for `code`.
    pub fn with_grant(
        self,
        code: impl AsRef<str>,
        permissions: impl IntoIterator<Item = Permission>,
    ) -> Self {
        self.grant(code, Grant::new(permissions));
        self
    }

    /// Forces every lookup to fail with `error`.
    pub fn with_error(self, error: AuthError) -> Self {
        *write(&self.force_error) = Some(error);
        self
    }

    /// Clears a forced error.
    pub fn clear_error(&self) {
        *write(&self.force_error) = None;
    }

    /// Adds or replaces the grant for `code` at runtime.
    pub fn grant(&self, code: impl AsRef<str>, grant: Grant) {
        write(&self.grants).insert(digest(code.as_ref()), grant);
    }

    /// Removes the grant for `code`. Returns true if one existed.
    pub fn revoke(&self, code: impl AsRef<str>) -> bool {
        write(&self.grants).remove(&digest(code.as_ref())).is_some()
    }

    /// Number of stored grants, including expired ones.
    pub fn grant_count(&self) -> usize {
        read(&self.grants).len()
    }

    fn check_forced_error(&self) -> Result<(), AuthError> {
        match read(&self.force_error).clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn live_grant(&self, code: &AccessCode) -> Result<Grant, AuthError> {
        self.check_forced_error()?;
        read(&self.grants)
            .get(&digest(code.expose()))
            .filter(|grant| grant.is_live())
            .cloned()
            .ok_or(AuthError::InvalidCode)
    }
}

#[async_trait]
impl AuthorizationService for InMemoryAuthorizationService {
    async fn get_permissions(&self, code: &AccessCode) -> Result<PermissionSet, AuthError> {
        self.live_grant(code).map(|grant| grant.permissions)
    }

    async fn has_permission(
        &self,
        code: &AccessCode,
        permission: &Permission,
    ) -> Result<bool, AuthError> {
        self.check_forced_error()?;
        let key = digest(code.expose());
        let grants = read(&self.grants);
        let grant = grants
            .get(&key)
            .filter(|grant| grant.is_live())
            .ok_or(AuthError::InvalidCode)?;

        let allowed = grant.permissions.contains(permission);
        if allowed {
            tracing::debug!(
                code_digest = %&key[..12],
                permission = %permission,
                "access granted"
            );
        }
        Ok(allowed)
    }
}

/// Hex SHA-256 of the trimmed code.
pub(crate) fn digest(code: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(code.trim().as_bytes());
    format!("{:x}", hasher.finalize())
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
