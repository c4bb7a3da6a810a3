//! Deadline decorator for authorization services.

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::auth::{AccessCode, AuthError, Permission, PermissionSet};
use crate::ports::AuthorizationService;

/// Bounds every lookup on the wrapped service with a deadline.
///
/// An expired deadline becomes [`AuthError::Backend`]; the inner lookup is
/// dropped, which cancels it.
#[derive(Debug, Clone)]
pub struct TimeoutAuthorizationService<S> {
    inner: S,
    timeout: Duration,
}

impl<S> TimeoutAuthorizationService<S> {
    pub fn new(inner: S, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    fn elapsed(&self, operation: &str) -> AuthError {
        tracing::warn!(
            operation,
            timeout_ms = self.timeout.as_millis() as u64,
            "authorization lookup timed out"
        );
        AuthError::unavailable(format!(
            "{} timed out after {}ms",
            operation,
            self.timeout.as_millis()
        ))
    }
}

#[async_trait]
impl<S> AuthorizationService for TimeoutAuthorizationService<S>
where
    S: AuthorizationService,
{
    async fn get_permissions(&self, code: &AccessCode) -> Result<PermissionSet, AuthError> {
        tokio::time::timeout(self.timeout, self.inner.get_permissions(code))
            .await
            .map_err(|_| self.elapsed("get_permissions"))?
    }

    async fn has_permission(
        &self,
        code: &AccessCode,
        permission: &Permission,
    ) -> Result<bool, AuthError> {
        tokio::time::timeout(self.timeout, self.inner.has_permission(code, permission))
            .await
            .map_err(|_| self.elapsed("has_permission"))?
    }
}
