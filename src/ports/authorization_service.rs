//! Authorization port for access-code permission checks.
//!
//! Handlers consult this port before touching any permission-gated service.
//! It answers one question: what may the holder of this code do?
//!
//! # Contract
//!
//! - `get_permissions` fails with `AuthError::InvalidCode` when the code is
//!   unknown, expired, malformed, or grants nothing. Any other failure is
//!   `AuthError::Backend`.
//! - `has_permission(c, p)` must equal `get_permissions(c)?.contains(p)`.
//!   The default implementation is exactly that; adapters may override it
//!   with a targeted lookup but must keep the equivalence.
//! - Implementations are shared across request tasks and must be safe for
//!   concurrent read-only use.
//! - Dropping a returned future cancels the lookup. Adapters that talk to a
//!   remote store must not block past the caller's deadline.
//!
//! # Example
//!
//! ```ignore
//! match auth.has_permission(&code, &MOOD_READ).await {
//!     Ok(true) => { /* proceed */ }
//!     Ok(false) => return Err(ApiError::forbidden(&MOOD_READ)),
//!     Err(e) => return Err(e.into()),
//! }
//! ```

use async_trait::async_trait;

use crate::domain::auth::{AccessCode, AuthError, Permission, PermissionSet};

/// Resolves access codes to granted permissions.
#[async_trait]
pub trait AuthorizationService: Send + Sync {
    /// Get every permission granted to `code`.
    async fn get_permissions(&self, code: &AccessCode) -> Result<PermissionSet, AuthError>;

    /// Returns true if `code` has been granted `permission`.
    async fn has_permission(
        &self,
        code: &AccessCode,
        permission: &Permission,
    ) -> Result<bool, AuthError> {
        Ok(self.get_permissions(code).await?.contains(permission))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::{COMMITS_READ, MOOD_READ, MOOD_WRITE};
    use std::collections::HashMap;

    /// Implements only `get_permissions`, relying on the default `has_permission`.
    struct TestAuthorizationService {
        grants: HashMap<String, PermissionSet>,
    }

    impl TestAuthorizationService {
        fn new() -> Self {
            let mut grants = HashMap::new();
            grants.insert(
                "reader".to_string(),
                vec![MOOD_READ, COMMITS_READ].into_iter().collect(),
            );
            Self { grants }
        }
    }

    #[async_trait]
    impl AuthorizationService for TestAuthorizationService {
        async fn get_permissions(&self, code: &AccessCode) -> Result<PermissionSet, AuthError> {
            self.grants
                .get(code.expose())
                .filter(|set| !set.is_empty())
                .cloned()
                .ok_or(AuthError::InvalidCode)
        }
    }

    fn code(raw: &str) -> AccessCode {
        AccessCode::parse(raw).unwrap()
    }

    #[tokio::test]
    async fn default_has_permission_checks_membership() {
        let svc = TestAuthorizationService::new();

        assert!(svc.has_permission(&code("reader"), &MOOD_READ).await.unwrap());
        assert!(!svc.has_permission(&code("reader"), &MOOD_WRITE).await.unwrap());
    }

    #[tokio::test]
    async fn default_has_permission_propagates_invalid_code() {
        let svc = TestAuthorizationService::new();

        let result = svc.has_permission(&code("nobody"), &MOOD_READ).await;

        assert!(matches!(result, Err(AuthError::InvalidCode)));
    }

    #[test]
    fn authorization_service_trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn AuthorizationService>();
    }
}
