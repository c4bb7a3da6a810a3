//! Authorization configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Where access-code grants come from and how long lookups may take.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// YAML grants file. Without one, every access code is rejected.
    pub grants_path: Option<PathBuf>,

    /// Deadline for a single authorization lookup, in milliseconds
    #[serde(default = "default_lookup_timeout")]
    pub lookup_timeout_ms: u64,
}

impl AuthConfig {
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.lookup_timeout_ms)
    }

    /// Production deployments must name a grants file.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.lookup_timeout_ms == 0 || self.lookup_timeout_ms > 60_000 {
            return Err(ValidationError::InvalidLookupTimeout);
        }
        if *environment == Environment::Production && self.grants_path.is_none() {
            return Err(ValidationError::MissingRequired("AUTH__GRANTS_PATH"));
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            grants_path: None,
            lookup_timeout_ms: default_lookup_timeout(),
        }
    }
}

fn default_lookup_timeout() -> u64 {
    2_000
}
