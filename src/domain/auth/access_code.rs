//! Opaque access codes presented by callers.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use super::AuthError;

/// An opaque token used to look up granted permissions.
///
/// The raw value is kept behind [`SecretString`] so it never shows up in
/// `Debug` output or logs.
pub struct AccessCode(SecretString);

impl AccessCode {
    /// Parses a caller-supplied code.
    ///
    /// Surrounding whitespace is trimmed. Blank input is an
    /// [`AuthError::InvalidCode`], the same as an unknown code.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, AuthError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(AuthError::InvalidCode);
        }
        Ok(Self(SecretString::new(trimmed.to_string())))
    }

    /// Returns the raw code.
    ///
    /// Only authorization adapters should need this.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl Clone for AccessCode {
    fn clone(&self) -> Self {
        Self(SecretString::new(self.0.expose_secret().clone()))
    }
}

impl fmt::Debug for AccessCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessCode([REDACTED])")
    }
}
