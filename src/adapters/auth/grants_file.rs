//! YAML grant table loader.
//!
//! ```yaml
//! - code: "s3cret"
//!   permissions: ["mood:read", "mood:write"]
//! - code: "guest"
//!   permissions: ["commits:read"]
//!   expires_at: "2030-01-01T00:00:00Z"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::auth::Permission;
use crate::domain::foundation::Timestamp;

use super::in_memory::{Grant, InMemoryAuthorizationService};

/// Errors raised while loading a grants file.
#[derive(Debug, Error)]
pub enum GrantsFileError {
    #[error("failed to read grants file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse grants file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("grant #{index} has an empty code")]
    EmptyCode { index: usize },
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct GrantEntry {
    code: String,
    permissions: Vec<Permission>,
    #[serde(default)]
    expires_at: Option<Timestamp>,
}

/// A parsed grant table, ready to seed an [`InMemoryAuthorizationService`].
pub struct GrantsFile {
    entries: Vec<GrantEntry>,
}

impl GrantsFile {
    /// Reads and parses a grants file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GrantsFileError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| GrantsFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw)
    }

    /// Parses a grants document.
    pub fn parse(raw: &str) -> Result<Self, GrantsFileError> {
        let entries: Vec<GrantEntry> = if raw.trim().is_empty() {
            Vec::new()
        } else {
            serde_yaml::from_str(raw)?
        };

        if let Some(index) = entries.iter().position(|e| e.code.trim().is_empty()) {
            return Err(GrantsFileError::EmptyCode { index });
        }

        Ok(Self { entries })
    }

    /// Number of grants in the file.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Builds an authorization service holding every grant.
    ///
    /// A code listed twice keeps its last entry.
    pub fn into_service(self) -> InMemoryAuthorizationService {
        let service = InMemoryAuthorizationService::new();
        for entry in self.entries {
            let mut grant = Grant::new(entry.permissions);
            if let Some(expires_at) = entry.expires_at {
                grant = grant.expiring_at(expires_at);
            }
            service.grant(&entry.code, grant);
        }
        service
    }
}

impl std::fmt::Debug for GrantsFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrantsFile")
            .field("grants", &self.entries.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::{AccessCode, AuthError, COMMITS_READ, MOOD_READ, MOOD_WRITE};
    use crate::ports::AuthorizationService;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"
- code: "s3cret"
  permissions: ["mood:read", "mood:write"]
- code: "guest"
  permissions: ["commits:read"]
  expires_at: "2001-01-01T00:00:00Z"
"#;

    #[test]
    fn parses_grants() {
        let file = GrantsFile::parse(SAMPLE).unwrap();
        assert_eq!(file.len(), 2);
    }

    #[test]
    fn blank_document_has_no_grants() {
        let file = GrantsFile::parse("  \n").unwrap();
        assert!(file.is_empty());
    }

    #[test]
    fn rejects_empty_code() {
        let raw = "- code: \" \"\n  permissions: [\"mood:read\"]\n";
        let err = GrantsFile::parse(raw).unwrap_err();
        assert!(matches!(err, GrantsFileError::EmptyCode { index: 0 }));
    }

    #[test]
    fn rejects_blank_permission() {
        let raw = "- code: abc\n  permissions: [\"\"]\n";
        assert!(matches!(
            GrantsFile::parse(raw),
            Err(GrantsFileError::Parse(_))
        ));
    }

    #[test]
    fn rejects_unknown_fields() {
        let raw = "- code: abc\n  permissions: []\n  role: admin\n";
        assert!(GrantsFile::parse(raw).is_err());
    }

    #[tokio::test]
    async fn loads_from_disk_into_service() {
        let mut tmp = NamedTempFile::new().unwrap();
        tmp.write_all(SAMPLE.as_bytes()).unwrap();

        let auth = GrantsFile::load(tmp.path()).unwrap().into_service();
        let code = AccessCode::parse("s3cret").unwrap();

        assert_eq!(auth.grant_count(), 2);
        assert!(auth.has_permission(&code, &MOOD_READ).await.unwrap());
        assert!(auth.has_permission(&code, &MOOD_WRITE).await.unwrap());
        assert!(!auth.has_permission(&code, &COMMITS_READ).await.unwrap());
    }

    #[tokio::test]
    async fn expired_entries_are_loaded_but_not_honoured() {
        let auth = GrantsFile::parse(SAMPLE).unwrap().into_service();
        let guest = AccessCode::parse("guest").unwrap();

        assert!(matches!(
            auth.get_permissions(&guest).await,
            Err(AuthError::InvalidCode)
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = GrantsFile::load("/definitely/not/here.yaml").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.yaml"));
    }
}
