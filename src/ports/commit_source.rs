//! Commit activity port.

use async_trait::async_trait;

use crate::domain::git::Commit;

use super::ProviderError;

/// Retrieves recent Git commits across projects.
#[async_trait]
pub trait CommitSource: Send + Sync {
    /// Up to `limit` commits, newest first.
    async fn recent_commits(&self, limit: usize) -> Result<Vec<Commit>, ProviderError>;
}
