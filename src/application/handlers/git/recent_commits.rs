//! RecentCommitsHandler - Query handler for recent Git activity.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, PageRequest};
use crate::domain::git::Commit;
use crate::ports::CommitSource;

/// Number of commits returned when the caller does not ask for a limit.
pub const DEFAULT_COMMIT_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy)]
pub struct RecentCommitsQuery {
    pub page: PageRequest,
}

pub struct RecentCommitsHandler {
    source: Arc<dyn CommitSource>,
}

impl RecentCommitsHandler {
    pub fn new(source: Arc<dyn CommitSource>) -> Self {
        Self { source }
    }

    pub async fn handle(&self, query: RecentCommitsQuery) -> Result<Vec<Commit>, DomainError> {
        self.source
            .recent_commits(query.page.limit())
            .await
            .map_err(|e| {
                tracing::error!(error = ?e, "failed to load recent commits");
                DomainError::new(ErrorCode::ServiceUnavailable, "Commit activity is unavailable.")
            })
    }
}
