//! In-memory commit source.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::git::Commit;
use crate::ports::{CommitSource, ProviderError};

/// Commit source over a fixed, replaceable list.
#[derive(Debug, Default)]
pub struct InMemoryCommitSource {
    commits: RwLock<Vec<Commit>>,
}

impl InMemoryCommitSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source seeded with `commits`.
    pub fn with_commits(commits: impl IntoIterator<Item = Commit>) -> Self {
        let source = Self::new();
        source.replace(commits);
        source
    }

    /// Replaces the stored commits.
    pub fn replace(&self, commits: impl IntoIterator<Item = Commit>) {
        let mut commits: Vec<Commit> = commits.into_iter().collect();
        commits.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        *self.commits.write().unwrap_or_else(PoisonError::into_inner) = commits;
    }
}

#[async_trait]
impl CommitSource for InMemoryCommitSource {
    async fn recent_commits(&self, limit: usize) -> Result<Vec<Commit>, ProviderError> {
        let commits = self.commits.read().unwrap_or_else(PoisonError::into_inner);
        Ok(commits.iter().take(limit).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use crate::domain::git::{CommitAuthor, Repo};
    use chrono::Duration;

    fn commit(sha: &str, minutes_ago: i64) -> Commit {
        let at = Timestamp::now().plus(Duration::minutes(-minutes_ago));
        Commit {
            sha: sha.to_string(),
            author: CommitAuthor {
                name: "Dev".to_string(),
                email: "dev@example.com".to_string(),
                date: at,
            },
            committer: None,
            message: format!("commit {}", sha),
            url: format!("https://example.com/c/{}", sha),
            repo: Repo {
                name: "api".to_string(),
                url: "https://example.com/api".to_string(),
            },
            timestamp: at,
        }
    }

    #[tokio::test]
    async fn returns_newest_first_up_to_limit() {
        let source = InMemoryCommitSource::with_commits([
            commit("old", 60),
            commit("new", 1),
            commit("mid", 30),
        ]);

        let recent = source.recent_commits(2).await.unwrap();

        let shas: Vec<&str> = recent.iter().map(|c| c.sha.as_str()).collect();
        assert_eq!(shas, vec!["new", "mid"]);
    }

    #[tokio::test]
    async fn empty_source_returns_nothing() {
        let source = InMemoryCommitSource::new();
        assert!(source.recent_commits(10).await.unwrap().is_empty());
    }
}
