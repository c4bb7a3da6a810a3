//! Git commit activity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

/// A Git commit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commit {
    pub sha: String,
    pub author: CommitAuthor,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub committer: Option<CommitAuthor>,
    pub message: String,
    pub url: String,
    pub repo: Repo,
    pub timestamp: Timestamp,
}

impl Commit {
    /// First line of the commit message.
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }
}

/// Author or committer of a commit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitAuthor {
    pub name: String,
    pub email: String,
    pub date: Timestamp,
}

/// A Git repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repo {
    pub name: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commit(message: &str) -> Commit {
        let now = Timestamp::now();
        Commit {
            sha: "abc123".to_string(),
            author: CommitAuthor {
                name: "Dev".to_string(),
                email: "dev@example.com".to_string(),
                date: now,
            },
            committer: None,
            message: message.to_string(),
            url: "https://example.com/c/abc123".to_string(),
            repo: Repo {
                name: "api".to_string(),
                url: "https://example.com/api".to_string(),
            },
            timestamp: now,
        }
    }

    #[test]
    fn summary_is_first_line() {
        assert_eq!(commit("Fix bug\n\nLonger body").summary(), "Fix bug");
        assert_eq!(commit("").summary(), "");
    }

    #[test]
    fn committer_omitted_when_absent() {
        let json = serde_json::to_value(commit("x")).unwrap();
        assert!(json.get("committer").is_none());
    }
}
