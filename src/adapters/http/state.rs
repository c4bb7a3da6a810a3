//! Shared application state.

use std::sync::Arc;

use serde::Serialize;

use crate::application::{CreateMoodHandler, GetMoodHandler, ListMoodsHandler, RecentCommitsHandler};
use crate::ports::{AuthorizationService, CommitSource, MoodService, ServiceProvider};

/// Static facts about the running service.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub environment: String,
}

impl ServiceInfo {
    /// Info for this build, tagged with `environment`.
    pub fn current(environment: impl Into<String>) -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: environment.into(),
        }
    }
}

/// State shared by every route.
///
/// Cloned per request; every dependency is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub moods: Arc<dyn MoodService>,
    pub auth: Arc<dyn AuthorizationService>,
    pub commits: Arc<dyn CommitSource>,
    pub info: ServiceInfo,
}

impl AppState {
    pub fn new<P>(
        provider: Arc<P>,
        auth: Arc<dyn AuthorizationService>,
        commits: Arc<dyn CommitSource>,
        info: ServiceInfo,
    ) -> Self
    where
        P: ServiceProvider + 'static,
    {
        Self {
            moods: provider,
            auth,
            commits,
            info,
        }
    }

    pub fn list_moods_handler(&self) -> ListMoodsHandler {
        ListMoodsHandler::new(self.moods.clone())
    }

    pub fn get_mood_handler(&self) -> GetMoodHandler {
        GetMoodHandler::new(self.moods.clone())
    }

    pub fn create_mood_handler(&self) -> CreateMoodHandler {
        CreateMoodHandler::new(self.moods.clone())
    }

    pub fn recent_commits_handler(&self) -> RecentCommitsHandler {
        RecentCommitsHandler::new(self.commits.clone())
    }
}
