//! GetMoodHandler - Query handler for a single mood.

use std::sync::Arc;

use crate::domain::foundation::MoodId;
use crate::domain::mood::{Mood, MoodError};
use crate::ports::MoodService;

use super::storage_error;

#[derive(Debug, Clone, Copy)]
pub struct GetMoodQuery {
    pub id: MoodId,
}

/// Fetches one mood, failing with `NotFound` if it doesn't exist.
pub struct GetMoodHandler {
    moods: Arc<dyn MoodService>,
}

impl GetMoodHandler {
    pub fn new(moods: Arc<dyn MoodService>) -> Self {
        Self { moods }
    }

    pub async fn handle(&self, query: GetMoodQuery) -> Result<Mood, MoodError> {
        self.moods
            .get_mood(&query.id)
            .await
            .map_err(|e| storage_error("get_mood", e))?
            .ok_or(MoodError::NotFound(query.id))
    }
}
