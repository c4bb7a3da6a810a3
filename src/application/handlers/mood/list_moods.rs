//! ListMoodsHandler - Query handler for paging through recent moods.

use std::sync::Arc;

use crate::domain::foundation::PageRequest;
use crate::domain::mood::{Mood, MoodError};
use crate::ports::MoodService;

use super::storage_error;

/// Page size when the caller does not ask for one.
pub const DEFAULT_MOOD_LIMIT: usize = 10;

/// Query for a page of moods, newest first.
#[derive(Debug, Clone, Copy)]
pub struct ListMoodsQuery {
    pub page: PageRequest,
}

pub struct ListMoodsHandler {
    moods: Arc<dyn MoodService>,
}

impl ListMoodsHandler {
    pub fn new(moods: Arc<dyn MoodService>) -> Self {
        Self { moods }
    }

    pub async fn handle(&self, query: ListMoodsQuery) -> Result<Vec<Mood>, MoodError> {
        self.moods
            .list_moods(query.page.limit(), query.page.offset())
            .await
            .map_err(|e| storage_error("list_moods", e))
    }
}
