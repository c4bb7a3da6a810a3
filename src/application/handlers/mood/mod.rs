//! Mood query and command handlers.

mod create_mood;
mod get_mood;
mod list_moods;

pub use create_mood::{CreateMoodCommand, CreateMoodHandler};
pub use get_mood::{GetMoodHandler, GetMoodQuery};
pub use list_moods::{ListMoodsHandler, ListMoodsQuery, DEFAULT_MOOD_LIMIT};

use crate::domain::mood::MoodError;
use crate::ports::ProviderError;

/// Maps a provider failure to a mood error, logging the cause.
fn storage_error(operation: &'static str, err: ProviderError) -> MoodError {
    match err {
        ProviderError::NotOpen => {
            tracing::warn!(operation, "mood storage used while not open");
            MoodError::Unavailable
        }
        other => {
            tracing::error!(operation, error = ?other, "mood storage failed");
            MoodError::infrastructure(other.to_string())
        }
    }
}
