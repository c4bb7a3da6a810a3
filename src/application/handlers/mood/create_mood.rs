//! CreateMoodHandler - Command handler for recording a mood.

use std::sync::Arc;

use crate::domain::mood::{Mood, MoodError, NewMood};
use crate::ports::MoodService;

use super::storage_error;

/// Command to record a new mood.
#[derive(Debug, Clone)]
pub struct CreateMoodCommand {
    pub mood: NewMood,
}

pub struct CreateMoodHandler {
    moods: Arc<dyn MoodService>,
}

impl CreateMoodHandler {
    pub fn new(moods: Arc<dyn MoodService>) -> Self {
        Self { moods }
    }

    /// Validates and stores the mood, returning it with its assigned ID.
    pub async fn handle(&self, cmd: CreateMoodCommand) -> Result<Mood, MoodError> {
        let mood = cmd.mood.into_mood()?;

        self.moods
            .create_mood(&mood)
            .await
            .map_err(|e| storage_error("create_mood", e))?;

        tracing::info!(mood_id = %mood.id, ext_id = mood.ext_id, "mood recorded");
        Ok(mood)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mood::InMemoryMoodProvider;
    use crate::domain::foundation::ValidationError;
    use crate::ports::Lifecycle;

    fn command(valence: i32) -> CreateMoodCommand {
        CreateMoodCommand {
            mood: NewMood {
                ext_id: 9,
                moods: vec!["Excited".to_string()],
                valence,
                context: vec![],
                reason: String::new(),
                timestamp: None,
            },
        }
    }

    #[tokio::test]
    async fn stores_valid_mood() {
        let provider = Arc::new(InMemoryMoodProvider::new());
        provider.open().await.unwrap();
        let handler = CreateMoodHandler::new(provider.clone());

        let mood = handler.handle(command(3)).await.unwrap();

        assert_eq!(mood.moods, vec!["excited"]);
        assert_eq!(provider.get_mood(&mood.id).await.unwrap(), Some(mood));
    }

    #[tokio::test]
    async fn invalid_mood_is_not_stored() {
        let provider = Arc::new(InMemoryMoodProvider::new());
        provider.open().await.unwrap();
        let handler = CreateMoodHandler::new(provider.clone());

        let result = handler.handle(command(-9)).await;

        assert!(matches!(
            result,
            Err(MoodError::Validation(ValidationError::OutOfRange { .. }))
        ));
        assert_eq!(provider.mood_count().await, 0);
    }
}
