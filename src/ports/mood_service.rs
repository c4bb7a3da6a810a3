//! Mood storage port.

use async_trait::async_trait;

use crate::domain::foundation::MoodId;
use crate::domain::mood::Mood;

use super::ProviderError;

/// Stores and retrieves mood records.
///
/// Listing is newest-first (by timestamp), paged by `limit` and `offset`.
#[async_trait]
pub trait MoodService: Send + Sync {
    /// Get a mood by ID. Returns `None` if it doesn't exist.
    async fn get_mood(&self, id: &MoodId) -> Result<Option<Mood>, ProviderError>;

    /// List up to `limit` moods, skipping the newest `offset`.
    async fn list_moods(&self, limit: usize, offset: usize) -> Result<Vec<Mood>, ProviderError>;

    /// Store a single mood.
    async fn create_mood(&self, mood: &Mood) -> Result<(), ProviderError>;

    /// Store several moods at once.
    async fn create_moods(&self, moods: &[Mood]) -> Result<(), ProviderError>;
}
