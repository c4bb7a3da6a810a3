//! In-memory mood provider.
//!
//! Used when no database is configured, and in tests. Moods are kept in a
//! map behind an async `RwLock`; `open` and `close` toggle readiness but
//! keep stored moods, so a reopened provider sees its earlier data.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::MoodId;
use crate::domain::mood::Mood;
use crate::ports::{Lifecycle, MoodService, ProviderError};

#[derive(Debug, Default)]
struct State {
    open: bool,
    moods: HashMap<MoodId, Mood>,
}

impl State {
    fn ensure_open(&self) -> Result<(), ProviderError> {
        if self.open {
            Ok(())
        } else {
            Err(ProviderError::NotOpen)
        }
    }
}

/// Service provider holding moods in process memory.
#[derive(Debug, Default)]
pub struct InMemoryMoodProvider {
    state: RwLock<State>,
}

impl InMemoryMoodProvider {
    /// Creates a closed, empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a closed provider pre-loaded with `moods`.
    pub fn with_moods(moods: impl IntoIterator<Item = Mood>) -> Self {
        let moods = moods.into_iter().map(|m| (m.id, m)).collect();
        Self {
            state: RwLock::new(State { open: false, moods }),
        }
    }

    /// Returns true between a successful `open` and the next `close`.
    pub async fn is_open(&self) -> bool {
        self.state.read().await.open
    }

    /// Number of stored moods, regardless of readiness.
    pub async fn mood_count(&self) -> usize {
        self.state.read().await.moods.len()
    }
}

#[async_trait]
impl Lifecycle for InMemoryMoodProvider {
    async fn open(&self) -> Result<(), ProviderError> {
        self.state.write().await.open = true;
        tracing::debug!("in-memory mood provider opened");
        Ok(())
    }

    async fn close(&self) -> Result<(), ProviderError> {
        let mut state = self.state.write().await;
        if state.open {
            state.open = false;
            tracing::debug!("in-memory mood provider closed");
        }
        Ok(())
    }
}

#[async_trait]
impl MoodService for InMemoryMoodProvider {
    async fn get_mood(&self, id: &MoodId) -> Result<Option<Mood>, ProviderError> {
        let state = self.state.read().await;
        state.ensure_open()?;
        Ok(state.moods.get(id).cloned())
    }

    async fn list_moods(&self, limit: usize, offset: usize) -> Result<Vec<Mood>, ProviderError> {
        let state = self.state.read().await;
        state.ensure_open()?;

        let mut moods: Vec<&Mood> = state.moods.values().collect();
        moods.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.ext_id.cmp(&a.ext_id)));

        Ok(moods
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn create_mood(&self, mood: &Mood) -> Result<(), ProviderError> {
        let mut state = self.state.write().await;
        state.ensure_open()?;
        state.moods.insert(mood.id, mood.clone());
        Ok(())
    }

    async fn create_moods(&self, moods: &[Mood]) -> Result<(), ProviderError> {
        let mut state = self.state.write().await;
        state.ensure_open()?;
        for mood in moods {
            state.moods.insert(mood.id, mood.clone());
        }
        Ok(())
    }
}
