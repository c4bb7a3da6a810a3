//! PostgreSQL mood provider.
//!
//! The connection pool is created by `open` and released by `close`. With
//! `run_migrations` enabled, `open` also bootstraps the `moods` table; if
//! that fails the fresh pool is closed before the error is returned.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPool, PgPoolOptions};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::DatabaseConfig;
use crate::domain::foundation::{MoodId, Timestamp};
use crate::domain::mood::Mood;
use crate::ports::{Lifecycle, MoodService, ProviderError};

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS moods (
        id          UUID PRIMARY KEY,
        ext_id      BIGINT NOT NULL,
        moods       TEXT[] NOT NULL,
        valence     INTEGER NOT NULL,
        context     TEXT[] NOT NULL DEFAULT '{}',
        reason      TEXT NOT NULL DEFAULT '',
        timestamp   TIMESTAMPTZ NOT NULL
    )
"#;

const CREATE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS moods_timestamp_idx ON moods (timestamp DESC, ext_id DESC)";

const INSERT_MOOD: &str = r#"
    INSERT INTO moods (id, ext_id, moods, valence, context, reason, timestamp)
    VALUES ($1, $2, $3, $4, $5, $6, $7)
"#;

/// Service provider backed by PostgreSQL.
pub struct PostgresMoodProvider {
    config: DatabaseConfig,
    pool: RwLock<Option<PgPool>>,
}

impl PostgresMoodProvider {
    /// Creates a closed provider. No connection is made until `open`.
    pub fn new(config: DatabaseConfig) -> Self {
        Self {
            config,
            pool: RwLock::new(None),
        }
    }

    /// Returns true if a pool is held.
    pub async fn is_open(&self) -> bool {
        self.pool.read().await.is_some()
    }

    async fn pool(&self) -> Result<PgPool, ProviderError> {
        self.pool.read().await.clone().ok_or(ProviderError::NotOpen)
    }

    async fn bootstrap(pool: &PgPool) -> Result<(), sqlx::Error> {
        sqlx::query(CREATE_TABLE).execute(pool).await?;
        sqlx::query(CREATE_INDEX).execute(pool).await?;
        Ok(())
    }
}

/// Database row representation of a mood.
#[derive(Debug, sqlx::FromRow)]
struct MoodRow {
    id: Uuid,
    ext_id: i64,
    moods: Vec<String>,
    valence: i32,
    context: Vec<String>,
    reason: String,
    timestamp: DateTime<Utc>,
}

impl From<MoodRow> for Mood {
    fn from(row: MoodRow) -> Self {
        Mood {
            id: MoodId::from_uuid(row.id),
            ext_id: row.ext_id,
            moods: row.moods,
            valence: row.valence,
            context: row.context,
            reason: row.reason,
            timestamp: Timestamp::from_datetime(row.timestamp),
        }
    }
}

#[async_trait]
impl Lifecycle for PostgresMoodProvider {
    async fn open(&self) -> Result<(), ProviderError> {
        let mut slot = self.pool.write().await;
        if slot.is_some() {
            return Ok(());
        }

        let pool = PgPoolOptions::new()
            .min_connections(self.config.min_connections)
            .max_connections(self.config.max_connections)
            .acquire_timeout(self.config.acquire_timeout())
            .idle_timeout(Some(self.config.idle_timeout()))
            .connect(&self.config.url)
            .await
            .map_err(|e| ProviderError::connection("connecting to postgres", e))?;

        if self.config.run_migrations {
            if let Err(e) = Self::bootstrap(&pool).await {
                pool.close().await;
                return Err(ProviderError::connection("bootstrapping mood schema", e));
            }
            tracing::info!("mood schema ready");
        }

        tracing::info!(
            max_connections = self.config.max_connections,
            "postgres mood provider opened"
        );
        *slot = Some(pool);
        Ok(())
    }

    async fn close(&self) -> Result<(), ProviderError> {
        let pool = self.pool.write().await.take();
        if let Some(pool) = pool {
            pool.close().await;
            tracing::info!("postgres mood provider closed");
        }
        Ok(())
    }
}

#[async_trait]
impl MoodService for PostgresMoodProvider {
    async fn get_mood(&self, id: &MoodId) -> Result<Option<Mood>, ProviderError> {
        let pool = self.pool().await?;
        let row: Option<MoodRow> = sqlx::query_as(
            r#"
            SELECT id, ext_id, moods, valence, context, reason, timestamp
            FROM moods
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&pool)
        .await
        .map_err(|e| ProviderError::query("fetching mood", e))?;

        Ok(row.map(Mood::from))
    }

    async fn list_moods(&self, limit: usize, offset: usize) -> Result<Vec<Mood>, ProviderError> {
        let pool = self.pool().await?;
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let offset = i64::try_from(offset).unwrap_or(i64::MAX);

        let rows: Vec<MoodRow> = sqlx::query_as(
            r#"
            SELECT id, ext_id, moods, valence, context, reason, timestamp
            FROM moods
            ORDER BY timestamp DESC, ext_id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&pool)
        .await
        .map_err(|e| ProviderError::query("listing moods", e))?;

        Ok(rows.into_iter().map(Mood::from).collect())
    }

    async fn create_mood(&self, mood: &Mood) -> Result<(), ProviderError> {
        let pool = self.pool().await?;
        sqlx::query(INSERT_MOOD)
            .bind(mood.id.as_uuid())
            .bind(mood.ext_id)
            .bind(&mood.moods)
            .bind(mood.valence)
            .bind(&mood.context)
            .bind(&mood.reason)
            .bind(mood.timestamp.as_datetime())
            .execute(&pool)
            .await
            .map_err(|e| ProviderError::query("inserting mood", e))?;
        Ok(())
    }

    async fn create_moods(&self, moods: &[Mood]) -> Result<(), ProviderError> {
        let pool = self.pool().await?;
        let mut tx = pool
            .begin()
            .await
            .map_err(|e| ProviderError::query("starting transaction", e))?;

        for mood in moods {
            sqlx::query(INSERT_MOOD)
                .bind(mood.id.as_uuid())
                .bind(mood.ext_id)
                .bind(&mood.moods)
                .bind(mood.valence)
                .bind(&mood.context)
                .bind(&mood.reason)
                .bind(mood.timestamp.as_datetime())
                .execute(&mut *tx)
                .await
                .map_err(|e| ProviderError::query("inserting moods", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| ProviderError::query("committing moods", e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> PostgresMoodProvider {
        PostgresMoodProvider::new(DatabaseConfig {
            url: "postgres://localhost:1/unused".to_string(),
            ..DatabaseConfig::default()
        })
    }

    #[tokio::test]
    async fn close_without_open_succeeds() {
        let provider = provider();

        assert!(provider.close().await.is_ok());
        assert!(provider.close().await.is_ok());
        assert!(!provider.is_open().await);
    }

    #[tokio::test]
    async fn queries_before_open_fail_with_not_open() {
        let provider = provider();

        assert!(matches!(
            provider.get_mood(&MoodId::new()).await,
            Err(ProviderError::NotOpen)
        ));
        assert!(matches!(
            provider.list_moods(10, 0).await,
            Err(ProviderError::NotOpen)
        ));
        assert!(matches!(
            provider.create_moods(&[]).await,
            Err(ProviderError::NotOpen)
        ));
    }

    #[test]
    fn row_converts_to_mood() {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let mood = Mood::from(MoodRow {
            id,
            ext_id: 42,
            moods: vec!["happy".to_string()],
            valence: 2,
            context: vec!["work".to_string()],
            reason: "shipped".to_string(),
            timestamp: now,
        });

        assert_eq!(mood.id, MoodId::from_uuid(id));
        assert_eq!(mood.ext_id, 42);
        assert_eq!(mood.reason, "shipped");
        assert_eq!(mood.timestamp.as_datetime(), &now);
    }
}
