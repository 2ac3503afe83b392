use async_trait::async_trait;
use chrono::Utc;
use sqlx::Row;

use crate::repository::{FavoritesRepository, StorageError};
use study_core::model::{Record, RecordDraft};

use super::SqliteRepository;

/// Fixed key under which the serialized favorites sequence is stored.
const FAVORITES_KEY: &str = "favorites";

#[async_trait]
impl FavoritesRepository for SqliteRepository {
    async fn load_favorites(&self) -> Result<Vec<Record>, StorageError> {
        let row = sqlx::query("SELECT value FROM kv_store WHERE key = ?1")
            .bind(FAVORITES_KEY)
            .fetch_optional(self.pool())
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(Vec::new());
        };

        let raw: String = row
            .try_get("value")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        // A corrupt stored value degrades to an empty set; the next save
        // rewrites the key with a well-formed sequence.
        let drafts: Vec<RecordDraft> = match serde_json::from_str(&raw) {
            Ok(drafts) => drafts,
            Err(err) => {
                tracing::warn!(error = %err, "stored favorites are unreadable, starting empty");
                return Ok(Vec::new());
            }
        };

        let mut records = Vec::with_capacity(drafts.len());
        for draft in drafts {
            match draft.validate() {
                Ok(record) => records.push(record),
                Err(err) => {
                    tracing::warn!(error = %err, "stored favorite failed validation, dropping it");
                }
            }
        }

        Ok(records)
    }

    async fn save_favorites(&self, records: &[Record]) -> Result<(), StorageError> {
        let value = serde_json::to_string(records)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        sqlx::query(
            r"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            ",
        )
        .bind(FAVORITES_KEY)
        .bind(value)
        .bind(Utc::now())
        .execute(self.pool())
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }
}
