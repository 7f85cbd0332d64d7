//! AI state repository: the per-conversation enable/disable flag and its config blob.
//!
//! One row per conversation, created lazily by the first `enable`. `disable` never creates a
//! row, so a conversation without a row reads as disabled.

use crate::error::StorageError;
use crate::models::AiConversationRecord;
use crate::sqlite_pool::SqlitePoolManager;
use chrono::Utc;
use sqlx::types::Json;
use tracing::{debug, info};

#[derive(Clone)]
pub struct AiConversationRepository {
    pub(crate) pool_manager: SqlitePoolManager,
}

impl AiConversationRepository {
    /// Opens its own pool on `database_url` and creates the table if missing.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        Self::with_pool(pool_manager).await
    }

    /// Uses an existing pool (shared with other repositories) and creates the table if missing.
    pub async fn with_pool(pool_manager: SqlitePoolManager) -> Result<Self, StorageError> {
        let repo = Self { pool_manager };
        repo.init().await?;
        Ok(repo)
    }

    async fn init(&self) -> Result<(), StorageError> {
        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS ai_conversations (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                conversation_id INTEGER NOT NULL UNIQUE,
                ai_enabled BOOLEAN NOT NULL DEFAULT 0,
                ai_config TEXT NOT NULL DEFAULT '{}',
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_ai_conversations_on_ai_enabled ON ai_conversations(ai_enabled)",
        )
        .execute(pool)
        .await?;

        debug!("ai_conversations table ready");
        Ok(())
    }

    /// Turns AI on for the conversation, creating the row on first use. Idempotent.
    pub async fn enable(&self, conversation_id: i64) -> Result<AiConversationRecord, StorageError> {
        let now = Utc::now();
        let record = sqlx::query_as::<_, AiConversationRecord>(
            r#"
            INSERT INTO ai_conversations (conversation_id, ai_enabled, ai_config, created_at, updated_at)
            VALUES (?, 1, '{}', ?, ?)
            ON CONFLICT(conversation_id) DO UPDATE SET
                ai_enabled = 1,
                updated_at = excluded.updated_at
            RETURNING *
            "#,
        )
        .bind(conversation_id)
        .bind(now)
        .bind(now)
        .fetch_one(self.pool_manager.pool())
        .await?;

        info!(conversation_id, "AI enabled for conversation");
        Ok(record)
    }

    /// Turns AI off. Returns false (and changes nothing) when the conversation has no row.
    pub async fn disable(&self, conversation_id: i64) -> Result<bool, StorageError> {
        let result = sqlx::query(
            "UPDATE ai_conversations SET ai_enabled = 0, updated_at = ? WHERE conversation_id = ?",
        )
        .bind(Utc::now())
        .bind(conversation_id)
        .execute(self.pool_manager.pool())
        .await?;

        let existed = result.rows_affected() > 0;
        if existed {
            info!(conversation_id, "AI disabled for conversation");
        } else {
            debug!(conversation_id, "disable: no AI state for conversation, nothing to do");
        }
        Ok(existed)
    }

    pub async fn is_enabled(&self, conversation_id: i64) -> Result<bool, StorageError> {
        let enabled: Option<(bool,)> =
            sqlx::query_as("SELECT ai_enabled FROM ai_conversations WHERE conversation_id = ?")
                .bind(conversation_id)
                .fetch_optional(self.pool_manager.pool())
                .await?;

        Ok(enabled.map(|row| row.0).unwrap_or(false))
    }

    pub async fn find(
        &self,
        conversation_id: i64,
    ) -> Result<Option<AiConversationRecord>, StorageError> {
        let record = sqlx::query_as::<_, AiConversationRecord>(
            "SELECT * FROM ai_conversations WHERE conversation_id = ?",
        )
        .bind(conversation_id)
        .fetch_optional(self.pool_manager.pool())
        .await?;

        Ok(record)
    }

    /// Replaces the config map of an existing row. The value must be a JSON object.
    pub async fn update_config(
        &self,
        conversation_id: i64,
        config: serde_json::Value,
    ) -> Result<AiConversationRecord, StorageError> {
        if !config.is_object() {
            return Err(StorageError::InvalidData(
                "ai_config must be a JSON object".to_string(),
            ));
        }

        let record = sqlx::query_as::<_, AiConversationRecord>(
            r#"
            UPDATE ai_conversations SET ai_config = ?, updated_at = ?
            WHERE conversation_id = ?
            RETURNING *
            "#,
        )
        .bind(Json(config))
        .bind(Utc::now())
        .bind(conversation_id)
        .fetch_optional(self.pool_manager.pool())
        .await?;

        record.ok_or_else(|| {
            StorageError::NotFound(format!("AI state for conversation {}", conversation_id))
        })
    }

    /// Conversation ids with AI currently enabled, ascending.
    pub async fn list_enabled(&self) -> Result<Vec<i64>, StorageError> {
        let rows: Vec<(i64,)> = sqlx::query_as(
            "SELECT conversation_id FROM ai_conversations WHERE ai_enabled = 1 ORDER BY conversation_id",
        )
        .fetch_all(self.pool_manager.pool())
        .await?;

        Ok(rows.into_iter().map(|r| r.0).collect())
    }
}
