//! Message repository: the host conversation adapter.
//!
//! Stands in for the host platform's data layer: creates conversations, appends messages and
//! loads a conversation with its messages for the copilot. Uses SqlitePoolManager and the
//! models (MessageRecord, NewMessage).

use crate::error::StorageError;
use crate::models::{MessageRecord, NewMessage};
use crate::sqlite_pool::SqlitePoolManager;
use chrono::Utc;
use copilot_core::{Conversation, Message};
use tracing::{debug, info};

#[derive(Clone)]
pub struct MessageRepository {
    pool_manager: SqlitePoolManager,
}

impl MessageRepository {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        Self::with_pool(pool_manager).await
    }

    pub async fn with_pool(pool_manager: SqlitePoolManager) -> Result<Self, StorageError> {
        let repo = Self { pool_manager };
        repo.init().await?;
        Ok(repo)
    }

    async fn init(&self) -> Result<(), StorageError> {
        info!("Creating conversation tables if not exist");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS conversations (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS messages (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                conversation_id INTEGER NOT NULL REFERENCES conversations(id),
                message_type TEXT NOT NULL,
                content TEXT,
                sender_name TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_messages_conversation_created ON messages(conversation_id, created_at)",
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Creates an empty conversation and returns its id.
    pub async fn create_conversation(&self) -> Result<i64, StorageError> {
        let row: (i64,) =
            sqlx::query_as("INSERT INTO conversations (created_at) VALUES (?) RETURNING id")
                .bind(Utc::now())
                .fetch_one(self.pool_manager.pool())
                .await?;

        debug!(conversation_id = row.0, "Created conversation");
        Ok(row.0)
    }

    pub async fn conversation_exists(&self, conversation_id: i64) -> Result<bool, StorageError> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT id FROM conversations WHERE id = ?")
            .bind(conversation_id)
            .fetch_optional(self.pool_manager.pool())
            .await?;
        Ok(row.is_some())
    }

    /// Appends a message and returns its id. The conversation must exist.
    pub async fn save(&self, message: &NewMessage) -> Result<i64, StorageError> {
        if !self.conversation_exists(message.conversation_id).await? {
            return Err(StorageError::NotFound(format!(
                "conversation {}",
                message.conversation_id
            )));
        }

        let row: (i64,) = sqlx::query_as(
            r#"
            INSERT INTO messages (conversation_id, message_type, content, sender_name, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(message.conversation_id)
        .bind(message.message_type.as_str())
        .bind(&message.content)
        .bind(&message.sender_name)
        .bind(message.created_at)
        .fetch_one(self.pool_manager.pool())
        .await?;

        debug!(
            message_id = row.0,
            conversation_id = message.conversation_id,
            message_type = %message.message_type,
            "Saved message"
        );
        Ok(row.0)
    }

    /// Loads the conversation with all of its messages (oldest first), or `None` if unknown.
    pub async fn find_conversation(
        &self,
        conversation_id: i64,
    ) -> Result<Option<Conversation>, StorageError> {
        if !self.conversation_exists(conversation_id).await? {
            return Ok(None);
        }

        let records: Vec<MessageRecord> = sqlx::query_as::<_, MessageRecord>(
            "SELECT * FROM messages WHERE conversation_id = ? ORDER BY created_at ASC, id ASC",
        )
        .bind(conversation_id)
        .fetch_all(self.pool_manager.pool())
        .await?;

        let messages = records
            .into_iter()
            .map(Message::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            conversation_id,
            message_count = messages.len(),
            "Loaded conversation"
        );
        Ok(Some(Conversation::new(conversation_id, messages)))
    }

    pub async fn count_messages(&self, conversation_id: i64) -> Result<i64, StorageError> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM messages WHERE conversation_id = ?")
                .bind(conversation_id)
                .fetch_one(self.pool_manager.pool())
                .await?;
        Ok(count.0)
    }
}
