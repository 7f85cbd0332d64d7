//! Per-conversation AI state record.
//!
//! Maps to the `ai_conversations` table and is used by AiConversationRepository.
//! One row per conversation at most (unique `conversation_id`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct AiConversationRecord {
    pub id: i64,
    pub conversation_id: i64,
    pub ai_enabled: bool,
    /// Opaque settings map; `{}` until someone stores something.
    pub ai_config: Json<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AiConversationRecord {
    pub fn config(&self) -> &serde_json::Value {
        &self.ai_config.0
    }
}
