//! Message record model for the host conversation adapter.
//!
//! Maps to the `messages` table and is used by MessageRepository.

use chrono::{DateTime, Utc};
use copilot_core::{Message, MessageType, Sender};
use serde::{Deserialize, Serialize};

use crate::error::StorageError;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct MessageRecord {
    pub id: i64,
    pub conversation_id: i64,
    pub message_type: String,
    pub content: Option<String>,
    pub sender_name: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<MessageRecord> for Message {
    type Error = StorageError;

    fn try_from(record: MessageRecord) -> Result<Self, Self::Error> {
        let message_type = record
            .message_type
            .parse::<MessageType>()
            .map_err(StorageError::InvalidData)?;
        Ok(Message {
            id: record.id,
            conversation_id: record.conversation_id,
            message_type,
            content: record.content,
            sender: Sender::new(record.sender_name),
            created_at: record.created_at,
        })
    }
}

/// A message to insert. `created_at` defaults to now; tests set it to control ordering.
#[derive(Debug, Clone)]
pub struct NewMessage {
    pub conversation_id: i64,
    pub message_type: MessageType,
    pub content: Option<String>,
    pub sender_name: String,
    pub created_at: DateTime<Utc>,
}

impl NewMessage {
    pub fn new(
        conversation_id: i64,
        message_type: MessageType,
        content: Option<String>,
        sender_name: impl Into<String>,
    ) -> Self {
        Self {
            conversation_id,
            message_type,
            content,
            sender_name: sender_name.into(),
            created_at: Utc::now(),
        }
    }

    pub fn incoming(conversation_id: i64, sender_name: &str, content: &str) -> Self {
        Self::new(
            conversation_id,
            MessageType::Incoming,
            Some(content.to_string()),
            sender_name,
        )
    }

    pub fn outgoing(conversation_id: i64, sender_name: &str, content: &str) -> Self {
        Self::new(
            conversation_id,
            MessageType::Outgoing,
            Some(content.to_string()),
            sender_name,
        )
    }

    pub fn at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}
