//! Core types: conversation, message, sender and message type.
//!
//! These mirror the host platform's entities. The copilot only reads them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Who wrote a message (customer or agent). Only the display name reaches the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sender {
    pub name: String,
}

impl Sender {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Message type as stored by the host. Only `Incoming` and `Outgoing` are conversation turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    /// Written by the customer.
    Incoming,
    /// Written by a support agent.
    Outgoing,
    /// System activity (assignment, status change).
    Activity,
    /// Canned template message.
    Template,
}

impl MessageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::Incoming => "incoming",
            MessageType::Outgoing => "outgoing",
            MessageType::Activity => "activity",
            MessageType::Template => "template",
        }
    }

    /// True for customer and agent turns.
    pub fn is_conversational(&self) -> bool {
        matches!(self, MessageType::Incoming | MessageType::Outgoing)
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "incoming" => Ok(MessageType::Incoming),
            "outgoing" => Ok(MessageType::Outgoing),
            "activity" => Ok(MessageType::Activity),
            "template" => Ok(MessageType::Template),
            other => Err(format!("unknown message type: {}", other)),
        }
    }
}

/// A single message of a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub conversation_id: i64,
    pub message_type: MessageType,
    /// Host allows null content (attachments, activities).
    pub content: Option<String>,
    pub sender: Sender,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Content if present and not the empty string.
    pub fn non_empty_content(&self) -> Option<&str> {
        self.content.as_deref().filter(|c| !c.is_empty())
    }
}

/// A support conversation with its messages, in whatever order the host returned them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: i64,
    pub messages: Vec<Message>,
}

impl Conversation {
    pub fn new(id: i64, messages: Vec<Message>) -> Self {
        Self { id, messages }
    }

    pub fn has_messages(&self) -> bool {
        !self.messages.is_empty()
    }
}
