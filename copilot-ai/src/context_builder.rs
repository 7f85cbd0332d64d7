//! Context window: the newest customer/agent messages of a conversation, oldest first.

use copilot_core::{Conversation, Message, MessageType};
use prompt::{ContextEntry, MessageRole};
use std::cmp::Reverse;

/// Messages kept in the context window when no size is configured.
pub const DEFAULT_MAX_MESSAGES: usize = 15;

/// Builds the context window for a conversation. Pure; reads nothing but its input.
#[derive(Debug, Clone)]
pub struct ContextBuilder {
    pub(crate) max_messages: usize,
}

impl Default for ContextBuilder {
    fn default() -> Self {
        Self {
            max_messages: DEFAULT_MAX_MESSAGES,
        }
    }
}

impl ContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window size.
    pub fn with_max_messages(mut self, max_messages: usize) -> Self {
        self.max_messages = max_messages;
        self
    }

    pub fn max_messages(&self) -> usize {
        self.max_messages
    }

    /// Returns up to `max_messages` entries in chronological order.
    ///
    /// Only incoming and outgoing messages with non-empty content qualify. The newest are
    /// taken (creation time, then id, descending) and reversed. Content is trimmed after
    /// selection; customer turns are prefixed with the sender's name.
    pub fn build_context(&self, conversation: &Conversation) -> Vec<ContextEntry> {
        let mut selected: Vec<&Message> = conversation
            .messages
            .iter()
            .filter(|m| m.message_type.is_conversational() && m.non_empty_content().is_some())
            .collect();

        selected.sort_by_key(|m| Reverse((m.created_at, m.id)));
        selected.truncate(self.max_messages);
        selected.reverse();

        selected.into_iter().filter_map(to_entry).collect()
    }
}

fn to_entry(message: &Message) -> Option<ContextEntry> {
    let content = message.non_empty_content()?.trim();
    let (role, content) = match message.message_type {
        MessageType::Incoming => (
            MessageRole::User,
            format!("{}: {}", message.sender.name, content),
        ),
        MessageType::Outgoing => (MessageRole::Assistant, content.to_string()),
        MessageType::Activity | MessageType::Template => return None,
    };

    Some(ContextEntry {
        role,
        content,
        sender_name: message.sender.name.clone(),
        timestamp: message.created_at.to_rfc3339(),
    })
}
