//! # Prompt
//!
//! Turns a conversation's context window into the ordered message list sent to the model.
//!
//! ## Format
//!
//! - **System** (exactly one, first): the instructional template followed by
//!   `Custom prompt: {custom_prompt}`
//! - **Context**: one message per [`ContextEntry`], role and content passed through unchanged
//!
//! ## Usage
//!
//! Used by `copilot-ai` after building the context window. The template is data, see
//! [`SystemPrompt`]; the bundled default can be replaced at startup from a file.
//!
//! ## External interactions
//!
//! - **Filesystem**: [`SystemPrompt::from_file`] reads a replacement template.

mod template;

pub use template::{SystemPrompt, CUSTOM_PROMPT_LABEL, DEFAULT_SYSTEM_PROMPT};

/// Role of a message, one-to-one with the API's role names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    /// System instruction (`"system"`).
    System,
    /// Customer turn (`"user"`).
    User,
    /// Agent turn (`"assistant"`).
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

/// A single prompt message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// One formatted message of the context window. Built fresh per request, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextEntry {
    /// `User` for customer messages, `Assistant` for agent messages.
    pub role: MessageRole,
    /// Text as the model should see it (customer turns carry a `"{sender}: "` prefix).
    pub content: String,
    pub sender_name: String,
    /// ISO-8601 creation time.
    pub timestamp: String,
}

/// Builds the prompt: system template + custom instruction, then the context window.
#[derive(Debug, Clone, Default)]
pub struct PromptAssembler {
    system_prompt: SystemPrompt,
}

impl PromptAssembler {
    pub fn new(system_prompt: SystemPrompt) -> Self {
        Self { system_prompt }
    }

    pub fn system_prompt(&self) -> &SystemPrompt {
        &self.system_prompt
    }

    /// Returns one system message followed by one message per context entry, in order.
    ///
    /// No validation: an empty context yields just the system message.
    pub fn assemble(&self, context: &[ContextEntry], custom_prompt: &str) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(context.len() + 1);
        messages.push(ChatMessage::system(self.system_prompt.render(custom_prompt)));
        messages.extend(context.iter().map(|entry| ChatMessage {
            role: entry.role,
            content: entry.content.clone(),
        }));
        messages
    }
}
