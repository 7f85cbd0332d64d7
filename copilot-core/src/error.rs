//! Error types for the copilot core.
//!
//! [`CopilotError`] is the top-level error used by the server and CLI.

use thiserror::Error;

/// Top-level error (database, config, model, missing conversation).
#[derive(Error, Debug)]
pub enum CopilotError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Model error: {0}")]
    Model(String),

    #[error("Conversation not found: {0}")]
    ConversationNotFound(i64),
}

/// Result type for core operations; uses [`CopilotError`].
pub type Result<T> = std::result::Result<T, CopilotError>;
