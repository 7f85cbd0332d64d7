//! Storage crate: per-conversation AI state and the host conversation adapter.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – AiConversationRecord, MessageRecord, NewMessage
//! - [`ai_conversation_repo`] – AiConversationRepository (enable/disable flag + config)
//! - [`message_repo`] – MessageRepository (conversations and messages)
//! - [`sqlite_pool`] – SqlitePoolManager

mod ai_conversation_repo;
mod error;
mod message_repo;
mod models;
mod sqlite_pool;

#[cfg(test)]
mod ai_conversation_repo_test;

pub use ai_conversation_repo::AiConversationRepository;
pub use error::StorageError;
pub use message_repo::MessageRepository;
pub use models::{AiConversationRecord, MessageRecord, NewMessage};
pub use sqlite_pool::SqlitePoolManager;
