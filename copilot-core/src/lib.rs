//! # copilot-core
//!
//! Shared types for the support copilot: [`Conversation`], [`Message`], [`MessageType`],
//! the top-level [`CopilotError`], and tracing initialization. No I/O besides the log file.

pub mod error;
pub mod logger;
pub mod types;

pub use error::{CopilotError, Result};
pub use logger::init_tracing;
pub use types::{Conversation, Message, MessageType, Sender};
