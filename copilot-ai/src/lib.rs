//! # copilot-ai
//!
//! Drafts an agent reply for a support conversation.
//!
//! - [`ContextBuilder`]: picks the most recent customer/agent messages and formats them as
//!   role-tagged [`prompt::ContextEntry`] values.
//! - [`ResponseGenerator`]: checks preconditions, assembles the prompt, calls the model
//!   through [`llm_client::LlmClient`] and folds every failure into a [`GenerationError`].

mod context_builder;
mod error;
mod response_generator;

#[cfg(test)]
mod context_builder_test;

pub use context_builder::{ContextBuilder, DEFAULT_MAX_MESSAGES};
pub use error::GenerationError;
pub use response_generator::ResponseGenerator;
