//! # LLM client abstraction
//!
//! Defines the [`LlmClient`] trait, the model configuration ([`LlmConfig`], [`EnvLlmConfig`])
//! and a Responses API implementation ([`OpenAILlmClient`]). Used by `copilot-ai`; tests
//! substitute a fake behind the trait.

use anyhow::Result;
use async_trait::async_trait;
use openai_client::ResponsesRequest;
use prompt::{ChatMessage, MessageRole};

mod config;
mod openai_llm;

pub use config::{ConfigError, EnvLlmConfig, LlmConfig, DEFAULT_MODEL};
pub use openai_llm::OpenAILlmClient;

/// LLM client interface: request one completion for an ordered list of messages.
///
/// Failures from the Responses API come back as an [`openai_client::ApiError`] inside the
/// `anyhow::Error`, so callers can downcast to tell API failures from anything else.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Returns the model reply text for the given messages (system/user/assistant).
    async fn get_llm_response_with_messages(&self, messages: Vec<ChatMessage>) -> Result<String>;
}

/// Maps prompt messages onto a Responses API request body.
///
/// The first system message becomes `instructions` (omitted when there is none); every other
/// message becomes one `"{role}: {content}"` line of `input`, in order.
pub fn to_responses_request(model: &str, messages: &[ChatMessage]) -> ResponsesRequest {
    let instructions = messages
        .iter()
        .find(|m| m.role == MessageRole::System)
        .map(|m| m.content.clone());

    let input = messages
        .iter()
        .filter(|m| m.role != MessageRole::System)
        .map(|m| format!("{}: {}", m.role.as_str(), m.content))
        .collect::<Vec<_>>()
        .join("\n");

    ResponsesRequest {
        model: model.to_string(),
        input,
        instructions,
    }
}
