//! [`LlmClient`] backed by the Responses API through `openai-client`.

use anyhow::Result;
use async_trait::async_trait;
use openai_client::OpenAIClient;
use prompt::ChatMessage;
use tracing::instrument;

use crate::config::{LlmConfig, DEFAULT_MODEL};
use crate::{to_responses_request, LlmClient};

/// Responses API implementation of [`LlmClient`]. Cheap to clone.
#[derive(Clone, Debug)]
pub struct OpenAILlmClient {
    client: OpenAIClient,
    model: String,
}

impl OpenAILlmClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: OpenAIClient::new(api_key),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: OpenAIClient::with_base_url(api_key, base_url),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Builds the client from a resolved configuration (key, endpoint, model).
    pub fn from_config(config: &impl LlmConfig) -> Self {
        Self::with_base_url(config.api_key().to_string(), config.base_url().to_string())
            .with_model(config.model().to_string())
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl LlmClient for OpenAILlmClient {
    #[instrument(skip(self, messages), fields(model = %self.model, message_count = messages.len()))]
    async fn get_llm_response_with_messages(&self, messages: Vec<ChatMessage>) -> Result<String> {
        let request = to_responses_request(&self.model, &messages);
        let text = self.client.create_response(&request).await?;
        Ok(text)
    }
}
