//! Response generation: preconditions, context, prompt, one model call.

use copilot_core::Conversation;
use llm_client::LlmClient;
use openai_client::ApiError;
use prompt::{ChatMessage, PromptAssembler};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

use crate::context_builder::ContextBuilder;
use crate::error::GenerationError;

/// Logs the exact messages submitted to the model (role + full content) for debugging.
fn log_messages_submitted(messages: &[ChatMessage]) {
    debug!(count = messages.len(), "Messages submitted to model");
    for (i, m) in messages.iter().enumerate() {
        debug!(
            index = i,
            role = m.role.as_str(),
            content = %m.content,
            "submitted message"
        );
    }
}

/// Drafts an agent reply for a conversation.
///
/// **External interactions:** the model API through [`LlmClient`] (one call per successful
/// precondition check, none otherwise).
#[derive(Clone)]
pub struct ResponseGenerator {
    pub(crate) llm: Arc<dyn LlmClient>,
    pub(crate) context_builder: ContextBuilder,
    pub(crate) assembler: PromptAssembler,
}

impl ResponseGenerator {
    /// Uses the default context window and the bundled system prompt.
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self {
            llm,
            context_builder: ContextBuilder::default(),
            assembler: PromptAssembler::default(),
        }
    }

    pub fn with_context_builder(mut self, context_builder: ContextBuilder) -> Self {
        self.context_builder = context_builder;
        self
    }

    pub fn with_assembler(mut self, assembler: PromptAssembler) -> Self {
        self.assembler = assembler;
        self
    }

    pub fn context_builder(&self) -> &ContextBuilder {
        &self.context_builder
    }

    pub fn assembler(&self) -> &PromptAssembler {
        &self.assembler
    }

    /// Returns the drafted reply text.
    ///
    /// Preconditions, checked in order, each failing without calling the model: the
    /// conversation exists, it has at least one message, the context window is non-empty.
    /// An [`ApiError`] from the model becomes [`GenerationError::Api`] with its message; any
    /// other failure becomes [`GenerationError::Failed`] and is logged in full.
    #[instrument(skip_all, fields(conversation_id = conversation.map(|c| c.id)))]
    pub async fn generate(
        &self,
        conversation: Option<&Conversation>,
        custom_prompt: &str,
    ) -> Result<String, GenerationError> {
        let conversation = conversation.ok_or_else(|| {
            warn!("Generation requested for missing conversation");
            GenerationError::ConversationNotFound
        })?;

        if !conversation.has_messages() {
            warn!(conversation_id = conversation.id, "Conversation has no messages");
            return Err(GenerationError::NoMessages);
        }

        let context = self.context_builder.build_context(conversation);
        if context.is_empty() {
            warn!(
                conversation_id = conversation.id,
                message_count = conversation.messages.len(),
                "No qualifying messages for context"
            );
            return Err(GenerationError::NoContext);
        }

        let messages = self.assembler.assemble(&context, custom_prompt);
        log_messages_submitted(&messages);
        info!(
            conversation_id = conversation.id,
            context_len = context.len(),
            has_custom_prompt = !custom_prompt.is_empty(),
            "Requesting AI reply"
        );

        match self.llm.get_llm_response_with_messages(messages).await {
            Ok(text) => {
                info!(
                    conversation_id = conversation.id,
                    reply_len = text.len(),
                    "AI reply generated"
                );
                Ok(text)
            }
            Err(e) => match e.downcast_ref::<ApiError>() {
                Some(api_error) => {
                    error!(conversation_id = conversation.id, error = %api_error, "Model API error");
                    Err(GenerationError::Api(api_error.to_string()))
                }
                None => {
                    error!(conversation_id = conversation.id, error = ?e, "AI response generation failed");
                    Err(GenerationError::Failed)
                }
            },
        }
    }
}
