//! Shared application state: repositories and the response generator, built once from config.

use anyhow::{Context, Result};
use copilot_ai::{ContextBuilder, ResponseGenerator};
use llm_client::{LlmClient, OpenAILlmClient};
use prompt::{PromptAssembler, SystemPrompt};
use std::sync::Arc;
use storage::{AiConversationRepository, MessageRepository, SqlitePoolManager};
use tracing::info;

use crate::config::ServerConfig;

/// Handed to every route. Cheap to clone; repositories share one SQLite pool.
#[derive(Clone)]
pub struct AppState {
    pub messages: MessageRepository,
    pub ai_state: AiConversationRepository,
    pub generator: ResponseGenerator,
}

impl AppState {
    /// Opens the database, creates tables and wires the model client from config.
    pub async fn from_config(config: &ServerConfig) -> Result<Self> {
        let system_prompt = match &config.system_prompt_path {
            Some(path) => {
                info!(path = %path, "Loading system prompt from file");
                SystemPrompt::from_file(path)
                    .with_context(|| format!("Failed to read SYSTEM_PROMPT_PATH: {}", path))?
            }
            None => SystemPrompt::default(),
        };

        let llm: Arc<dyn LlmClient> = Arc::new(OpenAILlmClient::from_config(&config.llm));
        let generator = ResponseGenerator::new(llm)
            .with_context_builder(
                ContextBuilder::new().with_max_messages(config.context_max_messages),
            )
            .with_assembler(PromptAssembler::new(system_prompt));

        Self::open(&config.database_url, generator).await
    }

    /// Opens the database at `database_url` with an already built generator.
    pub async fn open(database_url: &str, generator: ResponseGenerator) -> Result<Self> {
        let pool = SqlitePoolManager::new(database_url)
            .await
            .with_context(|| format!("Failed to open database: {}", database_url))?;
        let messages = MessageRepository::with_pool(pool.clone()).await?;
        let ai_state = AiConversationRepository::with_pool(pool).await?;

        Ok(Self {
            messages,
            ai_state,
            generator,
        })
    }
}
