//! CLI command handlers. `serve` runs the HTTP server; the rest act on the database directly.

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use copilot_core::{init_tracing, CopilotError, MessageType};
use storage::{AiConversationRepository, MessageRepository, NewMessage, SqlitePoolManager};
use tokio::net::TcpListener;
use tracing::info;

use crate::config::{database_url_from_env, log_file_from_env, ServerConfig};
use crate::routes::router;
use crate::state::AppState;

/// Starts the HTTP server and blocks until it stops.
pub async fn serve(bind: Option<String>) -> Result<()> {
    let config = ServerConfig::load(bind)?;
    init_tracing(&config.log_file)?;
    config.validate()?;

    info!(
        database_url = %config.database_url,
        bind_addr = %config.bind_addr,
        model = %config.llm.openai_model,
        endpoint = %config.llm.openai_endpoint,
        context_max_messages = config.context_max_messages,
        "Starting copilot server"
    );

    let state = AppState::from_config(&config).await?;
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(addr = %addr, "Listening");
    axum::serve(listener, router(state))
        .await
        .context("HTTP server error")?;
    Ok(())
}

async fn open_repositories() -> Result<(MessageRepository, AiConversationRepository)> {
    init_tracing(&log_file_from_env())?;
    let database_url = database_url_from_env();
    let pool = SqlitePoolManager::new(&database_url)
        .await
        .with_context(|| format!("Failed to open database: {}", database_url))?;
    let messages = MessageRepository::with_pool(pool.clone()).await?;
    let ai_state = AiConversationRepository::with_pool(pool).await?;
    Ok((messages, ai_state))
}

async fn ensure_conversation(messages: &MessageRepository, conversation_id: i64) -> Result<()> {
    if !messages.conversation_exists(conversation_id).await? {
        return Err(CopilotError::ConversationNotFound(conversation_id).into());
    }
    Ok(())
}

pub async fn enable(conversation_id: i64) -> Result<()> {
    let (messages, ai_state) = open_repositories().await?;
    ensure_conversation(&messages, conversation_id).await?;
    ai_state.enable(conversation_id).await?;
    println!("AI enabled for conversation {}", conversation_id);
    Ok(())
}

pub async fn disable(conversation_id: i64) -> Result<()> {
    let (messages, ai_state) = open_repositories().await?;
    ensure_conversation(&messages, conversation_id).await?;
    ai_state.disable(conversation_id).await?;
    println!("AI disabled for conversation {}", conversation_id);
    Ok(())
}

pub async fn status(conversation_id: i64) -> Result<()> {
    let (messages, ai_state) = open_repositories().await?;
    ensure_conversation(&messages, conversation_id).await?;
    let enabled = ai_state.is_enabled(conversation_id).await?;
    let message_count = messages.count_messages(conversation_id).await?;
    println!(
        "Conversation {}: AI {}, {} messages",
        conversation_id,
        if enabled { "enabled" } else { "disabled" },
        message_count
    );
    Ok(())
}

/// Drafts a reply from the command line. Ignores the AI switch, which only gates the HTTP API.
pub async fn generate(conversation_id: i64, custom_prompt: &str) -> Result<()> {
    let config = ServerConfig::load(None)?;
    init_tracing(&config.log_file)?;
    config.validate()?;

    let state = AppState::from_config(&config).await?;
    let conversation = state
        .messages
        .find_conversation(conversation_id)
        .await
        .map_err(CopilotError::from)?;
    let reply = state
        .generator
        .generate(conversation.as_ref(), custom_prompt)
        .await
        .map_err(|e| CopilotError::Model(e.to_string()))?;
    println!("{}", reply);
    Ok(())
}

/// Creates a demo conversation and enables AI on it. Prints the new conversation id.
pub async fn seed() -> Result<()> {
    let (messages, ai_state) = open_repositories().await?;
    let conversation_id = messages.create_conversation().await?;

    let start = Utc::now() - Duration::minutes(30);
    let demo = [
        NewMessage::incoming(
            conversation_id,
            "Maria",
            "Hi! I ordered a birthday cake for Saturday. Can I still change the flavour?",
        ),
        NewMessage::outgoing(
            conversation_id,
            "Lucas",
            "Hi Maria! Let me check your order, one moment please.",
        ),
        NewMessage::new(
            conversation_id,
            MessageType::Activity,
            Some("Conversation assigned to Lucas".to_string()),
            "System",
        ),
        NewMessage::incoming(
            conversation_id,
            "Maria",
            "Thanks. I'd like chocolate with strawberries instead of vanilla.",
        ),
    ];
    for (i, message) in demo.into_iter().enumerate() {
        messages
            .save(&message.at(start + Duration::minutes(i as i64 * 5)))
            .await?;
    }
    ai_state.enable(conversation_id).await?;

    info!(conversation_id, "Seeded demo conversation");
    println!("Seeded conversation {} with AI enabled", conversation_id);
    Ok(())
}
