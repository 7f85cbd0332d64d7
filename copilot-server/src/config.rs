//! Server config: database, logging, bind address, prompt and model settings. Loaded from env.

use anyhow::{Context, Result};
use copilot_ai::DEFAULT_MAX_MESSAGES;
use copilot_core::CopilotError;
use llm_client::{EnvLlmConfig, LlmConfig};
use std::env;
use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:./copilot.db";
pub const DEFAULT_LOG_FILE: &str = "logs/copilot.log";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// DATABASE_URL
    pub database_url: String,
    /// LOG_FILE
    pub log_file: String,
    /// BIND_ADDR
    pub bind_addr: String,
    /// SYSTEM_PROMPT_PATH; the bundled template is used when unset
    pub system_prompt_path: Option<String>,
    /// CONTEXT_MAX_MESSAGES
    pub context_max_messages: usize,
    /// OPENAI_API_KEY, OPENAI_MODEL, OPENAI_ENDPOINT
    pub llm: EnvLlmConfig,
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// DATABASE_URL or its default. Storage-only commands need nothing else.
pub fn database_url_from_env() -> String {
    non_empty_var("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string())
}

/// LOG_FILE or its default.
pub fn log_file_from_env() -> String {
    non_empty_var("LOG_FILE").unwrap_or_else(|| DEFAULT_LOG_FILE.to_string())
}

impl ServerConfig {
    /// Load from environment variables. `bind` overrides BIND_ADDR if provided.
    pub fn load(bind: Option<String>) -> Result<Self> {
        let llm = EnvLlmConfig::from_env().map_err(|e| CopilotError::Config(e.to_string()))?;
        let database_url = database_url_from_env();
        let log_file = log_file_from_env();
        let bind_addr = bind
            .or_else(|| non_empty_var("BIND_ADDR"))
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let system_prompt_path = non_empty_var("SYSTEM_PROMPT_PATH");
        let context_max_messages = match non_empty_var("CONTEXT_MAX_MESSAGES") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
                CopilotError::Config(format!("CONTEXT_MAX_MESSAGES is not a number: {}", raw))
            })?,
            None => DEFAULT_MAX_MESSAGES,
        };

        Ok(Self {
            database_url,
            log_file,
            bind_addr,
            system_prompt_path,
            context_max_messages,
            llm,
        })
    }

    /// Validate config: bind address, endpoint URL and window size.
    pub fn validate(&self) -> Result<()> {
        self.socket_addr()?;
        if reqwest::Url::parse(self.llm.base_url()).is_err() {
            anyhow::bail!("OPENAI_ENDPOINT is not a valid URL: {}", self.llm.base_url());
        }
        if self.context_max_messages == 0 {
            anyhow::bail!("CONTEXT_MAX_MESSAGES must be at least 1");
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_addr
            .parse()
            .with_context(|| format!("BIND_ADDR is not a valid socket address: {}", self.bind_addr))
    }
}
