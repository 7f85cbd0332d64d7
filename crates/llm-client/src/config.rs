//! LLM configuration: trait and env-based implementation.
//!
//! Resolved once and passed into the client at construction; nothing reads the environment
//! per request.

use openai_client::DEFAULT_BASE_URL;
use std::env;
use thiserror::Error;

/// Model used when `OPENAI_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "gpt-5";

/// Configuration problems detected at construction. Not recoverable per request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("AI OpenAI API key not configured")]
    MissingApiKey,
}

/// LLM configuration interface for Responses-API-compatible endpoints.
pub trait LlmConfig: Send + Sync {
    fn api_key(&self) -> &str;
    fn base_url(&self) -> &str;
    fn model(&self) -> &str;
}

/// LLM config loaded from `OPENAI_API_KEY`, `OPENAI_MODEL`, `OPENAI_ENDPOINT`.
#[derive(Clone, PartialEq, Eq)]
pub struct EnvLlmConfig {
    pub openai_api_key: String,
    pub openai_endpoint: String,
    pub openai_model: String,
}

impl std::fmt::Debug for EnvLlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvLlmConfig")
            .field("openai_api_key", &openai_client::mask_token(&self.openai_api_key))
            .field("openai_endpoint", &self.openai_endpoint)
            .field("openai_model", &self.openai_model)
            .finish()
    }
}

impl LlmConfig for EnvLlmConfig {
    fn api_key(&self) -> &str {
        &self.openai_api_key
    }
    fn base_url(&self) -> &str {
        &self.openai_endpoint
    }
    fn model(&self) -> &str {
        &self.openai_model
    }
}

impl EnvLlmConfig {
    /// Load from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load through an arbitrary lookup (tests, config files). Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let openai_api_key = get("OPENAI_API_KEY").ok_or(ConfigError::MissingApiKey)?;
        let openai_model = get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let openai_endpoint = get("OPENAI_ENDPOINT")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            openai_api_key,
            openai_endpoint,
            openai_model,
        })
    }
}
