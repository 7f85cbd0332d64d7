//! # OpenAI Responses API client
//!
//! Thin reqwest wrapper around `POST {base_url}/responses`: one request, no retries, no
//! streaming. Provides token masking for safe logging and typed [`ApiError`]s.

use std::fmt;
use std::time::Instant;

mod error;
mod response;

pub use error::ApiError;
pub use response::{extract_output_text, ResponsesRequest, UNKNOWN_API_ERROR};

use response::api_error_message;

/// Public OpenAI endpoint used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Masks an API key/token for safe logging: shows first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the key.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 11 {
        return "***".to_string();
    }
    let head: String = chars[..7].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}***{}", head, tail)
}

/// Responses API client. Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct OpenAIClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl fmt::Debug for OpenAIClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAIClient")
            .field("api_key", &mask_token(&self.api_key))
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl OpenAIClient {
    /// Builds a client for the public endpoint.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Builds a client with a custom base URL (proxies or compatible endpoints). A trailing `/`
    /// is dropped so `{base_url}/responses` never doubles it.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self::with_http_client(reqwest::Client::new(), api_key, base_url)
    }

    /// Builds a client around an existing reqwest client (custom timeouts, proxies).
    pub fn with_http_client(http: reqwest::Client, api_key: String, base_url: String) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            http,
            api_key,
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn responses_url(&self) -> String {
        format!("{}/responses", self.base_url)
    }

    /// Sends one `POST /responses` and returns the generated text.
    ///
    /// Logs masked API key, model and timing. Non-2xx, transport failures, API-reported errors
    /// and bodies without output text all come back as [`ApiError`].
    pub async fn create_response(&self, request: &ResponsesRequest) -> Result<String, ApiError> {
        let url = self.responses_url();

        tracing::info!(
            url = %url,
            model = %request.model,
            input_chars = request.input.len(),
            has_instructions = request.instructions.is_some(),
            api_key = %mask_token(&self.api_key),
            "OpenAI responses request"
        );
        if let Ok(json) = serde_json::to_string(request) {
            tracing::debug!(request_json = %json, "OpenAI responses request JSON");
        }

        let started = Instant::now();
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "OpenAI responses transport error");
                ApiError::from(e)
            })?;

        let status = response.status();
        let body = response.text().await?;
        tracing::info!(
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "OpenAI responses reply"
        );
        tracing::debug!(body = %body, "OpenAI responses body");

        let parsed: Result<serde_json::Value, _> = serde_json::from_str(&body);

        if !status.is_success() {
            let message = parsed
                .ok()
                .as_ref()
                .and_then(api_error_message)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown").to_string());
            tracing::error!(status = status.as_u16(), message = %message, "OpenAI responses HTTP error");
            return Err(ApiError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let value = parsed.map_err(|e| ApiError::InvalidBody(e.to_string()))?;
        extract_output_text(&value).map_err(|e| {
            tracing::error!(error = %e, "OpenAI responses body without usable output");
            e
        })
    }
}
