//! Errors from the Responses API call.
//!
//! Display strings are what end users eventually see, so API-reported messages are kept verbatim.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Connection, TLS or timeout failure before a response arrived.
    #[error("{0}")]
    Transport(String),

    /// Non-2xx status. `message` is the API's `error.message` when the body has one.
    #[error("HTTP Error: {status} - {message}")]
    Http { status: u16, message: String },

    /// 2xx body carrying an `error` object.
    #[error("{0}")]
    Api(String),

    /// 2xx body that is not JSON.
    #[error("Invalid response body: {0}")]
    InvalidBody(String),

    #[error("No valid content found in OpenAI response")]
    MissingContent,
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}
