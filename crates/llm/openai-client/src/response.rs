//! Request body and response parsing for `POST /responses`.

use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;

/// Fallback when the API sends an `error` object without a message.
pub const UNKNOWN_API_ERROR: &str = "Unknown OpenAI API error";

/// JSON body of `POST /responses`. `instructions` is left out entirely when `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponsesRequest {
    pub model: String,
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

/// `error.message` of a body, if the body is JSON with a non-null `error` object.
pub(crate) fn api_error_message(body: &Value) -> Option<String> {
    let error = body.get("error").filter(|e| !e.is_null())?;
    Some(
        error
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_API_ERROR)
            .to_string(),
    )
}

/// Pulls the generated text out of a successful response body.
///
/// Order: `error` object → [`ApiError::Api`]; first `output[]` item of type `message`, first of
/// its `content[]` of type `output_text`, its `text`; else a top-level string `content`; else
/// [`ApiError::MissingContent`].
pub fn extract_output_text(body: &Value) -> Result<String, ApiError> {
    if let Some(message) = api_error_message(body) {
        return Err(ApiError::Api(message));
    }

    let text = body
        .get("output")
        .and_then(Value::as_array)
        .and_then(|items| items.iter().find(|item| item["type"] == "message"))
        .and_then(|message| message.get("content"))
        .and_then(Value::as_array)
        .and_then(|parts| parts.iter().find(|part| part["type"] == "output_text"))
        .and_then(|part| part.get("text"))
        .and_then(Value::as_str);

    if let Some(text) = text {
        return Ok(text.to_string());
    }

    body.get("content")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(ApiError::MissingContent)
}
