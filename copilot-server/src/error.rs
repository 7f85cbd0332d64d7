//! HTTP-facing errors. Every variant renders as `{"success": false, "error": <message>}`.

use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use copilot_ai::GenerationError;
use serde_json::json;
use storage::StorageError;
use thiserror::Error;
use tracing::error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("AI is not enabled for this conversation")]
    AiDisabled,

    #[error("Conversation not found")]
    ConversationNotFound,

    #[error("Invalid conversation id: {0}")]
    InvalidPath(String),

    /// Expected generation failure; the message is safe to show.
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// Anything unexpected while generating; the cause is logged, never returned.
    #[error("An unexpected error occurred while generating AI response")]
    GenerationUnexpected(#[source] StorageError),

    #[error("Internal server error")]
    Storage(#[from] StorageError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::AiDisabled => StatusCode::FORBIDDEN,
            AppError::ConversationNotFound => StatusCode::NOT_FOUND,
            AppError::InvalidPath(_) => StatusCode::BAD_REQUEST,
            AppError::Generation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::GenerationUnexpected(_) | AppError::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::InvalidPath(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::GenerationUnexpected(cause) | AppError::Storage(cause) => {
                error!(status = status.as_u16(), error = %cause, "Request failed");
            }
            other => {
                tracing::warn!(status = status.as_u16(), error = %other, "Request rejected");
            }
        }
        let body = Json(json!({ "success": false, "error": self.to_string() }));
        (status, body).into_response()
    }
}
