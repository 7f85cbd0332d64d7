//! HTTP routes: AI draft generation and the per-conversation AI switch.
//!
//! All JSON keys are camelCase (`conversationId`, `customPrompt`).

use axum::extract::{FromRequestParts, Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;
use tracing::{info, instrument};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Conversation id from the path. A non-numeric id is rejected as [`AppError::InvalidPath`]
/// so it gets the same JSON error shape as every other failure.
#[derive(Debug, Deserialize, FromRequestParts)]
#[from_request(via(Path), rejection(AppError))]
pub struct ConversationId(pub i64);

/// Body of `POST .../ai/generate`. A missing body or field means no custom prompt.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    pub custom_prompt: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub success: bool,
    pub response: String,
    pub conversation_id: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AiStatusResponse {
    pub success: bool,
    pub enabled: bool,
    pub conversation_id: i64,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/conversations/:id/ai", get(ai_status))
        .route("/api/v1/conversations/:id/ai/enable", post(enable_ai))
        .route("/api/v1/conversations/:id/ai/disable", post(disable_ai))
        .route("/api/v1/conversations/:id/ai/generate", post(generate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Draft a reply.
///
/// `POST /api/v1/conversations/:id/ai/generate`
///
/// 403 when AI is off, 422 with the generation message when drafting is not possible, 500
/// for anything unexpected.
#[instrument(skip(state, body))]
async fn generate(
    State(state): State<AppState>,
    ConversationId(id): ConversationId,
    body: Option<Json<GenerateRequest>>,
) -> AppResult<Json<GenerateResponse>> {
    let enabled = state
        .ai_state
        .is_enabled(id)
        .await
        .map_err(AppError::GenerationUnexpected)?;
    if !enabled {
        return Err(AppError::AiDisabled);
    }

    let custom_prompt = body
        .and_then(|Json(b)| b.custom_prompt)
        .unwrap_or_default();

    let conversation = state
        .messages
        .find_conversation(id)
        .await
        .map_err(AppError::GenerationUnexpected)?;

    let response = state
        .generator
        .generate(conversation.as_ref(), &custom_prompt)
        .await?;

    info!(conversation_id = id, reply_len = response.len(), "AI draft returned");
    Ok(Json(GenerateResponse {
        success: true,
        response,
        conversation_id: id,
    }))
}

/// `POST /api/v1/conversations/:id/ai/enable`
#[instrument(skip(state))]
async fn enable_ai(
    State(state): State<AppState>,
    ConversationId(id): ConversationId,
) -> AppResult<Json<AiStatusResponse>> {
    ensure_conversation(&state, id).await?;
    let record = state.ai_state.enable(id).await?;
    Ok(Json(AiStatusResponse {
        success: true,
        enabled: record.ai_enabled,
        conversation_id: id,
    }))
}

/// `POST /api/v1/conversations/:id/ai/disable`
#[instrument(skip(state))]
async fn disable_ai(
    State(state): State<AppState>,
    ConversationId(id): ConversationId,
) -> AppResult<Json<AiStatusResponse>> {
    ensure_conversation(&state, id).await?;
    state.ai_state.disable(id).await?;
    Ok(Json(AiStatusResponse {
        success: true,
        enabled: false,
        conversation_id: id,
    }))
}

/// `GET /api/v1/conversations/:id/ai`
async fn ai_status(
    State(state): State<AppState>,
    ConversationId(id): ConversationId,
) -> AppResult<Json<AiStatusResponse>> {
    ensure_conversation(&state, id).await?;
    let enabled = state.ai_state.is_enabled(id).await?;
    Ok(Json(AiStatusResponse {
        success: true,
        enabled,
        conversation_id: id,
    }))
}

async fn ensure_conversation(state: &AppState, id: i64) -> AppResult<()> {
    if state.messages.conversation_exists(id).await? {
        Ok(())
    } else {
        Err(AppError::ConversationNotFound)
    }
}
