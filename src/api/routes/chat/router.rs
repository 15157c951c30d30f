//! Router for the chat API

use std::sync::Arc;

use axum::{Json, Router, body::Bytes, extract::State, routing::post};

use super::public;
use crate::api::public::ApiError;
use crate::api::state::AppState;

type SharedState = Arc<AppState>;

pub const MESSAGE_REQUIRED: &str = "Message is required";
pub const INVALID_BODY: &str = "Invalid request body";

/// Relay a single question to the completion provider
async fn chat_handler(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<public::ChatResponse>, ApiError> {
    // Parsed by hand so a missing or wrong content type doesn't matter
    let payload: public::ChatRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!("Invalid chat request body: {}", e);
        ApiError::bad_request(INVALID_BODY)
    })?;

    let message = payload
        .message
        .filter(|m| !m.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request(MESSAGE_REQUIRED))?;

    let response = state.relay.respond(&message).await?;

    Ok(Json(public::ChatResponse::new(&response)))
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", post(chat_handler))
}
