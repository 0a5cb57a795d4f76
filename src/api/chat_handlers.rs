use axum::{extract::State, http::StatusCode, response::Json, Json as RequestJson};
use serde::{Deserialize, Serialize};

use crate::api::handlers::{api_error, ApiError};
use crate::api::state::AppState;
use crate::chat::CHAT_FALLBACK_ERROR;
use crate::store::CatalogStore;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub prompt: String,
}

/// `output` is omitted when the upstream returned no candidate text
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

/// Forwards the prompt upstream. Every failure collapses into the same fallback message.
pub async fn chat<S: CatalogStore>(
    State(state): State<AppState<S>>,
    RequestJson(request): RequestJson<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    match state.chat.generate(&request.prompt).await {
        Ok(output) => Ok(Json(ChatResponse { output })),
        Err(e) => {
            log::error!("Chat API error: {}", e);
            Err(api_error(StatusCode::INTERNAL_SERVER_ERROR, CHAT_FALLBACK_ERROR))
        }
    }
}
