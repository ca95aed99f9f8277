use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Serialize)]
pub struct ChatResponse {
    reply: &'static str,
}

/// POST /api/chat
pub async fn reply(Json(body): Json<ChatRequest>) -> Json<ChatResponse> {
    let message = body.message.unwrap_or_default();

    Json(ChatResponse {
        reply: crate::chat::reply(&message),
    })
}
