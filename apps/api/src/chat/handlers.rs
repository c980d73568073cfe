use axum::Json;
use serde::{Deserialize, Serialize};

use crate::chat::assistant::{detect_intent, respond};
use crate::errors::AppError;

fn default_career() -> String {
    "Software Engineer".to_string()
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default = "default_career")]
    pub career: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// POST /api/v1/chat
pub async fn handle_chat(Json(req): Json<ChatRequest>) -> Result<Json<ChatResponse>, AppError> {
    let intent = detect_intent(&req.message);
    let reply = respond(intent, &req.career, &mut rand::thread_rng());
    Ok(Json(ChatResponse { reply }))
}
