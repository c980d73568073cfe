use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::auth::handlers::AuthUser;
use crate::errors::AppError;
use crate::models::community::CommunityMessage;
use crate::state::AppState;

/// Reaction kinds a message accepts. Anything else is a validation error.
pub const REACTION_KINDS: [&str; 3] = ["thumbs_up", "heart", "fire"];

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub message: String,
    pub channel: String,
    pub parent_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct SendMessageResponse {
    pub success: bool,
    pub message_id: Uuid,
}

/// POST /api/v1/community/send
pub async fn handle_send_message(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(req): Json<SendMessageRequest>,
) -> Result<Json<SendMessageResponse>, AppError> {
    if req.message.trim().is_empty() {
        return Err(AppError::Validation("Message cannot be empty".to_string()));
    }
    if req.channel.trim().is_empty() {
        return Err(AppError::Validation("Channel is required".to_string()));
    }

    // Replies must reference a message in the same channel.
    if let Some(parent_id) = req.parent_id {
        let parent: Option<CommunityMessage> = sqlx::query_as(
            "SELECT m.*, u.avatar_url FROM community_messages m JOIN users u ON u.id = m.user_id WHERE m.id = $1",
        )
        .bind(parent_id)
        .fetch_optional(&state.db)
        .await?;
        match parent {
            None => {
                return Err(AppError::NotFound("Parent message not found".to_string()));
            }
            Some(p) if p.channel != req.channel => {
                return Err(AppError::Validation(
                    "Parent message belongs to a different channel".to_string(),
                ));
            }
            Some(_) => {}
        }
    }

    let (message_id,): (Uuid,) = sqlx::query_as(
        r#"
        INSERT INTO community_messages (user_id, username, message, channel, parent_id)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind(user.id)
    .bind(&user.full_name)
    .bind(&req.message)
    .bind(&req.channel)
    .bind(req.parent_id)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(SendMessageResponse {
        success: true,
        message_id,
    }))
}

/// GET /api/v1/community/messages/:channel
pub async fn handle_get_messages(
    State(state): State<AppState>,
    Path(channel): Path<String>,
) -> Result<Json<Vec<CommunityMessage>>, AppError> {
    let messages: Vec<CommunityMessage> = sqlx::query_as(
        r#"
        SELECT m.*, u.avatar_url FROM community_messages m
        JOIN users u ON u.id = m.user_id
        WHERE m.channel = $1
        ORDER BY m.created_at ASC
        "#,
    )
    .bind(&channel)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(messages))
}

#[derive(Debug, Deserialize)]
pub struct ReactRequest {
    pub message_id: Uuid,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Serialize)]
pub struct ReactResponse {
    pub success: bool,
    pub reactions: Value,
}

/// POST /api/v1/community/react
pub async fn handle_react(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Json(req): Json<ReactRequest>,
) -> Result<Json<ReactResponse>, AppError> {
    if !REACTION_KINDS.contains(&req.kind.as_str()) {
        return Err(AppError::Validation(format!(
            "Unknown reaction type '{}'",
            req.kind
        )));
    }

    let row: Option<(Value,)> =
        sqlx::query_as("SELECT reactions FROM community_messages WHERE id = $1")
            .bind(req.message_id)
            .fetch_optional(&state.db)
            .await?;
    let (reactions,) =
        row.ok_or_else(|| AppError::NotFound("Message not found".to_string()))?;

    let reactions = bump_reaction(reactions, &req.kind);

    sqlx::query("UPDATE community_messages SET reactions = $1 WHERE id = $2")
        .bind(&reactions)
        .bind(req.message_id)
        .execute(&state.db)
        .await?;

    Ok(Json(ReactResponse {
        success: true,
        reactions,
    }))
}

/// Increments one counter, rebuilding the object if a stored blob is missing
/// counters (older rows or manual edits).
fn bump_reaction(stored: Value, kind: &str) -> Value {
    let mut counts = json!({ "thumbs_up": 0, "heart": 0, "fire": 0 });
    if let (Some(target), Some(source)) = (counts.as_object_mut(), stored.as_object()) {
        for (key, value) in source {
            if target.contains_key(key) {
                target.insert(key.clone(), value.clone());
            }
        }
    }
    let current = counts[kind].as_i64().unwrap_or(0);
    counts[kind] = json!(current + 1);
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bump_reaction_increments_existing_counter() {
        let stored = json!({ "thumbs_up": 2, "heart": 0, "fire": 1 });
        let bumped = bump_reaction(stored, "thumbs_up");
        assert_eq!(bumped["thumbs_up"], 3);
        assert_eq!(bumped["fire"], 1);
    }

    #[test]
    fn test_bump_reaction_repairs_malformed_blob() {
        let bumped = bump_reaction(json!(null), "heart");
        assert_eq!(bumped["heart"], 1);
        assert_eq!(bumped["thumbs_up"], 0);
        assert_eq!(bumped["fire"], 0);
    }

    #[test]
    fn test_bump_reaction_drops_unknown_keys() {
        let stored = json!({ "thumbs_up": 1, "sparkles": 99 });
        let bumped = bump_reaction(stored, "fire");
        assert!(bumped.get("sparkles").is_none());
        assert_eq!(bumped["fire"], 1);
        assert_eq!(bumped["thumbs_up"], 1);
    }

    #[test]
    fn test_reaction_kinds_are_closed_set() {
        assert!(REACTION_KINDS.contains(&"heart"));
        assert!(!REACTION_KINDS.contains(&"sparkles"));
    }
}
