#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A message in a community channel. `reactions` is a JSON counter object,
/// e.g. `{"thumbs_up": 2, "heart": 0, "fire": 1}`. `parent_id` links replies
/// into threads.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CommunityMessage {
    pub id: Uuid,
    pub user_id: Uuid,
    pub username: String,
    pub message: String,
    pub channel: String,
    pub reactions: Value,
    pub is_helpful: bool,
    pub parent_id: Option<Uuid>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
