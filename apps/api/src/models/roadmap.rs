#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted roadmap. `content` is the serialized output of the
/// personalization engine, stored and returned as an opaque blob; the
/// database never interprets its structure.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RoadmapRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub career_path: String,
    pub content: Value,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub const ROADMAP_STATUS_ACTIVE: &str = "active";
pub const ROADMAP_STATUS_ARCHIVED: &str = "archived";
