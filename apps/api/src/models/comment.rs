#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Feedback left on a single roadmap phase.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PhaseComment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub phase_id: String,
    pub content: Option<String>,
    pub pros: Option<String>,
    pub cons: Option<String>,
    pub created_at: DateTime<Utc>,
}
