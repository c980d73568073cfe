#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct HelpDeskTicket {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub issue_type: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}
