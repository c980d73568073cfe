//! Per-phase comments: short feedback users leave on roadmap phases.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::handlers::AuthUser;
use crate::errors::AppError;
use crate::models::comment::PhaseComment;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub phase_id: String,
    pub content: Option<String>,
    pub pros: Option<String>,
    pub cons: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateCommentResponse {
    pub success: bool,
    pub comment: PhaseComment,
}

fn is_blank(field: &Option<String>) -> bool {
    field.as_deref().map_or(true, |s| s.trim().is_empty())
}

/// POST /api/v1/comments
pub async fn handle_create_comment(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(req): Json<CreateCommentRequest>,
) -> Result<Json<CreateCommentResponse>, AppError> {
    if req.phase_id.trim().is_empty() {
        return Err(AppError::Validation("phase_id is required".to_string()));
    }
    if is_blank(&req.content) && is_blank(&req.pros) && is_blank(&req.cons) {
        return Err(AppError::Validation(
            "A comment needs content, pros, or cons".to_string(),
        ));
    }

    let comment: PhaseComment = sqlx::query_as(
        r#"
        INSERT INTO phase_comments (user_id, phase_id, content, pros, cons)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(user.id)
    .bind(&req.phase_id)
    .bind(&req.content)
    .bind(&req.pros)
    .bind(&req.cons)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(CreateCommentResponse {
        success: true,
        comment,
    }))
}

/// GET /api/v1/comments/:phase_id
pub async fn handle_get_comments(
    State(state): State<AppState>,
    Path(phase_id): Path<String>,
) -> Result<Json<Vec<PhaseComment>>, AppError> {
    let comments: Vec<PhaseComment> = sqlx::query_as(
        "SELECT * FROM phase_comments WHERE phase_id = $1 ORDER BY created_at ASC",
    )
    .bind(&phase_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(comments))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_detection() {
        assert!(is_blank(&None));
        assert!(is_blank(&Some("   ".to_string())));
        assert!(!is_blank(&Some("useful".to_string())));
    }
}
