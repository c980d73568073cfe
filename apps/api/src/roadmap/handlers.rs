use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::auth::handlers::AuthUser;
use crate::errors::AppError;
use crate::models::roadmap::{RoadmapRow, ROADMAP_STATUS_ACTIVE, ROADMAP_STATUS_ARCHIVED};
use crate::prediction::classifier::CareerFeatures;
use crate::roadmap::engine::generate;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateRoadmapRequest {
    #[serde(flatten)]
    pub features: CareerFeatures,
    /// Skills already held, typically from resume analysis. Optional.
    #[serde(default)]
    pub existing_skills: Vec<String>,
}

/// POST /api/v1/roadmap
///
/// Classifies the caller's profile, generates a personalized roadmap, and
/// persists it as the user's active roadmap (archiving any previous one).
/// The stored content is an opaque blob of the engine's output.
pub async fn handle_generate_roadmap(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(req): Json<GenerateRoadmapRequest>,
) -> Result<Json<RoadmapRow>, AppError> {
    let prediction = state.classifier.predict(&req.features).await?;
    let career = prediction.predicted_career.clone();
    let confidence = prediction.confidence();
    let scores = req.features.to_score_map();

    let phases = generate(&career, &scores, &req.existing_skills, confidence);
    let content = serde_json::to_value(&phases)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("roadmap serialization failed: {e}")))?;

    let mut tx = state.db.begin().await?;

    sqlx::query("UPDATE roadmaps SET status = $1, updated_at = now() WHERE user_id = $2 AND status = $3")
        .bind(ROADMAP_STATUS_ARCHIVED)
        .bind(user.id)
        .bind(ROADMAP_STATUS_ACTIVE)
        .execute(&mut *tx)
        .await?;

    let row: RoadmapRow = sqlx::query_as(
        "INSERT INTO roadmaps (user_id, career_path, content) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(user.id)
    .bind(&career)
    .bind(&content)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query("UPDATE users SET predicted_career = $1 WHERE id = $2")
        .bind(&career)
        .bind(user.id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    info!(user_id = %user.id, career = %career, "generated and stored roadmap");
    Ok(Json(row))
}

/// GET /api/v1/roadmap
pub async fn handle_get_active_roadmap(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<RoadmapRow>, AppError> {
    let row: Option<RoadmapRow> =
        sqlx::query_as("SELECT * FROM roadmaps WHERE user_id = $1 AND status = $2 ORDER BY created_at DESC LIMIT 1")
            .bind(user.id)
            .bind(ROADMAP_STATUS_ACTIVE)
            .fetch_optional(&state.db)
            .await?;

    row.map(Json).ok_or_else(|| {
        AppError::NotFound("No active roadmap. Complete an analysis first.".to_string())
    })
}
