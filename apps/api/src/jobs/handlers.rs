use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::handlers::AuthUser;
use crate::errors::AppError;
use crate::jobs::matching::{companies_for, get_matches, Company, JobMatch};
use crate::models::roadmap::{RoadmapRow, ROADMAP_STATUS_ACTIVE};
use crate::state::AppState;

/// Baseline skills assumed for anyone with an active roadmap. Completed-step
/// tracking would refine this; until then every match shows its gaps.
const BASELINE_SKILLS: [&str; 3] = ["Python", "JavaScript", "HTML/CSS"];

#[derive(Debug, Serialize)]
pub struct JobMatchesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub career_path: Option<String>,
    pub matches: Vec<JobMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// GET /api/v1/jobs/match
pub async fn handle_job_matches(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<JobMatchesResponse>, AppError> {
    let roadmap: Option<RoadmapRow> =
        sqlx::query_as("SELECT * FROM roadmaps WHERE user_id = $1 AND status = $2 ORDER BY created_at DESC LIMIT 1")
            .bind(user.id)
            .bind(ROADMAP_STATUS_ACTIVE)
            .fetch_optional(&state.db)
            .await?;

    let Some(roadmap) = roadmap else {
        return Ok(Json(JobMatchesResponse {
            career_path: None,
            matches: Vec::new(),
            message: Some("No active roadmap found. Complete analysis first.".to_string()),
        }));
    };

    let user_skills: Vec<String> = BASELINE_SKILLS.iter().map(|s| s.to_string()).collect();
    let matches = get_matches(
        &roadmap.career_path,
        &user_skills,
        1,
        &mut rand::thread_rng(),
    );

    Ok(Json(JobMatchesResponse {
        career_path: Some(roadmap.career_path),
        matches,
        message: None,
    }))
}

#[derive(Debug, Deserialize)]
pub struct CompaniesQuery {
    pub career_path: String,
}

/// GET /api/v1/jobs/companies?career_path=...
pub async fn handle_companies(
    Query(query): Query<CompaniesQuery>,
) -> Result<Json<Vec<Company>>, AppError> {
    let companies = companies_for(&query.career_path);
    if companies.is_empty() {
        return Err(AppError::NotFound(
            "No companies found for this career path".to_string(),
        ));
    }
    Ok(Json(companies.to_vec()))
}
