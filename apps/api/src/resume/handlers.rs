use axum::extract::{Multipart, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::careers::{required_skills_for, roadmap_summary_for, RoadmapStep};
use crate::errors::AppError;
use crate::prediction::enrich::RadarPoint;
use crate::resume::extract::extract_text;
use crate::resume::skills::{extract_skills, SkillInfo};
use crate::state::AppState;

/// Career the gap analysis targets. Predicting it from the resume itself is
/// a separate concern; analysis without an assessment assumes this default.
const TARGET_CAREER: &str = "Software Engineer";

#[derive(Debug, Serialize, Deserialize)]
pub struct SkillGapResponse {
    pub target_career: String,
    pub extracted_skills: Vec<SkillInfo>,
    pub missing_skills: Vec<String>,
    pub recommended_roadmap: Vec<RoadmapStep>,
    pub radar_data: Vec<RadarPoint>,
}

/// POST /api/v1/resume/analyze (multipart, field name "file")
pub async fn handle_analyze_resume(
    State(_state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<SkillGapResponse>, AppError> {
    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or("resume.txt").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;
            upload = Some((filename, data.to_vec()));
            break;
        }
    }
    let (filename, data) =
        upload.ok_or_else(|| AppError::Validation("Missing 'file' field".to_string()))?;

    // PDF extraction is CPU-bound; keep it off the async executor.
    let text = tokio::task::spawn_blocking(move || extract_text(&filename, &data))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("extraction task failed: {e}")))??;

    let extracted = extract_skills(&text);
    info!(skills = extracted.len(), "analyzed resume upload");

    Ok(Json(build_skill_gap_response(extracted)))
}

fn build_skill_gap_response(extracted: Vec<SkillInfo>) -> SkillGapResponse {
    let missing = missing_skills(&extracted, required_skills_for(TARGET_CAREER));

    SkillGapResponse {
        target_career: TARGET_CAREER.to_string(),
        missing_skills: missing,
        recommended_roadmap: roadmap_summary_for(TARGET_CAREER).to_vec(),
        radar_data: resume_radar(&extracted),
        extracted_skills: extracted,
    }
}

/// Required skills for the target career not found in the resume,
/// compared case-insensitively.
fn missing_skills(extracted: &[SkillInfo], required: &[String]) -> Vec<String> {
    required
        .iter()
        .filter(|req| {
            !extracted
                .iter()
                .any(|s| s.name.to_lowercase() == req.to_lowercase())
        })
        .cloned()
        .collect()
}

/// Coarse profile shape for the dashboard radar: how much of the resume is
/// technical versus soft-skill vocabulary.
fn resume_radar(extracted: &[SkillInfo]) -> Vec<RadarPoint> {
    let soft = extracted
        .iter()
        .filter(|s| s.category == "Soft Skills")
        .count();
    let tech = extracted.len() - soft;

    let scaled = |count: usize| -> i32 { (count as i32 * 12).min(100) };

    vec![
        RadarPoint {
            subject: "Tech".to_string(),
            value: scaled(tech),
            full_mark: 100,
        },
        RadarPoint {
            subject: "Soft Skills".to_string(),
            value: scaled(soft),
            full_mark: 100,
        },
        RadarPoint {
            subject: "Breadth".to_string(),
            value: scaled(extracted.len()),
            full_mark: 100,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(name: &str, category: &str) -> SkillInfo {
        SkillInfo {
            name: name.to_string(),
            category: category.to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_missing_skills_excludes_found_ones() {
        let extracted = vec![
            skill("Python", "Programming Languages"),
            skill("SQL", "Databases"),
        ];
        let required = vec!["Python".to_string(), "SQL".to_string(), "Docker".to_string()];
        assert_eq!(missing_skills(&extracted, &required), vec!["Docker"]);
    }

    #[test]
    fn test_missing_skills_comparison_is_case_insensitive() {
        let extracted = vec![skill("python", "Programming Languages")];
        let required = vec!["Python".to_string()];
        assert!(missing_skills(&extracted, &required).is_empty());
    }

    #[test]
    fn test_gap_response_shape() {
        let resp = build_skill_gap_response(vec![skill("Python", "Programming Languages")]);
        assert_eq!(resp.target_career, "Software Engineer");
        assert_eq!(resp.recommended_roadmap.len(), 5);
        assert_eq!(resp.radar_data.len(), 3);
        assert!(resp.missing_skills.iter().all(|s| s != "Python"));
    }

    #[test]
    fn test_radar_separates_soft_and_technical() {
        let radar = resume_radar(&[
            skill("Python", "Programming Languages"),
            skill("Leadership", "Soft Skills"),
        ]);
        let tech = radar.iter().find(|p| p.subject == "Tech").unwrap();
        let soft = radar.iter().find(|p| p.subject == "Soft Skills").unwrap();
        assert_eq!(tech.value, 12);
        assert_eq!(soft.value, 12);
    }

    #[test]
    fn test_radar_values_capped_at_100() {
        let many: Vec<SkillInfo> = (0..20)
            .map(|i| skill(&format!("Skill{i}"), "Other"))
            .collect();
        let radar = resume_radar(&many);
        assert!(radar.iter().all(|p| p.value <= 100));
    }
}
