//! Phase-level enrichment: descriptions, objectives, improvement areas,
//! tools, resources, and mindmap branches for one phase of a roadmap.

use std::collections::HashMap;

use crate::roadmap::catalog::catalog;
use crate::roadmap::models::{
    MindmapPhase, Phase, PhaseResource, ProjectSuggestion, ScoreMap, SkillDetail, ToolInfo,
};

/// Below this, a score category earns a remediation line. Strict `<`.
pub const IMPROVEMENT_THRESHOLD: i32 = 60;

/// The five fixed categories checked for improvement areas, with their
/// canned remediation sentences.
const IMPROVEMENT_CHECKS: [(&str, &str); 5] = [
    (
        "programming",
        "Strengthen programming fundamentals — practice daily coding",
    ),
    (
        "math",
        "Improve mathematical foundations — focus on applied math",
    ),
    (
        "communication",
        "Develop communication skills — practice presentations",
    ),
    (
        "logic",
        "Sharpen problem-solving — work through logic puzzles",
    ),
    ("design", "Explore design thinking — study UI/UX basics"),
];

const NO_IMPROVEMENT_LINES: [&str; 2] = [
    "Continue building on your strengths",
    "Explore advanced topics in your strong areas",
];

pub struct PhaseMeta {
    pub description: String,
    pub focus: String,
    pub objectives: Vec<String>,
    pub mastery_checklist: Vec<String>,
    pub expectations: Vec<String>,
    pub improvement_areas: Vec<String>,
    pub tools: Vec<ToolInfo>,
    pub resources: Vec<PhaseResource>,
    pub mindmap_nodes: MindmapPhase,
    pub featured_projects: Vec<ProjectSuggestion>,
    pub skill_details: HashMap<String, SkillDetail>,
}

pub fn build_phase_meta(career: &str, phase: Phase, scores: &ScoreMap) -> PhaseMeta {
    let objectives = catalog().objectives_for(career, phase);

    PhaseMeta {
        description: phase_description(career, phase),
        focus: objectives
            .map(|o| o.focus.clone())
            .unwrap_or_else(|| "Building expertise".to_string()),
        objectives: objectives.map(|o| o.objectives.clone()).unwrap_or_else(|| {
            vec![
                "Master core skills".to_string(),
                "Build practical experience".to_string(),
            ]
        }),
        mastery_checklist: objectives
            .map(|o| o.mastery_checklist.clone())
            .unwrap_or_else(|| {
                vec![
                    "Complete all modules".to_string(),
                    "Achieve 85% score".to_string(),
                    "Pass phase assessment".to_string(),
                ]
            }),
        expectations: objectives
            .map(|o| o.expectations.clone())
            .unwrap_or_else(|| vec!["Ready for the next level".to_string()]),
        improvement_areas: improvement_areas(scores),
        tools: catalog().tools_for(career, phase),
        resources: enriched_resources(career, phase),
        mindmap_nodes: catalog().mindmap_for(career, phase),
        featured_projects: catalog().projects_for(career, phase).to_vec(),
        skill_details: catalog().skill_details.clone(),
    }
}

fn phase_description(career: &str, phase: Phase) -> String {
    match phase {
        Phase::Foundations => format!(
            "Building the bedrock for a {career}. Internalizing core concepts and setting up your learning environment."
        ),
        Phase::CoreSkills => format!(
            "Deepening your {career} expertise with industry-standard tools, frameworks, and problem-solving techniques."
        ),
        Phase::Projects => format!(
            "Applying your {career} skills to real-world projects. Building a portfolio that demonstrates practical competence."
        ),
        Phase::CareerPreparation => format!(
            "Polishing your {career} profile for the job market. Interview prep, certifications, and networking."
        ),
    }
}

/// One remediation line per known category scored below the threshold. When
/// nothing is below threshold (including an empty score map), two fixed
/// encouragement lines are emitted instead.
pub fn improvement_areas(scores: &ScoreMap) -> Vec<String> {
    let areas: Vec<String> = IMPROVEMENT_CHECKS
        .iter()
        .filter(|(category, _)| {
            scores
                .get(category)
                .map_or(false, |s| s < IMPROVEMENT_THRESHOLD)
        })
        .map(|(_, line)| line.to_string())
        .collect();

    if areas.is_empty() {
        NO_IMPROVEMENT_LINES.iter().map(|s| s.to_string()).collect()
    } else {
        areas
    }
}

/// Phase resources with missing duration/difficulty/description filled in.
fn enriched_resources(career: &str, phase: Phase) -> Vec<PhaseResource> {
    catalog()
        .resources_for(career, phase)
        .iter()
        .map(|res| {
            let mut res = res.clone();
            if res.duration.is_none() {
                res.duration = Some(default_duration(&res.kind).to_string());
            }
            if res.difficulty.is_none() {
                res.difficulty = Some(default_difficulty(phase).to_string());
            }
            if res.description.is_none() {
                res.description = Some(format!("Master {} to excel in this phase.", res.title));
            }
            res
        })
        .collect()
}

fn default_duration(kind: &str) -> &'static str {
    match kind {
        "course" | "video" => "2-4 hours",
        _ => "15-30 mins",
    }
}

fn default_difficulty(phase: Phase) -> &'static str {
    match phase {
        Phase::Foundations => "Beginner",
        _ => "Intermediate",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_improvement_areas_lists_each_low_category_once() {
        let scores = ScoreMap::from([("programming", 30), ("math", 59), ("logic", 60)]);
        let areas = improvement_areas(&scores);
        assert_eq!(areas.len(), 2);
        assert!(areas[0].contains("programming fundamentals"));
        assert!(areas[1].contains("mathematical foundations"));
    }

    #[test]
    fn test_improvement_threshold_is_strict() {
        let scores = ScoreMap::from([("communication", 60)]);
        let areas = improvement_areas(&scores);
        assert_eq!(areas, NO_IMPROVEMENT_LINES.to_vec());
    }

    #[test]
    fn test_missing_scores_do_not_count_as_low() {
        let areas = improvement_areas(&ScoreMap::new());
        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0], "Continue building on your strengths");
    }

    #[test]
    fn test_phase_description_interpolates_career() {
        let desc = phase_description("Data Scientist", Phase::Projects);
        assert!(desc.contains("Data Scientist"));
        assert!(desc.contains("portfolio"));
    }

    #[test]
    fn test_meta_for_known_career_uses_catalog_objectives() {
        let meta = build_phase_meta("Software Engineer", Phase::Foundations, &ScoreMap::new());
        assert_eq!(meta.focus, "Algorithmic Logic & Syntax");
        assert_eq!(meta.objectives.len(), 4);
        assert!(!meta.mindmap_nodes.branches.is_empty());
    }

    #[test]
    fn test_resources_are_fully_populated_after_enrichment() {
        for phase in Phase::ALL {
            let meta = build_phase_meta("Software Engineer", phase, &ScoreMap::new());
            for res in &meta.resources {
                assert!(res.duration.is_some(), "{} missing duration", res.title);
                assert!(res.difficulty.is_some(), "{} missing difficulty", res.title);
                assert!(res.description.is_some(), "{} missing description", res.title);
            }
        }
    }

    #[test]
    fn test_default_duration_by_resource_kind() {
        assert_eq!(default_duration("course"), "2-4 hours");
        assert_eq!(default_duration("article"), "15-30 mins");
    }
}
