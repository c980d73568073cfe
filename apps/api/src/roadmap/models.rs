//! Data model for personalized roadmaps: phases, steps, statuses, score maps.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The four fixed stages of every career roadmap, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Foundations,
    CoreSkills,
    Projects,
    CareerPreparation,
}

impl Phase {
    pub const ALL: [Phase; 4] = [
        Phase::Foundations,
        Phase::CoreSkills,
        Phase::Projects,
        Phase::CareerPreparation,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Phase::Foundations => "Foundations",
            Phase::CoreSkills => "Core Skills",
            Phase::Projects => "Projects",
            Phase::CareerPreparation => "Career Preparation",
        }
    }

    /// 1-based position, used for phase-gated job requirements.
    pub fn number(self) -> u8 {
        match self {
            Phase::Foundations => 1,
            Phase::CoreSkills => 2,
            Phase::Projects => 3,
            Phase::CareerPreparation => 4,
        }
    }
}

/// Derived urgency/completion label for a step. Exactly one per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepStatus {
    Completed,
    FastTrack,
    Critical,
    Upcoming,
}

/// A single templated learning unit, as stored in the content catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepDefinition {
    pub skill: String,
    pub title: String,
    pub duration: String,
    pub outcome: String,
}

/// Skill metadata shown in side panels, keyed by lowercased skill tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillDetail {
    pub description: String,
    pub importance: String,
    pub use_cases: Vec<String>,
    pub objectives: Vec<String>,
    pub learning_time: String,
}

/// A curated learning resource attached to a whole phase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseResource {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub url: String,
    pub platform: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A curated resource attached to a single skill module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleResource {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MindmapBranch {
    pub name: String,
    pub subnodes: Vec<String>,
}

/// The mindmap slice for one phase of one career.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MindmapPhase {
    pub branches: Vec<MindmapBranch>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectResource {
    pub platform: String,
    pub title: String,
    pub url: String,
}

/// A suggested hands-on project for a career phase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSuggestion {
    pub title: String,
    pub overview: String,
    pub tech_stack: String,
    pub difficulty: String,
    pub github_link: String,
    pub resources: Vec<ProjectResource>,
    pub objectives: Vec<String>,
}

/// Downloadable/installable tool recommended for a phase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub desc: String,
    pub url: String,
    pub logo: String,
}

/// A step after personalization: status derived, description rewritten,
/// metadata attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalizedStep {
    pub skill: String,
    pub title: String,
    pub duration: String,
    pub outcome: String,
    pub status: StepStatus,
    pub is_completed: bool,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_details: Option<SkillDetail>,
    pub module_resources: Vec<ModuleResource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_project: Option<ProjectSuggestion>,
}

/// One fully enriched phase of a personalized roadmap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseResult {
    pub phase: String,
    pub steps: Vec<PersonalizedStep>,
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

/// User-supplied proficiency estimates keyed by skill category.
///
/// Lookups are case-insensitive. A missing key is an explicit `None`: it can
/// neither fast-track nor criticalize a step. One rule everywhere, instead of
/// per-call-site placeholder defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreMap(HashMap<String, i32>);

impl ScoreMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, category: &str, score: i32) {
        self.0.insert(category.to_lowercase(), score);
    }

    pub fn get(&self, category: &str) -> Option<i32> {
        let wanted = category.to_lowercase();
        self.0
            .iter()
            .find(|(k, _)| k.to_lowercase() == wanted)
            .map(|(_, v)| *v)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<const N: usize> From<[(&str, i32); N]> for ScoreMap {
    fn from(entries: [(&str, i32); N]) -> Self {
        let mut map = ScoreMap::new();
        for (k, v) in entries {
            map.set(k, v);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_order_is_stable() {
        let names: Vec<&str> = Phase::ALL.iter().map(|p| p.name()).collect();
        assert_eq!(
            names,
            vec!["Foundations", "Core Skills", "Projects", "Career Preparation"]
        );
        assert_eq!(Phase::Foundations.number(), 1);
        assert_eq!(Phase::CareerPreparation.number(), 4);
    }

    #[test]
    fn test_step_status_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&StepStatus::FastTrack).unwrap(),
            r#""fast-track""#
        );
        assert_eq!(
            serde_json::to_string(&StepStatus::Completed).unwrap(),
            r#""completed""#
        );
    }

    #[test]
    fn test_score_map_lookup_is_case_insensitive() {
        let scores = ScoreMap::from([("Programming", 72)]);
        assert_eq!(scores.get("programming"), Some(72));
        assert_eq!(scores.get("PROGRAMMING"), Some(72));
    }

    #[test]
    fn test_score_map_missing_key_is_none() {
        let scores = ScoreMap::new();
        assert_eq!(scores.get("math"), None);
    }

    #[test]
    fn test_score_map_deserializes_from_plain_object() {
        let scores: ScoreMap = serde_json::from_str(r#"{"programming": 55}"#).unwrap();
        assert_eq!(scores.get("programming"), Some(55));
    }
}
