//! Content Catalog: immutable, loaded-once lookup tables for roadmap
//! generation.
//!
//! All tables are embedded JSON compiled into the binary. Content is data,
//! not logic: nothing here is mutated at runtime, and every "not found" case
//! resolves through an explicit fallback accessor rather than an error.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::roadmap::models::{
    MindmapPhase, ModuleResource, Phase, PhaseResource, ProjectSuggestion, SkillDetail,
    StepDefinition, ToolInfo,
};

/// Career whose template backs every unknown career name.
pub const DEFAULT_CAREER: &str = "Software Engineer";

/// Per-phase objective metadata for one career.
#[derive(Debug, Clone, Deserialize)]
pub struct PhaseObjectives {
    pub focus: String,
    pub objectives: Vec<String>,
    pub mastery_checklist: Vec<String>,
    pub expectations: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ToolCatalog {
    pub meta: HashMap<String, ToolInfo>,
    pub by_phase: HashMap<Phase, HashMap<String, Vec<String>>>,
}

#[derive(Debug, Deserialize)]
pub struct Catalog {
    pub templates: HashMap<String, HashMap<Phase, Vec<StepDefinition>>>,
    pub skill_details: HashMap<String, SkillDetail>,
    pub phase_objectives: HashMap<String, HashMap<Phase, PhaseObjectives>>,
    pub phase_resources: HashMap<String, HashMap<Phase, Vec<PhaseResource>>>,
    pub module_resources: HashMap<String, Vec<ModuleResource>>,
    pub mindmaps: HashMap<String, HashMap<Phase, MindmapPhase>>,
    pub projects: HashMap<String, HashMap<Phase, Vec<ProjectSuggestion>>>,
    pub tools: ToolCatalog,
}

static CATALOG: Lazy<Catalog> = Lazy::new(|| Catalog {
    templates: parse_table(
        include_str!("../../content/phase_templates.json"),
        "phase_templates",
    ),
    skill_details: parse_table(
        include_str!("../../content/skill_details.json"),
        "skill_details",
    ),
    phase_objectives: parse_table(
        include_str!("../../content/phase_objectives.json"),
        "phase_objectives",
    ),
    phase_resources: parse_table(
        include_str!("../../content/phase_resources.json"),
        "phase_resources",
    ),
    module_resources: parse_table(
        include_str!("../../content/module_resources.json"),
        "module_resources",
    ),
    mindmaps: parse_table(include_str!("../../content/mindmaps.json"), "mindmaps"),
    projects: parse_table(include_str!("../../content/projects.json"), "projects"),
    tools: parse_table(include_str!("../../content/tools.json"), "tools"),
});

pub fn catalog() -> &'static Catalog {
    &CATALOG
}

fn parse_table<T: DeserializeOwned>(raw: &str, name: &str) -> T {
    serde_json::from_str(raw)
        .unwrap_or_else(|e| panic!("embedded content table '{name}' is malformed: {e}"))
}

/// Resolves a requested career to a catalog key, falling back to
/// [`DEFAULT_CAREER`] when the name is unknown. The fallback is deliberate:
/// the engine always answers with *something* rather than erroring on a
/// typo'd career name.
pub fn resolve_career(career: &str) -> &'static str {
    CATALOG
        .templates
        .keys()
        .find(|known| known.as_str() == career)
        .map(|known| known.as_str())
        .unwrap_or(DEFAULT_CAREER)
}

impl Catalog {
    /// Phase template for a known career. Callers resolve the career first;
    /// an unknown key here still degrades to the default career's table.
    pub fn template_for(&self, career: &str) -> &HashMap<Phase, Vec<StepDefinition>> {
        self.templates
            .get(career)
            .or_else(|| self.templates.get(DEFAULT_CAREER))
            .expect("default career template must exist")
    }

    pub fn skill_detail(&self, tag: &str) -> Option<&SkillDetail> {
        self.skill_details.get(&tag.to_lowercase())
    }

    pub fn module_resources_for(&self, tag: &str) -> &[ModuleResource] {
        self.module_resources
            .get(&tag.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn objectives_for(&self, career: &str, phase: Phase) -> Option<&PhaseObjectives> {
        self.phase_objectives
            .get(career)
            .or_else(|| self.phase_objectives.get(DEFAULT_CAREER))
            .and_then(|phases| phases.get(&phase))
    }

    pub fn resources_for(&self, career: &str, phase: Phase) -> &[PhaseResource] {
        self.phase_resources
            .get(career)
            .or_else(|| self.phase_resources.get(DEFAULT_CAREER))
            .and_then(|phases| phases.get(&phase))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn mindmap_for(&self, career: &str, phase: Phase) -> MindmapPhase {
        self.mindmaps
            .get(career)
            .or_else(|| self.mindmaps.get(DEFAULT_CAREER))
            .and_then(|phases| phases.get(&phase))
            .cloned()
            .unwrap_or_default()
    }

    pub fn projects_for(&self, career: &str, phase: Phase) -> &[ProjectSuggestion] {
        self.projects
            .get(career)
            .and_then(|phases| phases.get(&phase))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Tool list for a phase+career, defaulting to two generic tools.
    pub fn tools_for(&self, career: &str, phase: Phase) -> Vec<ToolInfo> {
        let names: Vec<String> = self
            .tools
            .by_phase
            .get(&phase)
            .and_then(|careers| careers.get(career))
            .cloned()
            .unwrap_or_else(|| vec!["VS Code".to_string(), "Git".to_string()]);

        names
            .into_iter()
            .map(|name| {
                self.tools.meta.get(&name).cloned().unwrap_or(ToolInfo {
                    name,
                    desc: "Essential tool for this phase.".to_string(),
                    url: "#".to_string(),
                    logo: String::new(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_career_template_has_exactly_four_phases() {
        for (career, phases) in &catalog().templates {
            assert_eq!(phases.len(), 4, "career {career} must define 4 phases");
            for phase in Phase::ALL {
                let steps = phases.get(&phase);
                assert!(
                    steps.is_some_and(|s| !s.is_empty()),
                    "career {career} missing steps for {:?}",
                    phase
                );
            }
        }
    }

    #[test]
    fn test_default_career_exists() {
        assert!(catalog().templates.contains_key(DEFAULT_CAREER));
    }

    #[test]
    fn test_resolve_career_known_name_passes_through() {
        assert_eq!(resolve_career("Data Scientist"), "Data Scientist");
    }

    #[test]
    fn test_resolve_career_unknown_name_falls_back() {
        assert_eq!(resolve_career("Quantum Gardener"), DEFAULT_CAREER);
        assert_eq!(resolve_career(""), DEFAULT_CAREER);
    }

    #[test]
    fn test_skill_detail_lookup_is_lowercased() {
        assert!(catalog().skill_detail("Programming").is_some());
        assert!(catalog().skill_detail("programming").is_some());
        assert!(catalog().skill_detail("no such skill").is_none());
    }

    #[test]
    fn test_unknown_career_mindmap_falls_back_to_default() {
        let fallback = catalog().mindmap_for("Quantum Gardener", Phase::Foundations);
        let default = catalog().mindmap_for(DEFAULT_CAREER, Phase::Foundations);
        assert!(!fallback.branches.is_empty());
        assert_eq!(fallback.branches.len(), default.branches.len());
    }

    #[test]
    fn test_web_developer_mindmap_falls_back_to_default() {
        // Web Developer has a template but no mindmap of its own.
        let map = catalog().mindmap_for("Web Developer", Phase::CoreSkills);
        assert!(!map.branches.is_empty());
    }

    #[test]
    fn test_tools_default_to_generic_pair() {
        let tools = catalog().tools_for("Web Developer", Phase::Foundations);
        let names: Vec<&str> = tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["VS Code", "Git"]);
    }

    #[test]
    fn test_tools_for_known_pair_resolve_metadata() {
        let tools = catalog().tools_for("Data Scientist", Phase::Foundations);
        assert!(tools.iter().any(|t| t.name == "Jupyter"));
        assert!(tools.iter().all(|t| !t.url.is_empty()));
    }

    #[test]
    fn test_projects_absent_for_uiux_designer() {
        // UI/UX Designer carries no project templates; lookup degrades to empty.
        assert!(catalog()
            .projects_for("UI/UX Designer", Phase::Projects)
            .is_empty());
    }
}
