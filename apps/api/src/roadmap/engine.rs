//! Roadmap Personalization Engine.
//!
//! Pure function over the user's scores, known skills, and classifier
//! confidence plus the immutable content catalog. Total by construction:
//! every lookup has a documented fallback and no input can make it fail.

use crate::roadmap::catalog::{catalog, resolve_career};
use crate::roadmap::models::{
    PersonalizedStep, Phase, PhaseResult, ProjectSuggestion, ScoreMap, StepDefinition, StepStatus,
};
use crate::roadmap::phase_meta::build_phase_meta;

/// Below this, a skill is urgent. Strict `<`: a score of exactly 40 is fine.
pub const LOW_SCORE_THRESHOLD: i32 = 40;
/// Above this, a skill can be fast-tracked. Strict `>`: exactly 85 is not.
pub const HIGH_SCORE_THRESHOLD: i32 = 85;
/// Above this classifier confidence, the Projects phase gains a stretch step.
pub const AMBITION_THRESHOLD: f64 = 0.8;

const COMPLETED_DESCRIPTION: &str = "You already have this skill! Moving to the next one.";
const FAST_TRACK_DESCRIPTION: &str =
    "High aptitude detected. You can move through this quickly.";

/// Generates a personalized four-phase roadmap.
///
/// Unknown careers resolve to the default career's template; confidence is
/// accepted unclamped and only compared against [`AMBITION_THRESHOLD`].
pub fn generate(
    career: &str,
    scores: &ScoreMap,
    existing_skills: &[String],
    confidence: f64,
) -> Vec<PhaseResult> {
    let career = resolve_career(career);
    let template = catalog().template_for(career);

    let known_skills: Vec<Vec<String>> = existing_skills.iter().map(|s| tokenize(s)).collect();
    let needs_remedial_coding = scores
        .get("programming")
        .map_or(false, |s| s < LOW_SCORE_THRESHOLD);
    let is_ambitious = confidence > AMBITION_THRESHOLD;

    Phase::ALL
        .iter()
        .map(|&phase| {
            let mut steps = Vec::new();

            if phase == Phase::Foundations && needs_remedial_coding {
                steps.push(remedial_step());
            }

            for def in template.get(&phase).map(Vec::as_slice).unwrap_or(&[]) {
                steps.push(personalize_step(career, phase, def, scores, &known_skills));
            }

            if phase == Phase::Projects && is_ambitious {
                steps.push(ambition_step());
            }

            let meta = build_phase_meta(career, phase, scores);
            PhaseResult {
                phase: phase.name().to_string(),
                steps,
                description: meta.description,
                focus: meta.focus,
                objectives: meta.objectives,
                mastery_checklist: meta.mastery_checklist,
                expectations: meta.expectations,
                improvement_areas: meta.improvement_areas,
                tools: meta.tools,
                resources: meta.resources,
                mindmap_nodes: meta.mindmap_nodes,
                featured_projects: meta.featured_projects,
                skill_details: meta.skill_details,
            }
        })
        .collect()
}

/// Derives the status and description for one templated step, then attaches
/// its skill metadata, module resources, and a matching project.
fn personalize_step(
    career: &str,
    phase: Phase,
    def: &StepDefinition,
    scores: &ScoreMap,
    known_skills: &[Vec<String>],
) -> PersonalizedStep {
    let (status, description) = derive_status(def, scores, known_skills);

    PersonalizedStep {
        skill: def.skill.clone(),
        title: def.title.clone(),
        duration: def.duration.clone(),
        outcome: def.outcome.clone(),
        status,
        is_completed: status == StepStatus::Completed,
        description,
        skill_details: catalog().skill_detail(&def.skill).cloned(),
        module_resources: catalog().module_resources_for(&def.skill).to_vec(),
        featured_project: pick_project(career, phase, &def.skill),
    }
}

/// Status precedence: completed beats fast-track beats critical beats
/// upcoming. A missing score can trigger neither fast-track nor critical.
fn derive_status(
    def: &StepDefinition,
    scores: &ScoreMap,
    known_skills: &[Vec<String>],
) -> (StepStatus, String) {
    if matches_existing_skill(def, known_skills) {
        return (StepStatus::Completed, COMPLETED_DESCRIPTION.to_string());
    }

    match scores.get(&def.skill) {
        Some(score) if score > HIGH_SCORE_THRESHOLD => {
            (StepStatus::FastTrack, FAST_TRACK_DESCRIPTION.to_string())
        }
        Some(score) if score < LOW_SCORE_THRESHOLD => (
            StepStatus::Critical,
            format!("CRITICAL: {} Extra focus needed.", def.outcome),
        ),
        _ => (StepStatus::Upcoming, def.outcome.clone()),
    }
}

/// A known skill covers a step when it equals the step's skill tag
/// (case-insensitive) or appears as a whole-word sequence in the step title.
/// Substring containment in either direction is deliberately not used: a
/// skill named "R" must not swallow every step.
fn matches_existing_skill(def: &StepDefinition, known_skills: &[Vec<String>]) -> bool {
    let tag = tokenize(&def.skill);
    let title = tokenize(&def.title);
    known_skills
        .iter()
        .any(|skill| *skill == tag || contains_token_sequence(&title, skill))
}

fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn contains_token_sequence(haystack: &[String], needle: &[String]) -> bool {
    !needle.is_empty()
        && haystack.len() >= needle.len()
        && haystack.windows(needle.len()).any(|w| w == needle)
}

/// First project in the career+phase list whose title or tech stack mentions
/// the skill tag, else the phase's first listed project, else none.
fn pick_project(career: &str, phase: Phase, skill: &str) -> Option<ProjectSuggestion> {
    let projects = catalog().projects_for(career, phase);
    let tag = tokenize(skill);

    projects
        .iter()
        .find(|p| {
            contains_token_sequence(&tokenize(&p.title), &tag)
                || contains_token_sequence(&tokenize(&p.tech_stack), &tag)
        })
        .or_else(|| projects.first())
        .cloned()
}

fn remedial_step() -> PersonalizedStep {
    PersonalizedStep {
        skill: "Intro to Logic".to_string(),
        title: "Remedial: Coding Basics".to_string(),
        duration: "2 weeks".to_string(),
        outcome: "Building confidence in basic logic structures.".to_string(),
        status: StepStatus::Critical,
        is_completed: false,
        description: "Added due to low programming score.".to_string(),
        skill_details: None,
        module_resources: Vec::new(),
        featured_project: None,
    }
}

fn ambition_step() -> PersonalizedStep {
    PersonalizedStep {
        skill: "Open Source".to_string(),
        title: "Advanced: Open Source Contribution".to_string(),
        duration: "ongoing".to_string(),
        outcome: "Contributing to real-world software.".to_string(),
        status: StepStatus::Upcoming,
        is_completed: false,
        description: "Added due to high confidence.".to_string(),
        skill_details: None,
        module_resources: vec![crate::roadmap::models::ModuleResource {
            kind: "link".to_string(),
            title: "GitHub Explore".to_string(),
            url: "https://github.com/explore".to_string(),
            description: None,
        }],
        featured_project: None,
    }
}
