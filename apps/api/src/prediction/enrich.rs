//! Prediction enrichment: turns a bare classifier prediction into the full
//! dashboard payload: verified skills, gaps, chart series, match score, and
//! the recommended next skill.

use serde::{Deserialize, Serialize};

use crate::careers::{canonicalize_career, required_skills_for, roadmap_summary_for, RoadmapStep};
use crate::prediction::classifier::{match_score, CareerFeatures, CareerProbability, Prediction};

/// A score category counts as verified at or above this value; interests at
/// or above 6 on their 1-10 scale.
const VERIFIED_SCORE_FLOOR: i32 = 60;
const VERIFIED_INTEREST_FLOOR: i32 = 6;

/// Target levels used for the skill comparison chart and the next-skill gap.
const SKILL_TARGETS: [(&str, i32); 4] = [
    ("Mathematics", 75),
    ("Programming", 80),
    ("Communication", 70),
    ("Problem Solving", 75),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarPoint {
    pub subject: String,
    #[serde(rename = "A")]
    pub value: i32,
    #[serde(rename = "fullMark")]
    pub full_mark: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillComparison {
    pub skill: String,
    #[serde(rename = "yourScore")]
    pub your_score: i32,
    pub required: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbabilityPoint {
    pub career: String,
    pub probability: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub predicted_career: String,
    /// Top probability in percent, mirrored from `probabilities[0]`.
    pub confidence: f64,
    pub probabilities: Vec<CareerProbability>,
    pub extracted_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub recommended_roadmap: Vec<RoadmapStep>,
    pub radar_data: Vec<RadarPoint>,
    pub career_match_score: f64,
    pub next_recommended_skill: String,
    pub probability_chart_data: Vec<ProbabilityPoint>,
    pub skill_comparison_data: Vec<SkillComparison>,
}

pub fn build_prediction_response(
    prediction: Prediction,
    features: &CareerFeatures,
) -> PredictionResponse {
    let canonical = canonicalize_career(&prediction.predicted_career).to_string();
    let required = required_skills_for(&canonical);

    let verified = verified_skills(features);
    let confidence = prediction
        .probabilities
        .first()
        .map(|p| p.prob)
        .unwrap_or(0.0);

    PredictionResponse {
        career_match_score: match_score(&canonical, features),
        next_recommended_skill: next_recommended_skill(features, required),
        missing_skills: required.iter().take(5).cloned().collect(),
        recommended_roadmap: roadmap_summary_for(&canonical).to_vec(),
        radar_data: radar_data(features),
        probability_chart_data: prediction
            .probabilities
            .iter()
            .take(5)
            .map(|p| ProbabilityPoint {
                career: p.name.clone(),
                probability: p.prob,
            })
            .collect(),
        skill_comparison_data: skill_comparison(features),
        extracted_skills: if verified.is_empty() {
            vec!["Beginner".to_string()]
        } else {
            verified
        },
        confidence,
        predicted_career: prediction.predicted_career,
        probabilities: prediction.probabilities,
    }
}

/// Self-rated categories strong enough to present as existing strengths.
fn verified_skills(f: &CareerFeatures) -> Vec<String> {
    let mut verified = Vec::new();
    let checks = [
        ("Mathematics", f.math_score >= VERIFIED_SCORE_FLOOR),
        ("Programming", f.programming_score >= VERIFIED_SCORE_FLOOR),
        ("Communication", f.communication_score >= VERIFIED_SCORE_FLOOR),
        ("Problem Solving", f.problem_solving_score >= VERIFIED_SCORE_FLOOR),
        ("Coding Interest", f.interest_coding >= VERIFIED_INTEREST_FLOOR),
        ("Design Interest", f.interest_design >= VERIFIED_INTEREST_FLOOR),
        (
            "Management Interest",
            f.interest_management >= VERIFIED_INTEREST_FLOOR,
        ),
    ];
    for (name, passed) in checks {
        if passed {
            verified.push(name.to_string());
        }
    }
    verified
}

/// The skill with the largest shortfall against its target level. With no
/// shortfall anywhere, fall back to the career's first required skill.
fn next_recommended_skill(f: &CareerFeatures, required: &[String]) -> String {
    let scores = [
        f.math_score,
        f.programming_score,
        f.communication_score,
        f.problem_solving_score,
    ];

    let (name, gap) = SKILL_TARGETS
        .iter()
        .zip(scores)
        .map(|((name, target), score)| (*name, target - score))
        .fold(("", i32::MIN), |best, cand| {
            if cand.1 > best.1 {
                cand
            } else {
                best
            }
        });

    if gap > 0 {
        name.to_string()
    } else {
        required
            .first()
            .cloned()
            .unwrap_or_else(|| "Python".to_string())
    }
}

fn radar_data(f: &CareerFeatures) -> Vec<RadarPoint> {
    let points = [
        ("Math", f.math_score),
        ("Coding", f.programming_score),
        ("Comm", f.communication_score),
        ("Logic", f.problem_solving_score),
        ("Mgmt", f.interest_management * 10),
        ("Design", f.interest_design * 10),
    ];
    points
        .into_iter()
        .map(|(subject, value)| RadarPoint {
            subject: subject.to_string(),
            value,
            full_mark: 100,
        })
        .collect()
}

fn skill_comparison(f: &CareerFeatures) -> Vec<SkillComparison> {
    let scores = [
        f.math_score,
        f.programming_score,
        f.communication_score,
        f.problem_solving_score,
    ];
    SKILL_TARGETS
        .iter()
        .zip(scores)
        .map(|((skill, required), your_score)| SkillComparison {
            skill: skill.to_string(),
            your_score,
            required: *required,
        })
        .collect()
}
