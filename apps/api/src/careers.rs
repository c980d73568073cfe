//! Career-level static tables: required skill sets and five-step roadmap
//! summaries, embedded at compile time and loaded once.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::roadmap::catalog::DEFAULT_CAREER;

/// One summary step in a career's high-level recommended roadmap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapStep {
    pub title: String,
    pub description: String,
}

static ROADMAP_SUMMARIES: Lazy<HashMap<String, Vec<RoadmapStep>>> = Lazy::new(|| {
    serde_json::from_str(include_str!("../content/roadmap_summaries.json"))
        .expect("embedded content table 'roadmap_summaries' is malformed")
});

static CAREER_SKILLS: Lazy<HashMap<String, Vec<String>>> = Lazy::new(|| {
    serde_json::from_str(include_str!("../content/career_skills.json"))
        .expect("embedded content table 'career_skills' is malformed")
});

pub fn roadmap_summary_for(career: &str) -> &'static [RoadmapStep] {
    ROADMAP_SUMMARIES
        .get(career)
        .or_else(|| ROADMAP_SUMMARIES.get(DEFAULT_CAREER))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

pub fn required_skills_for(career: &str) -> &'static [String] {
    CAREER_SKILLS
        .get(career)
        .or_else(|| CAREER_SKILLS.get(DEFAULT_CAREER))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Maps a free-form predicted label onto a career the skill map knows.
/// Heuristic buckets first, then the default career.
pub fn canonicalize_career(predicted: &str) -> &str {
    if CAREER_SKILLS.contains_key(predicted) {
        return CAREER_SKILLS
            .keys()
            .find(|k| k.as_str() == predicted)
            .map(String::as_str)
            .unwrap_or(DEFAULT_CAREER);
    }
    if predicted.contains("Engineer") {
        "Software Engineer"
    } else if predicted.contains("Data") {
        "Data Scientist"
    } else {
        DEFAULT_CAREER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_summary_has_five_steps() {
        for (career, steps) in ROADMAP_SUMMARIES.iter() {
            assert_eq!(steps.len(), 5, "career {career} summary must have 5 steps");
        }
    }

    #[test]
    fn test_unknown_career_summary_falls_back() {
        let fallback = roadmap_summary_for("Nonexistent");
        let default = roadmap_summary_for(DEFAULT_CAREER);
        assert_eq!(fallback.len(), default.len());
        assert_eq!(fallback[0].title, default[0].title);
    }

    #[test]
    fn test_required_skills_known_career() {
        let skills = required_skills_for("Data Scientist");
        assert!(skills.iter().any(|s| s == "Machine Learning"));
    }

    #[test]
    fn test_canonicalize_exact_match_passes_through() {
        assert_eq!(canonicalize_career("Product Manager"), "Product Manager");
    }

    #[test]
    fn test_canonicalize_heuristic_buckets() {
        assert_eq!(canonicalize_career("ML Engineer"), "Software Engineer");
        assert_eq!(canonicalize_career("Big Data Analyst"), "Data Scientist");
        assert_eq!(canonicalize_career("Astronaut"), DEFAULT_CAREER);
    }
}
