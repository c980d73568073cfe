//! Career Classifier: pluggable, trait-based backend that maps a user's
//! 7-dimensional feature vector to a predicted career and a probability
//! distribution over the fixed label set.
//!
//! Default: `WeightedProfileClassifier` (pure-Rust, deterministic, fully
//! testable). An offline-trained statistical model would slot in as an
//! alternative backend without touching handlers or callers.
//!
//! `AppState` holds an `Arc<dyn CareerClassifier>`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::roadmap::models::ScoreMap;

// ────────────────────────────────────────────────────────────────────────────
// Input / output data models (shared across all classifier backends)
// ────────────────────────────────────────────────────────────────────────────

/// The raw assessment features: four 0-100 self-rated scores and three 1-10
/// interest ratings. Accepted as-is; the classifier normalizes internally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerFeatures {
    pub math_score: i32,
    pub programming_score: i32,
    pub communication_score: i32,
    pub problem_solving_score: i32,
    pub interest_coding: i32,
    pub interest_design: i32,
    pub interest_management: i32,
}

impl CareerFeatures {
    /// Projects the features onto the score categories the roadmap engine
    /// personalizes against. Interests are scaled from 1-10 to 10-100.
    pub fn to_score_map(&self) -> ScoreMap {
        ScoreMap::from([
            ("programming", self.programming_score),
            ("math", self.math_score),
            ("communication", self.communication_score),
            ("logic", self.problem_solving_score),
            ("design", self.interest_design * 10),
        ])
    }
}

/// One career label with its probability in percent (0-100, 2 decimals).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerProbability {
    pub name: String,
    pub prob: f64,
}

/// Full classifier output, probabilities sorted descending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub predicted_career: String,
    pub probabilities: Vec<CareerProbability>,
}

impl Prediction {
    /// Top probability as a fraction in [0,1]: the "ambition" signal the
    /// roadmap engine thresholds against.
    pub fn confidence(&self) -> f64 {
        self.probabilities.first().map(|p| p.prob / 100.0).unwrap_or(0.0)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The classifier trait. Implement this to swap backends without touching
/// the endpoint, handler, or caller code.
#[async_trait]
pub trait CareerClassifier: Send + Sync {
    async fn predict(&self, features: &CareerFeatures) -> Result<Prediction, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// WeightedProfileClassifier: default backend
// ────────────────────────────────────────────────────────────────────────────

/// Per-career weight vector over the normalized feature space. Each vector
/// sums to 1.0, so a raw profile score lands in 0-100.
struct CareerWeights {
    career: &'static str,
    math: f64,
    programming: f64,
    communication: f64,
    logic: f64,
    coding: f64,
    design: f64,
    management: f64,
}

const PROFILE_WEIGHTS: [CareerWeights; 6] = [
    CareerWeights {
        career: "Software Engineer",
        math: 0.15,
        programming: 0.35,
        communication: 0.10,
        logic: 0.20,
        coding: 0.20,
        design: 0.0,
        management: 0.0,
    },
    CareerWeights {
        career: "Data Scientist",
        math: 0.30,
        programming: 0.25,
        communication: 0.10,
        logic: 0.20,
        coding: 0.15,
        design: 0.0,
        management: 0.0,
    },
    CareerWeights {
        career: "Web Developer",
        math: 0.0,
        programming: 0.30,
        communication: 0.10,
        logic: 0.15,
        coding: 0.25,
        design: 0.20,
        management: 0.0,
    },
    CareerWeights {
        career: "UI/UX Designer",
        math: 0.05,
        programming: 0.0,
        communication: 0.20,
        logic: 0.15,
        coding: 0.10,
        design: 0.35,
        management: 0.15,
    },
    CareerWeights {
        career: "Product Manager",
        math: 0.10,
        programming: 0.0,
        communication: 0.30,
        logic: 0.20,
        coding: 0.05,
        design: 0.0,
        management: 0.35,
    },
    CareerWeights {
        career: "Cybersecurity Analyst",
        math: 0.15,
        programming: 0.25,
        communication: 0.10,
        logic: 0.30,
        coding: 0.20,
        design: 0.0,
        management: 0.0,
    },
];

/// Deterministic weighted-profile classifier. Fast, no model artifact, and
/// every prediction is explainable as a dot product.
pub struct WeightedProfileClassifier;

#[async_trait]
impl CareerClassifier for WeightedProfileClassifier {
    async fn predict(&self, features: &CareerFeatures) -> Result<Prediction, AppError> {
        Ok(compute_weighted_prediction(features))
    }
}

fn compute_weighted_prediction(features: &CareerFeatures) -> Prediction {
    let scored: Vec<(&'static str, f64)> = PROFILE_WEIGHTS
        .iter()
        .map(|w| (w.career, profile_score(w, features)))
        .collect();

    let total: f64 = scored.iter().map(|(_, s)| s).sum();

    let mut probabilities: Vec<CareerProbability> = scored
        .iter()
        .map(|(career, score)| CareerProbability {
            name: career.to_string(),
            prob: if total > 0.0 {
                round2(score / total * 100.0)
            } else {
                0.0
            },
        })
        .collect();

    probabilities.sort_by(|a, b| b.prob.partial_cmp(&a.prob).unwrap_or(std::cmp::Ordering::Equal));

    // First strictly-greatest raw score wins; ties resolve in table order.
    let predicted = scored
        .iter()
        .fold(scored[0], |best, &cand| {
            if cand.1 > best.1 {
                cand
            } else {
                best
            }
        })
        .0;

    Prediction {
        predicted_career: predicted.to_string(),
        probabilities,
    }
}

fn profile_score(w: &CareerWeights, f: &CareerFeatures) -> f64 {
    let score = w.math * f.math_score as f64
        + w.programming * f.programming_score as f64
        + w.communication * f.communication_score as f64
        + w.logic * f.problem_solving_score as f64
        + w.coding * (f.interest_coding * 10) as f64
        + w.design * (f.interest_design * 10) as f64
        + w.management * (f.interest_management * 10) as f64;
    score.clamp(0.0, 100.0)
}

/// How well the user's profile matches one specific career, 0-100.
/// Unknown careers sit at a neutral 50.
pub fn match_score(career: &str, features: &CareerFeatures) -> f64 {
    PROFILE_WEIGHTS
        .iter()
        .find(|w| w.career == career)
        .map(|w| round2(profile_score(w, features)))
        .unwrap_or(50.0)
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn make_features(
        math: i32,
        programming: i32,
        communication: i32,
        problem_solving: i32,
        coding: i32,
        design: i32,
        management: i32,
    ) -> CareerFeatures {
        CareerFeatures {
            math_score: math,
            programming_score: programming,
            communication_score: communication,
            problem_solving_score: problem_solving,
            interest_coding: coding,
            interest_design: design,
            interest_management: management,
        }
    }

    #[test]
    fn test_coder_profile_predicts_software_engineer() {
        let f = make_features(70, 95, 50, 80, 9, 2, 2);
        let p = compute_weighted_prediction(&f);
        assert_eq!(p.predicted_career, "Software Engineer");
        assert_eq!(p.probabilities.len(), 6);
    }

    #[test]
    fn test_design_profile_predicts_uiux() {
        let f = make_features(30, 20, 80, 50, 3, 10, 5);
        let p = compute_weighted_prediction(&f);
        assert_eq!(p.predicted_career, "UI/UX Designer");
    }

    #[test]
    fn test_management_profile_predicts_pm() {
        let f = make_features(40, 20, 90, 60, 2, 3, 10);
        let p = compute_weighted_prediction(&f);
        assert_eq!(p.predicted_career, "Product Manager");
    }

    #[test]
    fn test_probabilities_sum_to_roughly_100() {
        let f = make_features(60, 70, 65, 75, 7, 5, 4);
        let p = compute_weighted_prediction(&f);
        let sum: f64 = p.probabilities.iter().map(|c| c.prob).sum();
        assert!((sum - 100.0).abs() < 0.5, "sum was {sum}");
    }

    #[test]
    fn test_probabilities_sorted_descending() {
        let f = make_features(60, 70, 65, 75, 7, 5, 4);
        let p = compute_weighted_prediction(&f);
        for pair in p.probabilities.windows(2) {
            assert!(pair[0].prob >= pair[1].prob);
        }
    }

    #[test]
    fn test_zero_features_are_total() {
        let f = make_features(0, 0, 0, 0, 0, 0, 0);
        let p = compute_weighted_prediction(&f);
        assert_eq!(p.probabilities.len(), 6);
        assert_eq!(p.confidence(), 0.0);
    }

    #[test]
    fn test_confidence_is_top_probability_as_fraction() {
        let f = make_features(70, 95, 50, 80, 9, 2, 2);
        let p = compute_weighted_prediction(&f);
        let expected = p.probabilities[0].prob / 100.0;
        assert!((p.confidence() - expected).abs() < f64::EPSILON);
    }

    #[test]
    fn test_match_score_unknown_career_is_neutral() {
        let f = make_features(50, 50, 50, 50, 5, 5, 5);
        assert_eq!(match_score("Astronaut", &f), 50.0);
    }

    #[test]
    fn test_match_score_is_clamped() {
        let f = make_features(1000, 1000, 1000, 1000, 10, 10, 10);
        assert_eq!(match_score("Software Engineer", &f), 100.0);
    }

    #[test]
    fn test_score_map_projection_scales_design_interest() {
        let f = make_features(55, 65, 75, 85, 5, 7, 3);
        let scores = f.to_score_map();
        assert_eq!(scores.get("programming"), Some(65));
        assert_eq!(scores.get("logic"), Some(85));
        assert_eq!(scores.get("design"), Some(70));
        assert_eq!(scores.get("management"), None);
    }
}
