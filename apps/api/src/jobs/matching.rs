//! Job matching: curated role/company tables plus skill-overlap scoring.
//!
//! Match computation is deterministic; only the mock company assignment is
//! random, by design, so the RNG is injected rather than reached for.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A role must match at least this much to be shown (gaps included).
pub const MATCH_VISIBILITY_FLOOR: f64 = 40.0;
/// At or above this, the caller is marked eligible to apply.
pub const ELIGIBILITY_THRESHOLD: f64 = 70.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub logo: String,
    pub url: String,
    pub desc: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRole {
    pub role: String,
    pub level: String,
    pub required_skills: Vec<String>,
    pub phase_requirement: u8,
}

#[derive(Debug, Deserialize)]
struct JobsCatalog {
    companies: HashMap<String, Vec<Company>>,
    roles: HashMap<String, Vec<JobRole>>,
}

static JOBS: Lazy<JobsCatalog> = Lazy::new(|| {
    serde_json::from_str(include_str!("../../content/jobs.json"))
        .expect("embedded content table 'jobs' is malformed")
});

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchData {
    pub match_percentage: f64,
    pub missing_skills: Vec<String>,
    pub is_eligible: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMatch {
    pub role: String,
    pub level: String,
    pub required_skills: Vec<String>,
    pub match_percentage: f64,
    pub missing_skills: Vec<String>,
    pub is_eligible: bool,
    pub company_name: String,
    pub company_logo: String,
    pub apply_url: String,
}

pub fn companies_for(career_path: &str) -> &'static [Company] {
    JOBS.companies
        .get(career_path)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Skill overlap between what the user has and what a role requires.
pub fn calculate_match(user_skills: &[String], required_skills: &[String]) -> MatchData {
    if required_skills.is_empty() {
        return MatchData {
            match_percentage: 0.0,
            missing_skills: Vec::new(),
            is_eligible: false,
        };
    }

    let user_lower: Vec<String> = user_skills.iter().map(|s| s.to_lowercase()).collect();
    let matched = required_skills
        .iter()
        .filter(|req| user_lower.contains(&req.to_lowercase()))
        .count();
    let missing_skills: Vec<String> = required_skills
        .iter()
        .filter(|req| !user_lower.contains(&req.to_lowercase()))
        .cloned()
        .collect();

    let match_percentage =
        round1(matched as f64 / required_skills.len() as f64 * 100.0);

    MatchData {
        match_percentage,
        missing_skills,
        is_eligible: match_percentage >= ELIGIBILITY_THRESHOLD,
    }
}

/// Roles for a career path, gated by the user's current phase, scored against
/// their skills, sorted by match descending. Company assignment is a mock
/// and deliberately random.
pub fn get_matches(
    career_path: &str,
    user_skills: &[String],
    current_phase: u8,
    rng: &mut impl Rng,
) -> Vec<JobMatch> {
    let roles = JOBS.roles.get(career_path).map(Vec::as_slice).unwrap_or(&[]);
    let companies = companies_for(career_path);

    let mut matches: Vec<JobMatch> = roles
        .iter()
        .filter(|r| r.phase_requirement <= current_phase)
        .filter_map(|role| {
            let data = calculate_match(user_skills, &role.required_skills);
            if data.match_percentage < MATCH_VISIBILITY_FLOOR {
                return None;
            }

            let company = companies.choose(rng).cloned().unwrap_or(Company {
                name: "Tech Corp".to_string(),
                logo: String::new(),
                url: "#".to_string(),
                desc: String::new(),
            });

            Some(JobMatch {
                role: role.role.clone(),
                level: role.level.clone(),
                required_skills: role.required_skills.clone(),
                match_percentage: data.match_percentage,
                missing_skills: data.missing_skills,
                is_eligible: data.is_eligible,
                company_name: company.name,
                company_logo: company.logo,
                apply_url: company.url,
            })
        })
        .collect();

    matches.sort_by(|a, b| {
        b.match_percentage
            .partial_cmp(&a.match_percentage)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    matches
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_full_overlap_is_eligible() {
        let data = calculate_match(
            &skills(&["React", "Node.js", "SQL"]),
            &skills(&["React", "Node.js", "SQL"]),
        );
        assert_eq!(data.match_percentage, 100.0);
        assert!(data.is_eligible);
        assert!(data.missing_skills.is_empty());
    }

    #[test]
    fn test_partial_overlap_reports_gaps() {
        let data = calculate_match(
            &skills(&["react"]),
            &skills(&["React", "Node.js", "SQL"]),
        );
        assert_eq!(data.match_percentage, 33.3);
        assert!(!data.is_eligible);
        assert_eq!(data.missing_skills, vec!["Node.js", "SQL"]);
    }

    #[test]
    fn test_eligibility_boundary_is_inclusive_at_70() {
        // 7 of 10 skills matched.
        let required: Vec<String> = (0..10).map(|i| format!("Skill{i}")).collect();
        let user: Vec<String> = (0..7).map(|i| format!("skill{i}")).collect();
        let data = calculate_match(&user, &required);
        assert_eq!(data.match_percentage, 70.0);
        assert!(data.is_eligible);
    }

    #[test]
    fn test_empty_requirements_score_zero() {
        let data = calculate_match(&skills(&["Python"]), &[]);
        assert_eq!(data.match_percentage, 0.0);
        assert!(!data.is_eligible);
    }

    #[test]
    fn test_phase_gating_hides_later_roles() {
        let mut rng = StdRng::seed_from_u64(7);
        let user = skills(&["HTML/CSS", "JavaScript", "React", "Node.js", "SQL", "Python"]);

        let phase1 = get_matches("Software Engineer", &user, 1, &mut rng);
        assert!(phase1.iter().all(|m| m.role == "Frontend Developer Intern"));

        let phase2 = get_matches("Software Engineer", &user, 2, &mut rng);
        assert!(phase2.iter().any(|m| m.role == "Junior Full Stack Developer"));
    }

    #[test]
    fn test_low_matches_are_hidden() {
        let mut rng = StdRng::seed_from_u64(7);
        let matches = get_matches("Software Engineer", &skills(&["Cobol"]), 4, &mut rng);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_matches_sorted_descending() {
        let mut rng = StdRng::seed_from_u64(7);
        let user = skills(&["React", "Node.js", "SQL", "HTML/CSS"]);
        let matches = get_matches("Software Engineer", &user, 4, &mut rng);
        for pair in matches.windows(2) {
            assert!(pair[0].match_percentage >= pair[1].match_percentage);
        }
    }

    #[test]
    fn test_company_assignment_comes_from_career_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        let user = skills(&["HTML/CSS", "JavaScript", "React"]);
        let matches = get_matches("Software Engineer", &user, 1, &mut rng);
        assert!(!matches.is_empty());
        let pool: Vec<&str> = companies_for("Software Engineer")
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert!(matches.iter().all(|m| pool.contains(&m.company_name.as_str())));
    }

    #[test]
    fn test_unknown_career_has_no_roles() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(get_matches("Quantum Gardener", &skills(&["Python"]), 4, &mut rng).is_empty());
        assert!(companies_for("Quantum Gardener").is_empty());
    }
}
