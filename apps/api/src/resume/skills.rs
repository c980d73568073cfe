//! Fixed-vocabulary skill tagging over extracted resume text.
//!
//! Each vocabulary entry is matched with a boundary-anchored regex against
//! the lowercased raw text, so "Go" never fires inside "good" while skills
//! containing punctuation ("C++", "Node.js", "CI/CD") still match literally.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A skill name with the category/description metadata downstream
/// presentation layers display. The engine itself only needs the name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillInfo {
    pub name: String,
    pub category: String,
    pub description: String,
}

static VOCABULARY: Lazy<Vec<(SkillInfo, Regex)>> = Lazy::new(|| {
    let entries: Vec<SkillInfo> =
        serde_json::from_str(include_str!("../../content/skill_vocabulary.json"))
            .expect("embedded content table 'skill_vocabulary' is malformed");

    entries
        .into_iter()
        .map(|info| {
            let pattern = format!(
                "(?i)(^|[^a-z0-9]){}([^a-z0-9]|$)",
                regex::escape(&info.name)
            );
            let re = Regex::new(&pattern)
                .unwrap_or_else(|e| panic!("bad vocabulary pattern for '{}': {e}", info.name));
            (info, re)
        })
        .collect()
});

/// Scans text for every vocabulary skill it mentions. Output is sorted by
/// name and de-duplicated; matching is case-insensitive.
pub fn extract_skills(text: &str) -> Vec<SkillInfo> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut found: Vec<SkillInfo> = VOCABULARY
        .iter()
        .filter(|(_, re)| re.is_match(text))
        .map(|(info, _)| info.clone())
        .collect();

    found.sort_by(|a, b| a.name.cmp(&b.name));
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(text: &str) -> Vec<String> {
        extract_skills(text).into_iter().map(|s| s.name).collect()
    }

    #[test]
    fn test_basic_extraction() {
        let found = names("Experienced Python developer with PostgreSQL and Docker.");
        assert!(found.contains(&"Python".to_string()));
        assert!(found.contains(&"PostgreSQL".to_string()));
        assert!(found.contains(&"Docker".to_string()));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let found = names("worked with PYTHON and react");
        assert!(found.contains(&"Python".to_string()));
        assert!(found.contains(&"React".to_string()));
    }

    #[test]
    fn test_word_boundaries_prevent_partial_matches() {
        // "Go" must not match inside "good" or "Django" inside "Djangoesque".
        let found = names("A good Djangoesque approach to cargo handling");
        assert!(!found.contains(&"Go".to_string()));
        assert!(!found.contains(&"Django".to_string()));
    }

    #[test]
    fn test_punctuated_skills_match_literally() {
        let found = names("Shipped C++ services and Node.js APIs with CI/CD pipelines.");
        assert!(found.contains(&"C++".to_string()));
        assert!(found.contains(&"Node.js".to_string()));
        assert!(found.contains(&"CI/CD".to_string()));
    }

    #[test]
    fn test_cpp_does_not_imply_csharp() {
        let found = names("Ten years of C++.");
        assert!(found.contains(&"C++".to_string()));
        assert!(!found.contains(&"C#".to_string()));
    }

    #[test]
    fn test_output_is_sorted_and_deduplicated() {
        let found = names("SQL, sql, and more SQL. Also Python.");
        let sql_count = found.iter().filter(|n| *n == "SQL").count();
        assert_eq!(sql_count, 1);
        let mut sorted = found.clone();
        sorted.sort();
        assert_eq!(found, sorted);
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        assert!(extract_skills("").is_empty());
        assert!(extract_skills("   ").is_empty());
    }

    #[test]
    fn test_metadata_is_attached() {
        let found = extract_skills("Python");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].category, "Programming Languages");
        assert!(!found[0].description.is_empty());
    }
}
