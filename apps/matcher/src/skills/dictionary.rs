//! Dictionary matcher: deterministic, offline skill extraction against a curated list.

use std::collections::BTreeSet;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use tracing::debug;

use super::{SkillExtractor, SkillSet};

/// Minimum length of a single-token dictionary skill. Multi-word phrases are exempt.
pub const MIN_SKILL_LEN: usize = 3;

/// Curated skill phrases, lowercase.
static KNOWN_SKILLS: Lazy<BTreeSet<&'static str>> = Lazy::new(|| {
    [
        // languages
        "python", "java", "c++", "javascript", "typescript", "html", "css", "sql",
        // data & ml
        "machine learning", "deep learning", "nlp", "computer vision", "data analysis",
        "tensorflow", "pytorch", "scikit-learn", "pandas", "numpy",
        // analytics tools
        "excel", "power bi", "tableau",
        // databases
        "mysql", "postgresql", "mongodb",
        // cloud & ops
        "cloud", "aws", "azure", "docker", "kubernetes", "git", "linux",
        // web
        "react", "angular", "nodejs", "node.js", "flask", "django", "bootstrap", "rest", "api",
    ]
    .into_iter()
    .collect()
});

/// Matches text against the curated skill list using word-boundary-aware search,
/// so "java" is not found inside "javascript".
#[derive(Debug, Clone, Default)]
pub struct DictionaryMatcher;

impl DictionaryMatcher {
    pub fn new() -> Self {
        Self
    }

    /// The dictionary phrases present in `text`, sorted alphabetically.
    pub fn find(&self, text: &str) -> SkillSet {
        let text_lower = text.to_lowercase();
        let found: SkillSet = KNOWN_SKILLS
            .iter()
            .filter(|skill| contains_phrase(&text_lower, skill))
            .map(|skill| skill.to_string())
            .collect();

        debug!("Dictionary matched {} skills", found.len());
        found
    }

    pub fn known_skills() -> impl Iterator<Item = &'static str> {
        KNOWN_SKILLS.iter().copied()
    }
}

#[async_trait]
impl SkillExtractor for DictionaryMatcher {
    fn name(&self) -> &'static str {
        "dictionary"
    }

    async fn extract(&self, text: &str) -> Vec<String> {
        self.find(text).into_iter().collect()
    }
}

/// True if `phrase` occurs in `haystack` with no alphanumeric character directly on
/// either side of the occurrence.
pub fn contains_phrase(haystack: &str, phrase: &str) -> bool {
    if phrase.is_empty() {
        return false;
    }
    haystack.match_indices(phrase).any(|(start, matched)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + matched.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_java_not_found_inside_javascript() {
        let skills = DictionaryMatcher::new().find("javascript developer");
        assert!(skills.contains("javascript"));
        assert!(!skills.contains("java"));
    }

    #[test]
    fn test_multi_word_phrase_matches() {
        let skills = DictionaryMatcher::new().find("Built dashboards in Power BI; machine learning");
        assert!(skills.contains("power bi"));
        assert!(skills.contains("machine learning"));
    }

    #[test]
    fn test_symbol_skills_match_at_boundaries() {
        let skills = DictionaryMatcher::new().find("Wrote C++ services and a Node.js gateway.");
        assert!(skills.contains("c++"));
        assert!(skills.contains("node.js"));
    }

    #[test]
    fn test_case_insensitive() {
        let skills = DictionaryMatcher::new().find("PYTHON, Docker and AWS");
        let expected: SkillSet = ["aws", "docker", "python"].iter().map(|s| s.to_string()).collect();
        assert_eq!(skills, expected);
    }

    #[test]
    fn test_idempotent() {
        let matcher = DictionaryMatcher::new();
        let text = "Senior engineer: Kubernetes, Git, React, SQL, excel wizard";
        assert_eq!(matcher.find(text), matcher.find(text));
    }

    #[test]
    fn test_single_token_skills_respect_min_length() {
        for skill in DictionaryMatcher::known_skills() {
            assert!(!skill.trim().is_empty());
            if !skill.contains(' ') {
                assert!(skill.chars().count() >= MIN_SKILL_LEN, "'{skill}' too short");
            }
        }
    }

    #[test]
    fn test_contains_phrase_boundaries() {
        assert!(contains_phrase("i know java.", "java"));
        assert!(contains_phrase("java", "java"));
        assert!(!contains_phrase("javascript", "java"));
        assert!(!contains_phrase("restful", "rest"));
        // a later boundary-delimited occurrence still counts
        assert!(contains_phrase("javascript and java", "java"));
    }

    #[tokio::test]
    async fn test_trait_extract_is_sorted() {
        let skills = DictionaryMatcher::new().extract("sql, aws, python").await;
        assert_eq!(skills, vec!["aws", "python", "sql"]);
    }
}
