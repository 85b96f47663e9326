//! Resume skill extraction and job matching.
//!
//! The four entry points are `extract_text`, `extract_skills`,
//! `score_resume_against_job_description` and `match_resume_against_catalog`;
//! `MatchEngine` bundles them with configuration and the loaded catalog.

pub mod config;
pub mod engine;
pub mod errors;
pub mod extraction;
pub mod llm_client;
pub mod matching;
pub mod models;
pub mod report;
pub mod scoring;
pub mod skills;

use crate::models::{JobProfile, MatchResult, ScoreResult};
use crate::scoring::LocalAtsScorer;

pub use crate::config::Config;
pub use crate::engine::MatchEngine;
pub use crate::errors::EngineError;
pub use crate::extraction::{extract_text, Document};
pub use crate::matching::JobCatalog;
pub use crate::skills::{extract_skills, SkillSet};

/// Local ATS score with default weights. Both texts must be non-blank.
pub fn score_resume_against_job_description(
    resume_text: &str,
    job_text: &str,
) -> Result<ScoreResult, EngineError> {
    if resume_text.trim().is_empty() || job_text.trim().is_empty() {
        return Err(EngineError::InsufficientInput(
            "resume text and job description must both be non-empty".to_string(),
        ));
    }
    let breakdown = LocalAtsScorer::default().breakdown(resume_text, job_text);
    Ok(report::assemble_score_result(breakdown))
}

/// Top profiles of `catalog` for the resume, best first, scored by TF-IDF similarity.
pub fn match_resume_against_catalog(resume_text: &str, catalog: &[JobProfile]) -> Vec<MatchResult> {
    matching::match_all(resume_text, catalog, matching::DEFAULT_TOP_N)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_rejects_empty_job_description() {
        let err = score_resume_against_job_description("Python developer", " ").unwrap_err();
        assert!(matches!(err, EngineError::InsufficientInput(_)));
    }

    #[test]
    fn test_score_partition_covers_candidates() {
        let result = score_resume_against_job_description(
            "Experienced Python developer with SQL and AWS background",
            "Looking for Python, SQL, Docker expert",
        )
        .unwrap();
        assert_eq!(result.matched, vec!["python", "sql"]);
        assert_eq!(result.missing, vec!["looking", "for", "docker", "expert"]);
        assert!((0.0..=100.0).contains(&result.score));
    }

    #[test]
    fn test_match_builtin_catalog_returns_six() {
        let catalog = JobCatalog::builtin().unwrap();
        let results = match_resume_against_catalog("python sql docker aws", catalog.profiles());
        assert_eq!(results.len(), 6);
    }

    #[test]
    fn test_extract_skills_word_boundary() {
        let skills = extract_skills("javascript developer");
        assert!(skills.contains("javascript"));
        assert!(!skills.contains("java"));
    }
}
