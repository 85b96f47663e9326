//! Model-backed catalog matcher. Advisory only: any failure answers with the local matcher.

use std::cmp::Ordering;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::llm_client::{parse_json_reply, LlmClient, LlmError};
use crate::matching::prompts::{build_catalog_match_prompt, CATALOG_MATCH_SYSTEM};
use crate::matching::{CatalogMatcher, LocalCatalogMatcher};
use crate::models::{JobProfile, MatchResult};
use crate::scoring::{clamp_score, round2};

/// One entry of the JSON array the model is asked for.
#[derive(Debug, Deserialize)]
pub struct LlmMatch {
    pub title: String,
    #[serde(default)]
    pub score: f64,
    #[serde(default, alias = "matched_skills")]
    pub matched: Vec<String>,
    #[serde(default, alias = "missing_skills")]
    pub missing: Vec<String>,
}

/// Maps model entries onto catalog profiles.
///
/// Entries whose title is not in the catalog are dropped, as are repeated titles.
/// Scores are clamped to 0..=100 and rounded; the result is sorted descending
/// (stable, so ties keep the model's order) and cut to `top_n`.
pub fn normalize_matches(
    entries: Vec<LlmMatch>,
    profiles: &[JobProfile],
    top_n: usize,
) -> Vec<MatchResult> {
    let mut seen: Vec<&str> = Vec::new();
    let mut results: Vec<MatchResult> = Vec::with_capacity(entries.len());

    for entry in entries {
        let title = entry.title.trim();
        let Some(profile) = profiles
            .iter()
            .find(|p| p.title.eq_ignore_ascii_case(title))
        else {
            debug!("Model returned unknown job title '{title}', skipping");
            continue;
        };
        if seen.contains(&profile.title.as_str()) {
            continue;
        }
        seen.push(&profile.title);

        let matched = clean_skills(entry.matched);
        let missing: Vec<String> = clean_skills(entry.missing)
            .into_iter()
            .filter(|k| !matched.contains(k))
            .collect();

        results.push(MatchResult {
            title: profile.title.clone(),
            score: round2(clamp_score(entry.score)),
            matched,
            missing,
            keywords: profile.keywords.clone(),
        });
    }

    results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    results.truncate(top_n);
    results
}

fn clean_skills(skills: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(skills.len());
    for skill in skills {
        let skill = skill.trim().to_string();
        if !skill.is_empty() && !out.contains(&skill) {
            out.push(skill);
        }
    }
    out
}

pub struct LlmCatalogMatcher {
    llm: LlmClient,
    fallback: LocalCatalogMatcher,
}

impl LlmCatalogMatcher {
    pub fn new(llm: LlmClient) -> Self {
        Self {
            llm,
            fallback: LocalCatalogMatcher,
        }
    }

    async fn ask(
        &self,
        resume_text: &str,
        profiles: &[JobProfile],
    ) -> Result<Vec<LlmMatch>, LlmError> {
        let prompt = build_catalog_match_prompt(resume_text, profiles);
        let response = self.llm.call(&prompt, CATALOG_MATCH_SYSTEM).await?;
        let text = response.text().ok_or(LlmError::EmptyContent)?;
        parse_json_reply(text)
    }
}

#[async_trait]
impl CatalogMatcher for LlmCatalogMatcher {
    fn backend(&self) -> &'static str {
        "llm"
    }

    async fn rank(
        &self,
        resume_text: &str,
        profiles: &[JobProfile],
        top_n: usize,
    ) -> Vec<MatchResult> {
        if profiles.is_empty() {
            return Vec::new();
        }
        match self.ask(resume_text, profiles).await {
            Ok(entries) => {
                let results = normalize_matches(entries, profiles, top_n);
                if !results.is_empty() {
                    return results;
                }
                warn!("LLM catalog match named no known jobs; using local matcher");
            }
            Err(e) => warn!("LLM catalog matching failed ({e}); using local matcher"),
        }
        self.fallback.rank(resume_text, profiles, top_n).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::matching::{match_all, DEFAULT_TOP_N};

    fn profiles() -> Vec<JobProfile> {
        vec![
            JobProfile::new("Data Analyst", &["sql", "excel"]),
            JobProfile::new("DevOps Engineer", &["docker", "kubernetes"]),
            JobProfile::new("Frontend Developer", &["react", "css"]),
        ]
    }

    fn parse(reply: &str) -> Vec<LlmMatch> {
        parse_json_reply(reply).unwrap()
    }

    #[test]
    fn test_reply_in_prose_is_sorted_and_clamped() {
        let entries = parse(
            "Here you go:\n[{\"title\": \"Data Analyst\", \"score\": 61.239, \"matched_skills\": [\"sql\"], \"missing_skills\": [\"excel\"]}, \
             {\"title\": \"devops engineer\", \"score\": 140}]",
        );
        let results = normalize_matches(entries, &profiles(), DEFAULT_TOP_N);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "DevOps Engineer");
        assert_eq!(results[0].score, 100.0);
        assert_eq!(results[0].keywords, vec!["docker", "kubernetes"]);
        assert_eq!(results[1].score, 61.24);
        assert_eq!(results[1].matched, vec!["sql"]);
        assert_eq!(results[1].missing, vec!["excel"]);
    }

    #[test]
    fn test_unknown_and_repeated_titles_are_dropped() {
        let entries = parse(
            r#"[{"title": "Astronaut", "score": 99}, {"title": "Data Analyst", "score": 40},
                {"title": "Data Analyst", "score": 90}]"#,
        );
        let results = normalize_matches(entries, &profiles(), DEFAULT_TOP_N);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Data Analyst");
        assert_eq!(results[0].score, 40.0);
    }

    #[test]
    fn test_overlapping_skill_lists_are_disjoint() {
        let entries = parse(
            r#"[{"title": "Data Analyst", "score": -5, "matched": ["sql", " sql ", ""], "missing": ["sql", "excel"]}]"#,
        );
        let results = normalize_matches(entries, &profiles(), DEFAULT_TOP_N);
        assert_eq!(results[0].score, 0.0);
        assert_eq!(results[0].matched, vec!["sql"]);
        assert_eq!(results[0].missing, vec!["excel"]);
    }

    #[test]
    fn test_truncates_to_top_n() {
        let entries = parse(
            r#"[{"title": "Data Analyst", "score": 10}, {"title": "DevOps Engineer", "score": 20},
                {"title": "Frontend Developer", "score": 30}]"#,
        );
        let results = normalize_matches(entries, &profiles(), 2);
        let titles: Vec<&str> = results.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Frontend Developer", "DevOps Engineer"]);
    }

    #[tokio::test]
    async fn test_unreachable_model_falls_back_to_local() {
        let llm = LlmClient::new(
            "key".to_string(),
            "http://127.0.0.1:9/v1beta/models",
            "test-model",
            Duration::from_secs(2),
        )
        .unwrap();
        let matcher = LlmCatalogMatcher::new(llm);
        let resume = "SQL and Excel reporting";
        let results = matcher.rank(resume, &profiles(), DEFAULT_TOP_N).await;
        assert_eq!(results, match_all(resume, &profiles(), DEFAULT_TOP_N));
        assert_eq!(matcher.backend(), "llm");
    }
}
