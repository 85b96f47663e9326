//! Model-backed ATS scorer. Advisory only: any failure answers with the local scorer.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use crate::llm_client::LlmClient;
use crate::models::ScoreResult;
use crate::report::MAX_LISTED_KEYWORDS;
use crate::scoring::ats::{AtsScorer, LocalAtsScorer};
use crate::scoring::prompts::{build_ats_prompt, ATS_SCORE_SYSTEM};
use crate::scoring::{clamp_score, round2};

/// The JSON shape the model is asked for. Missing fields default rather than fail.
#[derive(Debug, Deserialize)]
pub struct LlmScore {
    pub score: f64,
    #[serde(default)]
    pub matched: Vec<String>,
    #[serde(default)]
    pub missing: Vec<String>,
    #[serde(default)]
    pub suggestions: String,
}

impl LlmScore {
    /// Normalizes model output into the same bounds the local scorer guarantees.
    pub fn into_score_result(self) -> ScoreResult {
        let matched: Vec<String> = normalize_keywords(self.matched);
        let missing: Vec<String> = normalize_keywords(self.missing)
            .into_iter()
            .filter(|k| !matched.contains(k))
            .collect();

        ScoreResult {
            score: round2(clamp_score(self.score)),
            matched: matched.into_iter().take(MAX_LISTED_KEYWORDS).collect(),
            missing: missing.into_iter().take(MAX_LISTED_KEYWORDS).collect(),
            suggestions: self.suggestions.trim().to_string(),
        }
    }
}

fn normalize_keywords(keywords: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(keywords.len());
    for keyword in keywords {
        let keyword = keyword.trim().to_lowercase();
        if !keyword.is_empty() && !out.contains(&keyword) {
            out.push(keyword);
        }
    }
    out
}

pub struct LlmAtsScorer {
    llm: LlmClient,
    fallback: LocalAtsScorer,
}

impl LlmAtsScorer {
    pub fn new(llm: LlmClient, fallback: LocalAtsScorer) -> Self {
        Self { llm, fallback }
    }
}

#[async_trait]
impl AtsScorer for LlmAtsScorer {
    fn backend(&self) -> &'static str {
        "llm"
    }

    async fn score(&self, resume_text: &str, job_text: &str) -> ScoreResult {
        let prompt = build_ats_prompt(resume_text, job_text);
        match self.llm.call_json::<LlmScore>(&prompt, ATS_SCORE_SYSTEM).await {
            Ok(score) => score.into_score_result(),
            Err(e) => {
                warn!("LLM ATS scoring failed ({e}); using local scorer");
                self.fallback.score(resume_text, job_text).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::llm_client::parse_json_reply;

    #[test]
    fn test_out_of_range_score_is_clamped() {
        let parsed: LlmScore = parse_json_reply(r#"{"score": 140, "matched": ["Python"]}"#).unwrap();
        let result = parsed.into_score_result();
        assert_eq!(result.score, 100.0);
        assert_eq!(result.matched, vec!["python"]);
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_overlapping_lists_are_disjoint() {
        let parsed: LlmScore = parse_json_reply(
            "```json\n{\"score\": 55.556, \"matched\": [\"SQL\", \"sql\"], \"missing\": [\"sql\", \"Docker\"], \"suggestions\": \" add docker \"}\n```",
        )
        .unwrap();
        let result = parsed.into_score_result();
        assert_eq!(result.score, 55.56);
        assert_eq!(result.matched, vec!["sql"]);
        assert_eq!(result.missing, vec!["docker"]);
        assert_eq!(result.suggestions, "add docker");
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
        let scorer = LlmAtsScorer::new(llm, LocalAtsScorer::default());
        let result = scorer
            .score("Python and SQL", "Python, SQL, Docker")
            .await;
        let local = LocalAtsScorer::default()
            .score("Python and SQL", "Python, SQL, Docker")
            .await;
        assert_eq!(result, local);
        assert_eq!(scorer.backend(), "llm");
    }
}
