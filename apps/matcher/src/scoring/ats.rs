//! ATS scoring: pluggable, trait-based scorer comparing a resume with a job description.
//!
//! Default: `LocalAtsScorer` (pure-Rust, deterministic, fully testable).
//! Optional: `LlmAtsScorer` (generative model, falls back to the local scorer).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::ScoreResult;
use crate::report::assemble_score_result;
use crate::scoring::keywords::{candidate_keywords, partition_by_presence};
use crate::scoring::tfidf::pair_similarity_pct;
use crate::scoring::{blend_score, presence_fraction, ScoringWeights};

/// Missing keywords quoted in the suggestion text.
pub const SUGGESTED_KEYWORDS: usize = 8;
/// Below this presence fraction the suggestions add general coaching.
pub const LOW_PRESENCE_THRESHOLD: f64 = 0.5;

const COACHING_MESSAGE: &str =
    "Try listing key skills and tools prominently in the summary and skills section.";
const GOOD_MATCH_MESSAGE: &str = "Good match!";

/// The scorer trait. Implement this to swap backends without touching callers.
#[async_trait]
pub trait AtsScorer: Send + Sync {
    fn backend(&self) -> &'static str;

    async fn score(&self, resume_text: &str, job_text: &str) -> ScoreResult;
}

/// Every intermediate value of one local scoring pass, before packaging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsBreakdown {
    pub candidates: Vec<String>,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub presence_fraction: f64,
    pub similarity: f64, // percentage
    pub score: f64,
    pub suggestions: String,
}

#[derive(Debug, Clone, Default)]
pub struct LocalAtsScorer {
    weights: ScoringWeights,
}

impl LocalAtsScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Keyword presence + TF-IDF blend.
    ///
    /// 1. Candidates = job-text keywords (see `candidate_keywords`)
    /// 2. matched / missing = candidates present / absent in the lowercased resume
    /// 3. similarity = cosine of the two documents in a TF-IDF model fit on just them
    /// 4. score = similarity_weight × similarity + presence_weight × presence × 100
    ///
    /// Never fails: an empty vocabulary makes the similarity 0.
    pub fn breakdown(&self, resume_text: &str, job_text: &str) -> AtsBreakdown {
        let candidates = candidate_keywords(job_text);
        let (matched, missing) = partition_by_presence(&candidates, resume_text);
        let presence = presence_fraction(matched.len(), candidates.len());

        let similarity = pair_similarity_pct(resume_text, job_text).unwrap_or_else(|e| {
            debug!("Similarity defaulted to 0: {e}");
            0.0
        });

        let score = blend_score(similarity, presence, &self.weights);
        let suggestions = build_suggestions(&missing, presence);

        AtsBreakdown {
            candidates,
            matched,
            missing,
            presence_fraction: presence,
            similarity,
            score,
            suggestions,
        }
    }
}

#[async_trait]
impl AtsScorer for LocalAtsScorer {
    fn backend(&self) -> &'static str {
        "local"
    }

    async fn score(&self, resume_text: &str, job_text: &str) -> ScoreResult {
        assemble_score_result(self.breakdown(resume_text, job_text))
    }
}

/// Builds the human-readable suggestion string from the missing keywords.
pub fn build_suggestions(missing: &[String], presence: f64) -> String {
    let mut parts = Vec::new();
    if !missing.is_empty() {
        let top: Vec<&str> = missing
            .iter()
            .take(SUGGESTED_KEYWORDS)
            .map(String::as_str)
            .collect();
        parts.push(format!("Consider adding keywords: {}", top.join(", ")));
    }
    if presence < LOW_PRESENCE_THRESHOLD {
        parts.push(COACHING_MESSAGE.to_string());
    }

    if parts.is_empty() {
        GOOD_MATCH_MESSAGE.to_string()
    } else {
        parts.join(" ")
    }
}
