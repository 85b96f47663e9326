//! Similarity scoring: blends literal keyword coverage with TF-IDF topical similarity.

pub mod ats;
pub mod keywords;
pub mod llm;
pub mod overlap;
pub mod prompts;
pub mod tfidf;

use serde::{Deserialize, Serialize};

pub use ats::{AtsBreakdown, AtsScorer, LocalAtsScorer};
pub use llm::LlmAtsScorer;
pub use overlap::{skill_overlap, SkillOverlap};

/// Blend weights for the final score: `similarity × sim% + presence × presence%`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub similarity: f64,
    pub presence: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            similarity: 0.6,
            presence: 0.4,
        }
    }
}

/// Combined score on a 0–100 scale, clamped and rounded to two decimals.
///
/// `similarity_pct` is already a percentage; `presence_fraction` is in 0..=1.
pub fn blend_score(similarity_pct: f64, presence_fraction: f64, weights: &ScoringWeights) -> f64 {
    let raw = weights.similarity * similarity_pct + weights.presence * presence_fraction * 100.0;
    round2(clamp_score(raw))
}

pub fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 100.0)
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `matched / max(1, candidates)`.
pub fn presence_fraction(matched: usize, candidates: usize) -> f64 {
    matched as f64 / candidates.max(1) as f64
}
