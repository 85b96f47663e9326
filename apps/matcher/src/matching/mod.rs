//! Job matching: scores one resume against every catalog profile and ranks them.
//!
//! Default: `LocalCatalogMatcher` (TF-IDF ranking, deterministic).
//! Optional: `LlmCatalogMatcher` (generative model, falls back to the local matcher).

pub mod catalog;
pub mod llm;
pub mod prompts;

use std::cmp::Ordering;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::models::{JobProfile, MatchResult};
use crate::scoring::keywords::partition_by_presence;
use crate::scoring::tfidf::{cosine_similarity, TfidfModel};
use crate::scoring::{clamp_score, round2};

pub use catalog::JobCatalog;
pub use llm::LlmCatalogMatcher;

pub const DEFAULT_TOP_N: usize = 6;

/// The catalog ranking trait. Implement this to swap backends without touching callers.
#[async_trait]
pub trait CatalogMatcher: Send + Sync {
    fn backend(&self) -> &'static str;

    /// Best `top_n` profiles for the resume, highest score first.
    async fn rank(&self, resume_text: &str, profiles: &[JobProfile], top_n: usize)
        -> Vec<MatchResult>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalCatalogMatcher;

#[async_trait]
impl CatalogMatcher for LocalCatalogMatcher {
    fn backend(&self) -> &'static str {
        "local"
    }

    async fn rank(
        &self,
        resume_text: &str,
        profiles: &[JobProfile],
        top_n: usize,
    ) -> Vec<MatchResult> {
        match_all(resume_text, profiles, top_n)
    }
}

/// Ranks catalog profiles against a resume.
///
/// Algorithm:
/// 1. Fit one TF-IDF model over the resume plus every profile's joined keywords, so
///    similarities within one pass share a vocabulary
/// 2. Per profile: score = cosine similarity of resume and keyword document, as a percentage
/// 3. matched / missing = keywords present / absent in the resume; they do not affect the score
/// 4. Sort descending by score; equal scores keep catalog order
/// 5. Keep the first `top_n`
///
/// If the joint model cannot be built every score is 0; matched / missing still apply.
pub fn match_all(resume_text: &str, profiles: &[JobProfile], top_n: usize) -> Vec<MatchResult> {
    let job_docs: Vec<String> = profiles.iter().map(JobProfile::keyword_document).collect();

    let mut corpus: Vec<&str> = Vec::with_capacity(job_docs.len() + 1);
    corpus.push(resume_text);
    corpus.extend(job_docs.iter().map(String::as_str));

    let model = match TfidfModel::fit(&corpus[..]) {
        Ok(model) => Some(model),
        Err(e) => {
            warn!("Catalog vectorization failed, similarities default to 0: {e}");
            None
        }
    };
    let resume_vec = model.as_ref().map(|m| m.transform(resume_text));

    let mut results: Vec<MatchResult> = profiles
        .iter()
        .zip(job_docs.iter())
        .map(|(profile, job_doc)| {
            let similarity = match (&model, &resume_vec) {
                (Some(model), Some(resume_vec)) => {
                    cosine_similarity(resume_vec, &model.transform(job_doc)) * 100.0
                }
                _ => 0.0,
            };

            let (matched, missing) = partition_by_presence(&profile.keywords, resume_text);

            MatchResult {
                title: profile.title.clone(),
                score: round2(clamp_score(similarity)),
                matched,
                missing,
                keywords: profile.keywords.clone(),
            }
        })
        .collect();

    // stable: ties stay in catalog order
    results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    results.truncate(top_n);

    debug!(
        "Ranked {} profiles, returning {}",
        profiles.len(),
        results.len()
    );
    results
}
