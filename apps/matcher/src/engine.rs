use std::sync::Arc;

use tracing::{info, warn};

use crate::config::Config;
use crate::errors::EngineError;
use crate::extraction::{self, Document};
use crate::llm_client::LlmClient;
use crate::matching::{CatalogMatcher, JobCatalog, LlmCatalogMatcher, LocalCatalogMatcher};
use crate::models::{MatchResult, ScoreResult};
use crate::report::AnalysisReport;
use crate::scoring::{skill_overlap, AtsScorer, LlmAtsScorer, LocalAtsScorer};
use crate::skills::{self, SkillService, SkillSet};

/// Shared engine state. Cheap to clone; the catalog is never mutated after construction.
#[derive(Clone)]
pub struct MatchEngine {
    pub config: Config,
    pub catalog: Arc<JobCatalog>,
    pub skills: SkillService,
    /// Pluggable ATS scorer. Default: LocalAtsScorer. Swap via GEMINI_API_KEY.
    pub ats: Arc<dyn AtsScorer>,
    /// Pluggable catalog matcher. Default: LocalCatalogMatcher. Swap via GEMINI_API_KEY.
    pub matcher: Arc<dyn CatalogMatcher>,
}

impl MatchEngine {
    pub fn new(
        config: Config,
        catalog: Arc<JobCatalog>,
        skills: SkillService,
        ats: Arc<dyn AtsScorer>,
        matcher: Arc<dyn CatalogMatcher>,
    ) -> Self {
        Self {
            config,
            catalog,
            skills,
            ats,
            matcher,
        }
    }

    pub fn from_config(config: Config, catalog: Arc<JobCatalog>) -> Self {
        let local = LocalAtsScorer::new(config.weights);
        let llm = match LlmClient::from_config(&config) {
            Some(Ok(llm)) => Some(llm),
            Some(Err(e)) => {
                warn!("LLM client unavailable ({e}); using local backends");
                None
            }
            None => None,
        };
        let (ats, matcher): (Arc<dyn AtsScorer>, Arc<dyn CatalogMatcher>) = match llm {
            Some(llm) => (
                Arc::new(LlmAtsScorer::new(llm.clone(), local)),
                Arc::new(LlmCatalogMatcher::new(llm)),
            ),
            None => (Arc::new(local), Arc::new(LocalCatalogMatcher)),
        };
        let skills = SkillService::from_config(&config);

        info!(
            "Engine ready: {} job profiles, ATS backend '{}', matcher backend '{}', remote skills {}",
            catalog.len(),
            ats.backend(),
            matcher.backend(),
            if skills.has_remote() { "on" } else { "off" }
        );

        Self::new(config, catalog, skills, ats, matcher)
    }

    pub fn extract_text(&self, document: &Document<'_>) -> String {
        extraction::extract_text(document)
    }

    /// Deterministic dictionary extraction. Use `self.skills` for the layered service.
    pub fn extract_skills(&self, text: &str) -> SkillSet {
        skills::extract_skills(text)
    }

    /// Scores a resume against a job description. Both texts must be non-blank.
    pub async fn score_resume_against_job_description(
        &self,
        resume_text: &str,
        job_text: &str,
    ) -> Result<ScoreResult, EngineError> {
        require_text("resume text", resume_text)?;
        require_text("job description", job_text)?;
        Ok(self.ats.score(resume_text, job_text).await)
    }

    /// Ranks this engine's catalog against the resume.
    pub async fn match_resume_against_catalog(&self, resume_text: &str) -> Vec<MatchResult> {
        self.matcher
            .rank(resume_text, self.catalog.profiles(), self.config.top_n)
            .await
    }

    /// Full report for one resume; the job comparison is included when a description is given.
    pub async fn analyze(
        &self,
        resume_text: &str,
        job_text: Option<&str>,
    ) -> Result<AnalysisReport, EngineError> {
        require_text("resume text", resume_text)?;

        let extracted = self.skills.extract(resume_text).await;
        let matches = self.match_resume_against_catalog(resume_text).await;
        let report = AnalysisReport::new(extracted, matches);

        let Some(job_text) = job_text else {
            return Ok(report);
        };

        let ats = self
            .score_resume_against_job_description(resume_text, job_text)
            .await?;
        let overlap = skill_overlap(
            &self.extract_skills(resume_text),
            &self.extract_skills(job_text),
        );
        Ok(report.with_job_comparison(ats, overlap))
    }
}

fn require_text(what: &str, text: &str) -> Result<(), EngineError> {
    if text.trim().is_empty() {
        return Err(EngineError::InsufficientInput(format!("{what} is empty")));
    }
    Ok(())
}
