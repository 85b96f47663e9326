//! Dictionary skill overlap between a resume and a job description.

use serde::{Deserialize, Serialize};

use crate::scoring::round2;
use crate::skills::SkillSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillOverlap {
    pub coverage: f64, // 0..=100
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Share of the job's skills that the resume also lists. Zero when the job names none.
pub fn skill_overlap(resume_skills: &SkillSet, job_skills: &SkillSet) -> SkillOverlap {
    let matched: Vec<String> = job_skills.intersection(resume_skills).cloned().collect();
    let missing: Vec<String> = job_skills.difference(resume_skills).cloned().collect();

    let coverage = if job_skills.is_empty() {
        0.0
    } else {
        round2(matched.len() as f64 / job_skills.len() as f64 * 100.0)
    };

    SkillOverlap {
        coverage,
        matched,
        missing,
    }
}
