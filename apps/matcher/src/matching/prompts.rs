//! LLM prompt constants for model-backed catalog matching.
//!
//! The prompt instructs the model to return a JSON array, one object per job.
//! Callers deserialize via `parse_json_reply::<Vec<LlmMatch>>()`.

use crate::models::JobProfile;

pub const CATALOG_MATCH_SYSTEM: &str = "\
You are a job-matching assistant. Given a resume and a list of job roles, rate how well \
the resume fits each role.\n\
\n\
Respond with valid JSON only. Do NOT use markdown code fences. \
Do NOT add any explanation outside the JSON array.";

const CATALOG_MATCH_RESPONSE_SHAPE: &str = "\
Return a JSON array only, one entry per job: [{\"title\": \"<job title as listed>\", \
\"score\": <number 0-100>, \"matched_skills\": [\"skill\", ...], \
\"missing_skills\": [\"skill\", ...]}]";

/// One `- title: kw1, kw2` line per profile.
pub fn format_job_list(profiles: &[JobProfile]) -> String {
    profiles
        .iter()
        .map(|p| format!("- {}: {}", p.title, p.keywords.join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn build_catalog_match_prompt(resume_text: &str, profiles: &[JobProfile]) -> String {
    let jobs = format_job_list(profiles);
    format!(
        "Jobs:\n{jobs}\n\n\
         Resume:\n{resume_text}\n\n\
         {CATALOG_MATCH_RESPONSE_SHAPE}"
    )
}
