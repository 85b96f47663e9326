//! LLM prompt constants for model-backed ATS scoring.
//!
//! The prompt instructs the model to return a single JSON object.
//! Callers deserialize via `llm.call_json::<LlmScore>()`.

pub const ATS_SCORE_SYSTEM: &str = "\
You are an applicant tracking system. Compare a resume with a job description and \
score how well the resume covers the job's skills, tools and responsibilities.\n\
\n\
Respond with valid JSON only. Do NOT use markdown code fences. \
Do NOT add any explanation outside the JSON object.";

const ATS_SCORE_RESPONSE_SHAPE: &str = "\
Return JSON only: {\"score\": <number 0-100>, \"matched\": [\"skill\", ...], \
\"missing\": [\"skill\", ...], \"suggestions\": \"one short paragraph\"}";

/// Inputs are inserted verbatim; placeholder-like text inside them is left alone.
pub fn build_ats_prompt(resume_text: &str, job_text: &str) -> String {
    format!(
        "Compare this resume and job description.\n\n\
         RESUME:\n{resume_text}\n\n\
         JOB DESCRIPTION:\n{job_text}\n\n\
         {ATS_SCORE_RESPONSE_SHAPE}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_both_texts_in_order() {
        let prompt = build_ats_prompt("Rust engineer", "Needs Kafka");
        let resume_at = prompt.find("Rust engineer").unwrap();
        let job_at = prompt.find("Needs Kafka").unwrap();
        assert!(resume_at < job_at);
        assert!(prompt.ends_with(ATS_SCORE_RESPONSE_SHAPE));
    }

    #[test]
    fn test_placeholder_text_in_resume_is_not_substituted() {
        let prompt = build_ats_prompt("literal {job_text} here", "Needs Kafka");
        assert!(prompt.contains("literal {job_text} here"));
        assert_eq!(prompt.matches("Needs Kafka").count(), 1);
    }
}
