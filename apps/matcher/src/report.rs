//! Result assembly: packages scorer and matcher output into the response shapes.
//! No scoring happens here.

use serde::{Deserialize, Serialize};

use crate::models::{MatchResult, ScoreResult};
use crate::scoring::{AtsBreakdown, SkillOverlap};
use crate::skills::{ExtractedSkills, SkillSource};

/// Matched / missing lists in a `ScoreResult` are cut to this many entries.
pub const MAX_LISTED_KEYWORDS: usize = 50;

pub fn assemble_score_result(breakdown: AtsBreakdown) -> ScoreResult {
    ScoreResult {
        score: breakdown.score,
        matched: breakdown
            .matched
            .into_iter()
            .take(MAX_LISTED_KEYWORDS)
            .collect(),
        missing: breakdown
            .missing
            .into_iter()
            .take(MAX_LISTED_KEYWORDS)
            .collect(),
        suggestions: breakdown.suggestions,
    }
}

/// Everything known about one resume in a single response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub resume_skills: Vec<String>,
    pub skill_source: SkillSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ats: Option<ScoreResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_overlap: Option<SkillOverlap>,
    pub matches: Vec<MatchResult>,
}

impl AnalysisReport {
    pub fn new(skills: ExtractedSkills, matches: Vec<MatchResult>) -> Self {
        Self {
            resume_skills: skills.skills,
            skill_source: skills.source,
            ats: None,
            skill_overlap: None,
            matches,
        }
    }

    pub fn with_job_comparison(mut self, ats: ScoreResult, overlap: SkillOverlap) -> Self {
        self.ats = Some(ats);
        self.skill_overlap = Some(overlap);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn breakdown(matched: usize, missing: usize) -> AtsBreakdown {
        let matched: Vec<String> = (0..matched).map(|i| format!("m{i}")).collect();
        let missing: Vec<String> = (0..missing).map(|i| format!("x{i}")).collect();
        AtsBreakdown {
            candidates: matched.iter().chain(missing.iter()).cloned().collect(),
            matched,
            missing,
            presence_fraction: 0.5,
            similarity: 10.0,
            score: 42.5,
            suggestions: "Consider adding keywords: x0".to_string(),
        }
    }

    #[test]
    fn test_lists_bounded_to_fifty_in_discovery_order() {
        let result = assemble_score_result(breakdown(60, 3));
        assert_eq!(result.matched.len(), 50);
        assert_eq!(result.matched[0], "m0");
        assert_eq!(result.matched[49], "m49");
        assert_eq!(result.missing, vec!["x0", "x1", "x2"]);
        assert_eq!(result.score, 42.5);
    }

    #[test]
    fn test_score_result_field_names() {
        let value = serde_json::to_value(assemble_score_result(breakdown(1, 1))).unwrap();
        assert_eq!(
            value,
            json!({
                "score": 42.5,
                "matched": ["m0"],
                "missing": ["x0"],
                "suggestions": "Consider adding keywords: x0"
            })
        );
    }

    #[test]
    fn test_match_result_field_names() {
        let value = serde_json::to_value(MatchResult {
            title: "Data Analyst".to_string(),
            score: 12.0,
            matched: vec!["sql".to_string()],
            missing: vec![],
            keywords: vec!["sql".to_string()],
        })
        .unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        for key in ["title", "score", "matched", "missing", "keywords"] {
            assert!(keys.contains(&key), "missing field {key}");
        }
    }

    #[test]
    fn test_report_omits_absent_job_comparison() {
        let skills = ExtractedSkills {
            skills: vec!["python".to_string()],
            source: SkillSource::Dictionary,
        };
        let value = serde_json::to_value(AnalysisReport::new(skills, vec![])).unwrap();
        assert_eq!(value["skill_source"], "dictionary");
        assert!(value.get("ats").is_none());
        assert!(value.get("skill_overlap").is_none());
    }
}
