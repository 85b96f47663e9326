use serde::{Deserialize, Serialize};

/// ATS-style comparison of one resume against one job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: f64, // 0..=100, two decimals
    pub matched: Vec<String>, // first 50, discovery order
    pub missing: Vec<String>, // first 50, discovery order
    pub suggestions: String,
}
