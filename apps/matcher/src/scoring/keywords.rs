//! Candidate keyword extraction from free job-description text.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Shortest candidate keyword.
pub const MIN_CANDIDATE_LEN: usize = 2;

static CANDIDATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z0-9+#.\-]{2,}").expect("valid candidate keyword regex"));

/// Lowercases `text` and returns every alphanumeric / `+` / `#` / `.` / `-` run of two or
/// more characters, deduplicated in order of first appearance.
pub fn candidate_keywords(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut seen = HashSet::new();
    CANDIDATE_RE
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .filter(|keyword| seen.insert(keyword.clone()))
        .collect()
}

/// Splits `candidates` into those occurring as a substring of `text` and those that do not.
/// Both lists keep candidate order; together they are exactly the non-blank `candidates`.
pub fn partition_by_presence<S: AsRef<str>>(candidates: &[S], text: &str) -> (Vec<String>, Vec<String>) {
    let lower = text.to_lowercase();
    let mut matched = Vec::new();
    let mut missing = Vec::new();
    for candidate in candidates {
        let candidate = candidate.as_ref();
        // a blank needle matches every text
        if candidate.trim().is_empty() {
            continue;
        }
        if lower.contains(&candidate.to_lowercase()) {
            matched.push(candidate.to_string());
        } else {
            missing.push(candidate.to_string());
        }
    }
    (matched, missing)
}
