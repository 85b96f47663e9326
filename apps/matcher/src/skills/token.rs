//! Last-resort extractor: pulls tech-looking tokens straight out of the text.

use std::collections::HashSet;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use super::SkillExtractor;

static TECH_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[a-zA-Z0-9+#.\-]{3,}\b").expect("valid tech token regex"));

const STOPWORDS: &[&str] = &["the", "and", "for", "with", "this", "that", "from"];

/// Extracts alphanumeric / `+` / `#` / `.` / `-` tokens of three or more characters,
/// skipping a small stopword list, deduplicated in first-seen order.
#[derive(Debug, Clone)]
pub struct TokenExtractor {
    max_keywords: usize,
}

impl TokenExtractor {
    pub fn new(max_keywords: usize) -> Self {
        Self { max_keywords }
    }

    pub fn tokens(&self, text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        TECH_TOKEN_RE
            .find_iter(text)
            .map(|m| m.as_str().to_lowercase())
            .filter(|token| !STOPWORDS.contains(&token.as_str()))
            .filter(|token| seen.insert(token.clone()))
            .take(self.max_keywords)
            .collect()
    }
}

#[async_trait]
impl SkillExtractor for TokenExtractor {
    fn name(&self) -> &'static str {
        "token"
    }

    async fn extract(&self, text: &str) -> Vec<String> {
        self.tokens(text)
    }
}
