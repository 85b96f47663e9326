use serde::{Deserialize, Serialize};

/// A catalog entry: a job title and the keywords that describe it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobProfile {
    pub title: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl JobProfile {
    /// Keywords are trimmed; blank ones are dropped.
    pub fn new(title: impl Into<String>, keywords: &[&str]) -> Self {
        Self {
            title: title.into(),
            keywords: clean_keywords(keywords.iter().copied()),
        }
    }

    /// Same profile with keywords trimmed and blank ones dropped.
    pub fn normalized(self) -> Self {
        Self {
            keywords: clean_keywords(self.keywords.iter().map(String::as_str)),
            title: self.title,
        }
    }

    /// The keyword list joined into one document for vectorization.
    pub fn keyword_document(&self) -> String {
        self.keywords.join(" ")
    }
}

fn clean_keywords<'a>(keywords: impl Iterator<Item = &'a str>) -> Vec<String> {
    keywords
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

/// One ranked row of a catalog matching pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub title: String,
    pub score: f64, // 0..=100
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub keywords: Vec<String>,
}
