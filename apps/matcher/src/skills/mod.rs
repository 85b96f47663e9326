//! Skill extraction: pluggable, trait-based extractors that turn text into skill tokens.
//!
//! `DictionaryMatcher` is the deterministic default used for scoring.
//! `RemoteKeyphraseExtractor` is optional and advisory; `TokenExtractor` is the last resort.
//! `SkillService` layers them: an empty result from one strategy hands over to the next.

pub mod dictionary;
pub mod remote;
pub mod token;

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;

pub use dictionary::DictionaryMatcher;
pub use remote::RemoteKeyphraseExtractor;
pub use token::TokenExtractor;

/// Normalized lowercase skill tokens, no duplicates, alphabetical iteration order.
pub type SkillSet = BTreeSet<String>;

/// The extraction capability. Implement this to add a strategy without touching callers.
#[async_trait]
pub trait SkillExtractor: Send + Sync {
    /// Short label reported alongside results.
    fn name(&self) -> &'static str;

    /// Extracts skills from `text`. Never fails; "nothing found" is an empty list.
    async fn extract(&self, text: &str) -> Vec<String>;
}

/// Which strategy produced an extraction result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillSource {
    Remote,
    Dictionary,
    Token,
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedSkills {
    pub skills: Vec<String>,
    pub source: SkillSource,
}

impl ExtractedSkills {
    fn empty() -> Self {
        Self {
            skills: Vec::new(),
            source: SkillSource::None,
        }
    }
}

/// Deterministic skill extraction via the dictionary matcher.
pub fn extract_skills(text: &str) -> SkillSet {
    DictionaryMatcher::new().find(text)
}

/// Layered extraction: remote (when configured) → dictionary → token fallback.
///
/// The token fallback only runs when no remote credential exists at all and the
/// dictionary found nothing.
#[derive(Clone)]
pub struct SkillService {
    remote: Option<Arc<dyn SkillExtractor>>,
    dictionary: DictionaryMatcher,
    fallback: TokenExtractor,
}

impl SkillService {
    pub fn new(remote: Option<Arc<dyn SkillExtractor>>, max_keywords: usize) -> Self {
        Self {
            remote,
            dictionary: DictionaryMatcher::new(),
            fallback: TokenExtractor::new(max_keywords),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let remote = RemoteKeyphraseExtractor::from_config(config)
            .map(|extractor| Arc::new(extractor) as Arc<dyn SkillExtractor>);
        Self::new(remote, config.max_keywords)
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    pub async fn extract(&self, text: &str) -> ExtractedSkills {
        let text = text.trim();
        if text.is_empty() {
            return ExtractedSkills::empty();
        }

        if let Some(remote) = &self.remote {
            let skills = remote.extract(text).await;
            if !skills.is_empty() {
                return ExtractedSkills {
                    skills,
                    source: SkillSource::Remote,
                };
            }
            debug!("Remote extractor '{}' returned nothing, using dictionary", remote.name());
        }

        let skills = self.dictionary.extract(text).await;
        if !skills.is_empty() || self.remote.is_some() {
            return ExtractedSkills {
                skills,
                source: SkillSource::Dictionary,
            };
        }

        let skills = self.fallback.extract(text).await;
        let source = if skills.is_empty() {
            SkillSource::None
        } else {
            SkillSource::Token
        };
        ExtractedSkills { skills, source }
    }
}
