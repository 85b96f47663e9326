//! Job catalog: the ordered, read-only list of job profiles available for matching.

use std::path::Path;

use tracing::{info, warn};

use crate::errors::EngineError;
use crate::models::JobProfile;

const BUILTIN_CATALOG: &str = include_str!("../../jobs.json");

/// Loaded once at startup and shared as `Arc<JobCatalog>`; never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobCatalog {
    profiles: Vec<JobProfile>,
}

impl JobCatalog {
    /// Rejects profiles with an empty title or an empty keyword.
    pub fn new(profiles: Vec<JobProfile>) -> Result<Self, EngineError> {
        for (pos, profile) in profiles.iter().enumerate() {
            if profile.title.trim().is_empty() {
                return Err(EngineError::Catalog(format!(
                    "profile at index {pos} has an empty title"
                )));
            }
            if profile.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(EngineError::Catalog(format!(
                    "profile '{}' has an empty keyword",
                    profile.title
                )));
            }
        }
        Ok(Self {
            profiles: profiles.into_iter().map(JobProfile::normalized).collect(),
        })
    }

    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let profiles: Vec<JobProfile> = serde_json::from_str(json)
            .map_err(|e| EngineError::Catalog(format!("invalid catalog JSON: {e}")))?;
        Self::new(profiles)
    }

    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        info!(
            "Loaded {} job profiles from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// The catalog that ships with the crate.
    pub fn builtin() -> Result<Self, EngineError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Loads `path`, or the built-in catalog when the file does not exist.
    pub fn load_or_builtin(path: &Path) -> Result<Self, EngineError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(
                "Catalog {} not found, using built-in catalog",
                path.display()
            );
            Self::builtin()
        }
    }

    pub fn profiles(&self) -> &[JobProfile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_catalog_has_ten_profiles() {
        let catalog = JobCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), 10);
        assert!(catalog.profiles().iter().all(|p| !p.keywords.is_empty()));
    }

    #[test]
    fn test_load_preserves_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"title": "B", "keywords": ["rust"]}}, {{"title": "A", "keywords": []}}]"#
        )
        .unwrap();
        let catalog = JobCatalog::load(file.path()).unwrap();
        let titles: Vec<&str> = catalog.profiles().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A"]);
    }

    #[test]
    fn test_missing_keywords_default_to_empty() {
        let catalog = JobCatalog::from_json(r#"[{"title": "Generalist"}]"#).unwrap();
        assert!(catalog.profiles()[0].keywords.is_empty());
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let err = JobCatalog::from_json(r#"[{"title": " ", "keywords": ["x"]}]"#).unwrap_err();
        assert!(matches!(err, EngineError::Catalog(_)));
    }

    #[test]
    fn test_blank_keyword_is_rejected() {
        let err = JobCatalog::from_json(r#"[{"title": "X", "keywords": ["", "cobol"]}]"#)
            .unwrap_err();
        assert!(matches!(err, EngineError::Catalog(message) if message.contains("'X'")));
    }

    #[test]
    fn test_keywords_are_trimmed() {
        let catalog = JobCatalog::from_json(r#"[{"title": "X", "keywords": [" sql "]}]"#).unwrap();
        assert_eq!(catalog.profiles()[0].keywords, vec!["sql"]);
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        assert!(matches!(
            JobCatalog::from_json("{not json"),
            Err(EngineError::Catalog(_))
        ));
    }

    #[test]
    fn test_missing_file_uses_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = JobCatalog::load_or_builtin(&dir.path().join("absent.json")).unwrap();
        assert_eq!(catalog, JobCatalog::builtin().unwrap());
    }
}
