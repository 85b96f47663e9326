use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::scoring::ScoringWeights;

const DEFAULT_HF_MODEL: &str = "mrm8488/t5-base-finetuned-keyphrase-extraction";
const DEFAULT_HF_API_BASE: &str = "https://api-inference.huggingface.co/models";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Engine configuration loaded from environment variables.
/// Every variable is optional; remote collaborators are disabled when their key is unset.
#[derive(Debug, Clone)]
pub struct Config {
    pub hf_api_token: Option<String>,
    pub hf_model: String,
    pub hf_api_base: String,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub jobs_path: PathBuf,
    pub top_n: usize,
    pub max_keywords: usize,
    pub remote_max_keywords: usize,
    pub remote_max_new_tokens: u32,
    pub request_timeout_secs: u64,
    pub weights: ScoringWeights,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hf_api_token: None,
            hf_model: DEFAULT_HF_MODEL.to_string(),
            hf_api_base: DEFAULT_HF_API_BASE.to_string(),
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_api_base: DEFAULT_GEMINI_API_BASE.to_string(),
            jobs_path: PathBuf::from("jobs.json"),
            top_n: 6,
            max_keywords: 30,
            remote_max_keywords: 20,
            remote_max_new_tokens: 128,
            request_timeout_secs: 30,
            weights: ScoringWeights::default(),
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        Ok(Config {
            hf_api_token: optional_env("HF_API_TOKEN"),
            hf_model: optional_env("HF_MODEL").unwrap_or(defaults.hf_model),
            hf_api_base: optional_env("HF_API_BASE").unwrap_or(defaults.hf_api_base),
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            gemini_model: optional_env("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            gemini_api_base: optional_env("GEMINI_API_BASE")
                .unwrap_or(defaults.gemini_api_base),
            jobs_path: optional_env("JOBS_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.jobs_path),
            top_n: parse_env("MATCH_TOP_N", defaults.top_n)?,
            max_keywords: parse_env("MAX_KEYWORDS", defaults.max_keywords)?,
            remote_max_keywords: parse_env("REMOTE_MAX_KEYWORDS", defaults.remote_max_keywords)?,
            remote_max_new_tokens: parse_env(
                "REMOTE_MAX_NEW_TOKENS",
                defaults.remote_max_new_tokens,
            )?,
            request_timeout_secs: parse_env(
                "REQUEST_TIMEOUT_SECS",
                defaults.request_timeout_secs,
            )?,
            weights: ScoringWeights {
                similarity: parse_env("SIMILARITY_WEIGHT", defaults.weights.similarity)?,
                presence: parse_env("PRESENCE_WEIGHT", defaults.weights.presence)?,
            },
            rust_log: optional_env("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }
}

/// Reads a variable, treating unset and blank values alike.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        None => Ok(default),
    }
}
