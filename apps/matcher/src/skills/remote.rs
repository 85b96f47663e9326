//! Remote keyphrase extractor: calls a hosted inference endpoint for skill keyphrases.
//!
//! Best-effort only: any transport error, timeout, non-success status or error payload
//! produces an empty result so the caller can fall back to the dictionary matcher.

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use super::SkillExtractor;
use crate::config::Config;

/// Shortest keyphrase kept from a remote response.
pub const MIN_KEYPHRASE_LEN: usize = 2;

static KEYPHRASE_SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,\n;]+").expect("valid keyphrase separator regex"));

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Service reported an error: {0}")]
    Service(String),
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: InferenceParameters,
}

#[derive(Debug, Serialize)]
struct InferenceParameters {
    max_new_tokens: u32,
    return_full_text: bool,
}

/// The shapes an inference endpoint is known to answer with.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum InferenceResponse {
    Text(String),
    Records(Vec<InferenceRecord>),
    Error { error: Value },
    Other(Value),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum InferenceRecord {
    Generated { generated_text: String },
    Text(String),
    Other(Value),
}

impl InferenceResponse {
    /// Collapses the response into one string of comma/newline separated keyphrases.
    pub fn into_joined_text(self) -> Result<String, RemoteError> {
        match self {
            InferenceResponse::Text(text) => Ok(text),
            InferenceResponse::Records(records) => Ok(records
                .into_iter()
                .filter_map(|record| match record {
                    InferenceRecord::Generated { generated_text } => Some(generated_text),
                    InferenceRecord::Text(text) => Some(text),
                    InferenceRecord::Other(_) => None,
                })
                .collect::<Vec<_>>()
                .join(" ")),
            InferenceResponse::Error { error } => Err(RemoteError::Service(match error {
                Value::String(message) => message,
                other => other.to_string(),
            })),
            InferenceResponse::Other(value) => {
                debug!("Unrecognized inference response shape, using its JSON text");
                Ok(value.to_string())
            }
        }
    }
}

/// Splits joined model output into cleaned, deduplicated keyphrases.
pub fn split_keyphrases(joined: &str, max_keywords: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    KEYPHRASE_SPLIT_RE
        .split(joined)
        .map(|candidate| candidate.trim().to_lowercase())
        .filter(|candidate| candidate.chars().count() >= MIN_KEYPHRASE_LEN)
        .filter(|candidate| seen.insert(candidate.clone()))
        .take(max_keywords)
        .collect()
}

#[derive(Clone)]
pub struct RemoteKeyphraseExtractor {
    client: Client,
    endpoint: String,
    api_token: String,
    max_keywords: usize,
    max_new_tokens: u32,
}

impl RemoteKeyphraseExtractor {
    pub fn new(
        api_token: String,
        endpoint: String,
        timeout: Duration,
        max_keywords: usize,
        max_new_tokens: u32,
    ) -> Result<Self, RemoteError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            endpoint,
            api_token,
            max_keywords,
            max_new_tokens,
        })
    }

    /// Builds the extractor when a token is configured; `None` means the remote path is off.
    pub fn from_config(config: &Config) -> Option<Self> {
        let token = config.hf_api_token.clone()?;
        let endpoint = format!(
            "{}/{}",
            config.hf_api_base.trim_end_matches('/'),
            config.hf_model
        );
        match Self::new(
            token,
            endpoint,
            Duration::from_secs(config.request_timeout_secs),
            config.remote_max_keywords,
            config.remote_max_new_tokens,
        ) {
            Ok(extractor) => Some(extractor),
            Err(e) => {
                warn!("Remote keyphrase extractor disabled: {e}");
                None
            }
        }
    }

    /// Makes one call to the inference endpoint. No retries.
    pub async fn request(&self, text: &str) -> Result<Vec<String>, RemoteError> {
        let body = InferenceRequest {
            inputs: text,
            parameters: InferenceParameters {
                max_new_tokens: self.max_new_tokens,
                return_full_text: false,
            },
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RemoteError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: InferenceResponse = response.json().await?;
        let joined = parsed.into_joined_text()?;
        Ok(split_keyphrases(&joined, self.max_keywords))
    }
}

#[async_trait]
impl SkillExtractor for RemoteKeyphraseExtractor {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn extract(&self, text: &str) -> Vec<String> {
        match self.request(text).await {
            Ok(keyphrases) => {
                debug!("Remote extractor returned {} keyphrases", keyphrases.len());
                keyphrases
            }
            Err(e) => {
                warn!("Remote keyphrase extraction failed: {e}");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> InferenceResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_plain_string_response() {
        let joined = parse(r#""python, sql; docker""#).into_joined_text().unwrap();
        assert_eq!(split_keyphrases(&joined, 20), vec!["python", "sql", "docker"]);
    }

    #[test]
    fn test_generated_text_records_are_joined() {
        let response = parse(
            r#"[{"generated_text": "Machine Learning, NLP"}, "aws", {"score": 0.3}]"#,
        );
        let joined = response.into_joined_text().unwrap();
        assert_eq!(
            split_keyphrases(&joined, 20),
            vec!["machine learning", "nlp aws"]
        );
    }

    #[test]
    fn test_error_payload_is_an_error() {
        let response = parse(r#"{"error": "Model is currently loading", "estimated_time": 20}"#);
        assert!(matches!(
            response.into_joined_text(),
            Err(RemoteError::Service(message)) if message.contains("loading")
        ));
    }

    #[test]
    fn test_unrecognized_shape_is_stringified() {
        let joined = parse("42").into_joined_text().unwrap();
        assert_eq!(joined, "42");
    }

    #[test]
    fn test_split_dedupes_and_drops_short() {
        let keyphrases = split_keyphrases("Rust,\n\n rust ; a, , go,kafka", 20);
        assert_eq!(keyphrases, vec!["rust", "go", "kafka"]);
    }

    #[test]
    fn test_split_truncates() {
        let keyphrases = split_keyphrases("aa, bb, cc, dd", 3);
        assert_eq!(keyphrases, vec!["aa", "bb", "cc"]);
    }

    #[test]
    fn test_from_config_without_token_is_none() {
        assert!(RemoteKeyphraseExtractor::from_config(&Config::default()).is_none());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_returns_empty() {
        let extractor = RemoteKeyphraseExtractor::new(
            "token".to_string(),
            "http://127.0.0.1:9/models/keyphrase".to_string(),
            Duration::from_secs(2),
            20,
            128,
        )
        .unwrap();
        assert!(extractor.extract("Python developer").await.is_empty());
    }
}
