//! External text-analysis collaborator.
//!
//! The classification payload is advisory: the orchestrator logs it and discards it, and
//! scoring never depends on it. Every failure mode degrades to heuristic-only scoring.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::config::AnalyzerConfig;

/// Raw response of the classification model.
#[derive(Debug, Clone, PartialEq)]
pub struct TextAnalysis {
    pub payload: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("text analysis credential not configured")]
    MissingCredential,
    #[error("text analysis service responded with HTTP {0}")]
    Status(u16),
    #[error("text analysis request failed: {0}")]
    Request(String),
    #[error("text analysis request timed out after {0:?}")]
    Timeout(Duration),
    #[error("text analysis response was not valid JSON: {0}")]
    Decode(String),
}

#[async_trait]
pub trait TextAnalyzer: Send + Sync {
    async fn analyze(&self, text: &str) -> Result<TextAnalysis, AnalysisError>;
}

/// Stand-in used when no credential is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledAnalyzer;

#[async_trait]
impl TextAnalyzer for DisabledAnalyzer {
    async fn analyze(&self, _text: &str) -> Result<TextAnalysis, AnalysisError> {
        Err(AnalysisError::MissingCredential)
    }
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

/// Hosted inference API client authenticated with a bearer token.
#[derive(Clone)]
pub struct HuggingFaceAnalyzer {
    client: Client,
    api_key: String,
    endpoint: String,
    timeout: Duration,
}

impl HuggingFaceAnalyzer {
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self::with_client(Client::new(), api_key, endpoint, timeout)
    }

    pub fn with_client(
        client: Client,
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            timeout,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl std::fmt::Debug for HuggingFaceAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HuggingFaceAnalyzer")
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl TextAnalyzer for HuggingFaceAnalyzer {
    async fn analyze(&self, text: &str) -> Result<TextAnalysis, AnalysisError> {
        let request = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&InferenceRequest { inputs: text })
            .send();

        let response = tokio::time::timeout(self.timeout, request)
            .await
            .map_err(|_| AnalysisError::Timeout(self.timeout))?
            .map_err(|err| AnalysisError::Request(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalysisError::Status(status.as_u16()));
        }

        let payload = response
            .json::<Value>()
            .await
            .map_err(|err| AnalysisError::Decode(err.to_string()))?;

        Ok(TextAnalysis { payload })
    }
}

/// Analyzer chosen from configuration at startup.
#[derive(Debug, Clone)]
pub enum ConfiguredAnalyzer {
    HuggingFace(HuggingFaceAnalyzer),
    Disabled(DisabledAnalyzer),
}

impl ConfiguredAnalyzer {
    pub fn from_config(config: &AnalyzerConfig) -> Self {
        match &config.api_key {
            Some(key) => Self::HuggingFace(HuggingFaceAnalyzer::new(
                key.clone(),
                config.endpoint.clone(),
                config.timeout,
            )),
            None => Self::Disabled(DisabledAnalyzer),
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::HuggingFace(_))
    }
}

#[async_trait]
impl TextAnalyzer for ConfiguredAnalyzer {
    async fn analyze(&self, text: &str) -> Result<TextAnalysis, AnalysisError> {
        match self {
            Self::HuggingFace(analyzer) => analyzer.analyze(text).await,
            Self::Disabled(analyzer) => analyzer.analyze(text).await,
        }
    }
}
