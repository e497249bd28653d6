//! HTTP client for a running evaluation service.

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::domain::{Report, Submission};
use super::history::EvaluationRecord;
use super::transport::ErrorBody;

const SNIPPET_CHARS: usize = 200;

/// Decoded outcome of an evaluation request that reached the service.
#[derive(Debug, Clone, PartialEq)]
pub enum EvaluationReply {
    Completed(Report),
    /// The submission was refused (HTTP 4xx).
    Rejected(ErrorBody),
    /// The service failed while evaluating (HTTP 5xx).
    Failed(ErrorBody),
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("evaluation request failed: {0}")]
    Request(String),
    #[error("evaluation service returned a non-JSON response (HTTP {status}): {snippet}")]
    NonJson { status: u16, snippet: String },
    #[error("evaluation service returned an invalid payload: {0}")]
    InvalidPayload(String),
    #[error("evaluation service responded with unexpected HTTP {0}")]
    UnexpectedStatus(u16),
}

#[derive(Debug, Clone)]
pub struct EvaluationClient {
    http: Client,
    base_url: String,
}

impl EvaluationClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn evaluate(&self, submission: &Submission) -> Result<EvaluationReply, ClientError> {
        let response = self
            .http
            .post(self.url("/api/v1/evaluations"))
            .json(submission)
            .send()
            .await
            .map_err(|err| ClientError::Request(err.to_string()))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = response
            .bytes()
            .await
            .map_err(|err| ClientError::Request(err.to_string()))?;

        decode_reply(status, content_type.as_deref(), &body)
    }

    /// Past evaluations held by the service, most recent first.
    pub async fn history(&self) -> Result<Vec<EvaluationRecord>, ClientError> {
        let response = self
            .http
            .get(self.url("/api/v1/evaluations"))
            .send()
            .await
            .map_err(|err| ClientError::Request(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| ClientError::Request(err.to_string()))?;
        parse_json(status.as_u16(), &body)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Map a raw evaluation response onto [`EvaluationReply`].
///
/// Transport-level problems (non-JSON bodies, unknown statuses) are errors; refused and
/// failed evaluations are replies.
pub fn decode_reply(
    status: u16,
    content_type: Option<&str>,
    body: &[u8],
) -> Result<EvaluationReply, ClientError> {
    if let Some(content_type) = content_type {
        if !content_type.contains("json") {
            return Err(non_json(status, body));
        }
    }

    match status {
        200 => parse_json(status, body).map(EvaluationReply::Completed),
        400..=499 => parse_json(status, body).map(EvaluationReply::Rejected),
        500..=599 => parse_json(status, body).map(EvaluationReply::Failed),
        other => Err(ClientError::UnexpectedStatus(other)),
    }
}

fn parse_json<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T, ClientError> {
    let value = serde_json::from_slice::<serde_json::Value>(body)
        .map_err(|_| non_json(status, body))?;
    serde_json::from_value(value).map_err(|err| ClientError::InvalidPayload(err.to_string()))
}

fn non_json(status: u16, body: &[u8]) -> ClientError {
    ClientError::NonJson {
        status,
        snippet: String::from_utf8_lossy(body)
            .chars()
            .take(SNIPPET_CHARS)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bytes(value: serde_json::Value) -> Vec<u8> {
        serde_json::to_vec(&value).expect("serializes")
    }

    #[test]
    fn ok_status_decodes_report() {
        let body = bytes(json!({
            "scores": {
                "novelty": 7.0,
                "marketPotential": 6.5,
                "technicalFeasibility": 6.0,
                "impact": 7.0,
                "overall": 6.6,
            },
            "summary": "Good project idea",
            "strengths": ["Clear and descriptive project title"],
            "weaknesses": [],
            "recommendations": ["a", "b", "c", "d"],
        }));

        let reply = decode_reply(200, Some("application/json"), &body).expect("decodes");
        match reply {
            EvaluationReply::Completed(report) => assert_eq!(report.scores.overall, 6.6),
            other => panic!("expected report, got {other:?}"),
        }
    }

    #[test]
    fn client_errors_become_rejections() {
        let body = bytes(json!({ "error": "Missing or invalid required field: title" }));
        let reply = decode_reply(400, Some("application/json"), &body).expect("decodes");
        assert_eq!(
            reply,
            EvaluationReply::Rejected(ErrorBody::new("Missing or invalid required field: title"))
        );
    }

    #[test]
    fn server_errors_keep_details() {
        let body = bytes(json!({
            "error": "Failed to evaluate idea",
            "details": "evaluation history unavailable: disk full",
            "timestamp": "2025-01-01T00:00:00Z",
        }));
        match decode_reply(500, Some("application/json"), &body).expect("decodes") {
            EvaluationReply::Failed(body) => {
                assert_eq!(body.error, "Failed to evaluate idea");
                assert!(body.details.is_some());
                assert!(body.timestamp.is_some());
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn html_error_page_is_not_a_rejection() {
        let err = decode_reply(502, Some("text/html"), b"<html>Bad gateway</html>")
            .expect_err("non-json");
        assert!(matches!(err, ClientError::NonJson { status: 502, .. }));
    }

    #[test]
    fn unparseable_body_without_content_type_is_non_json() {
        let err = decode_reply(200, None, b"not json").expect_err("non-json");
        assert!(matches!(err, ClientError::NonJson { status: 200, .. }));
    }

    #[test]
    fn report_with_missing_sections_is_invalid() {
        let body = bytes(json!({ "summary": "Good" }));
        let err = decode_reply(200, Some("application/json"), &body).expect_err("invalid");
        assert!(matches!(err, ClientError::InvalidPayload(_)));
    }

    #[test]
    fn redirects_are_unexpected() {
        let err = decode_reply(302, Some("application/json"), b"{}").expect_err("unexpected");
        assert!(matches!(err, ClientError::UnexpectedStatus(302)));
    }

    #[test]
    fn base_url_drops_trailing_slash() {
        let client = EvaluationClient::new("http://127.0.0.1:3000/");
        assert_eq!(client.base_url(), "http://127.0.0.1:3000");
    }
}
