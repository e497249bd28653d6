use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use serde_json::{json, Value};

use crate::evaluation::analysis::{AnalysisError, TextAnalysis, TextAnalyzer};
use crate::evaluation::domain::{Submission, Track};
use crate::evaluation::history::{EvaluationHistory, EvaluationRecord, HistoryError, HistoryStore};
use crate::evaluation::{evaluation_router, DisabledAnalyzer, EvaluationService, ScoringConfig};

#[derive(Default)]
pub(super) struct RecordingAnalyzer {
    pub(super) inputs: Mutex<Vec<String>>,
}

impl RecordingAnalyzer {
    pub(super) fn inputs(&self) -> Vec<String> {
        self.inputs.lock().expect("lock").clone()
    }
}

#[async_trait]
impl TextAnalyzer for RecordingAnalyzer {
    async fn analyze(&self, text: &str) -> Result<TextAnalysis, AnalysisError> {
        self.inputs.lock().expect("lock").push(text.to_string());
        Ok(TextAnalysis {
            payload: json!({ "labels": ["innovative"], "scores": [0.91] }),
        })
    }
}

pub(super) struct FailingAnalyzer;

#[async_trait]
impl TextAnalyzer for FailingAnalyzer {
    async fn analyze(&self, _text: &str) -> Result<TextAnalysis, AnalysisError> {
        Err(AnalysisError::Status(503))
    }
}

pub(super) struct UnavailableHistory;

impl HistoryStore for UnavailableHistory {
    fn record(&self, _record: EvaluationRecord) -> Result<(), HistoryError> {
        Err(HistoryError::Unavailable("disk full".to_string()))
    }

    fn entries(&self) -> Result<Vec<EvaluationRecord>, HistoryError> {
        Err(HistoryError::Unavailable("disk full".to_string()))
    }

    fn clear(&self) -> Result<(), HistoryError> {
        Err(HistoryError::Unavailable("disk full".to_string()))
    }

    fn select_track(&self, _track: Track) -> Result<(), HistoryError> {
        Err(HistoryError::Unavailable("disk full".to_string()))
    }

    fn selected_track(&self) -> Result<Option<Track>, HistoryError> {
        Err(HistoryError::Unavailable("disk full".to_string()))
    }
}

pub(super) fn research_submission() -> Submission {
    Submission::new(
        "Federated protein folding benchmark",
        "r".repeat(300),
        Track::Research,
    )
    .with_keywords("protein folding, federated learning")
}

pub(super) fn quiet_config() -> ScoringConfig {
    ScoringConfig {
        noise_half_width: 0.0,
        ..ScoringConfig::default()
    }
}

pub(super) fn build_service() -> (
    Arc<EvaluationService<RecordingAnalyzer, EvaluationHistory>>,
    Arc<RecordingAnalyzer>,
    Arc<EvaluationHistory>,
) {
    let analyzer = Arc::new(RecordingAnalyzer::default());
    let history = Arc::new(EvaluationHistory::new());
    let service = Arc::new(EvaluationService::new(
        analyzer.clone(),
        history.clone(),
        ScoringConfig::default(),
    ));
    (service, analyzer, history)
}

pub(super) fn disabled_service() -> EvaluationService<DisabledAnalyzer, EvaluationHistory> {
    EvaluationService::new(
        Arc::new(DisabledAnalyzer),
        Arc::new(EvaluationHistory::new()),
        ScoringConfig::default(),
    )
}

pub(super) fn router_with_service<A, H>(service: EvaluationService<A, H>) -> axum::Router
where
    A: TextAnalyzer + 'static,
    H: HistoryStore + 'static,
{
    evaluation_router(Arc::new(service))
}

pub(super) fn json_request(method: Method, uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .expect("request builds")
}

pub(super) fn submission_body(submission: &Submission) -> Vec<u8> {
    serde_json::to_vec(submission).expect("serializes")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
