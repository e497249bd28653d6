use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use super::analysis::TextAnalyzer;
use super::domain::{Report, Submission};
use super::history::{EvaluationRecord, HistoryError, HistoryStore};
use super::insights;
use super::scoring::{ScoringConfig, ScoringEngine};
use super::summary;
use super::validation::{validate, ValidationError};

/// Orchestrates one evaluation: validation, advisory text analysis, scoring and history.
pub struct EvaluationService<A, H> {
    engine: ScoringEngine,
    analyzer: Arc<A>,
    history: Arc<H>,
    latency: Option<Duration>,
}

impl<A, H> EvaluationService<A, H>
where
    A: TextAnalyzer + 'static,
    H: HistoryStore + 'static,
{
    pub fn new(analyzer: Arc<A>, history: Arc<H>, config: ScoringConfig) -> Self {
        Self {
            engine: ScoringEngine::new(config),
            analyzer,
            history,
            latency: None,
        }
    }

    /// Pause before assembling the report, emulating a slower analysis backend.
    pub fn with_simulated_latency(mut self, latency: Option<Duration>) -> Self {
        self.latency = latency.filter(|delay| !delay.is_zero());
        self
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// Score and annotate a submission without touching the analyzer or history.
    pub fn assemble(&self, submission: &Submission) -> Report {
        let scores = self.engine.score(submission);
        Report {
            summary: summary::summary(submission.track, scores.overall),
            strengths: insights::strengths(submission),
            weaknesses: insights::weaknesses(submission),
            recommendations: insights::recommendations(submission.track),
            scores,
        }
    }

    pub async fn evaluate(&self, submission: Submission) -> Result<Report, EvaluationError> {
        if let Err(error) = validate(&submission) {
            warn!(field = %error.field(), %error, "submission rejected");
            return Err(error.into());
        }

        match self.analyzer.analyze(&submission.description).await {
            Ok(analysis) => debug!(payload = %analysis.payload, "text analysis completed"),
            Err(error) => warn!(%error, "text analysis unavailable, using heuristic scoring"),
        }

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        let report = self.assemble(&submission);
        self.history
            .record(EvaluationRecord::new(&submission, &report))?;

        info!(
            track = %submission.track,
            overall = report.scores.overall,
            strengths = report.strengths.len(),
            weaknesses = report.weaknesses.len(),
            "idea evaluated"
        );

        Ok(report)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EvaluationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    History(#[from] HistoryError),
}
