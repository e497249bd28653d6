//! Heuristic idea evaluation: scoring, qualitative insights, summaries and the HTTP surface.

pub mod analysis;
pub mod client;
pub mod domain;
pub mod history;
pub mod insights;
pub mod router;
pub mod scoring;
pub mod service;
pub mod summary;
pub mod transport;
pub mod validation;

#[cfg(test)]
mod tests;

pub use analysis::{
    AnalysisError, ConfiguredAnalyzer, DisabledAnalyzer, HuggingFaceAnalyzer, TextAnalysis,
    TextAnalyzer,
};
pub use client::{decode_reply, ClientError, EvaluationClient, EvaluationReply};
pub use domain::{DetailField, Report, Scores, Submission, Track};
pub use history::{EvaluationHistory, EvaluationRecord, HistoryError, HistoryStore};
pub use router::{evaluation_router, track_catalogue, TrackSelection, TrackView};
pub use scoring::{ScoringConfig, ScoringEngine};
pub use service::{EvaluationError, EvaluationService};
pub use summary::{summary, SummaryBand};
pub use transport::{decode_submission, ErrorBody, TransportError};
pub use validation::{validate, SubmissionField, ValidationError};
