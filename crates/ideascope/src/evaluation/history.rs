use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::domain::{Report, Scores, Submission, Track};

/// One completed evaluation as kept in the history list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationRecord {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub track: Track,
    pub scores: Scores,
    pub summary: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
    pub submitted_at: DateTime<Utc>,
}

impl EvaluationRecord {
    pub fn new(submission: &Submission, report: &Report) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: submission.title.clone(),
            description: submission.description.clone(),
            track: submission.track,
            scores: report.scores,
            summary: report.summary.clone(),
            strengths: report.strengths.clone(),
            weaknesses: report.weaknesses.clone(),
            recommendations: report.recommendations.clone(),
            submitted_at: Utc::now(),
        }
    }

    pub fn report(&self) -> Report {
        Report {
            scores: self.scores,
            summary: self.summary.clone(),
            strengths: self.strengths.clone(),
            weaknesses: self.weaknesses.clone(),
            recommendations: self.recommendations.clone(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("evaluation history unavailable: {0}")]
    Unavailable(String),
}

/// Session state shared with the presentation layer: past evaluations and the chosen track.
pub trait HistoryStore: Send + Sync {
    /// Prepend a record so that the newest evaluation comes first.
    fn record(&self, record: EvaluationRecord) -> Result<(), HistoryError>;
    fn entries(&self) -> Result<Vec<EvaluationRecord>, HistoryError>;
    fn clear(&self) -> Result<(), HistoryError>;
    fn select_track(&self, track: Track) -> Result<(), HistoryError>;
    fn selected_track(&self) -> Result<Option<Track>, HistoryError>;
}

#[derive(Debug, Default)]
struct HistoryState {
    entries: VecDeque<EvaluationRecord>,
    selected_track: Option<Track>,
}

/// In-process history context; reset only through [`HistoryStore::clear`].
#[derive(Debug, Default)]
pub struct EvaluationHistory {
    state: Mutex<HistoryState>,
    limit: Option<usize>,
}

impl EvaluationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `limit` entries, dropping the oldest first.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            state: Mutex::default(),
            limit: Some(limit.max(1)),
        }
    }

    pub fn len(&self) -> usize {
        self.lock().map(|state| state.entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, HistoryState>, HistoryError> {
        self.state
            .lock()
            .map_err(|_| HistoryError::Unavailable("history lock poisoned".to_string()))
    }
}

impl HistoryStore for EvaluationHistory {
    fn record(&self, record: EvaluationRecord) -> Result<(), HistoryError> {
        let mut state = self.lock()?;
        state.entries.push_front(record);
        if let Some(limit) = self.limit {
            state.entries.truncate(limit);
        }
        Ok(())
    }

    fn entries(&self) -> Result<Vec<EvaluationRecord>, HistoryError> {
        Ok(self.lock()?.entries.iter().cloned().collect())
    }

    fn clear(&self) -> Result<(), HistoryError> {
        self.lock()?.entries.clear();
        Ok(())
    }

    fn select_track(&self, track: Track) -> Result<(), HistoryError> {
        self.lock()?.selected_track = Some(track);
        Ok(())
    }

    fn selected_track(&self) -> Result<Option<Track>, HistoryError> {
        Ok(self.lock()?.selected_track)
    }
}
