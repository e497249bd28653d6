use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use super::analysis::TextAnalyzer;
use super::domain::{DetailField, Track};
use super::history::{EvaluationRecord, HistoryStore};
use super::insights;
use super::service::{EvaluationError, EvaluationService};
use super::transport::{decode_submission, ErrorBody, EVALUATION_FAILED_MESSAGE};
use crate::error::AppError;

/// Router builder exposing evaluation, history and track catalogue endpoints.
pub fn evaluation_router<A, H>(service: Arc<EvaluationService<A, H>>) -> Router
where
    A: TextAnalyzer + 'static,
    H: HistoryStore + 'static,
{
    Router::new()
        .route(
            "/api/v1/evaluations",
            post(evaluate_handler::<A, H>)
                .get(history_handler::<A, H>)
                .delete(clear_history_handler::<A, H>),
        )
        .route("/api/v1/tracks", get(tracks_handler::<A, H>))
        .route("/api/v1/tracks/selected", put(select_track_handler::<A, H>))
        .with_state(service)
}

pub(crate) async fn evaluate_handler<A, H>(
    State(service): State<Arc<EvaluationService<A, H>>>,
    body: Bytes,
) -> Response
where
    A: TextAnalyzer + 'static,
    H: HistoryStore + 'static,
{
    let submission = match decode_submission(&body) {
        Ok(submission) => submission,
        Err(rejection) => {
            warn!(error = %rejection, "evaluation request rejected");
            return (StatusCode::BAD_REQUEST, Json(rejection.body())).into_response();
        }
    };

    match service.evaluate(submission).await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(EvaluationError::Validation(invalid)) => {
            (StatusCode::BAD_REQUEST, Json(ErrorBody::new(invalid.to_string()))).into_response()
        }
        Err(other) => {
            error!(error = %other, "idea evaluation failed");
            let payload = ErrorBody::new(EVALUATION_FAILED_MESSAGE)
                .with_details(other.to_string())
                .stamped();
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn history_handler<A, H>(
    State(service): State<Arc<EvaluationService<A, H>>>,
) -> Result<Json<Vec<EvaluationRecord>>, AppError>
where
    A: TextAnalyzer + 'static,
    H: HistoryStore + 'static,
{
    Ok(Json(service.history().entries()?))
}

pub(crate) async fn clear_history_handler<A, H>(
    State(service): State<Arc<EvaluationService<A, H>>>,
) -> Result<StatusCode, AppError>
where
    A: TextAnalyzer + 'static,
    H: HistoryStore + 'static,
{
    service.history().clear()?;
    Ok(StatusCode::NO_CONTENT)
}

/// Catalogue entry describing what each track rewards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackView {
    pub track: Track,
    pub label: &'static str,
    pub detail_field: DetailField,
    pub recommendations: Vec<String>,
    pub selected: bool,
}

pub fn track_catalogue(selected: Option<Track>) -> Vec<TrackView> {
    Track::ordered()
        .into_iter()
        .map(|track| TrackView {
            track,
            label: track.label(),
            detail_field: track.detail_field(),
            recommendations: insights::recommendations(track),
            selected: selected == Some(track),
        })
        .collect()
}

pub(crate) async fn tracks_handler<A, H>(
    State(service): State<Arc<EvaluationService<A, H>>>,
) -> Result<Json<Vec<TrackView>>, AppError>
where
    A: TextAnalyzer + 'static,
    H: HistoryStore + 'static,
{
    let selected = service.history().selected_track()?;
    Ok(Json(track_catalogue(selected)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackSelection {
    pub track: Track,
}

pub(crate) async fn select_track_handler<A, H>(
    State(service): State<Arc<EvaluationService<A, H>>>,
    Json(selection): Json<TrackSelection>,
) -> Result<Json<TrackSelection>, AppError>
where
    A: TextAnalyzer + 'static,
    H: HistoryStore + 'static,
{
    service.history().select_track(selection.track)?;
    Ok(Json(selection))
}
