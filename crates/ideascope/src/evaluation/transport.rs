//! Wire decoding for evaluation requests and the shared error envelope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::domain::{Submission, Track};
use super::validation::{SubmissionField, ValidationError};

pub const MALFORMED_BODY_MESSAGE: &str = "Invalid JSON in request body";
pub const EVALUATION_FAILED_MESSAGE: &str = "Failed to evaluate idea";

/// Error envelope returned by every non-200 evaluation response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
            timestamp: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn stamped(mut self) -> Self {
        self.timestamp = Some(Utc::now());
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("{MALFORMED_BODY_MESSAGE}: {details}")]
    MalformedBody { details: String },
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl TransportError {
    pub fn body(&self) -> ErrorBody {
        match self {
            TransportError::MalformedBody { details } => {
                ErrorBody::new(MALFORMED_BODY_MESSAGE).with_details(details.clone())
            }
            TransportError::Validation(error) => ErrorBody::new(error.to_string()),
        }
    }
}

/// Decode a request body into a [`Submission`].
///
/// A blank body is treated as an empty object, so it fails on the first required field.
/// Required fields are checked in order title, description, track.
pub fn decode_submission(body: &[u8]) -> Result<Submission, TransportError> {
    let value = if body.iter().all(u8::is_ascii_whitespace) {
        Value::Object(Map::new())
    } else {
        serde_json::from_slice::<Value>(body).map_err(|err| TransportError::MalformedBody {
            details: err.to_string(),
        })?
    };

    let Value::Object(fields) = value else {
        return Err(TransportError::MalformedBody {
            details: "request body must be a JSON object".to_string(),
        });
    };

    let title = required_text(&fields, SubmissionField::Title)?;
    let description = required_text(&fields, SubmissionField::Description)?;
    let track = fields
        .get(SubmissionField::Track.as_str())
        .and_then(Value::as_str)
        .and_then(Track::parse)
        .ok_or(ValidationError::InvalidTrack)?;

    let mut submission = Submission::new(title, description, track);
    for field in SubmissionField::optional() {
        let value = optional_text(&fields, field)?;
        match field {
            SubmissionField::TargetAudience => submission.target_audience = value,
            SubmissionField::Timeline => submission.timeline = value,
            SubmissionField::Budget => submission.budget = value,
            SubmissionField::Keywords => submission.keywords = value,
            SubmissionField::Title | SubmissionField::Description | SubmissionField::Track => {}
        }
    }

    Ok(submission)
}

fn required_text(
    fields: &Map<String, Value>,
    field: SubmissionField,
) -> Result<String, ValidationError> {
    match fields.get(field.as_str()) {
        Some(Value::String(text)) if !text.trim().is_empty() => Ok(text.clone()),
        _ => Err(ValidationError::MissingField(field)),
    }
}

fn optional_text(
    fields: &Map<String, Value>,
    field: SubmissionField,
) -> Result<Option<String>, ValidationError> {
    match fields.get(field.as_str()) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(_) => Err(ValidationError::InvalidOptionalField(field)),
    }
}
