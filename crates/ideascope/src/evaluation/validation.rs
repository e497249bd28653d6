use std::fmt;

use serde::Serialize;

use super::domain::Submission;

/// Submission fields as they are named on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SubmissionField {
    Title,
    Description,
    Track,
    TargetAudience,
    Timeline,
    Budget,
    Keywords,
}

impl SubmissionField {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Track => "track",
            Self::TargetAudience => "targetAudience",
            Self::Timeline => "timeline",
            Self::Budget => "budget",
            Self::Keywords => "keywords",
        }
    }

    pub(crate) const fn optional() -> [Self; 4] {
        [Self::TargetAudience, Self::Timeline, Self::Budget, Self::Keywords]
    }
}

impl fmt::Display for SubmissionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field-level rejection of a submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing or invalid required field: {0}")]
    MissingField(SubmissionField),
    #[error(
        "Missing or invalid required field: track (must be one of: startup, project, research, hackathon)"
    )]
    InvalidTrack,
    #[error("Invalid optional field: {0} must be a string")]
    InvalidOptionalField(SubmissionField),
}

impl ValidationError {
    pub fn field(&self) -> SubmissionField {
        match self {
            ValidationError::MissingField(field) | ValidationError::InvalidOptionalField(field) => {
                *field
            }
            ValidationError::InvalidTrack => SubmissionField::Track,
        }
    }
}

/// Enforce the non-blank title and description invariant.
///
/// Track membership is already guaranteed by the type; decoding from untyped input reports
/// an unknown track separately.
pub fn validate(submission: &Submission) -> Result<(), ValidationError> {
    if submission.title.trim().is_empty() {
        return Err(ValidationError::MissingField(SubmissionField::Title));
    }

    if submission.description.trim().is_empty() {
        return Err(ValidationError::MissingField(SubmissionField::Description));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::domain::Track;

    #[test]
    fn whitespace_title_is_rejected() {
        let submission = Submission::new("   ", "A real description", Track::Project);
        let err = validate(&submission).expect_err("blank title rejected");
        assert_eq!(err, ValidationError::MissingField(SubmissionField::Title));
        assert_eq!(err.to_string(), "Missing or invalid required field: title");
    }

    #[test]
    fn title_is_checked_before_description() {
        let submission = Submission::new("", "", Track::Project);
        let err = validate(&submission).expect_err("rejected");
        assert_eq!(err.field(), SubmissionField::Title);
    }

    #[test]
    fn empty_description_is_rejected() {
        let submission = Submission::new("Grid balancer", "\n\t", Track::Startup);
        let err = validate(&submission).expect_err("blank description rejected");
        assert_eq!(err.field(), SubmissionField::Description);
    }

    #[test]
    fn track_error_lists_allowed_values() {
        let message = ValidationError::InvalidTrack.to_string();
        for track in Track::ordered() {
            assert!(message.contains(track.as_str()));
        }
    }
}
