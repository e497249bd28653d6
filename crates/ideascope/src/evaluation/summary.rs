use serde::Serialize;

use super::domain::Track;

/// Overall-score buckets; each lower bound is inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryBand {
    Excellent,
    Good,
    Promising,
    Challenging,
}

impl SummaryBand {
    pub fn from_score(overall: f64) -> Self {
        if overall >= 8.0 {
            Self::Excellent
        } else if overall >= 6.5 {
            Self::Good
        } else if overall >= 5.0 {
            Self::Promising
        } else {
            Self::Challenging
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Promising => "Promising",
            Self::Challenging => "Needs Work",
        }
    }

    pub fn render(self, track: Track) -> String {
        match self {
            Self::Excellent => format!(
                "Excellent {track} idea with strong potential. The concept demonstrates clear \
                 innovation, viable execution path, and significant market opportunity. Highly \
                 recommended to proceed with detailed planning and validation."
            ),
            Self::Good => format!(
                "Good {track} idea with solid fundamentals. The concept has merit and shows \
                 promise with clear strengths. Consider refining key aspects and conducting \
                 deeper analysis before full implementation."
            ),
            Self::Promising => format!(
                "Promising {track} idea requiring further development. The core concept is \
                 interesting and has potential but needs strengthening in several areas. Focus \
                 on addressing identified weaknesses and validating assumptions."
            ),
            Self::Challenging => format!(
                "{} idea with potential but significant challenges. Recommend substantial \
                 refinement, deeper exploration of the concept, and validation of key \
                 assumptions before proceeding.",
                track.label()
            ),
        }
    }
}

pub fn summary(track: Track, overall: f64) -> String {
    SummaryBand::from_score(overall).render(track)
}
