use super::super::domain::Submission;
use super::config::ScoringConfig;

pub(crate) const SCORE_CEILING: f64 = 10.0;

/// Deterministic inputs to the per-metric formulas, before noise is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ScoreSignals {
    pub base_score: f64,
    pub detail_bonus: f64,
    pub additional_bonus: f64,
    pub feasibility_penalty: f64,
}

impl ScoreSignals {
    /// Noise-free targets in novelty, market, feasibility, impact order.
    pub fn targets(&self) -> [f64; 4] {
        [
            self.base_score + self.detail_bonus,
            self.base_score + self.additional_bonus,
            self.base_score - self.feasibility_penalty,
            self.base_score + self.detail_bonus,
        ]
    }
}

pub(crate) fn score_signals(submission: &Submission, config: &ScoringConfig) -> ScoreSignals {
    let length_units = submission.description_len() as f64 / config.length_unit_chars;
    let base_score = (config.base_offset + length_units * config.length_slope).min(SCORE_CEILING);

    let detail_bonus = if submission.audience_len() > 0 {
        config.audience_bonus
    } else {
        0.0
    };

    let additional_bonus = if submission.track_detail().is_some() {
        config.track_detail_bonus
    } else {
        0.0
    };

    ScoreSignals {
        base_score,
        detail_bonus,
        additional_bonus,
        feasibility_penalty: config.feasibility_penalty,
    }
}
