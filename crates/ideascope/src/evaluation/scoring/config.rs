use serde::{Deserialize, Serialize};

/// Rubric constants for the length-driven heuristic scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub base_offset: f64,
    /// Points gained per `length_unit_chars` characters of description.
    pub length_slope: f64,
    pub length_unit_chars: f64,
    pub audience_bonus: f64,
    pub track_detail_bonus: f64,
    pub feasibility_penalty: f64,
    /// Noise is drawn uniformly from `[-noise_half_width, noise_half_width]`.
    pub noise_half_width: f64,
    pub score_floor: Option<f64>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_offset: 4.0,
            length_slope: 3.0,
            length_unit_chars: 150.0,
            audience_bonus: 1.2,
            track_detail_bonus: 0.8,
            feasibility_penalty: 0.3,
            noise_half_width: 0.75,
            score_floor: None,
        }
    }
}

impl ScoringConfig {
    pub fn with_floor(mut self, floor: Option<f64>) -> Self {
        self.score_floor = floor;
        self
    }

    /// Replace non-finite or out-of-range values with their defaults.
    pub(crate) fn sanitized(self) -> Self {
        let defaults = Self::default();
        let finite_or = |value: f64, fallback: f64| if value.is_finite() { value } else { fallback };

        Self {
            base_offset: finite_or(self.base_offset, defaults.base_offset),
            length_slope: finite_or(self.length_slope, defaults.length_slope),
            length_unit_chars: if self.length_unit_chars.is_finite() && self.length_unit_chars > 0.0 {
                self.length_unit_chars
            } else {
                defaults.length_unit_chars
            },
            audience_bonus: finite_or(self.audience_bonus, defaults.audience_bonus),
            track_detail_bonus: finite_or(self.track_detail_bonus, defaults.track_detail_bonus),
            feasibility_penalty: finite_or(self.feasibility_penalty, defaults.feasibility_penalty),
            noise_half_width: if self.noise_half_width.is_finite() && self.noise_half_width >= 0.0 {
                self.noise_half_width
            } else {
                defaults.noise_half_width
            },
            score_floor: self
                .score_floor
                .filter(|floor| floor.is_finite())
                .map(|floor| floor.clamp(0.0, 10.0)),
        }
    }
}
