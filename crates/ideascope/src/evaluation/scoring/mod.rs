mod config;
mod rules;

pub use config::ScoringConfig;

pub(crate) use rules::{score_signals, SCORE_CEILING};

use super::domain::{round_to_tenth, Scores, Submission};
use rand::Rng;

/// Heuristic scorer: a length ramp plus field bonuses, perturbed by uniform noise.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            config: config.sanitized(),
        }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(&self, submission: &Submission) -> Scores {
        self.score_with_rng(submission, &mut rand::rng())
    }

    pub fn score_with_rng<R: Rng>(&self, submission: &Submission, rng: &mut R) -> Scores {
        let signals = score_signals(submission, &self.config);
        let width = self.config.noise_half_width;

        let [novelty, market_potential, technical_feasibility, impact] =
            signals.targets().map(|target| {
                let noisy = (target + rng.random_range(-width..=width)).min(SCORE_CEILING);
                self.apply_floor(round_to_tenth(noisy))
            });

        Scores::from_components(novelty, market_potential, technical_feasibility, impact)
    }

    fn apply_floor(&self, score: f64) -> f64 {
        match self.config.score_floor {
            Some(floor) => score.max(floor),
            None => score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::domain::Track;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn quiet_engine() -> ScoringEngine {
        ScoringEngine::new(ScoringConfig {
            noise_half_width: 0.0,
            ..ScoringConfig::default()
        })
    }

    #[test]
    fn noise_free_scores_match_formulas() {
        let engine = quiet_engine();
        let submission = Submission::new("Idea", "x".repeat(150), Track::Startup)
            .with_target_audience("small farms")
            .with_budget("$40k");

        let scores = engine.score_with_rng(&submission, &mut StdRng::seed_from_u64(1));

        assert_eq!(scores.novelty, 8.2);
        assert_eq!(scores.market_potential, 7.8);
        assert_eq!(scores.technical_feasibility, 6.7);
        assert_eq!(scores.impact, 8.2);
        assert_eq!(scores.overall, 7.7);
    }

    #[test]
    fn scores_never_exceed_ceiling() {
        let engine = ScoringEngine::default();
        let submission = Submission::new("Idea", "x".repeat(2_000), Track::Research)
            .with_target_audience("graduate researchers")
            .with_keywords("graphs");
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let scores = engine.score_with_rng(&submission, &mut rng);
            for value in scores.components() {
                assert!(value <= SCORE_CEILING, "{value} above ceiling");
            }
            assert!(scores.overall <= SCORE_CEILING);
        }
    }

    #[test]
    fn floor_is_applied_when_configured() {
        let engine = ScoringEngine::new(ScoringConfig {
            base_offset: -5.0,
            ..ScoringConfig::default().with_floor(Some(1.0))
        });
        let submission = Submission::new("Idea", "short", Track::Project);
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..200 {
            let scores = engine.score_with_rng(&submission, &mut rng);
            assert!(scores.components().iter().all(|value| *value >= 1.0));
            assert!(scores.overall >= 1.0);
        }
    }

    #[test]
    fn without_floor_scores_follow_the_formula_below_one() {
        let engine = ScoringEngine::new(ScoringConfig {
            base_offset: -5.0,
            noise_half_width: 0.0,
            ..ScoringConfig::default()
        });
        let submission = Submission::new("Idea", "short", Track::Project);
        let scores = engine.score_with_rng(&submission, &mut StdRng::seed_from_u64(3));
        assert!(scores.novelty < 0.0);
    }

    #[test]
    fn overall_is_mean_of_returned_components() {
        let engine = ScoringEngine::default();
        let submission = Submission::new("Idea", "x".repeat(180), Track::Hackathon);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let scores = engine.score_with_rng(&submission, &mut rng);
            let mean = scores.components().iter().sum::<f64>() / 4.0;
            assert_eq!(scores.overall, round_to_tenth(mean));
        }
    }

    #[test]
    fn noise_stays_within_configured_width() {
        let engine = ScoringEngine::default();
        let submission = Submission::new("Idea", "x".repeat(60), Track::Project);
        let expected = score_signals(&submission, engine.config()).targets();
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..500 {
            let scores = engine.score_with_rng(&submission, &mut rng);
            for (value, target) in scores.components().iter().zip(expected) {
                assert!((value - target).abs() <= 0.75 + 0.05 + 1e-9);
            }
        }
    }

    #[test]
    fn mean_over_trials_converges_to_target() {
        let engine = ScoringEngine::default();
        let submission = Submission::new("Idea", "x".repeat(120), Track::Startup)
            .with_target_audience("indie game studios");
        let expected = score_signals(&submission, engine.config()).targets();
        let mut rng = StdRng::seed_from_u64(2024);
        let trials = 4_000;

        let mut sums = [0.0_f64; 4];
        for _ in 0..trials {
            let scores = engine.score_with_rng(&submission, &mut rng);
            for (sum, value) in sums.iter_mut().zip(scores.components()) {
                *sum += value;
            }
        }

        for (sum, target) in sums.iter().zip(expected) {
            let mean = sum / trials as f64;
            assert!((mean - target).abs() < 0.05, "mean {mean} vs target {target}");
        }
    }

    #[test]
    fn invalid_config_values_fall_back_to_defaults() {
        let engine = ScoringEngine::new(ScoringConfig {
            length_unit_chars: 0.0,
            noise_half_width: f64::NAN,
            score_floor: Some(42.0),
            ..ScoringConfig::default()
        });
        assert_eq!(engine.config().length_unit_chars, 150.0);
        assert_eq!(engine.config().noise_half_width, 0.75);
        assert_eq!(engine.config().score_floor, Some(10.0));
    }
}
