use ideascope::config::{AppConfig, EvaluationSettings};
use ideascope::evaluation::{
    ConfiguredAnalyzer, EvaluationHistory, EvaluationService, ScoringConfig, Track,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type ApiService = EvaluationService<ConfiguredAnalyzer, EvaluationHistory>;

/// Wire the analyzer, history and scoring settings described by the configuration.
pub(crate) fn build_service(config: &AppConfig) -> ApiService {
    let analyzer = Arc::new(ConfiguredAnalyzer::from_config(&config.analyzer));
    let history = Arc::new(match config.evaluation.history_limit {
        Some(limit) => EvaluationHistory::with_limit(limit),
        None => EvaluationHistory::new(),
    });

    EvaluationService::new(analyzer, history, scoring_config(&config.evaluation))
        .with_simulated_latency(config.evaluation.simulated_latency)
}

pub(crate) fn scoring_config(settings: &EvaluationSettings) -> ScoringConfig {
    ScoringConfig::default().with_floor(settings.score_floor)
}

pub(crate) fn parse_track(raw: &str) -> Result<Track, String> {
    Track::parse(raw.trim()).ok_or_else(|| {
        format!("unknown track '{raw}' (expected one of: startup, project, research, hackathon)")
    })
}
