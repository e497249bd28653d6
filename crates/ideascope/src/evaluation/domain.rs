use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of idea being evaluated; selects the optional detail field and recommendation set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Track {
    Startup,
    Project,
    Research,
    Hackathon,
}

impl Track {
    pub const fn ordered() -> [Self; 4] {
        [Self::Startup, Self::Project, Self::Research, Self::Hackathon]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Startup => "startup",
            Self::Project => "project",
            Self::Research => "research",
            Self::Hackathon => "hackathon",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Startup => "Startup",
            Self::Project => "Project",
            Self::Research => "Research",
            Self::Hackathon => "Hackathon",
        }
    }

    /// Optional submission field that earns this track its detail bonus.
    pub const fn detail_field(self) -> DetailField {
        match self {
            Self::Startup => DetailField::Budget,
            Self::Project => DetailField::Timeline,
            Self::Research | Self::Hackathon => DetailField::Keywords,
        }
    }

    /// Exact, case-sensitive match against the wire names.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|track| track.as_str() == raw)
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailField {
    Budget,
    Timeline,
    Keywords,
}

impl DetailField {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Budget => "budget",
            Self::Timeline => "timeline",
            Self::Keywords => "keywords",
        }
    }
}

/// Idea description and metadata as provided by the submitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub title: String,
    pub description: String,
    pub track: Track,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
}

impl Submission {
    pub fn new(title: impl Into<String>, description: impl Into<String>, track: Track) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            track,
            target_audience: None,
            timeline: None,
            budget: None,
            keywords: None,
        }
    }

    pub fn with_target_audience(mut self, audience: impl Into<String>) -> Self {
        self.target_audience = Some(audience.into());
        self
    }

    pub fn with_timeline(mut self, timeline: impl Into<String>) -> Self {
        self.timeline = Some(timeline.into());
        self
    }

    pub fn with_budget(mut self, budget: impl Into<String>) -> Self {
        self.budget = Some(budget.into());
        self
    }

    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    pub fn detail(&self, field: DetailField) -> Option<&str> {
        let value = match field {
            DetailField::Budget => self.budget.as_deref(),
            DetailField::Timeline => self.timeline.as_deref(),
            DetailField::Keywords => self.keywords.as_deref(),
        };
        value.filter(|raw| !raw.trim().is_empty())
    }

    /// The populated detail field for this submission's own track, if any.
    pub fn track_detail(&self) -> Option<&str> {
        self.detail(self.track.detail_field())
    }

    /// Character count of the trimmed audience, zero when absent.
    pub fn audience_len(&self) -> usize {
        self.target_audience
            .as_deref()
            .map(|audience| audience.trim().chars().count())
            .unwrap_or(0)
    }

    pub fn description_len(&self) -> usize {
        self.description.chars().count()
    }

    pub fn title_len(&self) -> usize {
        self.title.chars().count()
    }
}

/// Per-metric scores, each on a 0-10 scale with one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scores {
    pub novelty: f64,
    pub market_potential: f64,
    pub technical_feasibility: f64,
    pub impact: f64,
    pub overall: f64,
}

impl Scores {
    /// Builds the score set; `overall` is the rounded mean of the four inputs.
    pub fn from_components(
        novelty: f64,
        market_potential: f64,
        technical_feasibility: f64,
        impact: f64,
    ) -> Self {
        let overall =
            round_to_tenth((novelty + market_potential + technical_feasibility + impact) / 4.0);
        Self {
            novelty,
            market_potential,
            technical_feasibility,
            impact,
            overall,
        }
    }

    pub fn components(&self) -> [f64; 4] {
        [
            self.novelty,
            self.market_potential,
            self.technical_feasibility,
            self.impact,
        ]
    }
}

/// Scored and annotated evaluation returned for one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub scores: Scores,
    pub summary: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
}

pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_parse_is_exact() {
        assert_eq!(Track::parse("research"), Some(Track::Research));
        assert_eq!(Track::parse("Research"), None);
        assert_eq!(Track::parse(" startup"), None);
    }

    #[test]
    fn blank_detail_counts_as_absent() {
        let submission = Submission::new("Solar", "desc", Track::Startup).with_budget("   ");
        assert!(submission.track_detail().is_none());

        let submission = submission.with_budget("$25k seed");
        assert_eq!(submission.track_detail(), Some("$25k seed"));
    }

    #[test]
    fn detail_of_another_track_is_ignored() {
        let submission =
            Submission::new("Solar", "desc", Track::Project).with_keywords("rust, iot");
        assert!(submission.track_detail().is_none());
    }

    #[test]
    fn submission_uses_camel_case_on_the_wire() {
        let submission = Submission::new("Tide", "Tidal energy", Track::Research)
            .with_target_audience("coastal towns");
        let value = serde_json::to_value(&submission).expect("serializes");
        assert_eq!(value["targetAudience"], "coastal towns");
        assert_eq!(value["track"], "research");
        assert!(value.get("budget").is_none());
    }

    #[test]
    fn overall_is_rounded_mean() {
        let scores = Scores::from_components(7.1, 6.4, 5.9, 7.3);
        assert_eq!(scores.overall, 6.7);
    }
}
