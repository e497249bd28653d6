use crate::infra::{build_service, parse_track};
use clap::Args;
use ideascope::config::AppConfig;
use ideascope::error::AppError;
use ideascope::evaluation::{
    track_catalogue, ErrorBody, EvaluationClient, EvaluationError, EvaluationReply, Report,
    Submission, SummaryBand, Track, TrackView,
};
use std::fmt::Write as _;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Track the idea is submitted under (startup, project, research, hackathon)
    #[arg(long, value_parser = parse_track)]
    pub(crate) track: Track,
    #[arg(long)]
    pub(crate) title: String,
    #[arg(long)]
    pub(crate) description: String,
    #[arg(long)]
    pub(crate) target_audience: Option<String>,
    #[arg(long)]
    pub(crate) timeline: Option<String>,
    #[arg(long)]
    pub(crate) budget: Option<String>,
    #[arg(long)]
    pub(crate) keywords: Option<String>,
    /// Base URL of a running ideascope-api; evaluates locally when omitted
    #[arg(long)]
    pub(crate) remote: Option<String>,
    /// Print the raw JSON reply instead of the formatted report
    #[arg(long)]
    pub(crate) json: bool,
}

impl EvaluateArgs {
    fn submission(&self) -> Submission {
        Submission {
            title: self.title.clone(),
            description: self.description.clone(),
            track: self.track,
            target_audience: self.target_audience.clone(),
            timeline: self.timeline.clone(),
            budget: self.budget.clone(),
            keywords: self.keywords.clone(),
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct TracksArgs {
    /// Print the catalogue as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) async fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let submission = args.submission();

    let reply = match args.remote.as_deref() {
        Some(base_url) => EvaluationClient::new(base_url).evaluate(&submission).await?,
        None => evaluate_locally(submission).await?,
    };

    let output = if args.json {
        let encoded = match &reply {
            EvaluationReply::Completed(report) => serde_json::to_string_pretty(report),
            EvaluationReply::Rejected(body) | EvaluationReply::Failed(body) => {
                serde_json::to_string_pretty(body)
            }
        };
        encoded.map_err(std::io::Error::from)?
    } else {
        render_reply(&reply, args.track)
    };

    println!("{output}");
    Ok(())
}

async fn evaluate_locally(submission: Submission) -> Result<EvaluationReply, AppError> {
    let config = AppConfig::load()?;
    let service = build_service(&config);

    match service.evaluate(submission).await {
        Ok(report) => Ok(EvaluationReply::Completed(report)),
        Err(EvaluationError::Validation(invalid)) => {
            Ok(EvaluationReply::Rejected(ErrorBody::new(invalid.to_string())))
        }
        Err(other) => Err(other.into()),
    }
}

pub(crate) fn run_tracks(args: TracksArgs) -> Result<(), AppError> {
    let catalogue = track_catalogue(None);
    let output = if args.json {
        serde_json::to_string_pretty(&catalogue).map_err(std::io::Error::from)?
    } else {
        render_catalogue(&catalogue)
    };
    println!("{output}");
    Ok(())
}

pub(crate) fn render_reply(reply: &EvaluationReply, track: Track) -> String {
    match reply {
        EvaluationReply::Completed(report) => render_report(report, track),
        EvaluationReply::Rejected(body) => format!("Evaluation rejected: {}", body.error),
        EvaluationReply::Failed(body) => {
            let mut out = format!("Evaluation failed: {}", body.error);
            if let Some(details) = &body.details {
                let _ = write!(out, " ({details})");
            }
            out
        }
    }
}

pub(crate) fn render_report(report: &Report, track: Track) -> String {
    let scores = &report.scores;
    let band = SummaryBand::from_score(scores.overall);
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} idea evaluation: {:.1}/10 ({})",
        track.label(),
        scores.overall,
        band.label()
    );
    let _ = writeln!(out, "- Novelty: {:.1}", scores.novelty);
    let _ = writeln!(out, "- Market potential: {:.1}", scores.market_potential);
    let _ = writeln!(
        out,
        "- Technical feasibility: {:.1}",
        scores.technical_feasibility
    );
    let _ = writeln!(out, "- Impact: {:.1}", scores.impact);
    let _ = writeln!(out, "\n{}", report.summary);

    push_section(&mut out, "Strengths", &report.strengths);
    push_section(&mut out, "Weaknesses", &report.weaknesses);
    push_section(&mut out, "Recommendations", &report.recommendations);

    out.trim_end().to_string()
}

pub(crate) fn render_catalogue(catalogue: &[TrackView]) -> String {
    let mut out = String::from("Tracks");
    for entry in catalogue {
        let _ = write!(
            out,
            "\n\n{} ({}): detail field `{}`",
            entry.label,
            entry.track,
            entry.detail_field.as_str()
        );
        for item in &entry.recommendations {
            let _ = write!(out, "\n  - {item}");
        }
    }
    out
}

fn push_section(out: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n{heading}:");
    for item in items {
        let _ = writeln!(out, "  - {item}");
    }
}
