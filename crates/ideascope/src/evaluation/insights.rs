use super::domain::{Submission, Track};

pub const MAX_STRENGTHS: usize = 4;
pub const MAX_WEAKNESSES: usize = 3;

/// Trimmed audience length above which the audience counts as a strength.
pub const AUDIENCE_STRENGTH_MIN_CHARS: usize = 50;
/// Trimmed audience length below which the audience counts as a weakness.
pub const AUDIENCE_WEAKNESS_MAX_CHARS: usize = 30;

const DESCRIPTION_STRENGTH_MIN_CHARS: usize = 250;
const DESCRIPTION_WEAKNESS_MAX_CHARS: usize = 200;
const TITLE_STRENGTH_MIN_CHARS: usize = 10;
const TITLE_WEAKNESS_MAX_CHARS: usize = 5;

const FALLBACK_STRENGTH: &str = "Clear problem identification and concept foundation";

const STARTUP_RECOMMENDATIONS: [&str; 4] = [
    "Conduct comprehensive competitive analysis and market research",
    "Develop a detailed go-to-market strategy with customer acquisition plan",
    "Create financial projections and break-even analysis for 3-5 years",
    "Build a strong founding team with complementary skills",
];

const PROJECT_RECOMMENDATIONS: [&str; 4] = [
    "Establish clear milestones, deliverables, and success metrics",
    "Document technical architecture and design decisions thoroughly",
    "Plan comprehensive testing, validation, and quality assurance",
    "Create detailed documentation for maintenance and future development",
];

const RESEARCH_RECOMMENDATIONS: [&str; 4] = [
    "Conduct thorough literature review of related research and publications",
    "Define clear research methodology, hypothesis, and validation approach",
    "Identify potential publication venues and research impact areas",
    "Plan collaboration with domain experts and research advisors",
];

const HACKATHON_RECOMMENDATIONS: [&str; 4] = [
    "Create a detailed project roadmap with clear milestones",
    "Focus on MVP features that can be completed within hackathon timeframe",
    "Prepare compelling demo, presentation, and pitch strategy",
    "Plan team roles and responsibilities for efficient execution",
];

const fn track_strength(track: Track) -> &'static str {
    match track {
        Track::Startup => "Realistic budget planning demonstrates financial awareness",
        Track::Project => "Clear project timeline with defined milestones",
        Track::Research => "Well-defined research scope with relevant keywords",
        Track::Hackathon => "Clear technology stack and implementation approach",
    }
}

const fn track_weakness(track: Track) -> &'static str {
    match track {
        Track::Startup => "Budget estimation would strengthen the proposal",
        Track::Project => "Project timeline and milestones should be specified",
        Track::Research => "Research keywords would clarify the scope and focus",
        Track::Hackathon => "Technology stack and tools should be specified",
    }
}

/// Canned guidance for a track; independent of submission content.
pub const fn recommendation_set(track: Track) -> &'static [&'static str; 4] {
    match track {
        Track::Startup => &STARTUP_RECOMMENDATIONS,
        Track::Project => &PROJECT_RECOMMENDATIONS,
        Track::Research => &RESEARCH_RECOMMENDATIONS,
        Track::Hackathon => &HACKATHON_RECOMMENDATIONS,
    }
}

/// Checklist of positive signals in declaration order, capped at [`MAX_STRENGTHS`].
pub fn strengths(submission: &Submission) -> Vec<String> {
    let mut strengths = Vec::new();

    if submission.description_len() > DESCRIPTION_STRENGTH_MIN_CHARS {
        strengths.push("Comprehensive and detailed concept description");
    }

    if submission.audience_len() > AUDIENCE_STRENGTH_MIN_CHARS {
        strengths.push("Well-defined target audience with clear market understanding");
    }

    if submission.track_detail().is_some() {
        strengths.push(track_strength(submission.track));
    }

    if submission.title_len() > TITLE_STRENGTH_MIN_CHARS {
        strengths.push("Clear and descriptive project title");
    }

    if strengths.is_empty() {
        strengths.push(FALLBACK_STRENGTH);
    }

    strengths
        .into_iter()
        .take(MAX_STRENGTHS)
        .map(str::to_string)
        .collect()
}

/// Mirror of [`strengths`] with its own thresholds, capped at [`MAX_WEAKNESSES`]. May be empty.
pub fn weaknesses(submission: &Submission) -> Vec<String> {
    let mut weaknesses = Vec::new();

    if submission.description_len() < DESCRIPTION_WEAKNESS_MAX_CHARS {
        weaknesses.push("Description could be more detailed and comprehensive");
    }

    if submission.audience_len() < AUDIENCE_WEAKNESS_MAX_CHARS {
        weaknesses.push("Target audience definition needs more clarity");
    }

    if submission.track_detail().is_none() {
        weaknesses.push(track_weakness(submission.track));
    }

    if submission.title_len() < TITLE_WEAKNESS_MAX_CHARS {
        weaknesses.push("Project title could be more descriptive");
    }

    weaknesses
        .into_iter()
        .take(MAX_WEAKNESSES)
        .map(str::to_string)
        .collect()
}

pub fn recommendations(track: Track) -> Vec<String> {
    recommendation_set(track)
        .iter()
        .map(|item| item.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_submission_gets_fallback_strength() {
        let submission = Submission::new("Pet app", "Find pets.", Track::Startup);
        assert_eq!(strengths(&submission), vec![FALLBACK_STRENGTH.to_string()]);
    }

    #[test]
    fn strengths_follow_declaration_order_and_cap() {
        let submission = Submission::new(
            "Autonomous irrigation scheduler",
            "x".repeat(260),
            Track::Project,
        )
        .with_target_audience("Mid-sized orchards in arid regions that irrigate from wells")
        .with_timeline("Pilot in Q1, rollout in Q3");

        let strengths = strengths(&submission);
        assert_eq!(
            strengths,
            vec![
                "Comprehensive and detailed concept description",
                "Well-defined target audience with clear market understanding",
                "Clear project timeline with defined milestones",
                "Clear and descriptive project title",
            ]
        );
    }

    #[test]
    fn weaknesses_truncate_to_first_three() {
        let submission = Submission::new("App", "short", Track::Hackathon);
        let weaknesses = weaknesses(&submission);
        assert_eq!(
            weaknesses,
            vec![
                "Description could be more detailed and comprehensive",
                "Target audience definition needs more clarity",
                "Technology stack and tools should be specified",
            ]
        );
    }

    #[test]
    fn well_specified_submission_has_no_weaknesses() {
        let submission = Submission::new("Open lab notebook", "x".repeat(220), Track::Research)
            .with_target_audience("wet-lab biologists at small universities")
            .with_keywords("reproducibility, ELN");
        assert!(weaknesses(&submission).is_empty());
    }

    #[test]
    fn mid_length_audience_is_neither_strength_nor_weakness() {
        let audience = "a".repeat(40);
        let submission =
            Submission::new("Title", "desc", Track::Startup).with_target_audience(audience);

        assert!(!strengths(&submission)
            .iter()
            .any(|item| item.contains("target audience")));
        assert!(!weaknesses(&submission)
            .iter()
            .any(|item| item.contains("Target audience")));
    }

    #[test]
    fn audience_thresholds_use_trimmed_length() {
        let padded = format!("   {}   ", "a".repeat(29));
        let submission =
            Submission::new("Title", "x".repeat(300), Track::Startup).with_target_audience(padded);
        assert!(weaknesses(&submission)
            .iter()
            .any(|item| item == "Target audience definition needs more clarity"));
    }

    #[test]
    fn every_track_has_four_distinct_recommendations() {
        for track in Track::ordered() {
            let items = recommendations(track);
            assert_eq!(items.len(), 4);
            for other in Track::ordered().into_iter().filter(|other| *other != track) {
                assert!(items.iter().all(|item| !recommendations(other).contains(item)));
            }
        }
    }
}
