use crate::model::ExtractedRecord;
use crate::scoring::outcome::{Assessment, FitBand, ScoreSet};

const READABILITY_WEIGHT: f64 = 0.15;
const FORMATTING_WEIGHT: f64 = 0.20;
const CONTENT_WEIGHT: f64 = 0.30;
const JOB_MATCH_WEIGHT: f64 = 0.35;

const EXCELLENT_THRESHOLD: f64 = 80.0;
const GOOD_THRESHOLD: f64 = 65.0;

/// Scores below this (on the 0-10 scale) trigger the category's advice.
const ADVICE_THRESHOLD: f64 = 7.0;
const MAX_RECOMMENDATIONS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Content,
    Formatting,
    Readability,
    JobMatch,
}

/// Order in which equal scores are reported.
const CATEGORY_ORDER: [Category; 4] = [
    Category::Content,
    Category::Formatting,
    Category::Readability,
    Category::JobMatch,
];

impl Category {
    fn score(self, scores: &ScoreSet) -> f64 {
        match self {
            Category::Content => scores.content.score,
            Category::Formatting => scores.formatting.score,
            Category::Readability => f64::from(scores.readability.score),
            Category::JobMatch => scores.job_match.percentage / 10.0,
        }
    }

    fn advice(self) -> &'static str {
        match self {
            Category::Content => "Strengthen descriptions: start each line with an action verb and add numbers to show impact.",
            Category::Formatting => "Improve structure: Use clear, standard headings like 'Work Experience' and 'Education'.",
            Category::Readability => "Improve ATS compatibility: simplify layout, remove images, and use standard fonts.",
            Category::JobMatch => "Tailor your skills to the job description, using keywords from the posting.",
        }
    }
}

/// Overall percentage from the four scores, each brought to a 0-10 scale.
pub fn overall_score(scores: &ScoreSet) -> f64 {
    10.0 * (READABILITY_WEIGHT * f64::from(scores.readability.score)
        + FORMATTING_WEIGHT * scores.formatting.score
        + CONTENT_WEIGHT * scores.content.score
        + JOB_MATCH_WEIGHT * (scores.job_match.percentage / 10.0))
}

pub fn fit_band(overall: f64) -> FitBand {
    if overall >= EXCELLENT_THRESHOLD {
        FitBand::Excellent
    } else if overall >= GOOD_THRESHOLD {
        FitBand::Good
    } else {
        FitBand::Moderate
    }
}

/// Advice for the weakest categories first, then contact and section gaps.
pub fn recommendations(scores: &ScoreSet, record: &ExtractedRecord) -> Vec<String> {
    let mut ranked: Vec<(Category, f64)> = CATEGORY_ORDER
        .iter()
        .map(|&c| (c, c.score(scores)))
        .collect();
    // Stable sort keeps table order among equal scores
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut recs: Vec<String> = ranked
        .iter()
        .filter(|(_, score)| *score < ADVICE_THRESHOLD)
        .map(|(c, _)| c.advice().to_string())
        .collect();

    if !record.summary.has_phone {
        recs.push("Include a phone number in your contact information.".to_string());
    }

    let missing = record.sections.missing_core();
    if !missing.is_empty() {
        recs.push(format!(
            "Add standard section headings: {}.",
            missing.join(", ")
        ));
    }

    let mut seen = std::collections::HashSet::new();
    recs.retain(|r| seen.insert(r.clone()));
    recs.truncate(MAX_RECOMMENDATIONS);
    recs
}

pub fn assess(scores: &ScoreSet, record: &ExtractedRecord) -> Assessment {
    let overall = overall_score(scores);
    Assessment {
        overall,
        band: fit_band(overall),
        recommendations: recommendations(scores, record),
    }
}
