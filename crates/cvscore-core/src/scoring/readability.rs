use crate::model::ParsingMetadata;
use crate::parsing::structure::{
    analyse_career_profile, analyse_sentences, count_bullets, count_long_lines,
    special_char_ratio, word_count,
};
use crate::scoring::outcome::ReadabilityScore;

const MAX_SCORE: i32 = 10;
const MIN_TEXT_CHARS: usize = 50;

pub const VERY_LITTLE_TEXT: &str =
    "Very little text content found. The file may be mostly images or have parsing issues.";

/// Score ATS compatibility and readability.
///
/// Starts at 10 and deducts per finding; the result is clamped to 0-10.
/// Text under 50 characters scores 0 without running any other check.
pub fn score_readability(text: &str, metadata: &ParsingMetadata) -> ReadabilityScore {
    if text.trim().chars().count() < MIN_TEXT_CHARS {
        return ReadabilityScore {
            score: 0,
            feedback: VERY_LITTLE_TEXT.to_string(),
            ..Default::default()
        };
    }

    let mut score = MAX_SCORE;
    let mut issues = Vec::new();
    let mut breakdown = Vec::new();

    // Layout facts from the extraction backend
    if metadata.has_images {
        score -= metadata.image_count.min(3) as i32;
        issues.push(format!(
            "Contains {} image(s) - ATS systems cannot read images",
            metadata.image_count
        ));
        breakdown.push(format!(
            "Images Detected: {} (ATS Incompatible)",
            metadata.image_count
        ));
    }

    if metadata.has_columns {
        score -= 2;
        issues.push("Multi-column layout detected - ATS may misread content order".to_string());
        breakdown.push("Layout: Multi-column format (ATS Difficulty)".to_string());
    }

    if metadata.has_tables && metadata.table_count > 2 {
        score -= 1;
        issues.push(format!(
            "Multiple tables detected ({}) - may complicate ATS parsing",
            metadata.table_count
        ));
    }

    for issue in &metadata.parsing_issues {
        score -= 1;
        issues.push(issue.clone());
    }

    // Length
    let words = word_count(text);
    if words > 800 {
        score -= 2;
        issues.push(format!(
            "Resume too long ({} words) - ideal range is 300-600 words",
            words
        ));
        breakdown.push(format!("Word Count: {} (Too Long)", words));
    } else if words > 700 {
        score -= 1;
        issues.push(format!(
            "Resume slightly long ({} words) - consider condensing",
            words
        ));
        breakdown.push(format!("Word Count: {} (Slightly Long)", words));
    } else if words < 200 {
        score -= 2;
        issues.push(format!(
            "Resume too short ({} words) - add more relevant details",
            words
        ));
        breakdown.push(format!("Word Count: {} (Too Short)", words));
    } else {
        breakdown.push(format!("Word Count: {} (Good)", words));
    }

    let profile = analyse_career_profile(text);
    if profile.too_long {
        score -= 1;
        issues.push("Career profile/summary section too wordy - keep to 3-4 lines".to_string());
        breakdown.push("Career Profile: Too Long".to_string());
    } else if profile.found {
        breakdown.push("Career Profile: Appropriate Length".to_string());
    }

    let sentences = analyse_sentences(text);
    let long_sentences = sentences.overly_long_sentences;
    if long_sentences > 3 {
        score -= 2;
        issues.push(format!(
            "{} overly long sentences - break into bullet points",
            long_sentences
        ));
        breakdown.push(format!(
            "Sentence Structure: {} Long Sentences (average {:.1} words)",
            long_sentences, sentences.average_length
        ));
    } else if long_sentences > 0 {
        score -= 1;
        issues.push(format!(
            "{} long sentences - consider bullet points",
            long_sentences
        ));
        breakdown.push(format!(
            "Sentence Structure: {} Long Sentences (average {:.1} words)",
            long_sentences, sentences.average_length
        ));
    } else {
        breakdown.push(format!(
            "Sentence Structure: Good ({} sentences, average {:.1} words)",
            sentences.total_sentences, sentences.average_length
        ));
    }

    let bullets = count_bullets(text);
    if bullets < 5 {
        score -= 1;
        issues.push(
            "Few bullet points detected - use more bullets for better readability".to_string(),
        );
        breakdown.push(format!("Bullet Points: {} (Too Few)", bullets));
    } else {
        breakdown.push(format!("Bullet Points: {} (Good)", bullets));
    }

    let ratio = special_char_ratio(text);
    if ratio > 0.10 {
        score -= 2;
        issues.push(
            "High ratio of special characters - may indicate formatting issues".to_string(),
        );
        breakdown.push("Special Characters: High Ratio (Problematic)".to_string());
    } else if ratio > 0.05 {
        score -= 1;
        issues.push("Moderate special character usage - ensure ATS compatibility".to_string());
        breakdown.push("Special Characters: Moderate Ratio".to_string());
    } else {
        breakdown.push("Special Characters: Low Ratio (Good)".to_string());
    }

    let long_lines = count_long_lines(text);
    if long_lines > 5 {
        score -= 1;
        issues.push(
            "Many lines without proper breaks - use more line breaks for readability".to_string(),
        );
        breakdown.push(format!("Line Structure: {} Long Lines", long_lines));
    } else {
        breakdown.push("Line Structure: Good".to_string());
    }

    let score = score.clamp(0, MAX_SCORE) as u8;
    let recommendations = recommendations(score, words, metadata);

    tracing::debug!(
        score,
        words,
        bullets,
        long_sentences,
        long_lines,
        "readability scored"
    );

    ReadabilityScore {
        score,
        feedback: render_feedback(score, &breakdown, &issues, &recommendations),
        breakdown,
        issues,
        recommendations,
    }
}

fn assessment(score: u8) -> &'static str {
    match score {
        8.. => "Excellent ATS compatibility and readability",
        6..=7 => "Good readability with minor ATS compatibility issues",
        4..=5 => "Moderate readability - some significant ATS compatibility concerns",
        _ => "Poor ATS compatibility - major formatting and readability issues",
    }
}

fn recommendations(score: u8, words: usize, metadata: &ParsingMetadata) -> Vec<String> {
    let mut recs: Vec<&str> = Vec::new();

    if score < 6 {
        recs.push("Consider using a simple, single-column format");
        recs.push("Remove all images and replace with text descriptions");
        recs.push("Use bullet points instead of long paragraphs");
    }

    if words > 600 {
        recs.push("Reduce word count to 300-600 words for optimal ATS processing");
        recs.push("Focus on most relevant experiences and achievements");
    }

    if metadata.has_images {
        recs.push("Replace images with text-based content");
        recs.push("Use standard fonts and avoid graphical elements");
    }

    if metadata.has_columns {
        recs.push("Use single-column layout for better ATS compatibility");
        recs.push("Organize content in clear sections with headers");
    }

    recs.push("Use standard section headers (Experience, Education, Skills)");
    recs.push("Save as PDF to preserve formatting while maintaining text readability");

    recs.into_iter().map(String::from).collect()
}

fn render_feedback(
    score: u8,
    breakdown: &[String],
    issues: &[String],
    recommendations: &[String],
) -> String {
    let mut out = String::new();
    out.push_str(assessment(score));
    out.push_str("\n\nANALYSIS BREAKDOWN:\n");
    out.push_str(&bulleted(breakdown));

    if !issues.is_empty() {
        out.push_str("\n\nISSUES IDENTIFIED:\n");
        out.push_str(&bulleted(issues));
    }

    if !recommendations.is_empty() {
        out.push_str("\n\nRECOMMENDATIONS:\n");
        out.push_str(&bulleted(recommendations));
    }

    out
}

fn bulleted(items: &[String]) -> String {
    items
        .iter()
        .map(|s| format!("- {}", s))
        .collect::<Vec<_>>()
        .join("\n")
}
