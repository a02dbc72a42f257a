use crate::model::ContentAnalysis;
use crate::scoring::outcome::ContentScore;

const POINTS_PER_STRONG_LINE: f64 = 1.5;
const MAX_SCORE: f64 = 10.0;
const MAX_EXAMPLES: usize = 5;

pub const NO_ACHIEVEMENTS: &str = "No achievement-oriented language found. Start bullet points with action verbs and include numbers to show impact.";

/// Reward strong, quantified achievement lines. Weak lines never add to
/// the score; they are only listed as candidates to rewrite.
pub fn score_content(content: &ContentAnalysis) -> ContentScore {
    let strong = &content.strong_lines;
    let weak = &content.weak_lines;
    let score = (strong.len() as f64 * POINTS_PER_STRONG_LINE).min(MAX_SCORE);

    if strong.is_empty() {
        return ContentScore {
            score,
            feedback: NO_ACHIEVEMENTS.to_string(),
        };
    }

    let overall = if score >= 8.0 {
        "Excellent use of strong action verbs and measurable results."
    } else if score >= 5.0 {
        "Good use of action verbs and quantified results. Try to use stronger verbs."
    } else {
        "Content can be improved by using more powerful action verbs and adding quantifiable achievements."
    };

    let mut feedback = format!("{}\n", overall);
    feedback.push_str("\nSTRONG ACTION VERBS:\n");
    for line in strong.iter().take(MAX_EXAMPLES) {
        feedback.push_str(&format!("- \"{}\"\n", line));
    }
    if !weak.is_empty() {
        feedback.push_str("\nWEAK ACTION VERBS (can be improved):\n");
        for line in weak.iter().take(MAX_EXAMPLES) {
            feedback.push_str(&format!("- \"{}\"\n", line));
        }
    }

    ContentScore { score, feedback }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(strong: usize, weak: usize) -> ContentAnalysis {
        ContentAnalysis {
            strong_lines: (0..strong).map(|i| format!("led {i} crews")).collect(),
            weak_lines: (0..weak).map(|i| format!("helped team {i}")).collect(),
        }
    }

    #[test]
    fn test_no_strong_lines_uses_generic_message() {
        let result = score_content(&analysis(0, 4));
        assert_eq!(result.score, 0.0);
        assert_eq!(result.feedback, NO_ACHIEVEMENTS);
    }

    #[test]
    fn test_one_strong_line() {
        let result = score_content(&analysis(1, 0));
        assert_eq!(result.score, 1.5);
        assert!(result.feedback.contains("\"led 0 crews\""));
        assert!(!result.feedback.contains("WEAK"));
    }

    #[test]
    fn test_score_capped_at_ten() {
        assert_eq!(score_content(&analysis(7, 0)).score, 10.0);
        assert_eq!(score_content(&analysis(20, 0)).score, 10.0);
    }

    #[test]
    fn test_examples_limited_to_five() {
        let result = score_content(&analysis(8, 8));
        assert!(result.feedback.contains("led 4 crews"));
        assert!(!result.feedback.contains("led 5 crews"));
        assert!(result.feedback.contains("helped team 4"));
        assert!(!result.feedback.contains("helped team 5"));
    }

    #[test]
    fn test_weak_lines_do_not_raise_score() {
        assert_eq!(score_content(&analysis(2, 0)).score, score_content(&analysis(2, 9)).score);
    }
}
