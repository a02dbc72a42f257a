use crate::model::ExtractedRecord;
use crate::scoring::outcome::FormattingScore;

const MAX_SCORE: f64 = 10.0;

/// Additive evidence that the key parts of the document were parseable.
pub fn score_formatting(record: &ExtractedRecord) -> FormattingScore {
    let mut score = 0.0;
    let mut notes = Vec::new();

    if record.summary.has_email {
        score += 1.0;
        notes.push("✓ Email address found".to_string());
    }
    if record.summary.has_phone {
        score += 1.0;
        notes.push("✓ Phone number found".to_string());
    }

    if record.degrees.is_empty() {
        notes.push("✗ No clear degree or education entries found".to_string());
    } else {
        score += 3.0;
        notes.push(format!("✓ Found {} potential degree(s)", record.degrees.len()));
    }

    if record.key_phrases.is_empty() {
        notes.push("✗ No clear key phrases (job titles, companies) found".to_string());
    } else {
        score += 3.0;
        notes.push(format!("✓ Found {} key phrase(s)", record.key_phrases.len()));
    }

    let skills = record.total_skills();
    if skills > 0 {
        score += 2.0;
        notes.push(format!("✓ Found {} technical and soft skills", skills));
    } else {
        notes.push("✗ No skills section found".to_string());
    }

    let percentage = score / MAX_SCORE * 100.0;
    let overall = if percentage >= 80.0 {
        "Excellent formatting"
    } else if percentage >= 60.0 {
        "Good formatting"
    } else {
        "Poor formatting - key info may be hard for an ATS to parse"
    };

    FormattingScore {
        score,
        feedback: format!("{}\n{}", overall, notes.join("\n")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContactInfo, ContentAnalysis, SectionPresence};

    fn record(emails: usize, degrees: usize, phrases: usize, skills: usize) -> ExtractedRecord {
        ExtractedRecord::new(
            ContactInfo {
                emails: (0..emails).map(|i| format!("a{i}@b.com")).collect(),
                phones: vec![],
            },
            (0..skills).map(|i| format!("Skill {i}")).collect(),
            vec![],
            (0..degrees).map(|i| format!("Bachelor {i}")).collect(),
            (0..phrases).map(|i| format!("Phrase {i}")).collect(),
            ContentAnalysis::default(),
            SectionPresence::default(),
        )
    }

    #[test]
    fn test_empty_record_scores_zero() {
        let result = score_formatting(&ExtractedRecord::default());
        assert_eq!(result.score, 0.0);
        assert!(result.feedback.starts_with("Poor formatting"));
        assert!(result.feedback.contains("No skills section found"));
    }

    #[test]
    fn test_full_record_scores_nine_without_phone() {
        let result = score_formatting(&record(1, 2, 3, 4));
        assert_eq!(result.score, 9.0);
        assert!(result.feedback.starts_with("Excellent formatting"));
        assert!(result.feedback.contains("Found 2 potential degree(s)"));
    }

    #[test]
    fn test_good_band() {
        // email + degrees + skills = 6
        let result = score_formatting(&record(1, 1, 0, 1));
        assert_eq!(result.score, 6.0);
        assert!(result.feedback.starts_with("Good formatting"));
    }
}
