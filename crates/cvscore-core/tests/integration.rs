//! Integration tests for the analyze_document() end-to-end pipeline.
//!
//! Uses a MockExtractor that returns pre-built text and metadata without
//! invoking pdftotext or unzipping anything, so these tests need no
//! external tools.

use cvscore_core::error::CvscoreError;
use cvscore_core::extraction::DocumentExtractor;
use cvscore_core::model::{ExtractedDocument, ParsingMetadata};
use cvscore_core::parsing::normalize::normalize_text;
use cvscore_core::profile::builtin::{lexicon, load_preset};
use cvscore_core::profile::schema::HardSkills;
use cvscore_core::scoring::readability::VERY_LITTLE_TEXT;
use cvscore_core::scoring::{AnalysisStatus, FitBand};
use cvscore_core::{analyze_document, analyze_text};

struct MockExtractor {
    document: ExtractedDocument,
}

impl MockExtractor {
    fn text(text: &str) -> Self {
        MockExtractor {
            document: ExtractedDocument {
                text: text.to_string(),
                metadata: ParsingMetadata::default(),
            },
        }
    }
}

impl DocumentExtractor for MockExtractor {
    fn extract(&self, _bytes: &[u8]) -> Result<ExtractedDocument, CvscoreError> {
        Ok(self.document.clone())
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

struct FailingExtractor;

impl DocumentExtractor for FailingExtractor {
    fn extract(&self, _bytes: &[u8]) -> Result<ExtractedDocument, CvscoreError> {
        Err(CvscoreError::ToolNotFound {
            tool: "pdftotext".into(),
        })
    }

    fn backend_name(&self) -> &str {
        "failing"
    }
}

const GRADUATE_CV: &str = "\
Alex Citizen\r\n\
alex.citizen@example.com   |   0412 345 678\r\n\
\r\n\
Career Profile\n\
Graduate civil engineer with a passion for water infrastructure.\n\
\n\
Work Experience\n\
Graduate Engineer, Coastal Water Authority\n\
- Designed 4 stormwater culverts using AutoCAD and Civil 3D\n\
- Managed a $120,000 drainage upgrade across 3 sites\n\
- Assisted with site inspection and surveying\n\
- Prepared technical reports for council\n\
- Led a team of 5 students in 2021\n\
\n\
Education\n\
Bachelor of Engineering (Civil Engineering), University of Sydney, 2022\n\
\n\
Skills\n\
Rail Engineering, hydraulic modelling, HEC-RAS, teamwork, problem solving\n";

// ---------------------------------------------------------------------------
// Test 1: Minimal document with contact details and one achievement line
// ---------------------------------------------------------------------------
#[test]
fn contact_and_single_achievement() {
    let profile = load_preset("civil-engineer").unwrap();
    let lexicon = lexicon().unwrap();
    let extractor = MockExtractor::text(
        "Jamie Rivera\na@b.com\n0412345678\nDesigned a bridge structure saving $50,000 annually",
    );

    let analysis = analyze_document(&[], &extractor, &profile, &lexicon).unwrap();
    let scores = &analysis.scores;

    assert!(analysis.is_complete());
    assert_eq!(analysis.record.contact.emails, vec!["a@b.com"]);
    assert_eq!(analysis.record.contact.phones, vec!["0412345678"]);
    assert!(scores.formatting.score >= 2.0);
    assert_eq!(scores.content.score, 1.5);
    // Too short (-2) and too few bullets (-1); nothing layout related
    assert_eq!(scores.readability.score, 7);
    assert!(!scores.readability.issues.iter().any(|i| i.contains("image")));
    assert!(!scores.readability.issues.iter().any(|i| i.contains("column")));
}

// ---------------------------------------------------------------------------
// Test 2: Degenerate input still yields a full score set
// ---------------------------------------------------------------------------
#[test]
fn five_characters_is_insufficient() {
    let profile = load_preset("civil-engineer").unwrap();
    let lexicon = lexicon().unwrap();

    let analysis = analyze_document(&[], &MockExtractor::text("hello"), &profile, &lexicon).unwrap();

    assert_eq!(analysis.status, AnalysisStatus::InsufficientText { chars: 5 });
    assert!(!analysis.is_complete());
    assert!(analysis.record.technical_skills.is_empty());
    assert_eq!(analysis.scores.readability.score, 0);
    assert_eq!(analysis.scores.readability.feedback, VERY_LITTLE_TEXT);
    assert_eq!(analysis.scores.formatting.score, 0.0);
    assert_eq!(analysis.scores.content.score, 0.0);
    assert_eq!(analysis.scores.job_match.percentage, 0.0);
    assert_eq!(analysis.assessment.band, FitBand::Moderate);
    assert!(!analysis.assessment.recommendations.is_empty());
}

// ---------------------------------------------------------------------------
// Test 3: Realistic graduate resume against the built-in profile
// ---------------------------------------------------------------------------
#[test]
fn graduate_resume_end_to_end() {
    let profile = load_preset("civil-engineer").unwrap();
    let lexicon = lexicon().unwrap();

    let analysis =
        analyze_document(&[], &MockExtractor::text(GRADUATE_CV), &profile, &lexicon).unwrap();
    let record = &analysis.record;

    assert_eq!(record.contact.emails, vec!["alex.citizen@example.com"]);
    assert_eq!(record.contact.phones, vec!["0412345678"]);
    assert!(record.technical_skills.contains(&"AutoCAD".to_string()));
    assert!(record.technical_skills.contains(&"Civil 3D".to_string()));
    assert!(record.technical_skills.contains(&"HEC-RAS".to_string()));
    assert!(record.technical_skills.contains(&"Rail Engineering".to_string()));
    assert_eq!(
        record.degrees,
        vec!["Bachelor of Engineering (Civil Engineering), University of Sydney, 2022"]
    );
    assert!(record.sections.profile);
    assert!(record.sections.experience);
    assert!(record.sections.education);
    assert!(record.sections.skills);

    // Strong lines need a non-year number; "in 2021" alone would not do
    // but "5 students" does.
    assert_eq!(record.content.strong_lines.len(), 3);
    assert!(record
        .content
        .weak_lines
        .contains(&"- assisted with site inspection and surveying".to_string()));
    assert_eq!(analysis.scores.content.score, 4.5);

    let jm = &analysis.scores.job_match;
    assert!(jm.degree_found);
    assert!(jm.field_found);
    assert_eq!(jm.education, 1.0);
    assert!(jm.matched_hard_skills.iter().any(|s| s == "AutoCAD"));
    assert!((0.0..=100.0).contains(&jm.percentage));

    // formatting: email, phone, degree, phrases, skills
    assert_eq!(analysis.scores.formatting.score, 10.0);
    assert!((0.0..=100.0).contains(&analysis.assessment.overall));
    assert!(analysis.assessment.recommendations.len() <= 7);
    assert!(!analysis
        .assessment
        .recommendations
        .iter()
        .any(|r| r.contains("phone number")));
}

// ---------------------------------------------------------------------------
// Test 4: A key phrase that is also a skill is reported only as a skill
// ---------------------------------------------------------------------------
#[test]
fn key_phrase_matching_skill_is_not_duplicated() {
    let profile = load_preset("civil-engineer").unwrap();
    let lexicon = lexicon().unwrap();

    let analysis = analyze_text(GRADUATE_CV, &ParsingMetadata::default(), &profile, &lexicon).unwrap();
    let record = &analysis.record;

    assert!(record.technical_skills.contains(&"Rail Engineering".to_string()));
    assert!(!record
        .key_phrases
        .iter()
        .any(|p| p.eq_ignore_ascii_case("rail engineering")));
    assert!(record.key_phrases.contains(&"Work Experience".to_string()));
}

// ---------------------------------------------------------------------------
// Test 5: An empty hard-skill requirement list is a vacuous full match
// ---------------------------------------------------------------------------
#[test]
fn empty_hard_skill_requirements_score_one() {
    let mut profile = load_preset("civil-engineer").unwrap();
    profile.requirements.hard_skills = HardSkills::default();
    let lexicon = lexicon().unwrap();

    let analysis = analyze_text("Some text without any skills at all", &ParsingMetadata::default(), &profile, &lexicon)
        .unwrap();

    assert_eq!(analysis.scores.job_match.hard_skills, 1.0);
    assert!(analysis.scores.job_match.matched_hard_skills.is_empty());
    assert!(analysis.scores.job_match.percentage >= 50.0);
}

// ---------------------------------------------------------------------------
// Test 6: Layout metadata from the backend reaches the readability score
// ---------------------------------------------------------------------------
#[test]
fn layout_metadata_penalised() {
    let profile = load_preset("civil-engineer").unwrap();
    let lexicon = lexicon().unwrap();
    let clean = analyze_text(GRADUATE_CV, &ParsingMetadata::default(), &profile, &lexicon).unwrap();

    let metadata = ParsingMetadata {
        has_images: true,
        image_count: 2,
        has_columns: true,
        ..Default::default()
    };
    let busy = analyze_text(GRADUATE_CV, &metadata, &profile, &lexicon).unwrap();

    let drop = clean.scores.readability.score as i32 - busy.scores.readability.score as i32;
    assert_eq!(drop, 4);
    assert_eq!(busy.scores.parsing_metadata, metadata);
}

// ---------------------------------------------------------------------------
// Test 7: Normalization is idempotent on real input
// ---------------------------------------------------------------------------
#[test]
fn normalization_idempotent() {
    let once = normalize_text(GRADUATE_CV);
    assert_eq!(normalize_text(&once), once);
    assert!(!once.contains('\r'));
    assert!(!once.contains("\n\n"));
}

// ---------------------------------------------------------------------------
// Test 8: Extraction errors propagate
// ---------------------------------------------------------------------------
#[test]
fn extractor_error_propagates() {
    let profile = load_preset("civil-engineer").unwrap();
    let lexicon = lexicon().unwrap();
    let result = analyze_document(&[], &FailingExtractor, &profile, &lexicon);
    assert!(matches!(result, Err(CvscoreError::ToolNotFound { .. })));
}

// ---------------------------------------------------------------------------
// Test 9: Saved extractions round-trip through JSON with missing fields
// ---------------------------------------------------------------------------
#[test]
fn saved_extraction_tolerates_missing_metadata() {
    let doc: ExtractedDocument =
        serde_json::from_str(r#"{"text": "hello", "metadata": {"has_images": true}}"#).unwrap();
    assert!(doc.metadata.has_images);
    assert_eq!(doc.metadata.image_count, 0);
    assert!(doc.metadata.parsing_issues.is_empty());

    let doc: ExtractedDocument = serde_json::from_str(r#"{"text": "hello"}"#).unwrap();
    assert_eq!(doc.metadata, ParsingMetadata::default());
}
