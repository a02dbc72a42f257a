pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod profile;
pub mod scoring;

use error::CvscoreError;
use extraction::DocumentExtractor;
use model::{ExtractedDocument, ExtractedRecord, ParsingMetadata};
use parsing::normalize::normalize_text;
use parsing::Extractor;
use profile::schema::{JobProfile, Lexicon};
use scoring::{assess, Analysis, AnalysisStatus, Scorer};

/// Normalized text shorter than this is not worth extracting from.
pub const MIN_TEXT_CHARS: usize = 10;

/// Main API entry point: decode a document and analyse it against a profile.
pub fn analyze_document(
    bytes: &[u8],
    extractor: &dyn DocumentExtractor,
    profile: &JobProfile,
    lexicon: &Lexicon,
) -> Result<Analysis, CvscoreError> {
    let document = extract_document(bytes, extractor)?;
    analyze_text(&document.text, &document.metadata, profile, lexicon)
}

/// Decode a document without analysing it.
pub fn extract_document(
    bytes: &[u8],
    extractor: &dyn DocumentExtractor,
) -> Result<ExtractedDocument, CvscoreError> {
    tracing::info!(backend = extractor.backend_name(), bytes = bytes.len(), "extracting document");
    extractor.extract(bytes)
}

/// Analyse already-extracted text.
///
/// Fails only if the profile's vocabularies cannot be compiled. Text
/// below `MIN_TEXT_CHARS` after normalization yields an empty record and
/// `AnalysisStatus::InsufficientText`, with every score still populated.
pub fn analyze_text(
    raw_text: &str,
    metadata: &ParsingMetadata,
    profile: &JobProfile,
    lexicon: &Lexicon,
) -> Result<Analysis, CvscoreError> {
    let text = normalize_text(raw_text);
    let chars = text.chars().count();

    let (status, record) = if chars < MIN_TEXT_CHARS {
        tracing::warn!(chars, "insufficient text for analysis");
        (AnalysisStatus::InsufficientText { chars }, ExtractedRecord::default())
    } else {
        let extractor = Extractor::new(profile, lexicon)?;
        (AnalysisStatus::Complete, extractor.extract(&text))
    };

    let scores = Scorer::new(&profile.requirements).score(&text, &record, metadata);
    let assessment = assess(&scores, &record);

    tracing::info!(
        profile = %profile.name,
        overall = assessment.overall,
        band = %assessment.band,
        "analysis complete"
    );

    Ok(Analysis {
        profile_name: profile.name.clone(),
        status,
        record,
        scores,
        assessment,
    })
}
