pub mod assessment;
pub mod content;
pub mod formatting;
pub mod job_match;
pub mod outcome;
pub mod readability;

pub use assessment::assess;
pub use outcome::{
    Analysis, AnalysisStatus, Assessment, ContentScore, FitBand, FormattingScore, JobMatchScore,
    ReadabilityScore, ScoreSet,
};

use crate::model::{ExtractedRecord, ParsingMetadata};
use crate::profile::schema::JobRequirements;

/// Computes the four independent scores against one requirement table.
pub struct Scorer<'a> {
    requirements: &'a JobRequirements,
}

impl<'a> Scorer<'a> {
    pub fn new(requirements: &'a JobRequirements) -> Self {
        Scorer { requirements }
    }

    /// Score a document. `text` is the normalized text the record was
    /// extracted from; `metadata` is passed through to the result.
    pub fn score(
        &self,
        text: &str,
        record: &ExtractedRecord,
        metadata: &ParsingMetadata,
    ) -> ScoreSet {
        let scores = ScoreSet {
            readability: readability::score_readability(text, metadata),
            formatting: formatting::score_formatting(record),
            content: content::score_content(&record.content),
            job_match: job_match::score_job_match(record, self.requirements),
            parsing_metadata: metadata.clone(),
        };

        tracing::info!(
            readability = scores.readability.score,
            formatting = scores.formatting.score,
            content = scores.content.score,
            job_match = scores.job_match.percentage,
            "scored document"
        );

        scores
    }
}
