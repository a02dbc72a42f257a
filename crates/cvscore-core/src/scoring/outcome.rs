use crate::model::{ExtractedRecord, ParsingMetadata};
use serde::{Deserialize, Serialize};
use std::fmt;

/// ATS compatibility and readability, 0-10 by deduction from 10.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReadabilityScore {
    pub score: u8,
    /// Rendered explanation: assessment, breakdown, issues, recommendations.
    pub feedback: String,
    /// One line per heuristic checked.
    pub breakdown: Vec<String>,
    /// One line per deduction taken.
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Evidence that the document's key parts were machine-readable, 0-10.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormattingScore {
    pub score: f64,
    pub feedback: String,
}

/// Achievement-oriented language, 0-10.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentScore {
    pub score: f64,
    pub feedback: String,
}

/// Overlap with the job profile's requirement table, 0-100.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobMatchScore {
    pub percentage: f64,
    pub feedback: String,
    /// Education fraction in [0, 1].
    pub education: f64,
    /// Hard-skill fraction in [0, 1].
    pub hard_skills: f64,
    /// Soft-skill fraction in [0, 1].
    pub soft_skills: f64,
    pub degree_found: bool,
    pub field_found: bool,
    /// Requirement terms, as written in the profile.
    pub matched_hard_skills: Vec<String>,
    pub missing_hard_skills: Vec<String>,
    pub matched_soft_skills: Vec<String>,
    pub missing_soft_skills: Vec<String>,
}

/// The four independent scores for one document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreSet {
    pub readability: ReadabilityScore,
    pub formatting: FormattingScore,
    pub content: ContentScore,
    pub job_match: JobMatchScore,
    pub parsing_metadata: ParsingMetadata,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitBand {
    Excellent,
    Good,
    Moderate,
}

impl fmt::Display for FitBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitBand::Excellent => write!(f, "Excellent fit"),
            FitBand::Good => write!(f, "Good fit"),
            FitBand::Moderate => write!(f, "Moderate fit"),
        }
    }
}

/// Weighted overall result plus prioritised advice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    /// Overall percentage, 0-100.
    pub overall: f64,
    pub band: FitBand,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum AnalysisStatus {
    Complete,
    /// Normalized text fell below the minimum length; the record is empty.
    InsufficientText { chars: usize },
}

/// Full result of analysing one document against one profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    pub profile_name: String,
    pub status: AnalysisStatus,
    pub record: ExtractedRecord,
    pub scores: ScoreSet,
    pub assessment: Assessment,
}

impl Analysis {
    pub fn is_complete(&self) -> bool {
        self.status == AnalysisStatus::Complete
    }
}
