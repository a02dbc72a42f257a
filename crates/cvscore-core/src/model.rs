use serde::{Deserialize, Serialize};

/// Structural facts reported by a document extraction backend.
///
/// Every field is optional on the wire; absent fields read as false, zero
/// or empty so pre-saved extractions from older backends still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsingMetadata {
    pub has_images: bool,
    pub image_count: u32,
    pub has_columns: bool,
    pub has_tables: bool,
    pub table_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
    pub parsing_issues: Vec<String>,
}

/// Plain text plus metadata, as produced by a `DocumentExtractor`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractedDocument {
    pub text: String,
    #[serde(default)]
    pub metadata: ParsingMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Deduplicated, in order of first appearance.
    pub emails: Vec<String>,
    /// Digit-only strings of at least 9 digits, deduplicated.
    pub phones: Vec<String>,
}

/// Achievement-language classification of the document's lines.
///
/// Both lists hold lowercased lines, deduplicated, longest first. A line
/// never appears in both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentAnalysis {
    pub strong_lines: Vec<String>,
    pub weak_lines: Vec<String>,
}

/// Which conventional resume sections have a recognisable heading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionPresence {
    pub profile: bool,
    pub experience: bool,
    pub education: bool,
    pub skills: bool,
    pub projects: bool,
    pub certifications: bool,
    pub contact: bool,
}

impl SectionPresence {
    /// Core sections (experience, education, skills) without a heading.
    pub fn missing_core(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !self.experience {
            missing.push("Experience");
        }
        if !self.education {
            missing.push("Education");
        }
        if !self.skills {
            missing.push("Skills");
        }
        missing
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionSummary {
    pub has_email: bool,
    pub has_phone: bool,
    pub total_technical_skills: usize,
    pub total_soft_skills: usize,
    pub total_key_phrases: usize,
    pub total_degrees: usize,
    pub total_strong_lines: usize,
    pub total_weak_lines: usize,
}

/// Everything the extractor pulls out of one normalized document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedRecord {
    pub contact: ContactInfo,
    /// Canonical technical skill names.
    pub technical_skills: Vec<String>,
    /// Canonical soft skill names.
    pub soft_skills: Vec<String>,
    /// Raw lines containing a degree keyword.
    pub degrees: Vec<String>,
    pub key_phrases: Vec<String>,
    pub content: ContentAnalysis,
    pub sections: SectionPresence,
    pub summary: ExtractionSummary,
}

impl ExtractedRecord {
    /// Assemble a record, deriving the summary counts from the parts.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        contact: ContactInfo,
        technical_skills: Vec<String>,
        soft_skills: Vec<String>,
        degrees: Vec<String>,
        key_phrases: Vec<String>,
        content: ContentAnalysis,
        sections: SectionPresence,
    ) -> Self {
        let summary = ExtractionSummary {
            has_email: !contact.emails.is_empty(),
            has_phone: !contact.phones.is_empty(),
            total_technical_skills: technical_skills.len(),
            total_soft_skills: soft_skills.len(),
            total_key_phrases: key_phrases.len(),
            total_degrees: degrees.len(),
            total_strong_lines: content.strong_lines.len(),
            total_weak_lines: content.weak_lines.len(),
        };
        ExtractedRecord {
            contact,
            technical_skills,
            soft_skills,
            degrees,
            key_phrases,
            content,
            sections,
            summary,
        }
    }

    pub fn total_skills(&self) -> usize {
        self.technical_skills.len() + self.soft_skills.len()
    }
}
