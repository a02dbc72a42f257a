pub mod docx;
pub mod pdftotext;
pub mod plain;

use crate::error::CvscoreError;
use crate::model::ExtractedDocument;
use std::path::Path;

pub use docx::DocxExtractor;
pub use pdftotext::PdftotextExtractor;
pub use plain::PlainTextExtractor;

/// Trait for document decoding backends.
pub trait DocumentExtractor: Send + Sync {
    /// Decode a document into plain text plus structural metadata.
    fn extract(&self, bytes: &[u8]) -> Result<ExtractedDocument, CvscoreError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Pick a backend from the file extension (case-insensitive).
pub fn extractor_for_path(path: &Path) -> Result<Box<dyn DocumentExtractor>, CvscoreError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "pdf" => Ok(Box::new(PdftotextExtractor::new())),
        "docx" => Ok(Box::new(DocxExtractor::new())),
        "txt" => Ok(Box::new(PlainTextExtractor::new())),
        _ => Err(CvscoreError::UnsupportedFormat(path.display().to_string())),
    }
}

/// Below this many trimmed characters a decoded document is flagged.
pub(crate) const MIN_EXTRACTED_CHARS: usize = 50;
