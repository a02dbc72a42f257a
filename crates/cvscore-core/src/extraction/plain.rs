use crate::error::CvscoreError;
use crate::extraction::DocumentExtractor;
use crate::model::{ExtractedDocument, ParsingMetadata};

const COLUMN_ISSUE: &str = "Text appears to be formatted in columns";

/// Plain `.txt` backend. Decodes UTF-8 lossily and guesses at column
/// layouts from a preponderance of short lines.
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    pub fn new() -> Self {
        PlainTextExtractor
    }
}

impl Default for PlainTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<ExtractedDocument, CvscoreError> {
        let text = String::from_utf8_lossy(bytes).into_owned();
        let mut metadata = ParsingMetadata::default();

        if looks_columnar(&text) {
            metadata.has_columns = true;
            metadata.parsing_issues.push(COLUMN_ISSUE.to_string());
        }

        tracing::debug!(chars = text.len(), columns = metadata.has_columns, "read text file");
        Ok(ExtractedDocument { text, metadata })
    }

    fn backend_name(&self) -> &str {
        "plain"
    }
}

/// More than 10 lines, and over 60% of them 6 to 39 characters long.
fn looks_columnar(text: &str) -> bool {
    let lines: Vec<&str> = text.split('\n').collect();
    if lines.len() <= 10 {
        return false;
    }
    let short = lines
        .iter()
        .filter(|l| (6..40).contains(&l.trim().chars().count()))
        .count();
    short as f64 / lines.len() as f64 > 0.6
}
