use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CvscoreError {
    #[error("document extraction failed: {0}")]
    Extraction(String),

    #[error("{tool} not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    ToolNotFound { tool: String },

    #[error("{tool} failed with exit code {code}: {stderr}")]
    ToolFailed {
        tool: String,
        code: i32,
        stderr: String,
    },

    #[error("unsupported document format: {0}. Supported formats are .pdf, .docx, .txt and saved .json extractions.")]
    UnsupportedFormat(String),

    #[error("failed to load profile from {path}: {reason}")]
    ProfileLoad { path: PathBuf, reason: String },

    #[error("invalid profile: {0}")]
    ProfileInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
