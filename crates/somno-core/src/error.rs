use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SomnoError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("invalid fragment dump: {0}")]
    Fragments(String),

    #[error("unknown report kind '{0}'. Available: diagnostic, compliance")]
    UnknownReport(String),

    #[error("failed to load fixture from {}: {reason}", path.display())]
    FixtureLoad { path: PathBuf, reason: String },

    #[error("invalid fixture: {0}")]
    FixtureInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
