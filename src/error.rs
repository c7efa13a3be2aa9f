//! Error handling for the resume extractor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeExtractorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Malformed layout input: {0}")]
    Layout(String),

    #[error("Pattern compilation error: {0}")]
    Pattern(String),

    #[error("Semantic extraction error: {0}")]
    SemanticExtraction(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, ResumeExtractorError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ResumeExtractorError {
    fn from(err: anyhow::Error) -> Self {
        ResumeExtractorError::SemanticExtraction(err.to_string())
    }
}

impl From<regex::Error> for ResumeExtractorError {
    fn from(err: regex::Error) -> Self {
        ResumeExtractorError::Pattern(err.to_string())
    }
}

impl From<reqwest::Error> for ResumeExtractorError {
    fn from(err: reqwest::Error) -> Self {
        ResumeExtractorError::Network(err.to_string())
    }
}
