//! Error handling for the resume screener

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScreenerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid taxonomy (category '{category}'): {reason}")]
    InvalidTaxonomy { category: String, reason: String },

    #[error("Text extraction error: {0}")]
    TextExtraction(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ScreenerError>;

impl ScreenerError {
    pub fn invalid_taxonomy(category: impl Into<String>, reason: impl Into<String>) -> Self {
        ScreenerError::InvalidTaxonomy {
            category: category.into(),
            reason: reason.into(),
        }
    }
}

/// Convert askama render errors to our custom error type
impl From<askama::Error> for ScreenerError {
    fn from(err: askama::Error) -> Self {
        ScreenerError::OutputFormatting(err.to_string())
    }
}
