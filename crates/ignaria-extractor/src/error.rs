//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur during section extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Volume record or text is missing
    #[error("Not found: {0}")]
    NotFound(String),

    /// Store read or write failed
    #[error("Store error: {0}")]
    Store(String),

    /// A heading pattern failed to compile
    #[error("Invalid heading pattern '{name}': {reason}")]
    Pattern {
        /// Pattern name from the table
        name: String,
        /// Compiler message
        reason: String,
    },

    /// Curated sections file could not be parsed
    #[error("Invalid curated sections: {0}")]
    Curated(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ExtractorError {
    /// Whether the error means the volume should be skipped rather than failed
    pub fn is_not_found(&self) -> bool {
        matches!(self, ExtractorError::NotFound(_))
    }
}

impl From<serde_yaml::Error> for ExtractorError {
    fn from(e: serde_yaml::Error) -> Self {
        ExtractorError::Curated(e.to_string())
    }
}
