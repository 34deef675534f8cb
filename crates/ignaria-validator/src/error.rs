//! Validator error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop a validation run outright.
///
/// Problems with individual volumes are recorded in the report instead.
#[derive(Error, Debug)]
pub enum ValidatorError {
    /// Store could not enumerate volumes
    #[error("Store error: {0}")]
    Store(String),

    /// Report could not be written
    #[error("Failed to write {path}: {source}")]
    Io {
        /// Destination path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Report could not be serialized
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
