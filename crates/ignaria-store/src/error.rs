//! Error types for the store

use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Volume record or text does not exist
    #[error("Volume not found: {0}")]
    NotFound(String),

    /// Record exists but is not a usable metadata mapping
    #[error("Malformed record {path}: {reason}")]
    Malformed {
        /// File or volume the record came from
        path: String,
        /// What was wrong with it
        reason: String,
    },

    /// Disk failure while reading or writing
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File being accessed
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl StoreError {
    /// Whether the error means the volume is simply absent
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }

    /// Whether the error means the record could not be parsed
    pub fn is_malformed(&self) -> bool {
        matches!(self, StoreError::Malformed { .. })
    }

    pub(crate) fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        StoreError::Malformed {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
