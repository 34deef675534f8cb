//! Error/warning accumulation and the on-disk report shape

use crate::error::ValidatorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Overall outcome of a validation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ValidationStatus {
    /// No failures
    Pass,

    /// At least one failure
    Fail,
}

impl ValidationStatus {
    /// Get the status as printed in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationStatus::Pass => "PASS",
            ValidationStatus::Fail => "FAIL",
        }
    }
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Counts and status at the head of a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    /// Number of errors
    pub errors: usize,

    /// Number of warnings
    pub warnings: usize,

    /// PASS iff there are no errors
    pub status: ValidationStatus,
}

/// Accumulated errors and warnings of a corpus integrity run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that fail the run
    pub errors: Vec<String>,

    /// Problems worth a look that do not fail the run
    pub warnings: Vec<String>,
}

#[derive(Serialize, Deserialize)]
struct ReportDocument {
    validation_summary: ValidationSummary,
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error
    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Record a warning
    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// PASS iff no errors were recorded
    pub fn status(&self) -> ValidationStatus {
        if self.errors.is_empty() {
            ValidationStatus::Pass
        } else {
            ValidationStatus::Fail
        }
    }

    /// Whether the run passed
    pub fn is_success(&self) -> bool {
        self.status() == ValidationStatus::Pass
    }

    /// Counts and status
    pub fn summary(&self) -> ValidationSummary {
        ValidationSummary {
            errors: self.errors.len(),
            warnings: self.warnings.len(),
            status: self.status(),
        }
    }

    /// Render as YAML with `validation_summary`, `errors` and `warnings` keys
    pub fn to_yaml(&self) -> Result<String, ValidatorError> {
        let document = ReportDocument {
            validation_summary: self.summary(),
            errors: self.errors.clone(),
            warnings: self.warnings.clone(),
        };
        Ok(serde_yaml::to_string(&document)?)
    }

    /// Parse a report previously written by [`ValidationReport::to_yaml`]
    pub fn from_yaml(yaml: &str) -> Result<Self, ValidatorError> {
        let document: ReportDocument = serde_yaml::from_str(yaml)?;
        Ok(Self {
            errors: document.errors,
            warnings: document.warnings,
        })
    }

    /// Write the YAML report to a file
    pub fn write_to(&self, path: &Path) -> Result<(), ValidatorError> {
        let yaml = self.to_yaml()?;
        std::fs::write(path, yaml).map_err(|source| ValidatorError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
