//! Request and outcome types for extraction

use crate::builder::LocatedSection;

/// Request to extract the sections of one volume
#[derive(Debug, Clone)]
pub struct ExtractionRequest {
    /// Volume identifier (file stem)
    pub volume_id: String,

    /// Build sections without writing the record
    pub dry_run: bool,
}

impl ExtractionRequest {
    /// Request that writes the result
    pub fn new(volume_id: impl Into<String>) -> Self {
        Self {
            volume_id: volume_id.into(),
            dry_run: false,
        }
    }

    /// Request that only previews the result
    pub fn dry_run(volume_id: impl Into<String>) -> Self {
        Self {
            volume_id: volume_id.into(),
            dry_run: true,
        }
    }
}

/// Result of extracting one volume
#[derive(Debug, Clone)]
pub struct ExtractionOutcome {
    /// Volume identifier
    pub volume_id: String,

    /// Sections in text order with their locations
    pub sections: Vec<LocatedSection>,

    /// Number of sections that took annotations from the previous record
    pub carried_annotations: usize,

    /// Whether the record was rewritten
    pub written: bool,
}

impl ExtractionOutcome {
    /// Whether the volume now counts as an anthology
    pub fn is_anthology(&self) -> bool {
        !self.sections.is_empty()
    }
}
