//! Validator configuration

use ignaria_domain::TemporalField;
use serde::{Deserialize, Serialize};

/// Configuration for temporal and integrity checks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// A complete section must have `composition_year`
    pub require_composition_year: bool,

    /// A complete section must have `author_region`
    pub require_author_region: bool,

    /// A complete section must have `author_location`
    pub require_author_location: bool,

    /// Report anthology flag, duplicate marker and uncertainty inconsistencies
    pub consistency_warnings: bool,

    /// Top-level metadata sections whose absence is a warning
    pub required_metadata_sections: Vec<String>,

    /// Warn about text files the manifest does not reference
    pub check_orphans: bool,

    /// Warn about files mixing CRLF, LF and CR
    pub check_line_endings: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            require_composition_year: true,
            require_author_region: true,
            require_author_location: true,
            consistency_warnings: true,
            required_metadata_sections: vec![
                "text_info".to_string(),
                "publication".to_string(),
                "technical".to_string(),
            ],
            check_orphans: true,
            check_line_endings: true,
        }
    }
}

impl ValidationConfig {
    /// Create a permissive configuration (dating only, no housekeeping warnings)
    pub fn permissive() -> Self {
        Self {
            require_composition_year: true,
            require_author_region: false,
            require_author_location: false,
            consistency_warnings: false,
            required_metadata_sections: vec!["text_info".to_string()],
            check_orphans: false,
            check_line_endings: false,
        }
    }

    /// Create a strict configuration (every metadata section expected)
    pub fn strict() -> Self {
        Self {
            required_metadata_sections: vec![
                "text_info".to_string(),
                "publication".to_string(),
                "content".to_string(),
                "sources".to_string(),
                "technical".to_string(),
                "cataloging".to_string(),
            ],
            ..Self::default()
        }
    }

    /// Temporal fields a section needs to count as complete
    pub fn required_fields(&self) -> Vec<TemporalField> {
        TemporalField::ALL
            .into_iter()
            .filter(|field| match field {
                TemporalField::CompositionYear => self.require_composition_year,
                TemporalField::AuthorRegion => self.require_author_region,
                TemporalField::AuthorLocation => self.require_author_location,
            })
            .collect()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.required_fields().is_empty() {
            return Err("at least one temporal field must be required".to_string());
        }
        if let Some(name) = self.required_metadata_sections.iter().find(|s| s.trim().is_empty()) {
            return Err(format!("invalid metadata section name '{}'", name));
        }
        Ok(())
    }
}
