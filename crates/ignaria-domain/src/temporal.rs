//! Temporal and geographic annotation values

use serde::{Deserialize, Serialize};
use std::fmt;

/// How confident the dating of a work is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Uncertainty {
    /// Date is well attested
    Low,

    /// Date is a scholarly consensus range
    Medium,

    /// Date is conjectural
    High,
}

impl Uncertainty {
    /// Get the value as it is written in metadata records
    pub fn as_str(&self) -> &'static str {
        match self {
            Uncertainty::Low => "low",
            Uncertainty::Medium => "medium",
            Uncertainty::High => "high",
        }
    }
}

/// Half of the Roman world an author wrote from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthorRegion {
    /// Greek- and Syriac-speaking East
    Eastern,

    /// Latin-speaking West
    Western,
}

/// The three fields a section needs before its temporal metadata is complete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemporalField {
    /// `composition_year`
    CompositionYear,

    /// `author_region`
    AuthorRegion,

    /// `author_location`
    AuthorLocation,
}

impl TemporalField {
    /// All required fields, in report order
    pub const ALL: [TemporalField; 3] = [
        TemporalField::CompositionYear,
        TemporalField::AuthorRegion,
        TemporalField::AuthorLocation,
    ];

    /// Record key of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            TemporalField::CompositionYear => "composition_year",
            TemporalField::AuthorRegion => "author_region",
            TemporalField::AuthorLocation => "author_location",
        }
    }
}

impl fmt::Display for TemporalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_uncertainty_rejected() {
        assert!(serde_yaml::from_str::<Uncertainty>("certain").is_err());
        assert_eq!(serde_yaml::from_str::<Uncertainty>("medium").unwrap(), Uncertainty::Medium);
    }

    #[test]
    fn test_region_serializes_capitalized() {
        let yaml = serde_yaml::to_string(&AuthorRegion::Eastern).unwrap();
        assert_eq!(yaml.trim(), "Eastern");

        let parsed: AuthorRegion = serde_yaml::from_str("Western").unwrap();
        assert_eq!(parsed, AuthorRegion::Western);
    }

    #[test]
    fn test_uncertainty_serializes_lowercase() {
        let yaml = serde_yaml::to_string(&Uncertainty::High).unwrap();
        assert_eq!(yaml.trim(), "high");
    }
}
