//! Hand-curated section lists

use crate::error::ExtractorError;
use ignaria_domain::Section;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Curated sections for one volume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuratedVolume {
    /// Volume identifier (file stem)
    pub volume: String,

    /// Sections in order; temporal annotations allowed
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl CuratedVolume {
    /// Sections with repeated start markers removed, first occurrence kept.
    ///
    /// Returns the kept sections and the markers that were dropped.
    pub fn deduplicated(&self) -> (Vec<Section>, Vec<String>) {
        let mut seen = HashSet::new();
        let mut kept = Vec::new();
        let mut dropped = Vec::new();

        for section in &self.sections {
            if seen.insert(section.start_marker.as_str()) {
                kept.push(section.clone());
            } else {
                dropped.push(section.start_marker.clone());
            }
        }

        (kept, dropped)
    }
}

/// A curated sections file: a YAML list of volume entries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CuratedSections {
    /// Entries in file order
    pub volumes: Vec<CuratedVolume>,
}

impl CuratedSections {
    /// Parse from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, ExtractorError> {
        let parsed: Self = serde_yaml::from_str(yaml)?;
        if let Some(entry) = parsed.volumes.iter().find(|v| v.volume.trim().is_empty()) {
            return Err(ExtractorError::Curated(format!(
                "entry with {} sections has an empty volume id",
                entry.sections.len()
            )));
        }
        Ok(parsed)
    }

    /// Read and parse a curated sections file
    pub fn load(path: &Path) -> Result<Self, ExtractorError> {
        let yaml = std::fs::read_to_string(path).map_err(|e| {
            ExtractorError::Curated(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&yaml)
    }

    /// Number of volume entries
    pub fn len(&self) -> usize {
        self.volumes.len()
    }

    /// Whether the file lists no volumes
    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ignaria_domain::{AuthorRegion, Uncertainty};

    const CURATED: &str = r#"
- volume: NPNF2-01
  sections:
    - author: Eusebius
      title: Church History
      start_marker: The Church History of Eusebius
      composition_year: 324
      composition_uncertainty: low
      author_region: Eastern
      author_location: Caesarea
    - author: Eusebius
      title: Life of Constantine
      start_marker: The Life of Constantine
- volume: ANF-01
  sections: []
"#;

    #[test]
    fn test_parse_curated_file() {
        let curated = CuratedSections::from_yaml(CURATED).unwrap();
        assert_eq!(curated.len(), 2);

        let first = &curated.volumes[0];
        assert_eq!(first.volume, "NPNF2-01");
        assert_eq!(first.sections[0].composition_year, Some(324));
        assert_eq!(first.sections[0].composition_uncertainty, Some(Uncertainty::Low));
        assert_eq!(first.sections[0].author_region, Some(AuthorRegion::Eastern));
        assert!(first.sections[1].author_location.is_none());
        assert!(curated.volumes[1].sections.is_empty());
    }

    #[test]
    fn test_missing_sections_key_means_empty() {
        let curated = CuratedSections::from_yaml("- volume: ANF-02\n").unwrap();
        assert!(curated.volumes[0].sections.is_empty());
    }

    #[test]
    fn test_empty_volume_id_rejected() {
        let err = CuratedSections::from_yaml("- volume: ''\n  sections: []\n").unwrap_err();
        assert!(matches!(err, ExtractorError::Curated(_)));
    }

    #[test]
    fn test_not_a_list_rejected() {
        let err = CuratedSections::from_yaml("volume: ANF-01\n").unwrap_err();
        assert!(matches!(err, ExtractorError::Curated(_)));
    }

    #[test]
    fn test_deduplicated_keeps_first() {
        let entry = CuratedVolume {
            volume: "ANF-01".to_string(),
            sections: vec![
                Section::new("Ignatius", "Epistle to the Romans", "The Epistle to the Romans"),
                Section::new("Polycarp", "Duplicate", "The Epistle to the Romans"),
                Section::new("Polycarp", "Epistle to the Philippians", "The Epistle to the Philippians"),
            ],
        };

        let (kept, dropped) = entry.deduplicated();
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].author, "Ignatius");
        assert_eq!(dropped, vec!["The Epistle to the Romans"]);
    }
}
