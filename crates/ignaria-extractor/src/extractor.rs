//! Core Section Extractor implementation

use crate::builder::{LocatedSection, SectionBuilder};
use crate::config::ExtractorConfig;
use crate::curated::CuratedVolume;
use crate::error::ExtractorError;
use crate::types::{ExtractionOutcome, ExtractionRequest};
use ignaria_domain::traits::CorpusStore;
use ignaria_domain::{Section, Volume};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Detects the embedded works of each volume and records them in the store
pub struct SectionExtractor<S>
where
    S: CorpusStore,
{
    store: S,
    builder: SectionBuilder,
    config: ExtractorConfig,
}

impl<S> SectionExtractor<S>
where
    S: CorpusStore,
    S::Error: std::fmt::Display,
{
    /// Create a new Section Extractor
    pub fn new(store: S, config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        let builder = SectionBuilder::from_config(&config)?;

        debug!(
            "Compiled {} heading patterns and {} keyword rules",
            builder.matcher().pattern_count(),
            config.keyword_rules.len()
        );

        Ok(Self {
            store,
            builder,
            config,
        })
    }

    /// The underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Load a volume's record and text
    pub fn load_volume(&self, volume_id: &str) -> Result<(Volume, Vec<Section>), ExtractorError> {
        let info = self
            .store
            .read_text_info(volume_id)
            .map_err(|e| ExtractorError::Store(e.to_string()))?
            .ok_or_else(|| ExtractorError::NotFound(format!("metadata record for {}", volume_id)))?;

        let text = self
            .store
            .read_text(volume_id)
            .map_err(|e| ExtractorError::Store(e.to_string()))?
            .ok_or_else(|| ExtractorError::NotFound(format!("text file for {}", volume_id)))?;

        let existing = info.sections.clone();
        Ok((Volume::new(volume_id, &info, text), existing))
    }

    /// Located sections of a volume, without touching the record
    pub fn preview(&self, volume_id: &str) -> Result<Vec<LocatedSection>, ExtractorError> {
        let (volume, _) = self.load_volume(volume_id)?;
        Ok(self.builder.build_located(&volume.text, &volume.authors))
    }

    /// Build a volume's sections and merge them into its record
    pub fn extract(&mut self, request: ExtractionRequest) -> Result<ExtractionOutcome, ExtractorError> {
        let (volume, existing) = self.load_volume(&request.volume_id)?;

        info!(
            "Extracting sections for {} '{}' ({} known authors, {} bytes)",
            volume.id,
            volume.title,
            volume.authors.len(),
            volume.text.len()
        );

        let mut sections = self.builder.build_located(&volume.text, &volume.authors);

        let carried_annotations = if self.config.carry_annotations {
            carry_annotations(&mut sections, &existing)
        } else {
            0
        };

        if carried_annotations > 0 {
            debug!("{}: carried annotations for {} sections", volume.id, carried_annotations);
        }

        let written = if request.dry_run {
            false
        } else {
            let records: Vec<Section> = sections.iter().map(|s| s.section.clone()).collect();
            self.store
                .merge_sections(&volume.id, &records)
                .map_err(|e| ExtractorError::Store(e.to_string()))?;
            true
        };

        info!(
            "{}: {} sections{}",
            volume.id,
            sections.len(),
            if written { "" } else { " (not written)" }
        );

        Ok(ExtractionOutcome {
            volume_id: volume.id,
            sections,
            carried_annotations,
            written,
        })
    }

    /// Merge one curated entry into its volume's record.
    ///
    /// Returns the number of sections written.
    pub fn apply_curated(&mut self, entry: &CuratedVolume) -> Result<usize, ExtractorError> {
        let (sections, dropped) = entry.deduplicated();
        for marker in &dropped {
            warn!("{}: dropping duplicate start marker '{}'", entry.volume, marker);
        }

        let exists = self
            .store
            .read_text_info(&entry.volume)
            .map_err(|e| ExtractorError::Store(e.to_string()))?
            .is_some();
        if !exists {
            return Err(ExtractorError::NotFound(format!(
                "metadata record for {}",
                entry.volume
            )));
        }

        self.store
            .merge_sections(&entry.volume, &sections)
            .map_err(|e| ExtractorError::Store(e.to_string()))?;

        info!("{}: applied {} curated sections", entry.volume, sections.len());
        Ok(sections.len())
    }
}

/// Copy annotations from existing sections with the same marker
fn carry_annotations(sections: &mut [LocatedSection], existing: &[Section]) -> usize {
    let previous: HashMap<&str, &Section> = existing
        .iter()
        .map(|s| (s.start_marker.as_str(), s))
        .collect();

    let mut carried = 0;
    for located in sections.iter_mut() {
        if let Some(old) = previous.get(located.section.start_marker.as_str()) {
            let before = located.section.clone();
            located.section.inherit_annotations(old);
            if located.section != before {
                carried += 1;
            }
        }
    }
    carried
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disambiguator::AttributionBasis;
    use ignaria_domain::AuthorRegion;

    fn located(marker: &str) -> LocatedSection {
        LocatedSection {
            line_number: 1,
            pattern: "epistle_of".to_string(),
            section: Section::new("Ignatius", marker, marker),
            basis: AttributionBasis::NamedInHeading,
        }
    }

    #[test]
    fn test_carry_annotations_by_marker() {
        let mut sections = vec![located("The Epistle of Ignatius to the Romans"), located("The Epistle of Ignatius to Polycarp")];

        let mut old = Section::new("Ignatius", "old title", "The Epistle of Ignatius to the Romans");
        old.composition_year = Some(107);
        old.author_region = Some(AuthorRegion::Eastern);
        old.notes = Some("written en route to Rome".to_string());

        let carried = carry_annotations(&mut sections, &[old]);

        assert_eq!(carried, 1);
        assert_eq!(sections[0].section.composition_year, Some(107));
        assert_eq!(sections[0].section.title, "The Epistle of Ignatius to the Romans");
        assert!(sections[1].section.composition_year.is_none());
    }

    #[test]
    fn test_unannotated_previous_is_not_counted() {
        let mut sections = vec![located("The Epistle of Ignatius to the Romans")];
        let old = Section::new("Ignatius", "t", "The Epistle of Ignatius to the Romans");
        assert_eq!(carry_annotations(&mut sections, &[old]), 0);
    }
}
