//! Temporal completeness of anthology sections

use crate::config::ValidationConfig;
use crate::error::ValidatorError;
use crate::report::ValidationStatus;
use ignaria_domain::traits::CorpusStore;
use ignaria_domain::{Section, TemporalField, TextInfo};
use serde::Serialize;
use tracing::{debug, info, warn};

/// One section lacking a required temporal field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingTemporal {
    /// Section author
    pub author: String,

    /// Section title
    pub title: String,

    /// Whether `composition_year` is present
    pub has_composition_year: bool,

    /// Whether `author_region` is present
    pub has_author_region: bool,

    /// Whether `author_location` is present
    pub has_author_location: bool,
}

impl MissingTemporal {
    fn from_section(section: &Section) -> Self {
        Self {
            author: section.author.clone(),
            title: section.title.clone(),
            has_composition_year: section.has(TemporalField::CompositionYear),
            has_author_region: section.has(TemporalField::AuthorRegion),
            has_author_location: section.has(TemporalField::AuthorLocation),
        }
    }

    /// Absent fields, in report order
    pub fn missing_fields(&self) -> Vec<TemporalField> {
        let mut fields = Vec::new();
        if !self.has_composition_year {
            fields.push(TemporalField::CompositionYear);
        }
        if !self.has_author_region {
            fields.push(TemporalField::AuthorRegion);
        }
        if !self.has_author_location {
            fields.push(TemporalField::AuthorLocation);
        }
        fields
    }
}

/// Completeness of one anthology volume
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VolumeTemporalSummary {
    /// Volume identifier (file stem)
    pub volume_id: String,

    /// Number of sections
    pub total_sections: usize,

    /// Sections with every required field
    pub sections_with_temporal: usize,

    /// Sections lacking at least one required field
    pub sections_missing_temporal: usize,

    /// Details of the incomplete sections
    pub missing_sections: Vec<MissingTemporal>,
}

impl VolumeTemporalSummary {
    /// Whether every section is complete
    pub fn is_complete(&self) -> bool {
        self.sections_missing_temporal == 0
    }
}

/// Outcome of a temporal completeness run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TemporalReport {
    /// Anthology volumes in id order
    pub volumes: Vec<VolumeTemporalSummary>,

    /// Records skipped because they are not anthologies
    pub skipped: usize,

    /// Records that could not be read
    pub errors: Vec<String>,

    /// Consistency problems that do not affect the status
    pub warnings: Vec<String>,
}

impl TemporalReport {
    /// Sections across all anthology volumes
    pub fn total_sections(&self) -> usize {
        self.volumes.iter().map(|v| v.total_sections).sum()
    }

    /// Complete sections across all anthology volumes
    pub fn complete_sections(&self) -> usize {
        self.volumes.iter().map(|v| v.sections_with_temporal).sum()
    }

    /// Share of complete sections, 0 when there are none
    pub fn completion_percent(&self) -> f64 {
        let total = self.total_sections();
        if total == 0 {
            0.0
        } else {
            self.complete_sections() as f64 / total as f64 * 100.0
        }
    }

    /// Volumes with every section complete
    pub fn complete_volumes(&self) -> impl Iterator<Item = &VolumeTemporalSummary> {
        self.volumes.iter().filter(|v| v.is_complete())
    }

    /// Volumes with at least one incomplete section
    pub fn incomplete_volumes(&self) -> impl Iterator<Item = &VolumeTemporalSummary> {
        self.volumes.iter().filter(|v| !v.is_complete())
    }

    /// PASS iff no volume has an incomplete section
    pub fn status(&self) -> ValidationStatus {
        if self.incomplete_volumes().next().is_none() {
            ValidationStatus::Pass
        } else {
            ValidationStatus::Fail
        }
    }

    /// Whether the run passed with no unreadable records
    pub fn is_success(&self) -> bool {
        self.status() == ValidationStatus::Pass && self.errors.is_empty()
    }
}

/// Checks that anthology sections carry their dating and provenance
#[derive(Debug, Clone)]
pub struct TemporalValidator {
    config: ValidationConfig,
}

impl TemporalValidator {
    /// Create a new validator with the given configuration
    pub fn new(config: ValidationConfig) -> Result<Self, ValidatorError> {
        config.validate().map_err(ValidatorError::Config)?;
        Ok(Self { config })
    }

    /// Create a validator with default configuration
    pub fn default_config() -> Self {
        Self {
            config: ValidationConfig::default(),
        }
    }

    /// Check every record in the store.
    ///
    /// Records without `is_anthology: true` are skipped before their
    /// `text_info` is parsed. Only a failure to list the volumes aborts;
    /// unreadable records are reported and the run continues.
    pub fn validate<S>(&self, store: &S) -> Result<TemporalReport, ValidatorError>
    where
        S: CorpusStore,
        S::Error: std::fmt::Display,
    {
        let ids = store
            .list_volumes()
            .map_err(|e| ValidatorError::Store(e.to_string()))?;

        let mut report = TemporalReport::default();

        for id in ids {
            match store.is_anthology(&id) {
                Ok(Some(true)) => {}
                Ok(Some(false)) => {
                    debug!("{}: not an anthology, skipped", id);
                    if self.config.consistency_warnings {
                        // Loosely typed non-anthology records only lose their warnings
                        if let Ok(Some(info)) = store.read_text_info(&id) {
                            report.warnings.extend(consistency_warnings(&id, &info));
                        }
                    }
                    report.skipped += 1;
                    continue;
                }
                Ok(None) => {
                    warn!("{}: record disappeared during validation", id);
                    continue;
                }
                Err(e) => {
                    warn!("{}: {}", id, e);
                    report.errors.push(format!("{}: {}", id, e));
                    continue;
                }
            }

            let info = match store.read_text_info(&id) {
                Ok(Some(info)) => info,
                Ok(None) => {
                    warn!("{}: record disappeared during validation", id);
                    continue;
                }
                Err(e) => {
                    warn!("{}: {}", id, e);
                    report.errors.push(format!("{}: {}", id, e));
                    continue;
                }
            };

            if self.config.consistency_warnings {
                report.warnings.extend(consistency_warnings(&id, &info));
            }

            match self.check_volume(&id, &info) {
                Some(summary) => {
                    debug!(
                        "{}: {}/{} sections complete",
                        id, summary.sections_with_temporal, summary.total_sections
                    );
                    report.volumes.push(summary);
                }
                None => report.skipped += 1,
            }
        }

        info!(
            "Temporal validation: {} anthology volumes, {} sections, {:.1}% complete",
            report.volumes.len(),
            report.total_sections(),
            report.completion_percent()
        );

        Ok(report)
    }

    /// Summarize one record; `None` for non-anthology volumes
    pub fn check_volume(&self, volume_id: &str, info: &TextInfo) -> Option<VolumeTemporalSummary> {
        if !info.is_anthology {
            return None;
        }

        let required = self.config.required_fields();
        let mut summary = VolumeTemporalSummary {
            volume_id: volume_id.to_string(),
            total_sections: info.sections.len(),
            sections_with_temporal: 0,
            sections_missing_temporal: 0,
            missing_sections: Vec::new(),
        };

        for section in &info.sections {
            if required.iter().all(|field| section.has(*field)) {
                summary.sections_with_temporal += 1;
            } else {
                summary.sections_missing_temporal += 1;
                summary.missing_sections.push(MissingTemporal::from_section(section));
            }
        }

        Some(summary)
    }
}

/// Structural problems in one record that never fail validation
pub fn consistency_warnings(volume_id: &str, info: &TextInfo) -> Vec<String> {
    let mut warnings = Vec::new();

    if !info.anthology_flag_consistent() {
        if info.is_anthology {
            warnings.push(format!("{}: is_anthology is true but there are no sections", volume_id));
        } else {
            warnings.push(format!(
                "{}: {} sections present but is_anthology is not set",
                volume_id,
                info.sections.len()
            ));
        }
    }

    for marker in info.duplicate_markers() {
        warnings.push(format!("{}: duplicate start marker '{}'", volume_id, marker));
    }

    for section in &info.sections {
        if let (Some(uncertainty), None) = (section.composition_uncertainty, section.composition_year) {
            warnings.push(format!(
                "{}: '{}' has composition_uncertainty '{}' without composition_year",
                volume_id,
                section.title,
                uncertainty.as_str()
            ));
        }
    }

    warnings
}
