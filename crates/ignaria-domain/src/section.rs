//! Section module - one embedded work inside an anthology volume

use crate::temporal::{AuthorRegion, TemporalField, Uncertainty};
use crate::UNKNOWN_AUTHOR;
use serde::{Deserialize, Serialize};
use serde_yaml::Mapping;

/// A persisted record attributing a span of a volume's text to one work.
///
/// Within a volume, `start_marker` is unique and is the key used both for
/// deduplication and for locating the work in the raw text later on.
///
/// Hand-curated records may lack `author` or `title`; those read as
/// `Unknown`. Keys this struct does not name are kept in `extra` and
/// written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Attributed author
    #[serde(default = "unknown")]
    pub author: String,

    /// Cleaned work title
    #[serde(default = "unknown")]
    pub title: String,

    /// Verbatim heading text that opens the work
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub start_marker: String,

    /// Year of composition; negative values are BCE
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composition_year: Option<i32>,

    /// Confidence in `composition_year`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composition_uncertainty: Option<Uncertainty>,

    /// Eastern or Western author
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_region: Option<AuthorRegion>,

    /// Place the author wrote from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_location: Option<String>,

    /// Free-form editorial notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Other keys of the record, such as `genre` or `testament`
    #[serde(flatten)]
    pub extra: Mapping,
}

fn unknown() -> String {
    UNKNOWN_AUTHOR.to_string()
}

impl Section {
    /// Create a section with no temporal annotations
    pub fn new(
        author: impl Into<String>,
        title: impl Into<String>,
        start_marker: impl Into<String>,
    ) -> Self {
        Self {
            author: author.into(),
            title: title.into(),
            start_marker: start_marker.into(),
            composition_year: None,
            composition_uncertainty: None,
            author_region: None,
            author_location: None,
            notes: None,
            extra: Mapping::new(),
        }
    }

    /// Whether the given temporal field is present
    pub fn has(&self, field: TemporalField) -> bool {
        match field {
            TemporalField::CompositionYear => self.composition_year.is_some(),
            TemporalField::AuthorRegion => self.author_region.is_some(),
            TemporalField::AuthorLocation => self.author_location.is_some(),
        }
    }

    /// Required temporal fields this section lacks, in report order
    pub fn missing_temporal_fields(&self) -> Vec<TemporalField> {
        TemporalField::ALL
            .into_iter()
            .filter(|field| !self.has(*field))
            .collect()
    }

    /// True when year, region and location are all present
    pub fn is_temporally_complete(&self) -> bool {
        self.missing_temporal_fields().is_empty()
    }

    /// Fill annotations this section lacks from an earlier record of the same work.
    ///
    /// Author, title and marker are never touched; only optional fields that
    /// are currently `None` and extra keys this section lacks are copied.
    pub fn inherit_annotations(&mut self, previous: &Section) {
        if self.composition_year.is_none() {
            self.composition_year = previous.composition_year;
        }
        if self.composition_uncertainty.is_none() {
            self.composition_uncertainty = previous.composition_uncertainty;
        }
        if self.author_region.is_none() {
            self.author_region = previous.author_region;
        }
        if self.author_location.is_none() {
            self.author_location = previous.author_location.clone();
        }
        if self.notes.is_none() {
            self.notes = previous.notes.clone();
        }
        for (key, value) in &previous.extra {
            if !self.extra.contains_key(key) {
                self.extra.insert(key.clone(), value.clone());
            }
        }
    }
}
