//! The `text_info` block of a volume's metadata record

use crate::section::Section;
use serde::{Deserialize, Serialize};

/// Typed view of `text_info`.
///
/// Keys this struct does not name are ignored on read; writers go through
/// the store's merge path so those keys survive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextInfo {
    /// Volume identifier as recorded in the metadata (often lower-case)
    #[serde(default)]
    pub id: String,

    /// Volume title
    #[serde(default)]
    pub title: String,

    /// Single author, used by non-anthology records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Ordered list of known authors
    #[serde(default)]
    pub authors: Vec<String>,

    /// Whether the volume collects several independently authored works
    #[serde(default)]
    pub is_anthology: bool,

    /// Embedded works, in text order
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl TextInfo {
    /// Known authors of the volume, falling back to the single `author` field
    pub fn known_authors(&self) -> Vec<String> {
        if !self.authors.is_empty() {
            return self.authors.clone();
        }
        self.author.iter().cloned().collect()
    }

    /// Whether `is_anthology` agrees with the presence of sections
    pub fn anthology_flag_consistent(&self) -> bool {
        self.is_anthology == !self.sections.is_empty()
    }

    /// Non-empty start markers that appear more than once, each reported once
    pub fn duplicate_markers(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        let mut duplicates = Vec::new();
        for section in &self.sections {
            let marker = section.start_marker.as_str();
            if marker.is_empty() {
                continue;
            }
            if !seen.insert(marker) && !duplicates.contains(&marker) {
                duplicates.push(marker);
            }
        }
        duplicates
    }
}
