//! Raw metadata record with typed access to `text_info`

use crate::error::StoreError;
use ignaria_domain::{Section, TextInfo};
use serde_yaml::{Mapping, Value};

const TEXT_INFO: &str = "text_info";
const IS_ANTHOLOGY: &str = "is_anthology";
const SECTIONS: &str = "sections";

/// A parsed `.meta.yaml` record.
///
/// The record is held as an ordered YAML mapping so that a rewrite emits
/// the same keys in the same order as the original file.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataDocument {
    origin: String,
    root: Mapping,
}

impl MetadataDocument {
    /// Parse a record; `origin` names the file in error messages
    pub fn parse(yaml: &str, origin: impl Into<String>) -> Result<Self, StoreError> {
        let origin = origin.into();
        let value: Value = serde_yaml::from_str(yaml)
            .map_err(|e| StoreError::malformed(&origin, e.to_string()))?;

        match value {
            Value::Mapping(root) => Ok(Self { origin, root }),
            Value::Null => Err(StoreError::malformed(&origin, "record is empty")),
            _ => Err(StoreError::malformed(&origin, "record is not a mapping")),
        }
    }

    /// Serialize the record back to YAML
    pub fn to_yaml(&self) -> Result<String, StoreError> {
        Ok(serde_yaml::to_string(&self.root)?)
    }

    /// Top-level keys in file order
    pub fn top_level_keys(&self) -> Vec<String> {
        self.root
            .keys()
            .map(|key| match key {
                Value::String(s) => s.clone(),
                other => serde_yaml::to_string(other)
                    .map(|s| s.trim().to_string())
                    .unwrap_or_default(),
            })
            .collect()
    }

    /// Raw value of a top-level key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// Whether `text_info` contains the given key
    pub fn text_info_has(&self, key: &str) -> bool {
        self.root
            .get(TEXT_INFO)
            .and_then(Value::as_mapping)
            .is_some_and(|info| info.contains_key(key))
    }

    /// Whether `text_info.is_anthology` is `true`.
    ///
    /// Reads the raw value only; a missing `text_info` or flag reads as false.
    pub fn is_anthology(&self) -> bool {
        self.root
            .get(TEXT_INFO)
            .and_then(|info| info.get(IS_ANTHOLOGY))
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Typed view of `text_info`
    pub fn text_info(&self) -> Result<TextInfo, StoreError> {
        let raw = self
            .root
            .get(TEXT_INFO)
            .ok_or_else(|| StoreError::malformed(&self.origin, "missing text_info"))?;

        serde_yaml::from_value(raw.clone())
            .map_err(|e| StoreError::malformed(&self.origin, format!("text_info: {}", e)))
    }

    /// Replace `text_info.sections` and set `text_info.is_anthology` to match.
    ///
    /// An empty list clears the anthology flag and removes the `sections` key.
    pub fn set_sections(&mut self, sections: &[Section]) -> Result<(), StoreError> {
        let sections_value = serde_yaml::to_value(sections)?;
        let info = self
            .root
            .get_mut(TEXT_INFO)
            .and_then(Value::as_mapping_mut)
            .ok_or_else(|| StoreError::malformed(&self.origin, "missing text_info"))?;

        info.insert(
            Value::String(IS_ANTHOLOGY.to_string()),
            Value::Bool(!sections.is_empty()),
        );
        if sections.is_empty() {
            info.shift_remove(SECTIONS);
        } else {
            info.insert(Value::String(SECTIONS.to_string()), sections_value);
        }

        Ok(())
    }
}
