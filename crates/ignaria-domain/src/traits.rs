//! Trait definitions for external interactions
//!
//! These traits define the boundary between the annotation logic and the
//! corpus on disk. Implementations live in other crates.

use crate::{Section, TextInfo};

/// Trait for reading volumes and writing their section metadata
///
/// Implemented by the infrastructure layer (ignaria-store)
pub trait CorpusStore {
    /// Error type for store operations
    type Error;

    /// Identifiers of every volume that has a metadata record, sorted
    fn list_volumes(&self) -> Result<Vec<String>, Self::Error>;

    /// Read the `text_info` block of a volume's record
    ///
    /// Returns `Ok(None)` when the volume has no record.
    fn read_text_info(&self, volume_id: &str) -> Result<Option<TextInfo>, Self::Error>;

    /// Whether the volume's record has `is_anthology: true`
    ///
    /// Returns `Ok(None)` when the volume has no record. Stores that keep
    /// raw records should answer without requiring the rest of `text_info`
    /// to fit [`TextInfo`].
    fn is_anthology(&self, volume_id: &str) -> Result<Option<bool>, Self::Error> {
        Ok(self.read_text_info(volume_id)?.map(|info| info.is_anthology))
    }

    /// Read the raw text of a volume
    ///
    /// Returns `Ok(None)` when the volume has no text file.
    fn read_text(&self, volume_id: &str) -> Result<Option<String>, Self::Error>;

    /// Replace the volume's sections and set `is_anthology` to match.
    ///
    /// Every other field of the record is left untouched.
    fn merge_sections(&mut self, volume_id: &str, sections: &[Section]) -> Result<(), Self::Error>;
}
