//! Flat-file implementation of CorpusStore

use crate::document::MetadataDocument;
use crate::error::StoreError;
use ignaria_domain::traits::CorpusStore;
use ignaria_domain::{Section, TextInfo};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File suffix of metadata records
pub const META_SUFFIX: &str = ".meta.yaml";

/// File suffix of volume texts
pub const TEXT_SUFFIX: &str = ".txt";

/// Store backed by a `sources/` directory of `.txt` and `.meta.yaml` files
///
/// Each call opens, reads or writes, and closes its file; nothing is cached
/// between calls. Concurrent writers against the same directory are not
/// supported.
#[derive(Debug, Clone)]
pub struct YamlStore {
    sources_dir: PathBuf,
}

impl YamlStore {
    /// Create a store over the given sources directory
    pub fn new<P: AsRef<Path>>(sources_dir: P) -> Self {
        Self {
            sources_dir: sources_dir.as_ref().to_path_buf(),
        }
    }

    /// Directory this store reads from
    pub fn sources_dir(&self) -> &Path {
        &self.sources_dir
    }

    /// Path of a volume's text file
    pub fn text_path(&self, volume_id: &str) -> PathBuf {
        self.sources_dir.join(format!("{}{}", volume_id, TEXT_SUFFIX))
    }

    /// Path of a volume's metadata record
    pub fn meta_path(&self, volume_id: &str) -> PathBuf {
        self.sources_dir.join(format!("{}{}", volume_id, META_SUFFIX))
    }

    /// Load the full record of a volume, or `None` if it has none
    pub fn load_document(&self, volume_id: &str) -> Result<Option<MetadataDocument>, StoreError> {
        let path = self.meta_path(volume_id);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                return Err(StoreError::malformed(path.display().to_string(), "not valid UTF-8"));
            }
            Err(e) => return Err(io_error(&path, e)),
        };

        MetadataDocument::parse(&contents, path.display().to_string()).map(Some)
    }

    /// Write a record back to disk
    pub fn save_document(&self, volume_id: &str, document: &MetadataDocument) -> Result<(), StoreError> {
        let path = self.meta_path(volume_id);
        let contents = document.to_yaml()?;
        fs::write(&path, contents).map_err(|e| io_error(&path, e))?;
        debug!("Wrote {}", path.display());
        Ok(())
    }
}

impl CorpusStore for YamlStore {
    type Error = StoreError;

    fn list_volumes(&self) -> Result<Vec<String>, Self::Error> {
        let entries = fs::read_dir(&self.sources_dir).map_err(|e| io_error(&self.sources_dir, e))?;

        let mut ids = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| io_error(&self.sources_dir, e))?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                warn!("Skipping non-UTF-8 file name in {}", self.sources_dir.display());
                continue;
            };
            if let Some(id) = name.strip_suffix(META_SUFFIX) {
                if !id.is_empty() {
                    ids.push(id.to_string());
                }
            }
        }

        ids.sort();
        Ok(ids)
    }

    fn read_text_info(&self, volume_id: &str) -> Result<Option<TextInfo>, Self::Error> {
        match self.load_document(volume_id)? {
            Some(document) => document.text_info().map(Some),
            None => Ok(None),
        }
    }

    fn is_anthology(&self, volume_id: &str) -> Result<Option<bool>, Self::Error> {
        Ok(self.load_document(volume_id)?.map(|document| document.is_anthology()))
    }

    fn read_text(&self, volume_id: &str) -> Result<Option<String>, Self::Error> {
        let path = self.text_path(volume_id);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(io_error(&path, e)),
        };

        match String::from_utf8(bytes) {
            Ok(text) => Ok(Some(text)),
            Err(e) => {
                warn!("{} is not valid UTF-8; invalid sequences replaced", path.display());
                Ok(Some(String::from_utf8_lossy(e.as_bytes()).into_owned()))
            }
        }
    }

    fn merge_sections(&mut self, volume_id: &str, sections: &[Section]) -> Result<(), Self::Error> {
        let mut document = self
            .load_document(volume_id)?
            .ok_or_else(|| StoreError::NotFound(volume_id.to_string()))?;

        document.set_sections(sections)?;
        self.save_document(volume_id, &document)
    }
}

fn io_error(path: &Path, source: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.display().to_string(),
        source,
    }
}
