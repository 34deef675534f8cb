//! Corpus integrity: manifest, text files, metadata records and orphans

use crate::config::ValidationConfig;
use crate::report::ValidationReport;
use serde::Serialize;
use serde_yaml::Value;
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const MANIFEST_FIELDS: [&str; 2] = ["corpus", "texts"];
const TEXT_ENTRY_FIELDS: [&str; 4] = ["id", "title", "author", "file"];
const TEXT_INFO_FIELDS: [&str; 2] = ["id", "title"];

/// Line terminator of a text file, judged by its final line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LineEnding {
    /// `\r\n`
    Crlf,
    /// `\n`
    Lf,
    /// `\r`
    Cr,
    /// No trailing terminator
    Unknown,
}

impl LineEnding {
    fn of(content: &str) -> Self {
        if content.ends_with("\r\n") {
            LineEnding::Crlf
        } else if content.ends_with('\n') {
            LineEnding::Lf
        } else if content.ends_with('\r') {
            LineEnding::Cr
        } else {
            LineEnding::Unknown
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineEnding::Crlf => "CRLF",
            LineEnding::Lf => "LF",
            LineEnding::Cr => "CR",
            LineEnding::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// Basic statistics of one text file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextStats {
    /// Characters (not bytes)
    pub char_count: usize,

    /// Whitespace-separated words
    pub word_count: usize,

    /// Lines
    pub line_count: usize,

    /// Terminator of the final line
    pub line_ending: LineEnding,

    /// More than one kind of terminator is used
    pub mixed_line_endings: bool,
}

impl TextStats {
    /// Compute statistics for text content
    pub fn of(content: &str) -> Self {
        let crlf = content.matches("\r\n").count();
        let lf = content.matches('\n').count() - crlf;
        let cr = content.matches('\r').count() - crlf;
        let kinds = [crlf, lf, cr].iter().filter(|n| **n > 0).count();

        Self {
            char_count: content.chars().count(),
            word_count: content.split_whitespace().count(),
            line_count: content.replace("\r\n", "\n").split_terminator(['\n', '\r']).count(),
            line_ending: LineEnding::of(content),
            mixed_line_endings: kinds > 1,
        }
    }
}

/// Validates the structure of a corpus root
#[derive(Debug, Clone)]
pub struct CorpusValidator {
    corpus_root: PathBuf,
    sources_dir: PathBuf,
    manifest_path: PathBuf,
    config: ValidationConfig,
}

impl CorpusValidator {
    /// Validator for the standard layout (`manifest.yaml`, `sources/`)
    pub fn new(corpus_root: impl Into<PathBuf>, config: ValidationConfig) -> Self {
        let corpus_root = corpus_root.into();
        Self {
            sources_dir: corpus_root.join("sources"),
            manifest_path: corpus_root.join("manifest.yaml"),
            corpus_root,
            config,
        }
    }

    /// Override the manifest and sources locations, relative to the corpus root
    pub fn with_paths(mut self, manifest: impl AsRef<Path>, sources_dir: impl AsRef<Path>) -> Self {
        self.manifest_path = self.corpus_root.join(manifest);
        self.sources_dir = self.corpus_root.join(sources_dir);
        self
    }

    /// Run every check and collect the findings
    pub fn validate(&self) -> ValidationReport {
        info!("Starting corpus validation in {}", self.corpus_root.display());
        let mut report = ValidationReport::new();

        let texts = self
            .load_manifest(&mut report)
            .map(|manifest| self.validate_manifest(&manifest, &mut report))
            .unwrap_or_default();

        // Missing files were already reported against their manifest entry
        for entry in &texts {
            if let Some(file) = entry_str(entry, "file") {
                let path = self.corpus_root.join(file);
                if path.exists() {
                    self.validate_text_file(&path, &mut report);
                }
            }
            if let Some(meta) = entry_str(entry, "metadata") {
                let path = self.corpus_root.join(meta);
                if path.exists() {
                    self.validate_metadata_file(&path, &mut report);
                }
            }
        }

        if self.config.check_orphans {
            self.check_orphans(&texts, &mut report);
        }

        info!(
            "Validation complete. Errors: {}, Warnings: {}",
            report.errors.len(),
            report.warnings.len()
        );
        report
    }

    fn load_manifest(&self, report: &mut ValidationReport) -> Option<Value> {
        let raw = match fs::read_to_string(&self.manifest_path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                report.error(format!("Manifest not found at {}", self.manifest_path.display()));
                return None;
            }
            Err(e) => {
                report.error(format!("Error reading manifest {}: {}", self.manifest_path.display(), e));
                return None;
            }
        };

        match serde_yaml::from_str::<Value>(&raw) {
            Ok(Value::Mapping(map)) => Some(Value::Mapping(map)),
            Ok(Value::Null) => {
                report.error(format!("Manifest is empty: {}", self.manifest_path.display()));
                None
            }
            Ok(_) => {
                report.error("Manifest is not a mapping");
                None
            }
            Err(e) => {
                report.error(format!("Invalid YAML in manifest: {}", e));
                None
            }
        }
    }

    /// Check top-level fields and each text entry; returns the entries
    fn validate_manifest(&self, manifest: &Value, report: &mut ValidationReport) -> Vec<Value> {
        for field in MANIFEST_FIELDS {
            if manifest.get(field).is_none() {
                report.error(format!("Missing required field in manifest: {}", field));
            }
        }

        let texts = match manifest.get("texts") {
            Some(Value::Sequence(texts)) if !texts.is_empty() => texts.clone(),
            Some(Value::Sequence(_)) | Some(Value::Null) => {
                report.error("Manifest lists no texts");
                return Vec::new();
            }
            None => return Vec::new(),
            Some(_) => {
                report.error("Manifest field 'texts' is not a list");
                return Vec::new();
            }
        };

        for (index, entry) in texts.iter().enumerate() {
            self.validate_text_entry(entry, index, report);
        }
        texts
    }

    fn validate_text_entry(&self, entry: &Value, index: usize, report: &mut ValidationReport) {
        for field in TEXT_ENTRY_FIELDS {
            if entry.get(field).is_none() {
                report.error(format!("Text entry {}: missing required field '{}'", index, field));
            }
        }

        if let Some(file) = entry_str(entry, "file") {
            let path = self.corpus_root.join(file);
            if !path.exists() {
                report.error(format!("Text entry {}: file not found: {}", index, path.display()));
            }
        }

        if let Some(meta) = entry_str(entry, "metadata") {
            let path = self.corpus_root.join(meta);
            if !path.exists() {
                report.error(format!(
                    "Text entry {}: metadata file not found: {}",
                    index,
                    path.display()
                ));
            }
        }
    }

    /// Check one text file; returns its statistics when it could be read
    pub fn validate_text_file(&self, path: &Path, report: &mut ValidationReport) -> Option<TextStats> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                report.error(format!("Error reading {}: {}", path.display(), e));
                return None;
            }
        };

        let content = match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(_) => {
                report.error(format!("Invalid UTF-8 encoding in {}", path.display()));
                return None;
            }
        };

        if content.trim().is_empty() {
            report.warn(format!("Empty file: {}", path.display()));
        }
        if content.contains('\0') {
            report.error(format!("Null bytes found in {}", path.display()));
        }

        let stats = TextStats::of(&content);
        if self.config.check_line_endings && stats.mixed_line_endings {
            report.warn(format!("Mixed line endings in {}", path.display()));
        }

        info!(
            "{}: {} chars, {} words, {} lines ({})",
            path.display(),
            stats.char_count,
            stats.word_count,
            stats.line_count,
            stats.line_ending
        );
        Some(stats)
    }

    /// Check one metadata record; returns the parsed document when it could be read
    pub fn validate_metadata_file(&self, path: &Path, report: &mut ValidationReport) -> Option<Value> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                report.error(format!("Error reading metadata file {}: {}", path.display(), e));
                return None;
            }
        };

        let metadata = match serde_yaml::from_str::<Value>(&raw) {
            Ok(value @ Value::Mapping(_)) => value,
            Ok(_) => {
                report.error(format!("Metadata file {} is not a mapping", path.display()));
                return None;
            }
            Err(e) => {
                report.error(format!("Invalid YAML in metadata file {}: {}", path.display(), e));
                return None;
            }
        };

        for section in &self.config.required_metadata_sections {
            if metadata.get(section.as_str()).is_none() {
                report.warn(format!(
                    "Missing metadata section '{}' in {}",
                    section,
                    path.display()
                ));
            }
        }

        if let Some(text_info) = metadata.get("text_info") {
            for field in TEXT_INFO_FIELDS {
                if text_info.get(field).is_none() {
                    report.warn(format!(
                        "Missing text_info field '{}' in {}",
                        field,
                        path.display()
                    ));
                }
            }
            if text_info.get("author").is_none() && text_info.get("authors").is_none() {
                report.warn(format!(
                    "Missing text_info field 'author' or 'authors' in {}",
                    path.display()
                ));
            }
        }

        Some(metadata)
    }

    fn check_orphans(&self, texts: &[Value], report: &mut ValidationReport) {
        let referenced: HashSet<PathBuf> = texts
            .iter()
            .filter_map(|entry| entry_str(entry, "file"))
            .map(|file| self.corpus_root.join(file))
            .collect();

        let entries = match fs::read_dir(&self.sources_dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!("Skipping orphan check, {}: {}", self.sources_dir.display(), e);
                return;
            }
        };

        let mut orphans: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "txt"))
            .filter(|path| !referenced.contains(path))
            .collect();
        orphans.sort();

        for path in orphans {
            warn!("Orphaned text file: {}", path.display());
            report.warn(format!("Orphaned text file: {}", path.display()));
        }
    }
}

fn entry_str<'a>(entry: &'a Value, key: &str) -> Option<&'a str> {
    entry.get(key).and_then(Value::as_str)
}
