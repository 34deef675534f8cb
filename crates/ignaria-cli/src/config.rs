//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use ignaria_extractor::ExtractorConfig;
use ignaria_validator::ValidationConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name looked up in the corpus root.
pub const CORPUS_CONFIG_FILE: &str = "ignaria.toml";

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Corpus layout
    #[serde(default)]
    pub corpus: CorpusSettings,

    /// Heading detection and attribution
    #[serde(default)]
    pub extractor: ExtractorConfig,

    /// Validation rules
    #[serde(default)]
    pub validation: ValidationConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Where the corpus keeps its files, relative to the corpus root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusSettings {
    /// Directory of `.txt` and `.meta.yaml` files
    pub sources_dir: PathBuf,

    /// Corpus manifest
    pub manifest: PathBuf,

    /// Volumes processed by `scan` and `extract` when none are named
    pub anthologies: Vec<String>,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the per-user configuration file path.
    pub fn user_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".ignaria").join("config.toml"))
    }

    /// Pick the configuration file: explicit path, then the corpus root, then the user file.
    pub fn locate(explicit: Option<&Path>, corpus_root: &Path) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(CliError::Config(format!("Config file not found: {}", path.display())));
            }
            return Ok(Some(path.to_path_buf()));
        }

        let in_corpus = corpus_root.join(CORPUS_CONFIG_FILE);
        if in_corpus.is_file() {
            return Ok(Some(in_corpus));
        }

        // A missing home directory just means there is no user file
        match Self::user_path() {
            Ok(user) if user.is_file() => Ok(Some(user)),
            _ => Ok(None),
        }
    }

    /// Load configuration, falling back to defaults when no file exists.
    pub fn load(explicit: Option<&Path>, corpus_root: &Path) -> Result<Self> {
        let config = match Self::locate(explicit, corpus_root)? {
            Some(path) => {
                debug!("Loading configuration from {}", path.display());
                let contents = fs::read_to_string(&path)?;
                Self::from_toml(&contents)?
            }
            None => Self::default(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Check every section.
    pub fn validate(&self) -> Result<()> {
        self.extractor
            .validate()
            .map_err(|e| CliError::Config(format!("[extractor] {}", e)))?;
        self.validation
            .validate()
            .map_err(|e| CliError::Config(format!("[validation] {}", e)))?;
        Ok(())
    }

    /// Absolute-or-relative sources directory under the given root.
    pub fn sources_dir(&self, corpus_root: &Path) -> PathBuf {
        corpus_root.join(&self.corpus.sources_dir)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

impl Default for CorpusSettings {
    fn default() -> Self {
        Self {
            sources_dir: PathBuf::from("sources"),
            manifest: PathBuf::from("manifest.yaml"),
            anthologies: default_anthologies(),
        }
    }
}

/// Known multi-author volumes of the Ante-Nicene and Nicene collections.
pub fn default_anthologies() -> Vec<String> {
    [
        "ANF-01", "ANF-02", "ANF-04", "ANF-05", "ANF-06", "ANF-07", "ANF-09", "NPNF2-02", "NPNF2-03",
        "NPNF2-07", "NPNF2-09", "NPNF2-11", "NPNF2-12", "NPNF2-13",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.color);
        assert_eq!(config.corpus.sources_dir, PathBuf::from("sources"));
        assert_eq!(config.corpus.anthologies.len(), 14);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let config = Config::from_toml(
            r#"
[settings]
format = "json"

[corpus]
anthologies = ["ANF-01"]

[extractor]
max_heading_len = 120

[validation]
check_orphans = false
"#,
        )
        .unwrap();

        assert_eq!(config.settings.format, OutputFormat::Json);
        assert!(config.settings.color);
        assert_eq!(config.corpus.anthologies, vec!["ANF-01"]);
        assert_eq!(config.corpus.manifest, PathBuf::from("manifest.yaml"));
        assert_eq!(config.extractor.max_heading_len, 120);
        assert_eq!(config.extractor.min_heading_len, 10);
        assert!(!config.validation.check_orphans);
        assert!(config.validation.require_author_region);
    }

    #[test]
    fn test_corpus_file_is_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CORPUS_CONFIG_FILE), "[settings]\ncolor = false\n").unwrap();

        let config = Config::load(None, dir.path()).unwrap();
        assert!(!config.settings.color);
    }

    #[test]
    fn test_explicit_file_wins() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CORPUS_CONFIG_FILE), "[settings]\ncolor = false\n").unwrap();
        let explicit = dir.path().join("other.toml");
        fs::write(&explicit, "[settings]\nformat = \"quiet\"\n").unwrap();

        let config = Config::load(Some(&explicit), dir.path()).unwrap();
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Quiet);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = TempDir::new().unwrap();
        let result = Config::load(Some(&dir.path().join("absent.toml")), dir.path());
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_invalid_section_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CORPUS_CONFIG_FILE),
            "[extractor]\nmin_heading_len = 200\n",
        )
        .unwrap();
        assert!(matches!(Config::load(None, dir.path()), Err(CliError::Config(_))));
    }
}
