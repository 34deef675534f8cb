//! Command implementations.

pub mod apply;
pub mod extract;
pub mod scan;
pub mod temporal;
pub mod validate;

pub use self::apply::execute_apply;
pub use self::extract::execute_extract;
pub use self::scan::execute_scan;
pub use self::temporal::execute_temporal;
pub use self::validate::execute_validate;

use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use ignaria_domain::traits::CorpusStore;
use ignaria_extractor::{ExtractorError, SectionExtractor};
use ignaria_store::YamlStore;
use std::path::PathBuf;
use tracing::warn;

/// Everything a command needs to find and read the corpus.
pub struct Context {
    /// Corpus root directory
    pub corpus_root: PathBuf,

    /// Loaded configuration
    pub config: Config,

    /// Output formatter
    pub formatter: Formatter,
}

impl Context {
    /// Store over the configured sources directory.
    pub fn store(&self) -> YamlStore {
        YamlStore::new(self.config.sources_dir(&self.corpus_root))
    }

    /// Section extractor over the store.
    pub fn extractor(&self) -> Result<SectionExtractor<YamlStore>> {
        Ok(SectionExtractor::new(self.store(), self.config.extractor.clone())?)
    }

    /// Volumes named on the command line, else the configured anthology list,
    /// else every volume with a metadata record.
    pub fn target_volumes(&self, named: &[String]) -> Result<Vec<String>> {
        if !named.is_empty() {
            return Ok(named.to_vec());
        }
        if !self.config.corpus.anthologies.is_empty() {
            return Ok(self.config.corpus.anthologies.clone());
        }
        Ok(self.store().list_volumes()?)
    }
}

/// Per-volume tally of a batch command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Volumes processed
    pub succeeded: usize,

    /// Volumes skipped because their files are missing
    pub skipped: usize,

    /// Volumes that failed
    pub failed: usize,
}

impl BatchSummary {
    /// Whether no volume failed.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Record a failed volume: missing files skip, anything else fails.
    fn record_error(&mut self, volume_id: &str, error: &ExtractorError, formatter: &Formatter) {
        if error.is_not_found() {
            warn!("{}: skipped, {}", volume_id, error);
            self.skipped += 1;
            formatter.notice(&formatter.warning(&format!("{}: skipped ({})", volume_id, error)));
        } else {
            self.failed += 1;
            formatter.notice(&formatter.error(&format!("{}: {}", volume_id, error)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn context(root: &Path, anthologies: Vec<String>) -> Context {
        let mut config = Config::default();
        config.corpus.anthologies = anthologies;
        Context {
            corpus_root: root.to_path_buf(),
            config,
            formatter: Formatter::new(OutputFormat::Quiet, false),
        }
    }

    #[test]
    fn test_named_volumes_win() {
        let dir = TempDir::new().unwrap();
        let ctx = context(dir.path(), vec!["ANF-01".to_string()]);
        let targets = ctx.target_volumes(&["NPNF2-02".to_string()]).unwrap();
        assert_eq!(targets, vec!["NPNF2-02"]);
    }

    #[test]
    fn test_configured_list_used() {
        let dir = TempDir::new().unwrap();
        let ctx = context(dir.path(), vec!["ANF-01".to_string()]);
        assert_eq!(ctx.target_volumes(&[]).unwrap(), vec!["ANF-01"]);
    }

    #[test]
    fn test_empty_list_means_all_records() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sources")).unwrap();
        fs::write(dir.path().join("sources/ANF-03.meta.yaml"), "text_info:\n  id: anf-03\n").unwrap();

        let ctx = context(dir.path(), Vec::new());
        assert_eq!(ctx.target_volumes(&[]).unwrap(), vec!["ANF-03"]);
    }

    #[test]
    fn test_not_found_is_skip() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let mut summary = BatchSummary::default();
        summary.record_error("ANF-99", &ExtractorError::NotFound("ANF-99".to_string()), &formatter);
        summary.record_error("ANF-98", &ExtractorError::Store("bad yaml".to_string()), &formatter);

        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.failed, 1);
        assert!(!summary.is_success());
    }
}
