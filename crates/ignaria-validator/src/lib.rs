//! Ignaria Validator
//!
//! Quality checks over the corpus.
//!
//! The Validator provides:
//! - Temporal completeness of anthology sections (year, region, location)
//! - Consistency warnings (anthology flag, duplicate markers, stray uncertainty)
//! - Corpus integrity (manifest entries, text files, metadata records, orphans)
//! - YAML reports with a `validation_summary` block
//!
//! # Examples
//!
//! ```no_run
//! use ignaria_store::YamlStore;
//! use ignaria_validator::{TemporalValidator, ValidationStatus};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = YamlStore::new("corpus/sources");
//! let report = TemporalValidator::default_config().validate(&store)?;
//!
//! if report.status() == ValidationStatus::Fail {
//!     for volume in report.incomplete_volumes() {
//!         println!("{}: {} incomplete", volume.volume_id, volume.sections_missing_temporal);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod integrity;
mod report;
mod temporal;

pub use config::ValidationConfig;
pub use error::ValidatorError;
pub use integrity::{CorpusValidator, LineEnding, TextStats};
pub use report::{ValidationReport, ValidationStatus, ValidationSummary};
pub use temporal::{
    consistency_warnings, MissingTemporal, TemporalReport, TemporalValidator, VolumeTemporalSummary,
};
