//! Ignaria Extractor
//!
//! Finds the embedded works inside anthology volumes and records them as
//! sections in each volume's metadata record.
//!
//! # Architecture
//!
//! ```text
//! Text → HeadingMatcher → candidates → AuthorDisambiguator → SectionBuilder → CorpusStore
//! ```
//!
//! # Key Features
//!
//! - **Heading Detection**: Ordered, case-insensitive heading shapes within a length window
//! - **Author Attribution**: Name-in-heading test, keyword rule table, first-author default
//! - **Deduplication**: One section per distinct start marker, first occurrence wins
//! - **Annotation Carry-over**: Curated temporal fields survive re-extraction
//! - **Curated Application**: Hand-maintained section lists merged into records
//!
//! # Example Usage
//!
//! ```no_run
//! use ignaria_extractor::{ExtractionRequest, ExtractorConfig, SectionExtractor};
//! use ignaria_store::YamlStore;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = YamlStore::new("corpus/sources");
//! let mut extractor = SectionExtractor::new(store, ExtractorConfig::default())?;
//!
//! let outcome = extractor.extract(ExtractionRequest::new("ANF-01"))?;
//! for located in &outcome.sections {
//!     println!("{:>6}  {}  ({})", located.line_number, located.section.title, located.section.author);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod builder;
mod config;
mod curated;
mod disambiguator;
mod error;
mod extractor;
mod matcher;
mod types;


pub use builder::{normalize_title, LocatedSection, SectionBuilder};
pub use config::{default_keyword_rules, default_patterns, ExtractorConfig, HeadingPattern, KeywordRule};
pub use curated::{CuratedSections, CuratedVolume};
pub use disambiguator::{Attribution, AttributionBasis, AuthorDisambiguator};
pub use error::ExtractorError;
pub use extractor::SectionExtractor;
pub use matcher::HeadingMatcher;
pub use types::{ExtractionOutcome, ExtractionRequest};
