//! Ignaria Domain Layer
//!
//! This crate contains the core model of the Ignaria corpus: volumes,
//! anthology sections and the temporal/geographic annotations carried by
//! those sections. It defines the trait boundary to storage so the
//! extractor and validator stay independent of the on-disk format.
//!
//! ## Key Concepts
//!
//! - **Volume**: One book-length text, possibly an anthology of many works
//! - **Candidate Boundary**: A transient heading match inside a volume's text
//! - **Section**: A persisted record attributing one embedded work to an author
//! - **Text Info**: The `text_info` block of a volume's metadata record
//!
//! ## Architecture
//!
//! - Pure data and invariants only
//! - No file or network access
//! - Trait definitions for all storage interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod boundary;
pub mod section;
pub mod temporal;
pub mod text_info;
pub mod traits;
pub mod volume;

// Re-exports for convenience
pub use boundary::CandidateBoundary;
pub use section::Section;
pub use temporal::{AuthorRegion, TemporalField, Uncertainty};
pub use text_info::TextInfo;
pub use volume::{split_lines, Volume};

/// Author sentinel returned when no attribution signal exists.
pub const UNKNOWN_AUTHOR: &str = "Unknown";
