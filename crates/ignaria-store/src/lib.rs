//! Ignaria Storage Layer
//!
//! Implements the CorpusStore trait over the flat-file corpus layout:
//!
//! ```text
//! sources/<ID>.txt          raw volume text
//! sources/<ID>.meta.yaml    metadata record
//! ```
//!
//! # Merge discipline
//!
//! Section updates are field-level: only `text_info.is_anthology` and
//! `text_info.sections` are rewritten. Every other key of the record,
//! including ones this crate knows nothing about, is written back in its
//! original order.
//!
//! # Examples
//!
//! ```no_run
//! use ignaria_domain::traits::CorpusStore;
//! use ignaria_store::YamlStore;
//!
//! let store = YamlStore::new("sources");
//! for id in store.list_volumes().unwrap() {
//!     println!("{}", id);
//! }
//! ```

#![warn(missing_docs)]

mod document;
mod error;
mod yaml_store;

pub use document::MetadataDocument;
pub use error::StoreError;
pub use yaml_store::{YamlStore, META_SUFFIX, TEXT_SUFFIX};
