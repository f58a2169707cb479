#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Filename ↔ metadata conversions and the stem rearranger.
pub mod codec;
/// Record conventions, table heuristics, and canonical log messages.
pub mod constants;
/// Compiled brace-delimited filename patterns.
pub mod pattern;
/// Order-preserving metadata records.
pub mod record;
/// Safe file relocation with best-effort directory pruning.
pub mod relocate;
/// Bulk corpus renaming.
pub mod rename;
/// JSON sidecar persistence.
pub mod sidecar;
/// CSV-backed corpus tables.
pub mod table;
/// TEI/XML header extraction.
pub mod tei;
/// Shared type aliases.
pub mod types;
/// Corpus tree walking.
pub mod walk;

mod errors;

pub use codec::{fname_to_metadata, metadata_to_fname, rearrange_fname};
pub use errors::MetadataError;
pub use pattern::Pattern;
pub use record::MetadataRecord;
pub use relocate::{RelocateOutcome, relocate};
pub use rename::rename_corpus;
pub use sidecar::{read_sidecar, sidecar_path, write_sidecar};
pub use table::CsvTable;
pub use tei::TeiExtractor;
pub use types::{FieldName, FieldValue, Fname};
pub use walk::CorpusWalker;
