use std::io;

use thiserror::Error;

use crate::types::{FieldName, Fname};

/// Error type for pattern, codec, and corpus I/O failures.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// A filename does not conform to the pattern it was matched against.
    #[error("filename '{fname}' does not match pattern '{pattern}'")]
    PatternMismatch {
        /// The pattern the filename was matched against.
        pattern: String,
        /// The offending filename, directory and extension included.
        fname: Fname,
    },
    /// A synthesis pattern references a field absent from the record.
    #[error("pattern '{pattern}' references field '{field}' missing from record")]
    MissingField {
        /// The pattern requesting the field.
        pattern: String,
        /// The absent field name.
        field: FieldName,
    },
    /// A pattern template could not be compiled.
    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The rejected template.
        pattern: String,
        /// What made it unacceptable.
        reason: String,
    },
    /// A stem handed to the rearranger is not `{first}_{second}`.
    #[error("stem '{stem}' is not exactly two underscore-separated components")]
    MalformedStem {
        /// The rejected stem.
        stem: String,
    },
    /// An operation needed the record's `filename` field and it was absent.
    #[error("record carries no 'filename' field")]
    MissingFnameField,
    /// Filesystem failure, including absent sidecar files.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// CSV read/write failure, including absent table files.
    #[error(transparent)]
    Csv(#[from] csv::Error),
    /// Sidecar (de)serialization failure.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// XML parse failure.
    #[error(transparent)]
    Xml(#[from] quick_xml::Error),
}
