/// Constants used by record field conventions.
pub mod record {
    /// Reserved field holding a record's current file path.
    pub const FILENAME_FIELD: &str = "filename";
    /// Reserved field marking where a record was loaded from.
    pub const PROVENANCE_FIELD: &str = "_from";
    /// Provenance value for records loaded from JSON sidecars.
    pub const PROVENANCE_SIDECAR: &str = "sidecar";
}

/// Constants used by filename pattern parsing.
pub mod pattern {
    /// Opening delimiter of a field token.
    pub const TOKEN_OPEN: char = '{';
    /// Closing delimiter of a field token.
    pub const TOKEN_CLOSE: char = '}';
    /// Conventional author/title pattern many corpora use.
    pub const DEFAULT_PATTERN: &str = "{author}_{title}";
}

/// Constants used by the corpus renamer.
pub mod rename {
    /// Default separator joining field values in synthesized names.
    pub const DEFAULT_SEPARATOR: &str = "_";
    /// Log message when a record carries no file path field.
    pub const MISSING_FNAME_MSG: &str = "record has no filename field, skipping rename";
    /// Log message when a requested field is absent from a record.
    pub const MISSING_FIELD_MSG: &str = "field missing from record, skipping it in new name";
    /// Log message when the physical move fails for one record.
    pub const RELOCATE_FAILED_MSG: &str = "relocation failed, filename left unchanged";
}

/// Constants used by tabular (CSV) input shape heuristics.
pub mod table {
    /// Default CSV delimiter byte.
    pub const DEFAULT_DELIMITER: u8 = b',';
    /// Warning emitted when a CSV file yields zero data rows.
    pub const EMPTY_TABLE_MSG: &str = "CSV-File is empty.";
    /// Warning emitted when a CSV file resolves to a single column.
    pub const SINGLE_COLUMN_MSG: &str = "CSV-File has only 1 column. Please check delimiter.";
}

/// Constants used by sidecar persistence.
pub mod sidecar {
    /// File extension of JSON sidecar files.
    pub const SIDECAR_EXTENSION: &str = "json";
}

/// Constants used by TEI/XML header extraction.
pub mod tei {
    /// Canonical TEI namespace URI.
    pub const TEI_NAMESPACE: &str = "http://www.tei-c.org/ns/1.0";
    /// Conventional prefix bound to the TEI namespace.
    pub const TEI_PREFIX: &str = "tei";
    /// Log message when a mapped element is absent from a document.
    pub const MISSING_ELEMENT_MSG: &str = "mapped element not found in document";
    /// Log message when a document cannot be opened or parsed.
    pub const UNPARSEABLE_DOC_MSG: &str = "skipping unparseable document";
    /// Log message when a mapped element uses a prefix with no namespace binding.
    pub const UNKNOWN_PREFIX_MSG: &str = "unknown namespace prefix, matching on local name only";
}

/// Constants used by corpus tree walking.
pub mod walk {
    /// Log message when a filename does not match the corpus pattern.
    pub const SKIP_UNMATCHED_MSG: &str = "skipping file not matching pattern";
}
