use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::sidecar::SIDECAR_EXTENSION;
use crate::errors::MetadataError;
use crate::record::MetadataRecord;

/// Path of the JSON sidecar sitting next to a data file.
///
/// `refcor/novel.txt` maps to `refcor/novel.json`.
pub fn sidecar_path(data_path: impl AsRef<Path>) -> PathBuf {
    data_path.as_ref().with_extension(SIDECAR_EXTENSION)
}

/// Read the sidecar record for a data file.
///
/// An absent sidecar is a hard failure ([`MetadataError::Io`] with kind
/// `NotFound`), not an empty record. On success the returned record is
/// marked with sidecar provenance.
pub fn read_sidecar(data_path: impl AsRef<Path>) -> Result<MetadataRecord, MetadataError> {
    let raw = fs::read_to_string(sidecar_path(data_path))?;
    let mut record: MetadataRecord = serde_json::from_str(&raw)?;
    record.mark_sidecar_provenance();
    Ok(record)
}

/// Write a record to the sidecar named by its filename field.
///
/// The record is serialized verbatim; nothing is stripped, the filename
/// and any provenance marker included. Returns the written path. A
/// record without a filename field cannot be placed and fails with
/// [`MetadataError::MissingFnameField`].
pub fn write_sidecar(record: &MetadataRecord) -> Result<PathBuf, MetadataError> {
    let fname = record.fname().ok_or(MetadataError::MissingFnameField)?;
    let target = sidecar_path(fname);
    let json = serde_json::to_string_pretty(record)?;
    fs::write(&target, json)?;
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidecar_sits_next_to_the_data_file() {
        assert_eq!(
            sidecar_path("refcor/English/dickens_expectations.txt"),
            Path::new("refcor/English/dickens_expectations.json")
        );
    }

    #[test]
    fn write_without_filename_field_fails() {
        let mut record = MetadataRecord::new();
        record.insert("author", "dickens");
        let err = write_sidecar(&record).unwrap_err();
        assert!(matches!(err, MetadataError::MissingFnameField));
    }
}
