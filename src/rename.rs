use std::path::{Path, PathBuf};

use tracing::{error, warn};

use crate::constants::rename::{MISSING_FIELD_MSG, MISSING_FNAME_MSG, RELOCATE_FAILED_MSG};
use crate::record::MetadataRecord;
use crate::relocate::relocate;

/// Rename every record's file according to a new field ordering.
///
/// For each record, in input order, the new base name concatenates the
/// record's value for each name in `fields`, joined by `separator`,
/// keeping the current directory and extension. The physical file is
/// moved and the record's filename field is updated in place.
///
/// The batch never aborts on a bad record: a record without a filename
/// field is skipped, absent requested fields are left out of the new
/// name, and a failed move leaves that record untouched; all three are
/// logged. Records are returned in their original order.
pub fn rename_corpus<S: AsRef<str>>(
    mut records: Vec<MetadataRecord>,
    fields: &[S],
    separator: &str,
) -> Vec<MetadataRecord> {
    for record in &mut records {
        let Some(old_fname) = record.fname().map(str::to_string) else {
            warn!(MISSING_FNAME_MSG);
            continue;
        };
        let old_path = Path::new(&old_fname);
        let new_path = build_new_path(record, old_path, fields, separator);
        if new_path == old_path {
            continue;
        }
        match relocate(old_path, &new_path) {
            Ok(outcome) => record.set_fname(outcome.new_path.to_string_lossy()),
            Err(err) => {
                error!(fname = %old_fname, error = %err, RELOCATE_FAILED_MSG);
            }
        }
    }
    records
}

/// Compute the renamed path: same directory and extension, new stem.
fn build_new_path<S: AsRef<str>>(
    record: &MetadataRecord,
    old_path: &Path,
    fields: &[S],
    separator: &str,
) -> PathBuf {
    let mut values = Vec::new();
    for field in fields {
        let field = field.as_ref();
        match record.get(field) {
            Some(value) => values.push(value),
            None => {
                warn!(field, fname = %old_path.display(), MISSING_FIELD_MSG);
            }
        }
    }
    let stem = values.join(separator);
    let file_name = match old_path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => format!("{stem}.{ext}"),
        None => stem,
    };
    match old_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(file_name),
        _ => PathBuf::from(file_name),
    }
}
