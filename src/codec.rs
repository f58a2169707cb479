use std::path::Path;

use crate::errors::MetadataError;
use crate::pattern::Pattern;
use crate::record::MetadataRecord;
use crate::types::Fname;

/// Extract a metadata record from a filename.
///
/// Only the base stem participates in matching: directory components
/// and the extension are stripped first, so
/// `refcor/English/dickens_expectations.txt` is matched as
/// `dickens_expectations`. A non-matching name fails with
/// [`MetadataError::PatternMismatch`] carrying the full original
/// filename; this is recoverable, not fatal.
pub fn fname_to_metadata(
    fname: impl AsRef<Path>,
    pattern: &Pattern,
) -> Result<MetadataRecord, MetadataError> {
    let path = fname.as_ref();
    let stem = path.file_stem().and_then(|stem| stem.to_str()).unwrap_or("");
    pattern
        .captures(stem)
        .map(|pairs| pairs.into_iter().collect())
        .ok_or_else(|| MetadataError::PatternMismatch {
            pattern: pattern.as_str().to_string(),
            fname: path.to_string_lossy().into_owned(),
        })
}

/// Synthesize a filename stem from a record.
///
/// Every `{field}` token is substituted with the record's value and
/// literal separators are kept verbatim. Capture values are used as-is;
/// no extension or directory is added.
pub fn metadata_to_fname(
    record: &MetadataRecord,
    pattern: &Pattern,
) -> Result<Fname, MetadataError> {
    pattern.render(record)
}

/// Swap the two underscore-separated components of a path's stem.
///
/// `folder/goethe_novelle.txt` becomes `folder/novelle_goethe.txt`;
/// directory and extension are preserved, and applying the swap twice
/// returns the original path. Stems with any other number of components
/// are rejected with [`MetadataError::MalformedStem`].
pub fn rearrange_fname(path: impl AsRef<Path>) -> Result<Fname, MetadataError> {
    let path = path.as_ref();
    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("");
    let mut components = stem.split('_');
    let swapped = match (components.next(), components.next(), components.next()) {
        (Some(first), Some(second), None) if !first.is_empty() && !second.is_empty() => {
            format!("{second}_{first}")
        }
        _ => {
            return Err(MetadataError::MalformedStem {
                stem: stem.to_string(),
            });
        }
    };
    let file_name = match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => format!("{swapped}.{ext}"),
        None => swapped,
    };
    let mut rearranged = path.to_path_buf();
    rearranged.set_file_name(file_name);
    Ok(rearranged.to_string_lossy().into_owned())
}
