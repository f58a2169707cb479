use std::path::Path;

use indexmap::IndexSet;
use tracing::warn;

use crate::constants::table::{DEFAULT_DELIMITER, EMPTY_TABLE_MSG, SINGLE_COLUMN_MSG};
use crate::errors::MetadataError;
use crate::record::MetadataRecord;
use crate::types::FieldName;

/// CSV-backed corpus table.
///
/// The first row is taken as the header unless explicit field names are
/// supplied, in which case every row is data. All cells are read and
/// written as strings.
#[derive(Clone, Debug)]
pub struct CsvTable {
    delimiter: u8,
    field_names: Option<Vec<FieldName>>,
}

impl Default for CsvTable {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            field_names: None,
        }
    }
}

impl CsvTable {
    /// Comma-separated table with a header row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom delimiter byte (e.g. `b';'`).
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Supply field names for a headerless file.
    pub fn with_field_names<I, N>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<FieldName>,
    {
        self.field_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Read one record per data row.
    ///
    /// An absent file is a hard failure. Degenerate shapes are warnings,
    /// not errors: zero data rows and single-column resolutions (the
    /// usual symptom of a wrong delimiter) are logged and whatever
    /// parsed is returned.
    pub fn read(&self, path: impl AsRef<Path>) -> Result<Vec<MetadataRecord>, MetadataError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(self.field_names.is_none())
            .flexible(true)
            .from_path(path.as_ref())?;
        let headers: Vec<FieldName> = match &self.field_names {
            Some(names) => names.clone(),
            None => reader.headers()?.iter().map(str::to_string).collect(),
        };
        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            records.push(
                headers
                    .iter()
                    .zip(row.iter())
                    .map(|(name, cell)| (name.clone(), cell.to_string()))
                    .collect(),
            );
        }
        if records.is_empty() {
            warn!(path = %path.as_ref().display(), EMPTY_TABLE_MSG);
        } else if headers.len() <= 1 {
            warn!(path = %path.as_ref().display(), SINGLE_COLUMN_MSG);
        }
        Ok(records)
    }

    /// Write one row per record, preceded by a header row.
    ///
    /// Column order is the first record's field order, with fields seen
    /// only in later records appended in encounter order; cells absent
    /// from a record serialize as empty strings.
    pub fn write(
        &self,
        path: impl AsRef<Path>,
        records: &[MetadataRecord],
    ) -> Result<(), MetadataError> {
        let mut headers: IndexSet<&FieldName> = IndexSet::new();
        for record in records {
            headers.extend(record.field_names());
        }
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_path(path.as_ref())?;
        writer.write_record(headers.iter().map(|name| name.as_str()))?;
        for record in records {
            writer.write_record(headers.iter().map(|name| record.get(name.as_str()).unwrap_or("")))?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn missing_file_is_a_hard_failure() {
        let temp = tempdir().unwrap();
        let err = CsvTable::new().read(temp.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, MetadataError::Csv(_)));
    }

    #[test]
    fn explicit_field_names_treat_every_row_as_data() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("corpus.csv");
        fs::write(&path, "dickens,expectations\ngoethe,novelle\n").unwrap();
        let records = CsvTable::new()
            .with_field_names(["author", "title"])
            .read(&path)
            .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("author"), Some("dickens"));
        assert_eq!(records[1].get("title"), Some("novelle"));
    }

    #[test]
    fn wrong_delimiter_resolves_to_a_single_column() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("corpus.csv");
        fs::write(&path, "author,title\ndickens,expectations\n").unwrap();
        let records = CsvTable::new().with_delimiter(b'#').read(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("author,title"), Some("dickens,expectations"));
    }
}
