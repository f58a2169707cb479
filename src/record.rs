use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::constants::record::{FILENAME_FIELD, PROVENANCE_FIELD, PROVENANCE_SIDECAR};
use crate::types::{FieldName, FieldValue};

/// One document's descriptive attributes.
///
/// Field insertion order is preserved, so CSV column headers and JSON
/// key order are deterministic. Two keys are reserved by convention:
/// [`FILENAME_FIELD`] holds the record's current file path and
/// [`PROVENANCE_FIELD`] marks where the record was loaded from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataRecord {
    fields: IndexMap<FieldName, FieldValue>,
}

impl MetadataRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a field value.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Insert or overwrite a field, returning the previous value.
    pub fn insert(
        &mut self,
        field: impl Into<FieldName>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        self.fields.insert(field.into(), value.into())
    }

    /// True when the record carries `field`.
    pub fn contains_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Remove a field, preserving the order of the remaining ones.
    pub fn remove(&mut self, field: &str) -> Option<FieldValue> {
        self.fields.shift_remove(field)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in insertion order.
    pub fn field_names(&self) -> impl Iterator<Item = &FieldName> {
        self.fields.keys()
    }

    /// Field name/value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldName, &FieldValue)> {
        self.fields.iter()
    }

    /// The record's current file path, if any.
    pub fn fname(&self) -> Option<&str> {
        self.get(FILENAME_FIELD)
    }

    /// Set the record's file path field.
    pub fn set_fname(&mut self, fname: impl Into<FieldValue>) {
        self.insert(FILENAME_FIELD, fname);
    }

    /// The record's provenance marker, if any.
    pub fn provenance(&self) -> Option<&str> {
        self.get(PROVENANCE_FIELD)
    }

    /// Mark the record as loaded from a JSON sidecar.
    pub fn mark_sidecar_provenance(&mut self) {
        self.insert(PROVENANCE_FIELD, PROVENANCE_SIDECAR);
    }
}

impl FromIterator<(FieldName, FieldValue)> for MetadataRecord {
    fn from_iter<I: IntoIterator<Item = (FieldName, FieldValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl Extend<(FieldName, FieldValue)> for MetadataRecord {
    fn extend<I: IntoIterator<Item = (FieldName, FieldValue)>>(&mut self, iter: I) {
        self.fields.extend(iter);
    }
}

impl<'a> IntoIterator for &'a MetadataRecord {
    type Item = (&'a FieldName, &'a FieldValue);
    type IntoIter = indexmap::map::Iter<'a, FieldName, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> MetadataRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn insertion_order_is_preserved() {
        let record = record(&[("title", "expectations"), ("author", "dickens"), ("year", "1861")]);
        let names: Vec<&FieldName> = record.field_names().collect();
        assert_eq!(names, ["title", "author", "year"]);
    }

    #[test]
    fn reserved_keys_round_trip() {
        let mut record = MetadataRecord::new();
        assert!(record.fname().is_none());
        record.set_fname("refcor/English/dickens_expectations.txt");
        record.mark_sidecar_provenance();
        assert_eq!(record.fname(), Some("refcor/English/dickens_expectations.txt"));
        assert_eq!(record.provenance(), Some(PROVENANCE_SIDECAR));
    }

    #[test]
    fn json_round_trip_is_verbatim() {
        let record = record(&[("author", "dickens"), ("_from", "sidecar")]);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"author":"dickens","_from":"sidecar"}"#);
        let back: MetadataRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn remove_keeps_remaining_order() {
        let mut record = record(&[("a", "1"), ("b", "2"), ("c", "3")]);
        assert_eq!(record.remove("b").as_deref(), Some("2"));
        let names: Vec<&FieldName> = record.field_names().collect();
        assert_eq!(names, ["a", "c"]);
    }
}
