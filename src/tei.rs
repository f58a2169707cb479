use std::path::Path;

use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;
use tracing::{error, warn};

use crate::constants::tei::{
    MISSING_ELEMENT_MSG, TEI_NAMESPACE, TEI_PREFIX, UNKNOWN_PREFIX_MSG, UNPARSEABLE_DOC_MSG,
};
use crate::errors::MetadataError;
use crate::record::MetadataRecord;
use crate::types::{ElementName, FieldName, NamespacePrefix, NamespaceUri};

/// Pulls named header elements out of TEI/XML documents.
///
/// Configured with a field-name → element mapping and a prefix →
/// namespace-URI mapping; the TEI namespace is bound to the `tei`
/// prefix out of the box. For each document the first occurrence of
/// each mapped element is captured as text.
#[derive(Clone, Debug)]
pub struct TeiExtractor {
    fields: Vec<(FieldName, ElementName)>,
    namespaces: Vec<(NamespacePrefix, NamespaceUri)>,
}

/// One element lookup with its namespace resolved up front.
struct Target<'a> {
    field: &'a str,
    element: &'a str,
    namespace: Option<&'a str>,
    local: &'a str,
}

impl Default for TeiExtractor {
    fn default() -> Self {
        Self {
            fields: Vec::new(),
            namespaces: vec![(TEI_PREFIX.to_string(), TEI_NAMESPACE.to_string())],
        }
    }
}

impl TeiExtractor {
    /// Extractor with the TEI namespace pre-bound and no fields mapped.
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a metadata field to an element name such as `tei:author`.
    pub fn with_field(
        mut self,
        field: impl Into<FieldName>,
        element: impl Into<ElementName>,
    ) -> Self {
        self.fields.push((field.into(), element.into()));
        self
    }

    /// Bind a namespace prefix usable in element names.
    pub fn with_namespace(
        mut self,
        prefix: impl Into<NamespacePrefix>,
        uri: impl Into<NamespaceUri>,
    ) -> Self {
        self.namespaces.push((prefix.into(), uri.into()));
        self
    }

    /// Extract one record per document.
    ///
    /// Every record carries the document path in its filename field. A
    /// mapped element absent from a document is logged per field and
    /// omitted from that record; a document that cannot be opened or
    /// parsed is logged and skipped, and the batch continues.
    pub fn extract<P: AsRef<Path>>(&self, paths: &[P]) -> Vec<MetadataRecord> {
        let targets = self.resolve_targets();
        let mut records = Vec::new();
        for path in paths {
            let path = path.as_ref();
            match extract_one(path, &targets) {
                Ok(record) => records.push(record),
                Err(err) => {
                    error!(path = %path.display(), error = %err, UNPARSEABLE_DOC_MSG);
                }
            }
        }
        records
    }

    /// Split mapped element names into (namespace, local name) lookups.
    fn resolve_targets(&self) -> Vec<Target<'_>> {
        self.fields
            .iter()
            .map(|(field, element)| {
                let (namespace, local) = match element.split_once(':') {
                    Some((prefix, local)) => {
                        let uri = self
                            .namespaces
                            .iter()
                            .find(|(bound, _)| bound == prefix)
                            .map(|(_, uri)| uri.as_str());
                        if uri.is_none() {
                            warn!(prefix, element = element.as_str(), UNKNOWN_PREFIX_MSG);
                        }
                        (uri, local)
                    }
                    None => (None, element.as_str()),
                };
                Target {
                    field,
                    element,
                    namespace,
                    local,
                }
            })
            .collect()
    }
}

fn extract_one(path: &Path, targets: &[Target<'_>]) -> Result<MetadataRecord, MetadataError> {
    let mut reader = NsReader::from_file(path)?;
    let mut record = MetadataRecord::new();
    record.set_fname(path.to_string_lossy());
    let mut buf = Vec::new();
    // Field whose element we are currently inside, waiting for text.
    let mut pending: Option<FieldName> = None;
    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(start) => {
                let (resolved, local) = reader.resolve_element(start.name());
                if pending.is_none()
                    && let Some(target) = matching_target(targets, &resolved, local.as_ref())
                    && !record.contains_field(target.field)
                {
                    pending = Some(target.field.to_string());
                }
            }
            Event::Text(text) => {
                if let Some(field) = pending.take() {
                    let unescaped = text.unescape()?;
                    let trimmed = unescaped.trim();
                    if trimmed.is_empty() {
                        // Indentation whitespace; keep waiting for the
                        // element's real text.
                        pending = Some(field);
                    } else {
                        record.insert(field, trimmed);
                    }
                }
            }
            Event::End(_) => pending = None,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }
    for target in targets {
        if !record.contains_field(target.field) {
            warn!(
                field = target.field,
                element = target.element,
                path = %path.display(),
                MISSING_ELEMENT_MSG
            );
        }
    }
    Ok(record)
}

/// First target matching a resolved element name.
///
/// A namespace-qualified target requires the element's bound namespace
/// to agree; an unqualified target matches on local name alone.
fn matching_target<'t>(
    targets: &'t [Target<'t>],
    resolved: &ResolveResult<'_>,
    local: &[u8],
) -> Option<&'t Target<'t>> {
    targets.iter().find(|target| {
        if target.local.as_bytes() != local {
            return false;
        }
        match target.namespace {
            Some(uri) => matches!(resolved, ResolveResult::Bound(Namespace(ns)) if *ns == uri.as_bytes()),
            None => true,
        }
    })
}
