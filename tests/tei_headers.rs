use std::fs;
use std::path::PathBuf;

use corpus_meta::TeiExtractor;
use tempfile::tempdir;

const EXPECTATIONS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<TEI xmlns="http://www.tei-c.org/ns/1.0">
  <teiHeader>
    <fileDesc>
      <titleStmt>
        <title>Great Expectations</title>
        <author>Charles Dickens</author>
      </titleStmt>
      <publicationStmt>
        <date>1861</date>
      </publicationStmt>
    </fileDesc>
  </teiHeader>
  <text><body><p>My father's family name being Pirrip.</p></body></text>
</TEI>
"#;

const NOVELLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<TEI xmlns="http://www.tei-c.org/ns/1.0">
  <teiHeader>
    <fileDesc>
      <titleStmt>
        <title>Novelle</title>
      </titleStmt>
    </fileDesc>
  </teiHeader>
  <text><body><p>Ein dichter Herbstnebel.</p></body></text>
</TEI>
"#;

#[test]
fn extracts_one_record_per_document() {
    let temp = tempdir().unwrap();
    let expectations = temp.path().join("expectations.xml");
    let novelle = temp.path().join("novelle.xml");
    fs::write(&expectations, EXPECTATIONS).unwrap();
    fs::write(&novelle, NOVELLE).unwrap();

    let records = TeiExtractor::new()
        .with_field("title", "tei:title")
        .with_field("author", "tei:author")
        .with_field("year", "tei:date")
        .extract(&[expectations.clone(), novelle.clone()]);

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].get("title"), Some("Great Expectations"));
    assert_eq!(records[0].get("author"), Some("Charles Dickens"));
    assert_eq!(records[0].get("year"), Some("1861"));
    assert_eq!(
        records[0].fname(),
        Some(expectations.to_string_lossy().as_ref())
    );

    // Novelle has no author or date; those fields are simply absent.
    assert_eq!(records[1].get("title"), Some("Novelle"));
    assert!(!records[1].contains_field("author"));
    assert!(!records[1].contains_field("year"));
    assert_eq!(records[1].fname(), Some(novelle.to_string_lossy().as_ref()));
}

#[test]
fn custom_namespace_bindings_participate_in_matching() {
    let doc = r#"<?xml version="1.0" encoding="UTF-8"?>
<metadata xmlns:dc="http://purl.org/dc/elements/1.1/">
  <dc:creator>Johann Wolfgang von Goethe</dc:creator>
</metadata>
"#;
    let temp = tempdir().unwrap();
    let path = temp.path().join("novelle_header.xml");
    fs::write(&path, doc).unwrap();

    let records = TeiExtractor::new()
        .with_namespace("dc", "http://purl.org/dc/elements/1.1/")
        .with_field("author", "dc:creator")
        .extract(&[path]);

    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0].get("author"),
        Some("Johann Wolfgang von Goethe")
    );
}

#[test]
fn prefixed_elements_do_not_match_foreign_namespaces() {
    let doc = r#"<?xml version="1.0" encoding="UTF-8"?>
<metadata><title>Plain, un-namespaced title</title></metadata>
"#;
    let temp = tempdir().unwrap();
    let path = temp.path().join("plain.xml");
    fs::write(&path, doc).unwrap();

    let records = TeiExtractor::new()
        .with_field("title", "tei:title")
        .extract(&[path]);

    assert_eq!(records.len(), 1);
    assert!(!records[0].contains_field("title"));
}

#[test]
fn unreadable_documents_do_not_abort_the_batch() {
    let temp = tempdir().unwrap();
    let present = temp.path().join("expectations.xml");
    fs::write(&present, EXPECTATIONS).unwrap();
    let absent: PathBuf = temp.path().join("missing.xml");

    let records = TeiExtractor::new()
        .with_field("title", "tei:title")
        .extract(&[absent, present.clone()]);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].fname(), Some(present.to_string_lossy().as_ref()));
}
