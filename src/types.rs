/// Metadata field name used as a record key.
/// Examples: `author`, `title`, `year`
pub type FieldName = String;
/// Metadata field value (always a string, no type coercion).
/// Examples: `dickens`, `expectations`, `1861`
pub type FieldValue = String;
/// Filename or file path rendered as a string.
/// Example: `refcor/English/dickens_expectations.txt`
pub type Fname = String;
/// XML element name, optionally namespace-prefixed.
/// Examples: `author`, `tei:title`
pub type ElementName = String;
/// XML namespace prefix.
/// Example: `tei`
pub type NamespacePrefix = String;
/// XML namespace URI.
/// Example: `http://www.tei-c.org/ns/1.0`
pub type NamespaceUri = String;
