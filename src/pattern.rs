use std::fmt;

use regex::Regex;

use crate::constants::pattern::{TOKEN_CLOSE, TOKEN_OPEN};
use crate::errors::MetadataError;
use crate::record::MetadataRecord;
use crate::types::{FieldName, FieldValue, Fname};

/// One parsed template piece: literal text or a named field slot.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(FieldName),
}

/// Compiled brace-delimited filename pattern.
///
/// `{name}` tokens become named capture groups and the literal text
/// between them is matched verbatim, anchored at both ends. The same
/// token slots drive reverse substitution, so a pattern is usable in
/// both directions without recompilation.
///
/// Field names must be unique within one pattern and at least one field
/// token must be present.
#[derive(Clone, Debug)]
pub struct Pattern {
    template: String,
    segments: Vec<Segment>,
    fields: Vec<FieldName>,
    matcher: Regex,
}

impl Pattern {
    /// Compile a template such as `{author}_{title}`.
    pub fn new(template: impl Into<String>) -> Result<Self, MetadataError> {
        let template = template.into();
        let segments = parse_segments(&template)?;
        let fields = collect_fields(&template, &segments)?;
        let matcher = compile_matcher(&template, &segments)?;
        Ok(Self {
            template,
            segments,
            fields,
            matcher,
        })
    }

    /// Return the raw template string.
    pub fn as_str(&self) -> &str {
        &self.template
    }

    /// Field names in template order.
    pub fn fields(&self) -> &[FieldName] {
        &self.fields
    }

    /// Match `subject` and return the named captures in template order.
    pub fn captures(&self, subject: &str) -> Option<Vec<(FieldName, FieldValue)>> {
        let caps = self.matcher.captures(subject)?;
        Some(
            self.fields
                .iter()
                .map(|field| (field.clone(), caps[field.as_str()].to_string()))
                .collect(),
        )
    }

    /// Substitute the record's values into the field slots.
    ///
    /// Literal separators are reproduced verbatim. A field absent from
    /// the record fails with [`MetadataError::MissingField`]; there is
    /// no default substitution.
    pub fn render(&self, record: &MetadataRecord) -> Result<Fname, MetadataError> {
        let mut rendered = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => rendered.push_str(text),
                Segment::Field(field) => match record.get(field) {
                    Some(value) => rendered.push_str(value),
                    None => {
                        return Err(MetadataError::MissingField {
                            pattern: self.template.clone(),
                            field: field.clone(),
                        });
                    }
                },
            }
        }
        Ok(rendered)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}

fn invalid(template: &str, reason: impl Into<String>) -> MetadataError {
    MetadataError::InvalidPattern {
        pattern: template.to_string(),
        reason: reason.into(),
    }
}

fn parse_segments(template: &str) -> Result<Vec<Segment>, MetadataError> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = template.chars();
    while let Some(ch) = chars.next() {
        match ch {
            ch if ch == TOKEN_OPEN => {
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some(c) if c == TOKEN_CLOSE => break,
                        Some(c) => name.push(c),
                        None => return Err(invalid(template, "unterminated field token")),
                    }
                }
                if name.is_empty() {
                    return Err(invalid(template, "empty field token"));
                }
                if !is_valid_field_name(&name) {
                    return Err(invalid(template, format!("invalid field name '{name}'")));
                }
                segments.push(Segment::Field(name));
            }
            ch if ch == TOKEN_CLOSE => {
                return Err(invalid(template, "unmatched '}'"));
            }
            ch => literal.push(ch),
        }
    }
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(segments)
}

fn collect_fields(template: &str, segments: &[Segment]) -> Result<Vec<FieldName>, MetadataError> {
    let mut fields: Vec<FieldName> = Vec::new();
    for segment in segments {
        if let Segment::Field(name) = segment {
            if fields.iter().any(|seen| seen == name) {
                return Err(invalid(template, format!("duplicate field '{name}'")));
            }
            fields.push(name.clone());
        }
    }
    if fields.is_empty() {
        return Err(invalid(template, "pattern contains no field tokens"));
    }
    Ok(fields)
}

fn compile_matcher(template: &str, segments: &[Segment]) -> Result<Regex, MetadataError> {
    let mut source = String::from("^");
    for segment in segments {
        match segment {
            Segment::Literal(text) => source.push_str(&regex::escape(text)),
            // Lazy quantifiers keep captures minimal; the end anchor
            // forces the final field to consume the remainder.
            Segment::Field(name) => source.push_str(&format!("(?P<{name}>.+?)")),
        }
    }
    source.push('$');
    Regex::new(&source).map_err(|err| invalid(template, err.to_string()))
}

fn is_valid_field_name(name: &str) -> bool {
    let mut chars = name.chars();
    let leading_ok = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    leading_ok && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
