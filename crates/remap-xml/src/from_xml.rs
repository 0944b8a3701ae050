// Remap - Tabular field remapping and container conversion
//
// Copyright (c) 2025 Remap contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! XML to table conversion.

use crate::error::{Result, XmlError};
use quick_xml::events::Event;
use quick_xml::Reader;
use remap_core::{Cell, Row, Table, XmlTemplate};

/// Default maximum number of record elements (prevents memory exhaustion).
pub const DEFAULT_MAX_RECORDS: usize = 100_000;

/// Default maximum accumulated text length per element, in bytes.
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 1_000_000;

/// Configuration for XML loading.
#[derive(Debug, Clone)]
pub struct FromXmlConfig {
    /// Maximum number of record elements to load (default: 100,000).
    pub max_records: usize,
    /// Maximum text length per element in bytes (default: 1,000,000).
    pub max_text_length: usize,
}

impl Default for FromXmlConfig {
    fn default() -> Self {
        Self {
            max_records: DEFAULT_MAX_RECORDS,
            max_text_length: DEFAULT_MAX_TEXT_LENGTH,
        }
    }
}

/// One direct child of the root, before shape detection.
struct RawRecord {
    tag: String,
    /// Direct text content of the child itself (single-record shape).
    text: Option<String>,
    /// Grandchild elements keyed by tag (multi-record shape).
    fields: Vec<(String, Cell)>,
}

/// Load a two-level XML document into a [`Table`], capturing its tag-naming
/// convention as an [`XmlTemplate`].
///
/// Shape detection follows the document's structure:
///
/// - **Multi-record**: the root has one or more children and all of them
///   share the same tag. Each child becomes one row; each of its own
///   children becomes one field keyed by tag, valued by text content
///   ([`Cell::Absent`] when the element has no text).
/// - **Single-record**: the children's tags differ, or the root has no
///   children. Each direct child of the root becomes one field of a single
///   row.
///
/// Columns are the union of field keys in first-seen order; rows follow
/// document order. Attributes are not consumed and markup nested below the
/// field level is ignored.
///
/// # Errors
///
/// Returns [`XmlError::ParseError`] for malformed markup (with the parser's
/// byte position), [`XmlError::NoRoot`] for a document with no root
/// element, and the limit errors past the configured bounds.
///
/// # Examples
///
/// ```
/// use remap_xml::{from_xml, FromXmlConfig};
///
/// let doc = "<people>\
///     <person><name>Ann</name><age>30</age></person>\
///     <person><name>Bo</name><age>41</age></person>\
/// </people>";
/// let (table, template) = from_xml(doc, &FromXmlConfig::default()).unwrap();
/// assert_eq!(table.columns(), &["name", "age"]);
/// assert_eq!(table.rows().len(), 2);
/// assert_eq!(template.root_tag, "people");
/// assert_eq!(template.record_tag, "person");
/// ```
pub fn from_xml(xml: &str, config: &FromXmlConfig) -> Result<(Table, XmlTemplate)> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut root_tag: Option<String> = None;
    let mut records: Vec<RawRecord> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                records = parse_records(&mut reader, config)?;
                root_tag = Some(name);
                break;
            }
            Ok(Event::Empty(e)) => {
                root_tag = Some(String::from_utf8_lossy(e.name().as_ref()).to_string());
                break;
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(parse_error(&reader, &e)),
            _ => {}
        }
    }

    let root_tag = root_tag.ok_or(XmlError::NoRoot)?;
    let record_tag = records
        .first()
        .map(|r| r.tag.clone())
        .unwrap_or_else(|| XmlTemplate::DEFAULT_RECORD_TAG.to_string());
    let template = XmlTemplate::new(root_tag, record_tag);

    Ok((build_table(records), template))
}

/// Extract only the tag-naming template from an XML document.
///
/// Used when a caller supplies a separate template document for CSV → XML
/// conversion: the root tag and the tag of the root's first child are
/// captured, nothing else is read. A root with no children yields the
/// default record tag.
pub fn extract_template(xml: &str) -> Result<XmlTemplate> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let root_tag = loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => break String::from_utf8_lossy(e.name().as_ref()).to_string(),
            Ok(Event::Empty(e)) => {
                let root = String::from_utf8_lossy(e.name().as_ref()).to_string();
                return Ok(XmlTemplate::with_default_record_tag(root));
            }
            Ok(Event::Eof) => return Err(XmlError::NoRoot),
            Err(e) => return Err(parse_error(&reader, &e)),
            _ => {}
        }
    };

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                let record = String::from_utf8_lossy(e.name().as_ref()).to_string();
                return Ok(XmlTemplate::new(root_tag, record));
            }
            Ok(Event::End(_)) | Ok(Event::Eof) => {
                return Ok(XmlTemplate::with_default_record_tag(root_tag));
            }
            Err(e) => return Err(parse_error(&reader, &e)),
            _ => {}
        }
    }
}

/// Collect the root's direct children. Each child's subtree is consumed
/// entirely, so the only end tag seen at this level is the root's own.
fn parse_records(reader: &mut Reader<&[u8]>, config: &FromXmlConfig) -> Result<Vec<RawRecord>> {
    let mut records = Vec::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if records.len() >= config.max_records {
                    return Err(XmlError::TooManyRecords {
                        max: config.max_records,
                    });
                }
                let tag = String::from_utf8_lossy(e.name().as_ref()).to_string();
                records.push(parse_record(reader, tag, config)?);
            }
            Ok(Event::Empty(e)) => {
                if records.len() >= config.max_records {
                    return Err(XmlError::TooManyRecords {
                        max: config.max_records,
                    });
                }
                records.push(RawRecord {
                    tag: String::from_utf8_lossy(e.name().as_ref()).to_string(),
                    text: None,
                    fields: Vec::new(),
                });
            }
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => break,
            Err(e) => return Err(parse_error(reader, &e)),
            _ => {}
        }
    }
    Ok(records)
}

/// Parse one direct child of the root: its own text and its field elements.
fn parse_record(
    reader: &mut Reader<&[u8]>,
    tag: String,
    config: &FromXmlConfig,
) -> Result<RawRecord> {
    let mut text: Option<String> = None;
    let mut fields = Vec::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                let cell = read_field(reader, &name, config)?;
                fields.push((name, cell));
            }
            Ok(Event::Empty(e)) => {
                fields.push((
                    String::from_utf8_lossy(e.name().as_ref()).to_string(),
                    Cell::Absent,
                ));
            }
            Ok(Event::Text(t)) => {
                let chunk = t.unescape().map_err(|e| parse_error(reader, &e))?;
                append_text(text.get_or_insert_with(String::new), &chunk, config)?;
            }
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => break,
            Err(e) => return Err(parse_error(reader, &e)),
            _ => {}
        }
    }
    Ok(RawRecord { tag, text, fields })
}

/// Read a field element's direct text, skipping any deeper markup.
fn read_field(reader: &mut Reader<&[u8]>, name: &str, config: &FromXmlConfig) -> Result<Cell> {
    let mut text = String::new();
    let mut depth = 0usize;
    loop {
        match reader.read_event() {
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(e)) => {
                if depth == 0 && e.name().as_ref() == name.as_bytes() {
                    break;
                }
                depth = depth.saturating_sub(1);
            }
            Ok(Event::Text(t)) if depth == 0 => {
                let chunk = t.unescape().map_err(|e| parse_error(reader, &e))?;
                append_text(&mut text, &chunk, config)?;
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(parse_error(reader, &e)),
            _ => {}
        }
    }
    if text.is_empty() {
        Ok(Cell::Absent)
    } else {
        Ok(Cell::Text(text))
    }
}

fn append_text(buffer: &mut String, chunk: &str, config: &FromXmlConfig) -> Result<()> {
    if buffer.len() + chunk.len() > config.max_text_length {
        return Err(XmlError::TextTooLong {
            max: config.max_text_length,
        });
    }
    buffer.push_str(chunk);
    Ok(())
}

fn parse_error(reader: &Reader<&[u8]>, err: &quick_xml::Error) -> XmlError {
    XmlError::ParseError {
        pos: reader.buffer_position(),
        message: err.to_string(),
    }
}

fn build_table(records: Vec<RawRecord>) -> Table {
    let multi = !records.is_empty() && records.iter().all(|r| r.tag == records[0].tag);
    let mut table = Table::new();

    if multi {
        // Columns are the union of field keys, in first-seen order.
        for record in &records {
            for (name, _) in &record.fields {
                table.add_column(name);
            }
        }
        for record in records {
            let mut row = Row::new();
            for (name, cell) in record.fields {
                row.set(name, cell);
            }
            table.add_row(row);
        }
    } else {
        // Heterogeneous children (or none at all): the root itself is the
        // single record and each child is one field.
        let mut row = Row::new();
        for record in records {
            table.add_column(&record.tag);
            let cell = match record.text {
                Some(text) => Cell::Text(text),
                None => Cell::Absent,
            };
            row.set(record.tag, cell);
        }
        table.add_row(row);
    }

    table
}
