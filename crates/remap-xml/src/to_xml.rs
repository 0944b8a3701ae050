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

//! Render the tabular model as two-level XML.

use crate::error::{Result, XmlError};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use remap_core::{Cell, FieldMapping, MapTarget, Table, XmlTemplate};
use std::io::Cursor;

/// Configuration for XML output.
#[derive(Debug, Clone)]
pub struct ToXmlConfig {
    /// Indent nested elements with two spaces per level (default: true).
    pub pretty: bool,
    /// Emit the `<?xml version="1.0" encoding="UTF-8"?>` declaration
    /// (default: true).
    pub declaration: bool,
}

impl Default for ToXmlConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            declaration: true,
        }
    }
}

/// Render a [`Table`] as an XML string under a field mapping, using the
/// template's root and record tags.
///
/// One record element is emitted per row, one field element per rename
/// entry whose source the row carries. Dropped entries contribute nothing,
/// and a row that never saw a field omits that element entirely, while an
/// [`Cell::Absent`] value becomes a self-closing element.
///
/// A field element's tag is normally the rename target. When the source
/// name itself is still among the rename targets the source name wins, so
/// a swap such as `a -> b, b -> a` keeps every element under its original
/// tag.
///
/// Text content is entity-escaped (`&`, `<`, `>`, `"`, `'`). Output is
/// deterministic and ends with a trailing newline.
///
/// # Examples
///
/// ```
/// use remap_core::{Cell, FieldMapping, Row, Table, XmlTemplate};
/// use remap_xml::{to_xml, ToXmlConfig};
///
/// let mut table = Table::with_columns(vec!["name".to_string()]);
/// let mut row = Row::new();
/// row.set("name", Cell::text("Ann"));
/// table.add_row(row);
///
/// let mapping = FieldMapping::identity(table.columns());
/// let template = XmlTemplate::new("people", "person");
/// let xml = to_xml(&table, &mapping, &template, &ToXmlConfig::default()).unwrap();
/// assert!(xml.contains("<name>Ann</name>"));
/// assert!(xml.ends_with("</people>\n"));
/// ```
pub fn to_xml(
    table: &Table,
    mapping: &FieldMapping,
    template: &XmlTemplate,
    config: &ToXmlConfig,
) -> Result<String> {
    let cursor = Cursor::new(Vec::new());
    let mut writer = if config.pretty {
        Writer::new_with_indent(cursor, b' ', 2)
    } else {
        Writer::new(cursor)
    };

    if config.declaration {
        write_event(
            &mut writer,
            Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
            "XML declaration",
        )?;
    }

    write_event(
        &mut writer,
        Event::Start(BytesStart::new(template.root_tag.as_str())),
        "root element",
    )?;

    // Targets of the resolved mapping; a source name that is itself still
    // an output column keeps its original tag.
    let renamed = mapping.output_columns();

    for row in table.rows() {
        write_event(
            &mut writer,
            Event::Start(BytesStart::new(template.record_tag.as_str())),
            "record element",
        )?;

        for (source, target) in mapping.entries() {
            let target = match target {
                MapTarget::Rename(name) => name.as_str(),
                MapTarget::Drop => continue,
            };
            if !table.has_column(source) {
                continue;
            }
            // A missing key means the row never saw this field: no element.
            let cell = match row.get(source) {
                Some(cell) => cell,
                None => continue,
            };
            let tag = if renamed.contains(&source) {
                source
            } else {
                target
            };
            match cell {
                Cell::Text(text) => {
                    write_event(&mut writer, Event::Start(BytesStart::new(tag)), "field")?;
                    write_event(&mut writer, Event::Text(BytesText::new(text)), "field text")?;
                    write_event(&mut writer, Event::End(BytesEnd::new(tag)), "field")?;
                }
                Cell::Absent => {
                    write_event(&mut writer, Event::Empty(BytesStart::new(tag)), "field")?;
                }
            }
        }

        write_event(
            &mut writer,
            Event::End(BytesEnd::new(template.record_tag.as_str())),
            "record element",
        )?;
    }

    write_event(
        &mut writer,
        Event::End(BytesEnd::new(template.root_tag.as_str())),
        "root element",
    )?;

    let mut bytes = writer.into_inner().into_inner();
    bytes.push(b'\n');
    String::from_utf8(bytes).map_err(|_| XmlError::InvalidUtf8)
}

fn write_event<W: std::io::Write>(
    writer: &mut Writer<W>,
    event: Event<'_>,
    context: &str,
) -> Result<()> {
    writer.write_event(event).map_err(|e| XmlError::WriteError {
        context: context.to_string(),
        message: e.to_string(),
    })
}
