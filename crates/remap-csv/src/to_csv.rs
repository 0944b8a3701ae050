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

//! Render the tabular model as delimited text.

use crate::error::{CsvError, Result};
use remap_core::{Cell, FieldMapping, MapTarget, Table};
use std::io::Write;

/// Configuration for CSV output.
#[derive(Debug, Clone)]
pub struct ToCsvConfig {
    /// Field delimiter (default: `,`).
    pub delimiter: u8,
    /// Include the header row (default: true).
    pub include_headers: bool,
    /// Quote style for fields (default: necessary).
    pub quote_style: csv::QuoteStyle,
}

impl Default for ToCsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            include_headers: true,
            quote_style: csv::QuoteStyle::Necessary,
        }
    }
}

/// Render a [`Table`] as a CSV string under a field mapping.
///
/// One output column is emitted per rename entry, named by the rename
/// target, in mapping order; dropped entries and entries whose source is
/// not a table column contribute nothing. Absent values render as empty
/// fields. Output is deterministic: the same table and mapping always
/// produce byte-identical text.
///
/// # Examples
///
/// ```
/// use remap_core::{Cell, FieldMapping, Row, Table};
/// use remap_csv::{to_csv, ToCsvConfig};
///
/// let mut table = Table::with_columns(vec!["name".to_string()]);
/// let mut row = Row::new();
/// row.set("name", Cell::text("Ann"));
/// table.add_row(row);
///
/// let mapping = FieldMapping::identity(table.columns());
/// let csv = to_csv(&table, &mapping, &ToCsvConfig::default()).unwrap();
/// assert_eq!(csv, "name\nAnn\n");
/// ```
pub fn to_csv(table: &Table, mapping: &FieldMapping, config: &ToCsvConfig) -> Result<String> {
    let mut buffer = Vec::with_capacity(estimate_csv_size(table));
    to_csv_writer(table, mapping, &mut buffer, config)?;
    String::from_utf8(buffer).map_err(|_| CsvError::InvalidUtf8 {
        context: "CSV output".to_string(),
    })
}

/// Render a [`Table`] as CSV into a writer.
pub fn to_csv_writer<W: Write>(
    table: &Table,
    mapping: &FieldMapping,
    writer: W,
    config: &ToCsvConfig,
) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .quote_style(config.quote_style)
        .from_writer(writer);

    // Rename entries drive the output; a rename only takes effect when its
    // source is an actual table column.
    let kept: Vec<(&str, &str)> = mapping
        .entries()
        .filter_map(|(source, target)| match target {
            MapTarget::Rename(name) if table.has_column(source) => {
                Some((source, name.as_str()))
            }
            _ => None,
        })
        .collect();

    if config.include_headers {
        wtr.write_record(kept.iter().map(|(_, name)| *name))
            .map_err(|e| CsvError::WriteError {
                context: "CSV header".to_string(),
                message: e.to_string(),
            })?;
    }

    for row in table.rows() {
        let record: Vec<&str> = kept
            .iter()
            .map(|(source, _)| match row.get(source) {
                Some(Cell::Text(text)) => text.as_str(),
                _ => "",
            })
            .collect();
        wtr.write_record(&record).map_err(|e| CsvError::WriteError {
            context: "CSV record".to_string(),
            message: e.to_string(),
        })?;
    }

    wtr.flush().map_err(|e| CsvError::WriteError {
        context: "CSV writer".to_string(),
        message: e.to_string(),
    })?;

    Ok(())
}

/// Estimate CSV output size for buffer pre-allocation.
fn estimate_csv_size(table: &Table) -> usize {
    let header = table.columns().iter().map(String::len).sum::<usize>() + table.columns().len() + 1;
    let data = table.rows().len() * table.columns().len() * 20;
    (header + data).max(1024)
}
