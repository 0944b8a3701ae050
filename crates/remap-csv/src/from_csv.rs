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

//! Load delimited text into the tabular model.

use crate::error::{CsvError, Result};
use remap_core::{Cell, Row, Table};
use std::io::Read;

/// Default maximum number of data rows, bounding memory for hostile input.
pub const DEFAULT_MAX_ROWS: usize = 1_000_000;

/// Configuration for CSV loading.
///
/// # Examples
///
/// ```
/// use remap_csv::FromCsvConfig;
///
/// // Tab-delimited input
/// let config = FromCsvConfig {
///     delimiter: b'\t',
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct FromCsvConfig {
    /// Field delimiter (default: `,`).
    pub delimiter: u8,
    /// Trim leading/trailing whitespace from headers and fields (default: true).
    pub trim: bool,
    /// Maximum number of data rows to load (default: 1,000,000).
    pub max_rows: usize,
}

impl Default for FromCsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

/// Load a CSV string into a [`Table`].
///
/// The first record is the column header; every subsequent record is one
/// row. Ragged records never abort the load: a record with fewer fields
/// than columns yields [`Cell::Absent`] for the trailing columns, and extra
/// fields beyond the header width are truncated. Empty fields decode as
/// [`Cell::Absent`]: CSV cannot distinguish "no value" from an empty
/// string, and this engine treats empty cells as missing data.
///
/// # Errors
///
/// Returns [`CsvError::ParseError`] for malformed records (bad quoting,
/// invalid UTF-8) and [`CsvError::TooManyRows`] past the configured limit.
///
/// # Examples
///
/// ```
/// use remap_csv::{from_csv, FromCsvConfig};
///
/// let table = from_csv("name,age\nAnn,30\nBo\n", &FromCsvConfig::default()).unwrap();
/// assert_eq!(table.columns(), &["name", "age"]);
/// assert_eq!(table.rows().len(), 2);
/// // The short second row is padded with absences.
/// assert!(table.rows()[1].get("age").unwrap().is_absent());
/// ```
pub fn from_csv(csv: &str, config: &FromCsvConfig) -> Result<Table> {
    from_csv_reader(csv.as_bytes(), config)
}

/// Load CSV from any reader into a [`Table`].
///
/// Behaves exactly like [`from_csv`]; useful for files and network streams.
pub fn from_csv_reader<R: Read>(reader: R, config: &FromCsvConfig) -> Result<Table> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(if config.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        })
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let mut table = Table::with_columns(headers.iter().map(str::to_string).collect());

    for (index, record) in rdr.records().enumerate() {
        if index >= config.max_rows {
            return Err(CsvError::TooManyRows {
                max: config.max_rows,
            });
        }
        let record = record?;

        let mut row = Row::new();
        for (i, column) in table.columns().iter().enumerate() {
            // record.get past the end covers short rows; the loop bound
            // itself truncates long ones at the header width.
            match record.get(i) {
                Some("") | None => row.set(column.clone(), Cell::Absent),
                Some(field) => row.set(column.clone(), Cell::text(field)),
            }
        }
        table.add_row(row);
    }

    Ok(table)
}
