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

//! Tabular in-memory model shared by all container formats.

use std::collections::BTreeMap;

/// A single field value in a row.
///
/// `Absent` is distinct from an empty string: an XML element with no text
/// content and an empty CSV cell both decode to `Absent`, and both render
/// back as "no value" rather than a `"None"`-like literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// The field carries no value.
    Absent,
    /// The field carries text content.
    Text(String),
}

impl Cell {
    /// Create a text cell.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Returns true if this cell is absent.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// The text content, if present.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Absent => None,
        }
    }
}

/// One record's worth of fields, keyed by column name.
///
/// A key missing from the row means the field was never seen for this
/// record; a key mapped to [`Cell::Absent`] means the field was present but
/// carried no value. Renderers treat the two differently: a missing key
/// omits the output element entirely, an absent cell emits an empty one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    values: BTreeMap<String, Cell>,
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value. An existing value under the same key is replaced.
    pub fn set(&mut self, column: impl Into<String>, cell: Cell) {
        self.values.insert(column.into(), cell);
    }

    /// Get a field value by column name.
    pub fn get(&self, column: &str) -> Option<&Cell> {
        self.values.get(column)
    }

    /// Returns true if the row has a value (possibly absent) for `column`.
    pub fn contains(&self, column: &str) -> bool {
        self.values.contains_key(column)
    }

    /// Iterate over the row's column names.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Number of fields in the row.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the row has no fields.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// An ordered table: unique column names in first-seen order plus rows.
///
/// Invariant: every row's key set is a subset of the declared columns, and
/// the column list has no duplicates. Both are enforced by construction:
/// [`Table::add_column`] ignores duplicates and [`Table::add_row`] discards
/// keys that do not name a declared column.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Create an empty table with no columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table with the given columns, deduplicated in first-seen order.
    pub fn with_columns(columns: Vec<String>) -> Self {
        let mut table = Self::new();
        for column in columns {
            table.add_column(&column);
        }
        table
    }

    /// The declared column names, in first-seen order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The table rows, in input order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns true if `name` is a declared column.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Declare a column. Returns false if it was already declared.
    pub fn add_column(&mut self, name: &str) -> bool {
        if self.has_column(name) {
            return false;
        }
        self.columns.push(name.to_string());
        true
    }

    /// Append a row. Keys that do not name a declared column are discarded,
    /// preserving the row-subset invariant.
    pub fn add_row(&mut self, mut row: Row) {
        row.values
            .retain(|key, _| self.columns.iter().any(|c| c == key));
        self.rows.push(row);
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_absent_distinct_from_empty() {
        assert_ne!(Cell::Absent, Cell::text(""));
        assert!(Cell::Absent.is_absent());
        assert!(!Cell::text("").is_absent());
        assert_eq!(Cell::text("").as_text(), Some(""));
        assert_eq!(Cell::Absent.as_text(), None);
    }

    #[test]
    fn test_columns_deduplicate() {
        let table = Table::with_columns(vec![
            "a".to_string(),
            "b".to_string(),
            "a".to_string(),
            "c".to_string(),
        ]);
        assert_eq!(table.columns(), &["a", "b", "c"]);
    }

    #[test]
    fn test_add_column_returns_false_on_duplicate() {
        let mut table = Table::new();
        assert!(table.add_column("x"));
        assert!(!table.add_column("x"));
        assert_eq!(table.columns().len(), 1);
    }

    #[test]
    fn test_row_keys_subset_of_columns() {
        let mut table = Table::with_columns(vec!["a".to_string(), "b".to_string()]);
        let mut row = Row::new();
        row.set("a", Cell::text("1"));
        row.set("stray", Cell::text("2"));
        table.add_row(row);

        let stored = &table.rows()[0];
        assert!(stored.contains("a"));
        assert!(!stored.contains("stray"));
        for key in stored.keys() {
            assert!(table.has_column(key));
        }
    }

    #[test]
    fn test_missing_key_distinct_from_absent() {
        let mut table = Table::with_columns(vec!["a".to_string(), "b".to_string()]);
        let mut row = Row::new();
        row.set("a", Cell::Absent);
        table.add_row(row);

        let stored = &table.rows()[0];
        assert_eq!(stored.get("a"), Some(&Cell::Absent));
        assert_eq!(stored.get("b"), None);
        assert!(stored.contains("a"));
        assert!(!stored.contains("b"));
    }
}
