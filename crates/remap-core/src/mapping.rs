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

//! Field rename mapping: resolution against a table's columns.
//!
//! Callers declare a raw mapping as ordered `(source, target)` pairs, with
//! the literal [`NO_MAPPING`] sentinel marking a field as unmapped.
//! [`FieldMapping::resolve`] normalizes that against the loaded table's
//! columns under an explicit [`MappingPolicy`]; the policy is a required
//! parameter, since both treatments of a missing entry (drop the column,
//! or keep it under its original name) are legitimate caller intents.
//!
//! Resolution never fails: unknown target names are accepted as-is and only
//! take effect at render time if they happen to match a produced column.

/// Sentinel target value declaring a field as unmapped.
pub const NO_MAPPING: &str = "No mapping";

/// How columns without an explicit mapping entry are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingPolicy {
    /// Columns without an entry (or mapped to [`NO_MAPPING`]) are dropped
    /// from the output; their data is not carried forward.
    DropUnmapped,
    /// Columns without an entry (or mapped to [`NO_MAPPING`]) keep their
    /// original name.
    KeepOriginal,
}

/// Where a source column's data goes in the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapTarget {
    /// The column is excluded from the output.
    Drop,
    /// The column is emitted under the given name (possibly its own).
    Rename(String),
}

/// An ordered mapping from source column name to output target.
///
/// Entry order is the table's column order; renderers that emit fields "in
/// mapping order" therefore follow the input column order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldMapping {
    entries: Vec<(String, MapTarget)>,
}

impl FieldMapping {
    /// Resolve a raw mapping against a table's columns.
    ///
    /// For every column, the first raw pair whose source matches supplies
    /// the target; the [`NO_MAPPING`] sentinel and missing entries fall back
    /// to the policy. Raw pairs whose source is not a column are ignored.
    pub fn resolve(
        columns: &[String],
        raw: &[(String, String)],
        policy: MappingPolicy,
    ) -> Self {
        let mut entries = Vec::with_capacity(columns.len());
        for column in columns {
            let declared = raw
                .iter()
                .find(|(source, _)| source == column)
                .map(|(_, target)| target.as_str());
            let target = match declared {
                Some(target) if target != NO_MAPPING => MapTarget::Rename(target.to_string()),
                _ => match policy {
                    MappingPolicy::DropUnmapped => MapTarget::Drop,
                    MappingPolicy::KeepOriginal => MapTarget::Rename(column.clone()),
                },
            };
            entries.push((column.clone(), target));
        }
        Self { entries }
    }

    /// A mapping that keeps every column under its own name.
    pub fn identity(columns: &[String]) -> Self {
        Self {
            entries: columns
                .iter()
                .map(|c| (c.clone(), MapTarget::Rename(c.clone())))
                .collect(),
        }
    }

    /// Iterate over `(source, target)` entries in declared order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &MapTarget)> {
        self.entries
            .iter()
            .map(|(source, target)| (source.as_str(), target))
    }

    /// The target for a source column, if the mapping has an entry for it.
    pub fn target_of(&self, source: &str) -> Option<&MapTarget> {
        self.entries
            .iter()
            .find(|(s, _)| s == source)
            .map(|(_, target)| target)
    }

    /// Post-rename column names, in declared order. Dropped entries
    /// contribute nothing.
    pub fn output_columns(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|(_, target)| match target {
                MapTarget::Rename(name) => Some(name.as_str()),
                MapTarget::Drop => None,
            })
            .collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the mapping has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
