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

//! Property tests: rendering a table to XML under an identity mapping and
//! loading it back preserves every (row, field, value) triple.

use proptest::prelude::*;
use remap_core::{Cell, FieldMapping, Row, Table, XmlTemplate};
use remap_xml::{from_xml, to_xml, FromXmlConfig, ToXmlConfig};

/// Tables with 1-4 unique columns and 1-4 full rows. Values carry the five
/// escapable characters but no whitespace, which the loader would trim.
fn table_strategy() -> impl Strategy<Value = Table> {
    proptest::collection::hash_set("[a-z]{1,8}", 1..5).prop_flat_map(|cols| {
        let cols: Vec<String> = cols.into_iter().collect();
        let ncols = cols.len();
        proptest::collection::vec(
            proptest::collection::vec(
                proptest::option::of("[a-zA-Z0-9&<>'\"]{1,12}"),
                ncols..=ncols,
            ),
            1..5,
        )
        .prop_map(move |rows| {
            let mut table = Table::with_columns(cols.clone());
            for values in rows {
                let mut row = Row::new();
                for (col, value) in cols.iter().zip(values) {
                    let cell = match value {
                        Some(text) => Cell::Text(text),
                        None => Cell::Absent,
                    };
                    row.set(col, cell);
                }
                table.add_row(row);
            }
            table
        })
    })
}

proptest! {
    #[test]
    fn render_then_load_preserves_triples(table in table_strategy()) {
        let mapping = FieldMapping::identity(table.columns());
        let template = XmlTemplate::new("rows", "row");

        let xml = to_xml(&table, &mapping, &template, &ToXmlConfig::default()).unwrap();
        let (reloaded, derived) = from_xml(&xml, &FromXmlConfig::default()).unwrap();

        prop_assert_eq!(reloaded.columns(), table.columns());
        prop_assert_eq!(reloaded.rows().len(), table.rows().len());
        prop_assert_eq!(&derived, &template);

        for (original, loaded) in table.rows().iter().zip(reloaded.rows()) {
            for col in table.columns() {
                prop_assert_eq!(loaded.get(col), original.get(col));
            }
        }
    }

    #[test]
    fn render_is_deterministic(table in table_strategy()) {
        let mapping = FieldMapping::identity(table.columns());
        let template = XmlTemplate::new("rows", "row");

        let first = to_xml(&table, &mapping, &template, &ToXmlConfig::default()).unwrap();
        let second = to_xml(&table, &mapping, &template, &ToXmlConfig::default()).unwrap();
        prop_assert_eq!(first, second);
    }
}
