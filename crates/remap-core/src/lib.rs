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

//! Core data model for remap.
//!
//! This crate defines the format-independent pieces shared by every
//! converter: the tabular in-memory model ([`Table`], [`Row`], [`Cell`]),
//! the field-rename mapping ([`FieldMapping`], [`MappingPolicy`]), the
//! container format selector ([`Format`]), and the tag-naming template
//! captured from XML input ([`XmlTemplate`]).
//!
//! The model is deliberately small and loosely typed: every field is either
//! present text or absent, nothing else. Absence is a first-class state,
//! distinct from the empty string, so that an XML element with no text
//! content survives a round trip as exactly that.
//!
//! # Examples
//!
//! ```
//! use remap_core::{Cell, FieldMapping, MappingPolicy, Row, Table};
//!
//! let mut table = Table::with_columns(vec!["name".to_string(), "age".to_string()]);
//! let mut row = Row::new();
//! row.set("name", Cell::text("Ann"));
//! row.set("age", Cell::text("30"));
//! table.add_row(row);
//!
//! let raw = vec![("name".to_string(), "full_name".to_string())];
//! let mapping = FieldMapping::resolve(table.columns(), &raw, MappingPolicy::DropUnmapped);
//! assert_eq!(mapping.output_columns(), vec!["full_name"]);
//! ```

mod format;
mod mapping;
mod table;
mod template;

pub use format::Format;
pub use mapping::{FieldMapping, MapTarget, MappingPolicy, NO_MAPPING};
pub use table::{Cell, Row, Table};
pub use template::XmlTemplate;
