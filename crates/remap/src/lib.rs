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

//! Remap: tabular field remapping and container conversion.
//!
//! Loads CSV or two-level XML into a shared tabular model, applies a
//! column rename mapping, and renders the result in either format. The
//! four conversion directions (including same-format pure remaps) all go
//! through one [`convert`] entry point.
//!
//! # Quick start
//!
//! ```
//! use remap::{convert, ConvertConfig, Format, MappingPolicy};
//!
//! let doc = "<people>\
//!     <person><name>Ann</name><age>30</age></person>\
//!     <person><name>Bo</name><age>41</age></person>\
//! </people>";
//! let mapping = vec![
//!     ("name".to_string(), "name".to_string()),
//!     ("age".to_string(), "age".to_string()),
//! ];
//! let config = ConvertConfig {
//!     input: Format::Xml,
//!     output: Format::Csv,
//!     policy: MappingPolicy::DropUnmapped,
//!     template: None,
//! };
//! let output = convert(doc.as_bytes(), &mapping, &config).unwrap();
//! assert_eq!(String::from_utf8(output.bytes).unwrap(), "name,age\nAnn,30\nBo,41\n");
//! ```
//!
//! # Crate layout
//!
//! This crate is a facade over the per-concern crates:
//!
//! - `remap-core`: the tabular model, mapping resolution, format and
//!   template types
//! - `remap-csv`: CSV loading and rendering
//! - `remap-xml`: two-level XML loading and rendering
//!
//! All public types of those crates are re-exported here.

mod convert;
mod error;

pub use convert::{convert, format_for_extension, ConvertConfig, ConvertOutput};
pub use error::{ConvertError, Result};

pub use remap_core::{
    Cell, FieldMapping, Format, MapTarget, MappingPolicy, Row, Table, XmlTemplate, NO_MAPPING,
};
pub use remap_csv::{
    from_csv, to_csv, CsvError, FromCsvConfig, ToCsvConfig, DEFAULT_MAX_ROWS,
};
pub use remap_xml::{
    extract_template, from_xml, to_xml, FromXmlConfig, ToXmlConfig, XmlError,
};
