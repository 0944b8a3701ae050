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

//! Two-level XML loading and rendering for remap.
//!
//! The XML subset handled here is exactly two levels deep: a container
//! root, repeated record elements, and text-only field elements. Attributes
//! and namespaces are not consumed; markup nested below the field level is
//! ignored.
//!
//! # Features
//!
//! - Infer a tabular shape from an arbitrary two-level document
//!   (multi-record vs. single-record detection)
//! - Capture the document's tag-naming convention as an [`XmlTemplate`]
//!   for later re-encoding
//! - Render a table back to XML under a field mapping, preserving the
//!   template's root and record tags, with five-entity escaping and
//!   two-space indentation
//!
//! # Examples
//!
//! ```
//! use remap_core::FieldMapping;
//! use remap_xml::{from_xml, to_xml, FromXmlConfig, ToXmlConfig};
//!
//! let doc = "<people><person><name>Ann</name><age>30</age></person></people>";
//! let (table, template) = from_xml(doc, &FromXmlConfig::default()).unwrap();
//! assert_eq!(table.columns(), &["name", "age"]);
//! assert_eq!(template.root_tag, "people");
//!
//! let mapping = FieldMapping::identity(table.columns());
//! let xml = to_xml(&table, &mapping, &template, &ToXmlConfig::default()).unwrap();
//! assert!(xml.contains("<name>Ann</name>"));
//! ```

mod error;
mod from_xml;
mod to_xml;

pub use error::{Result, XmlError};
pub use from_xml::{extract_template, from_xml, FromXmlConfig};
pub use to_xml::{to_xml, ToXmlConfig};

// Re-exported so callers of this crate alone can name the template type.
pub use remap_core::XmlTemplate;
