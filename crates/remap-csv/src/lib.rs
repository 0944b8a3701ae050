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

//! Delimited-text (CSV) loading and rendering for remap.
//!
//! # Features
//!
//! - Load CSV into the tabular model, permissively: ragged rows are padded
//!   or truncated at the header width instead of aborting the load
//! - Render a table back to CSV under a field mapping, with standard
//!   quoting for embedded delimiters and newlines
//! - Configurable delimiter, trimming, header emission, and quote style
//!
//! # Examples
//!
//! ```
//! use remap_core::{FieldMapping, MappingPolicy};
//! use remap_csv::{from_csv, to_csv, FromCsvConfig, ToCsvConfig};
//!
//! let table = from_csv("name,age\nAnn,30\nBo,41\n", &FromCsvConfig::default()).unwrap();
//! assert_eq!(table.columns(), &["name", "age"]);
//!
//! let raw = vec![
//!     ("name".to_string(), "No mapping".to_string()),
//!     ("age".to_string(), "YearsOld".to_string()),
//! ];
//! let mapping = FieldMapping::resolve(table.columns(), &raw, MappingPolicy::DropUnmapped);
//! let out = to_csv(&table, &mapping, &ToCsvConfig::default()).unwrap();
//! assert_eq!(out, "YearsOld\n30\n41\n");
//! ```

mod error;
mod from_csv;
mod to_csv;

pub use error::{CsvError, Result};
pub use from_csv::{from_csv, from_csv_reader, FromCsvConfig, DEFAULT_MAX_ROWS};
pub use to_csv::{to_csv, to_csv_writer, ToCsvConfig};
