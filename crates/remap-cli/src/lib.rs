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

//! Command-line interface for remap.
//!
//! Reads an input document and a JSON mapping file, converts between CSV
//! and XML containers while renaming fields, and writes the result.
//!
//! The mapping file is a flat JSON object from source field name to new
//! name, with `null` (or the literal string `"No mapping"`) declaring a
//! field unmapped:
//!
//! ```json
//! { "name": "full_name", "age": "years", "ssn": null }
//! ```

pub mod error;

use clap::{Parser, ValueEnum};
use remap::{
    convert, extract_template, format_for_extension, ConvertConfig, Format, MappingPolicy,
    NO_MAPPING,
};
use std::fs;
use std::path::{Path, PathBuf};

pub use error::CliError;

/// Convert tabular data between CSV and XML while remapping field names.
#[derive(Debug, Parser)]
#[command(name = "remap")]
#[command(author, version, about = "Convert tabular data between CSV and XML while remapping field names", long_about = None)]
pub struct Cli {
    /// Input document (.csv or .xml).
    pub input: PathBuf,

    /// JSON mapping file: an object from source field name to new name,
    /// with null marking a field as unmapped.
    pub mapping: PathBuf,

    /// Output file; its extension selects the output format unless --to is
    /// given.
    pub output: PathBuf,

    /// Output format, overriding the output file extension.
    #[arg(long, value_enum)]
    pub to: Option<FormatArg>,

    /// Keep unmapped fields under their original names instead of dropping
    /// them.
    #[arg(long)]
    pub keep_unmapped: bool,

    /// XML document whose root and record tags name the output elements.
    /// Required for XML output from CSV input.
    #[arg(long)]
    pub template: Option<PathBuf>,
}

/// Output format flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Comma-separated values.
    Csv,
    /// Two-level XML.
    Xml,
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => Format::Csv,
            FormatArg::Xml => Format::Xml,
        }
    }
}

/// Execute the CLI: load inputs, convert, write the output file.
pub fn run(cli: &Cli) -> Result<(), CliError> {
    let input_format = format_from_path(&cli.input)?;
    let output_format = match cli.to {
        Some(arg) => arg.into(),
        None => format_from_path(&cli.output)?,
    };

    let input = fs::read(&cli.input).map_err(|e| CliError::io_error(&cli.input, e))?;
    let raw_mapping = read_mapping(&cli.mapping)?;

    let template = match &cli.template {
        Some(path) => {
            let text =
                fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))?;
            Some(extract_template(&text).map_err(remap::ConvertError::from)?)
        }
        None => None,
    };

    let policy = if cli.keep_unmapped {
        MappingPolicy::KeepOriginal
    } else {
        MappingPolicy::DropUnmapped
    };

    let config = ConvertConfig {
        input: input_format,
        output: output_format,
        policy,
        template,
    };
    tracing::debug!(
        input = %config.input,
        output = %config.output,
        entries = raw_mapping.len(),
        "starting conversion"
    );

    let result = convert(&input, &raw_mapping, &config)?;
    fs::write(&cli.output, &result.bytes).map_err(|e| CliError::io_error(&cli.output, e))?;

    Ok(())
}

/// Infer a container format from a path's extension.
fn format_from_path(path: &Path) -> Result<Format, CliError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| CliError::NoExtension {
            path: path.to_path_buf(),
        })?;
    Ok(format_for_extension(ext)?)
}

/// Read the mapping file: a flat JSON object where each value is a string
/// (the new name) or null (unmapped). Entry order does not matter;
/// resolution follows the input's column order.
fn read_mapping(path: &Path) -> Result<Vec<(String, String)>, CliError> {
    let text = fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .map_err(|e| CliError::mapping(path, e.to_string()))?;

    let object = value
        .as_object()
        .ok_or_else(|| CliError::mapping(path, "expected a JSON object"))?;

    let mut pairs = Vec::with_capacity(object.len());
    for (source, target) in object {
        let target = match target {
            serde_json::Value::String(name) => name.clone(),
            serde_json::Value::Null => NO_MAPPING.to_string(),
            other => {
                return Err(CliError::mapping(
                    path,
                    format!("value for '{}' must be a string or null, got {}", source, other),
                ));
            }
        };
        pairs.push((source.clone(), target));
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(format_from_path(Path::new("a.csv")).unwrap(), Format::Csv);
        assert_eq!(format_from_path(Path::new("b.XML")).unwrap(), Format::Xml);
        assert!(matches!(
            format_from_path(Path::new("noext")),
            Err(CliError::NoExtension { .. })
        ));
        assert!(matches!(
            format_from_path(Path::new("c.txt")),
            Err(CliError::Convert(_))
        ));
    }

    #[test]
    fn test_read_mapping() {
        let file = write_temp(r#"{"name": "full_name", "ssn": null}"#);
        let pairs = read_mapping(file.path()).unwrap();
        assert!(pairs.contains(&("name".to_string(), "full_name".to_string())));
        assert!(pairs.contains(&("ssn".to_string(), NO_MAPPING.to_string())));
    }

    #[test]
    fn test_read_mapping_rejects_non_object() {
        let file = write_temp(r#"["name"]"#);
        let err = read_mapping(file.path()).unwrap_err();
        assert!(matches!(err, CliError::Mapping { .. }));
    }

    #[test]
    fn test_read_mapping_rejects_non_string_value() {
        let file = write_temp(r#"{"age": 7}"#);
        let err = read_mapping(file.path()).unwrap_err();
        assert!(err.to_string().contains("age"));
    }
}
