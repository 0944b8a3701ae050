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

//! End-to-end conversion: load, resolve the mapping, render.

use crate::error::{ConvertError, Result};
use remap_core::{FieldMapping, Format, MappingPolicy, Table, XmlTemplate};
use remap_csv::{from_csv, to_csv, FromCsvConfig, ToCsvConfig};
use remap_xml::{from_xml, to_xml, FromXmlConfig, ToXmlConfig};

/// Configuration for a single conversion.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Container format of the input bytes.
    pub input: Format,
    /// Container format to render.
    pub output: Format,
    /// How columns without a rename entry are handled.
    pub policy: MappingPolicy,
    /// Tag template for XML output. When the input is XML its own template
    /// is derived and used as a fallback; CSV input has none, so XML output
    /// from CSV requires this to be set.
    pub template: Option<XmlTemplate>,
}

/// The rendered result of a conversion.
#[derive(Debug, Clone)]
pub struct ConvertOutput {
    /// Rendered document bytes (always valid UTF-8).
    pub bytes: Vec<u8>,
    /// Format the bytes are in.
    pub format: Format,
}

impl ConvertOutput {
    /// Conventional file extension for the output format.
    pub fn extension(&self) -> &'static str {
        self.format.extension()
    }
}

/// Convert a document between container formats while remapping its fields.
///
/// The input is loaded into the shared tabular model, `raw_mapping` is
/// resolved against the loaded columns under the configured policy, and the
/// table is rendered in the output format. Raw entries pair a source column
/// with either a new name or the literal `"No mapping"` sentinel; entries
/// naming columns the input does not have are ignored.
///
/// Same-format conversions are supported and act as a pure remap.
///
/// # Errors
///
/// Fails when the input is not valid UTF-8, when the loader rejects the
/// document, or with [`ConvertError::MissingTemplate`] when XML output is
/// requested and no template is supplied or derivable.
///
/// # Examples
///
/// ```
/// use remap::{convert, ConvertConfig, Format, MappingPolicy};
///
/// let doc = "<people><person><name>Ann</name><age>30</age></person></people>";
/// let raw = vec![("age".to_string(), "YearsOld".to_string())];
/// let config = ConvertConfig {
///     input: Format::Xml,
///     output: Format::Csv,
///     policy: MappingPolicy::KeepOriginal,
///     template: None,
/// };
/// let output = convert(doc.as_bytes(), &raw, &config).unwrap();
/// assert_eq!(String::from_utf8(output.bytes).unwrap(), "name,YearsOld\nAnn,30\n");
/// ```
pub fn convert(
    input: &[u8],
    raw_mapping: &[(String, String)],
    config: &ConvertConfig,
) -> Result<ConvertOutput> {
    let text = std::str::from_utf8(input)?;

    let (table, derived) = load(text, config.input)?;
    tracing::debug!(
        format = %config.input,
        columns = table.columns().len(),
        rows = table.rows().len(),
        "loaded input"
    );

    let mapping = FieldMapping::resolve(table.columns(), raw_mapping, config.policy);
    tracing::debug!(
        entries = mapping.len(),
        outputs = mapping.output_columns().len(),
        "resolved field mapping"
    );

    let bytes = match config.output {
        Format::Csv => to_csv(&table, &mapping, &ToCsvConfig::default())?.into_bytes(),
        Format::Xml => {
            let template = config
                .template
                .clone()
                .or(derived)
                .ok_or(ConvertError::MissingTemplate)?;
            to_xml(&table, &mapping, &template, &ToXmlConfig::default())?.into_bytes()
        }
    };
    tracing::debug!(format = %config.output, bytes = bytes.len(), "rendered output");

    Ok(ConvertOutput {
        bytes,
        format: config.output,
    })
}

/// Resolve a file extension to a supported container format.
pub fn format_for_extension(ext: &str) -> Result<Format> {
    Format::from_extension(ext).ok_or_else(|| ConvertError::UnsupportedFormat(ext.to_string()))
}

fn load(text: &str, format: Format) -> Result<(Table, Option<XmlTemplate>)> {
    match format {
        Format::Csv => Ok((from_csv(text, &FromCsvConfig::default())?, None)),
        Format::Xml => {
            let (table, template) = from_xml(text, &FromXmlConfig::default())?;
            Ok((table, Some(template)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_for_extension() {
        assert_eq!(format_for_extension("csv").unwrap(), Format::Csv);
        assert_eq!(format_for_extension("XML").unwrap(), Format::Xml);
        let err = format_for_extension("txt").unwrap_err();
        assert!(matches!(err, ConvertError::UnsupportedFormat(ext) if ext == "txt"));
    }

    #[test]
    fn test_invalid_utf8_input() {
        let config = ConvertConfig {
            input: Format::Csv,
            output: Format::Csv,
            policy: MappingPolicy::KeepOriginal,
            template: None,
        };
        let err = convert(&[0xff, 0xfe], &[], &config).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidUtf8(_)));
    }
}
