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

//! Error types for end-to-end conversion.

use thiserror::Error;

/// Errors from a full load-remap-render conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// CSV loading or rendering failed.
    #[error(transparent)]
    Csv(#[from] remap_csv::CsvError),

    /// XML loading or rendering failed.
    #[error(transparent)]
    Xml(#[from] remap_xml::XmlError),

    /// XML output was requested but no tag-naming template is available.
    ///
    /// A template is derived automatically when the input is XML; for
    /// CSV input the caller must supply one.
    #[error("XML output requires a tag template; none was supplied or derivable")]
    MissingTemplate,

    /// The requested container format is not supported.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The input bytes were not valid UTF-8.
    #[error("Input is not valid UTF-8")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

/// Convenience result alias for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_template_display() {
        let err = ConvertError::MissingTemplate;
        assert!(err.to_string().contains("template"));
    }

    #[test]
    fn test_unsupported_format_display() {
        let err = ConvertError::UnsupportedFormat("txt".to_string());
        assert_eq!(err.to_string(), "Unsupported format: txt");
    }

    #[test]
    fn test_csv_error_is_transparent() {
        let inner = remap_csv::CsvError::TooManyRows { max: 10 };
        let expected = inner.to_string();
        let err = ConvertError::from(inner);
        assert_eq!(err.to_string(), expected);
    }
}
