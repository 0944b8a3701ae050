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

//! Error types for XML conversion operations.

use thiserror::Error;

/// XML conversion error types.
#[derive(Debug, Error)]
pub enum XmlError {
    /// XML parsing failed due to malformed syntax.
    ///
    /// Carries the byte offset reported by the parser; the loader does not
    /// attempt partial recovery.
    #[error("XML parse error at position {pos}: {message}")]
    ParseError {
        /// Byte offset in the document where the error occurred.
        pos: usize,
        /// Description of the parsing error.
        message: String,
    },

    /// The document contains no root element.
    #[error("XML document has no root element")]
    NoRoot,

    /// Record count limit exceeded while loading.
    ///
    /// Guards against memory exhaustion from documents with millions of
    /// repeated record elements.
    #[error("XML record count exceeded maximum (max: {max})")]
    TooManyRecords {
        /// Maximum allowed number of records.
        max: usize,
    },

    /// Text length limit exceeded while loading.
    #[error("XML text length exceeded maximum (max: {max})")]
    TextTooLong {
        /// Maximum allowed text length in bytes.
        max: usize,
    },

    /// XML output could not be written.
    #[error("Failed to write {context}: {message}")]
    WriteError {
        /// Description of what failed to write.
        context: String,
        /// Underlying error message.
        message: String,
    },

    /// Output buffer was not valid UTF-8.
    #[error("Invalid UTF-8 in XML output")]
    InvalidUtf8,
}

/// Convenience result alias for XML operations.
pub type Result<T> = std::result::Result<T, XmlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = XmlError::ParseError {
            pos: 42,
            message: "unexpected end of file".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "XML parse error at position 42: unexpected end of file"
        );
    }

    #[test]
    fn test_too_many_records_display() {
        let err = XmlError::TooManyRecords { max: 100 };
        assert_eq!(
            err.to_string(),
            "XML record count exceeded maximum (max: 100)"
        );
    }

    #[test]
    fn test_error_trait() {
        let err = XmlError::NoRoot;
        let _: &dyn std::error::Error = &err;
    }
}
