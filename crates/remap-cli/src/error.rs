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

//! Structured error types for the remap CLI.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for remap CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// I/O operation failed (file read or write).
    #[error("I/O error for '{}': {message}", .path.display())]
    Io {
        /// The file path that caused the error.
        path: PathBuf,
        /// The error message.
        message: String,
    },

    /// The mapping file is not a flat JSON object of string/null values.
    #[error("Invalid mapping file '{}': {message}", .path.display())]
    Mapping {
        /// The mapping file path.
        path: PathBuf,
        /// Description of what is wrong with the file.
        message: String,
    },

    /// A file path has no extension, so its format cannot be inferred.
    #[error("Cannot infer format for '{}': no file extension", .path.display())]
    NoExtension {
        /// The path without an extension.
        path: PathBuf,
    },

    /// The conversion itself failed.
    #[error(transparent)]
    Convert(#[from] remap::ConvertError),
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a mapping file error.
    pub fn mapping(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Mapping {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = CliError::io_error(
            "in.csv",
            io::Error::new(io::ErrorKind::NotFound, "file not found"),
        );
        let msg = err.to_string();
        assert!(msg.contains("in.csv"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_mapping_error_display() {
        let err = CliError::mapping("map.json", "expected a JSON object");
        let msg = err.to_string();
        assert!(msg.contains("map.json"));
        assert!(msg.contains("expected a JSON object"));
    }

    #[test]
    fn test_convert_error_is_transparent() {
        let inner = remap::ConvertError::MissingTemplate;
        let expected = inner.to_string();
        let err = CliError::from(inner);
        assert_eq!(err.to_string(), expected);
    }
}
