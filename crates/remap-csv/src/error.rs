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

//! Error types for CSV conversion operations.

use thiserror::Error;

/// CSV conversion error types.
///
/// Degenerate-but-expected inputs (ragged rows, empty fields) are handled
/// by policy and never produce an error; these variants cover genuinely
/// malformed input and output failures.
#[derive(Debug, Error)]
pub enum CsvError {
    /// CSV parsing failed at a specific line.
    #[error("CSV parse error at line {line}: {message}")]
    ParseError {
        /// Line number where the error occurred (1-based, 0 if unknown).
        line: u64,
        /// Detailed error message from the reader.
        message: String,
    },

    /// Input exceeded the configured row limit.
    #[error("CSV row count exceeded maximum (max: {max})")]
    TooManyRows {
        /// Maximum allowed number of data rows.
        max: usize,
    },

    /// CSV output could not be written.
    #[error("Failed to write {context}: {message}")]
    WriteError {
        /// Description of what failed to write.
        context: String,
        /// Underlying error message.
        message: String,
    },

    /// Output buffer was not valid UTF-8.
    #[error("Invalid UTF-8 in {context}")]
    InvalidUtf8 {
        /// Description of where the invalid data appeared.
        context: String,
    },
}

/// Convenience result alias for CSV operations.
pub type Result<T> = std::result::Result<T, CsvError>;

impl From<csv::Error> for CsvError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        CsvError::ParseError {
            line,
            message: err.to_string(),
        }
    }
}
