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

//! Tag-naming template captured from a source XML document.

/// The tag-naming convention (root and record tag) borrowed from a prior
/// XML document, used to re-encode row data as XML.
///
/// A template carries names only; it holds no data and is never mutated.
/// Without one there is no way to synthesize tag names for XML output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlTemplate {
    /// Tag name of the document root element.
    pub root_tag: String,
    /// Tag name used for each record element under the root.
    pub record_tag: String,
}

impl XmlTemplate {
    /// Record tag used when the template document's root has no children.
    pub const DEFAULT_RECORD_TAG: &'static str = "record";

    /// Create a template from explicit tag names.
    pub fn new(root_tag: impl Into<String>, record_tag: impl Into<String>) -> Self {
        Self {
            root_tag: root_tag.into(),
            record_tag: record_tag.into(),
        }
    }

    /// Create a template with the default record tag.
    pub fn with_default_record_tag(root_tag: impl Into<String>) -> Self {
        Self::new(root_tag, Self::DEFAULT_RECORD_TAG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let template = XmlTemplate::new("people", "person");
        assert_eq!(template.root_tag, "people");
        assert_eq!(template.record_tag, "person");
    }

    #[test]
    fn test_default_record_tag() {
        let template = XmlTemplate::with_default_record_tag("data");
        assert_eq!(template.record_tag, "record");
    }
}
