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

//! End-to-end conversion scenarios across all four direction pairs.

use remap::{
    convert, ConvertConfig, ConvertError, Format, MappingPolicy, XmlTemplate, NO_MAPPING,
};

const PEOPLE_XML: &str = "<people>\
    <person><name>Ann</name><age>30</age></person>\
    <person><name>Bo</name><age>41</age></person>\
</people>";

fn pairs(entries: &[(&str, &str)]) -> Vec<(String, String)> {
    entries
        .iter()
        .map(|(s, t)| (s.to_string(), t.to_string()))
        .collect()
}

fn config(input: Format, output: Format) -> ConvertConfig {
    ConvertConfig {
        input,
        output,
        policy: MappingPolicy::DropUnmapped,
        template: None,
    }
}

fn as_string(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap()
}

#[test]
fn xml_to_csv_identity() {
    let raw = pairs(&[("name", "name"), ("age", "age")]);
    let output = convert(
        PEOPLE_XML.as_bytes(),
        &raw,
        &config(Format::Xml, Format::Csv),
    )
    .unwrap();
    assert_eq!(output.format, Format::Csv);
    assert_eq!(output.extension(), "csv");
    assert_eq!(as_string(output.bytes), "name,age\nAnn,30\nBo,41\n");
}

#[test]
fn xml_to_csv_drops_unmapped_column() {
    let raw = pairs(&[("name", NO_MAPPING), ("age", "YearsOld")]);
    let output = convert(
        PEOPLE_XML.as_bytes(),
        &raw,
        &config(Format::Xml, Format::Csv),
    )
    .unwrap();
    assert_eq!(as_string(output.bytes), "YearsOld\n30\n41\n");
}

#[test]
fn xml_to_csv_keep_original_policy() {
    let raw = pairs(&[("age", "YearsOld")]);
    let mut config = config(Format::Xml, Format::Csv);
    config.policy = MappingPolicy::KeepOriginal;
    let output = convert(PEOPLE_XML.as_bytes(), &raw, &config).unwrap();
    assert_eq!(as_string(output.bytes), "name,YearsOld\nAnn,30\nBo,41\n");
}

#[test]
fn csv_to_xml_requires_template() {
    let raw = pairs(&[("name", "name")]);
    let err = convert(
        b"name\nAnn\n",
        &raw,
        &config(Format::Csv, Format::Xml),
    )
    .unwrap_err();
    assert!(matches!(err, ConvertError::MissingTemplate));
}

#[test]
fn csv_to_xml_with_template() {
    let raw = pairs(&[("name", "name"), ("age", "age")]);
    let mut config = config(Format::Csv, Format::Xml);
    config.template = Some(XmlTemplate::new("people", "person"));
    let output = convert(b"name,age\nAnn,30\nBo,41\n", &raw, &config).unwrap();
    let xml = as_string(output.bytes);
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains("<person>"));
    assert!(xml.contains("<name>Ann</name>"));
    assert!(xml.contains("<age>41</age>"));
    assert!(xml.ends_with("</people>\n"));
}

#[test]
fn xml_to_xml_reuses_derived_template() {
    let raw = pairs(&[("name", "full_name"), ("age", "age")]);
    let output = convert(
        PEOPLE_XML.as_bytes(),
        &raw,
        &config(Format::Xml, Format::Xml),
    )
    .unwrap();
    let xml = as_string(output.bytes);
    assert!(xml.contains("<people>"));
    assert!(xml.contains("<person>"));
    assert!(xml.contains("<full_name>Ann</full_name>"));
}

#[test]
fn xml_to_xml_explicit_template_wins_over_derived() {
    let raw = pairs(&[("name", "name"), ("age", "age")]);
    let mut config = config(Format::Xml, Format::Xml);
    config.template = Some(XmlTemplate::new("staff", "member"));
    let output = convert(PEOPLE_XML.as_bytes(), &raw, &config).unwrap();
    let xml = as_string(output.bytes);
    assert!(xml.contains("<staff>"));
    assert!(xml.contains("<member>"));
    assert!(!xml.contains("<people>"));
}

#[test]
fn csv_to_csv_is_a_pure_remap() {
    let raw = pairs(&[("a", "x"), ("b", NO_MAPPING)]);
    let output = convert(
        b"a,b\n1,2\n3,4\n",
        &raw,
        &config(Format::Csv, Format::Csv),
    )
    .unwrap();
    assert_eq!(as_string(output.bytes), "x\n1\n3\n");
}

#[test]
fn single_record_xml_to_csv() {
    let doc = "<person><name>Ann</name><age>30</age></person>";
    let raw = pairs(&[("name", "name"), ("age", "age")]);
    let output = convert(doc.as_bytes(), &raw, &config(Format::Xml, Format::Csv)).unwrap();
    assert_eq!(as_string(output.bytes), "name,age\nAnn,30\n");
}

#[test]
fn ragged_csv_to_xml_pads_missing_fields() {
    let raw = pairs(&[("a", "a"), ("b", "b")]);
    let mut config = config(Format::Csv, Format::Xml);
    config.template = Some(XmlTemplate::new("rows", "row"));
    let output = convert(b"a,b\n1\n", &raw, &config).unwrap();
    let xml = as_string(output.bytes);
    assert!(xml.contains("<a>1</a>"));
    // The short row's second field is absent, not dropped.
    assert!(xml.contains("<b/>"));
}

#[test]
fn csv_round_trip_through_xml() {
    let csv = "name,age\nAnn,30\nBo,41\n";
    let raw = pairs(&[("name", "name"), ("age", "age")]);

    let mut to_xml = config(Format::Csv, Format::Xml);
    to_xml.template = Some(XmlTemplate::new("people", "person"));
    let xml = convert(csv.as_bytes(), &raw, &to_xml).unwrap();

    let back = convert(&xml.bytes, &raw, &config(Format::Xml, Format::Csv)).unwrap();
    assert_eq!(as_string(back.bytes), csv);
}

#[test]
fn malformed_xml_surfaces_parse_error() {
    let doc = "<people><person><name>Ann</age></person></people>";
    let err = convert(doc.as_bytes(), &[], &config(Format::Xml, Format::Csv)).unwrap_err();
    assert!(matches!(err, ConvertError::Xml(_)));
}
