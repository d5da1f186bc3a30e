// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Decompose URI path templates into literal and variable segments.
//!
//! Most JSON protocol operations use the literal path `/`, but services
//! that embed identifiers in the URI declare paths such as
//! `/secret/{SecretId}`. The input engine walks the decomposed template and
//! substitutes percent-encoded field values for the variables.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters escaped when a field value is substituted into a path
/// segment. The set matches what services accept inside one segment:
/// everything that would terminate or restructure the path is encoded.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// One piece of a decomposed path template.
#[derive(Debug, PartialEq)]
pub(crate) enum Segment<'t> {
    /// Literal text copied to the output verbatim.
    Literal(&'t str),
    /// A `{WireName}` placeholder filled from the input's fields.
    Variable(&'t str),
}

/// Splits `template` into literal and variable segments.
///
/// An unterminated `{` is treated as literal text; the generator never
/// produces one, and treating it leniently keeps expansion total.
pub(crate) fn segments(template: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut remains = template;
    while let Some(open) = remains.find('{') {
        let Some(close) = remains[open..].find('}') else {
            break;
        };
        if open > 0 {
            out.push(Segment::Literal(&remains[..open]));
        }
        out.push(Segment::Variable(&remains[open + 1..open + close]));
        remains = &remains[open + close + 1..];
    }
    if !remains.is_empty() {
        out.push(Segment::Literal(remains));
    }
    out
}

/// Percent-encodes a field value for use as a path segment.
pub(crate) fn encode(value: &str) -> String {
    utf8_percent_encode(value, SEGMENT).to_string()
}
