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

/// A required field was not set when an operation input was built.
///
/// Building an input validates every field the operation declares as
/// required before anything is serialized. The first unset required field
/// stops the build; no partial request is ever produced.
///
/// The error names both the offending field (by its wire name) and the
/// input type it belongs to, so the failing call site can be found without
/// a debugger.
#[derive(thiserror::Error, Debug, PartialEq)]
#[error("missing required field `{field}` for `{input}`, the value cannot be unset")]
pub struct RequiredFieldError {
    /// The wire name of the unset field.
    pub field: &'static str,
    /// The input type the field belongs to.
    pub input: &'static str,
}
