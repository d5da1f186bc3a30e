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

//! The schema-driven input builder engine.
//!
//! The generated request types in this repository do not each carry their
//! own marshalling code. Every operation is described by a static
//! [OperationSchema] table, and the [Input] engine in this module does the
//! work for all of them: it stores field values, validates the required
//! ones, and marshals the result into a transport-ready
//! [Request][crate::request::Request].
//!
//! Fields are sparse. An unset field is omitted from the serialized body
//! entirely, which is not the same as a field explicitly set to an empty
//! value; both states are preserved, and only unset required fields fail
//! validation.
//!
//! An `Input` is owned by a single call. Mutating it concurrently with
//! `build()` is not supported; treat it as single-writer for the duration
//! of a build.

use crate::error::{Error, RequiredFieldError};
use crate::path_template::{self, Segment};
use crate::request::Request;
use crate::schema::{CONTENT_TYPE, FieldKind, FieldLocation, OperationSchema, TARGET_HEADER};
use serde_json::Value;

/// Field storage and marshalling for one operation input.
///
/// Generated request types wrap an `Input` and delegate to it; the typed
/// setters and getters they expose are thin shims over [set][Input::set],
/// [clear][Input::clear], and the `get_*` accessors here.
#[derive(Clone, Debug, PartialEq)]
pub struct Input {
    schema: &'static OperationSchema,
    region: Option<String>,
    values: Vec<Option<Value>>,
}

impl Input {
    /// Creates an empty input for `schema`.
    pub fn new(schema: &'static OperationSchema) -> Self {
        Self {
            schema,
            region: None,
            values: vec![None; schema.fields.len()],
        }
    }

    /// Creates an input from a loosely-typed configuration bag.
    ///
    /// Recognized keys (by wire name) populate the corresponding field and
    /// the `@region` key populates the region override. Unknown keys are
    /// ignored, as is a bag that is not a JSON object. An explicit JSON
    /// `null` leaves the field unset.
    pub fn from_config(schema: &'static OperationSchema, config: Value) -> Self {
        let mut input = Self::new(schema);
        let Value::Object(mut bag) = config else {
            return input;
        };
        if let Some(Value::String(region)) = bag.remove("@region") {
            input.region = Some(region);
        }
        for (i, field) in schema.fields.iter().enumerate() {
            match bag.remove(field.wire_name) {
                None | Some(Value::Null) => {}
                Some(value) => input.values[i] = Some(value),
            }
        }
        input
    }

    /// The schema this input marshals against.
    pub fn schema(&self) -> &'static OperationSchema {
        self.schema
    }

    /// The region override, if one was supplied.
    ///
    /// The region does not participate in marshalling; endpoint selection
    /// belongs to the transport that executes the request.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn set_region(&mut self, region: Option<String>) {
        self.region = region;
    }

    /// Sets the field `name` (the schema name, not the wire name).
    ///
    /// Setting a name the schema does not declare is a no-op; the
    /// generated shims only pass declared names.
    pub fn set<T: Into<Value>>(&mut self, name: &str, value: T) {
        if let Some(i) = self.schema.index_of(name) {
            self.values[i] = Some(value.into());
        }
    }

    /// Unsets the field `name`, removing it from the serialized output.
    pub fn clear(&mut self, name: &str) {
        if let Some(i) = self.schema.index_of(name) {
            self.values[i] = None;
        }
    }

    /// The raw value of the field `name`, if set.
    pub fn get(&self, name: &str) -> Option<&Value> {
        let i = self.schema.index_of(name)?;
        self.values[i].as_ref()
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Value::as_bool)
    }

    pub fn get_i64(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Value::as_i64)
    }

    /// Validates the input and marshals it into a transport-ready request.
    ///
    /// Assembles, in order: the headers (content type and operation
    /// target), the query parameters, the URI path, and the JSON body.
    /// Fields serialize in declaration order; unset optional fields are
    /// omitted; an unset required field fails the build with a
    /// [validation error][Error::validation] before any descriptor exists.
    /// When no body field is set the body is the literal `{}`, never
    /// empty.
    pub fn build(&self) -> crate::Result<Request> {
        for (i, field) in self.schema.fields.iter().enumerate() {
            if field.required && self.values[i].is_none() {
                return Err(Error::validation(RequiredFieldError {
                    field: field.wire_name,
                    input: self.schema.input,
                }));
            }
        }

        let mut headers = http::HeaderMap::new();
        headers.insert(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static(CONTENT_TYPE),
        );
        headers.insert(
            TARGET_HEADER,
            http::HeaderValue::from_str(&self.schema.target()).map_err(Error::ser)?,
        );

        let mut query = Vec::new();
        for (i, field) in self.schema.fields.iter().enumerate() {
            if field.location != FieldLocation::Query {
                continue;
            }
            if let Some(value) = &self.values[i] {
                query.push((field.wire_name.to_string(), render(value)));
            }
        }

        let path = self.expand_path()?;

        let mut payload = serde_json::Map::new();
        for (i, field) in self.schema.fields.iter().enumerate() {
            if field.location != FieldLocation::Body {
                continue;
            }
            if let Some(value) = &self.values[i] {
                payload.insert(field.wire_name.to_string(), coerce(field.kind, value));
            }
        }
        let body = if payload.is_empty() {
            bytes::Bytes::from_static(b"{}")
        } else {
            serde_json::to_vec(&Value::Object(payload))
                .map(bytes::Bytes::from)
                .map_err(Error::ser)?
        };

        Ok(Request::new(
            self.schema.method.clone(),
            path,
            query,
            headers,
            body,
        ))
    }

    fn expand_path(&self) -> crate::Result<String> {
        let mut path = String::new();
        for segment in path_template::segments(self.schema.path) {
            match segment {
                Segment::Literal(text) => path.push_str(text),
                Segment::Variable(wire_name) => {
                    let value = self
                        .schema
                        .index_of_wire(wire_name)
                        .and_then(|i| self.values[i].as_ref());
                    let Some(value) = value else {
                        return Err(Error::validation(RequiredFieldError {
                            field: wire_name,
                            input: self.schema.input,
                        }));
                    };
                    path.push_str(&path_template::encode(&render(value)));
                }
            }
        }
        Ok(path)
    }
}

/// Coerces a stored value per its field kind before serialization.
///
/// Booleans are coerced explicitly so a stringly-typed configuration bag
/// still serializes a true JSON boolean; the cast follows the truthiness
/// the services' existing clients use (`""`, `"0"`, `0`, `false`, and
/// empty arrays are false).
fn coerce(kind: FieldKind, value: &Value) -> Value {
    match kind {
        FieldKind::Boolean => Value::Bool(truthy(value)),
        _ => value.clone(),
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => !(s.is_empty() || s == "0"),
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::Array(a) => !a.is_empty(),
        Value::Object(_) => true,
        Value::Null => false,
    }
}

/// Renders a value for a query parameter or path segment.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
