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

//! Static descriptor tables for operations and their fields.
//!
//! The AWS JSON protocol gives every operation in a service the same HTTP
//! method and path; the receiving service dispatches on a target header
//! instead. That uniformity means an operation is fully described by a
//! small table: its service and operation names, its method and path, and
//! the list of fields it accepts. The generated crates declare one static
//! [OperationSchema] per operation and hand it to the
//! [Input][crate::input::Input] engine, which does the rest.

/// The wire format used by all operations in this repository.
pub const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

/// The header carrying the operation target, `<service>.<Operation>`.
pub const TARGET_HEADER: &str = "x-amz-target";

/// The semantic type of a field.
///
/// The kind decides how a loosely-typed value is coerced before it is
/// serialized. Today only [Boolean][FieldKind::Boolean] triggers a
/// coercion; the other kinds serialize the stored value as-is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum FieldKind {
    String,
    Boolean,
    Integer,
    Structure,
    List,
}

/// Where a field is placed in the marshalled request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum FieldLocation {
    /// Serialized into the JSON request body. The default for JSON
    /// protocol operations.
    Body,
    /// Appended to the query string.
    Query,
    /// Substituted into a `{Name}` placeholder in the operation path.
    Uri,
}

/// One field of an operation input.
#[derive(Debug, PartialEq)]
pub struct FieldSchema {
    /// The field name used by accessors on the generated input type.
    pub name: &'static str,
    /// The key the field is serialized under, which may differ from
    /// [name][FieldSchema::name].
    pub wire_name: &'static str,
    /// Whether building the input fails when this field is unset.
    pub required: bool,
    pub kind: FieldKind,
    pub location: FieldLocation,
}

/// The full description of one API operation.
///
/// Generated crates declare one static instance per operation:
///
/// ```
/// use asyncaws_core::schema::*;
/// static DELETE_SECRET: OperationSchema = OperationSchema {
///     service: "secretsmanager",
///     operation: "DeleteSecret",
///     input: "DeleteSecretRequest",
///     method: http::Method::POST,
///     path: "/",
///     fields: &[FieldSchema {
///         name: "secret_id",
///         wire_name: "SecretId",
///         required: true,
///         kind: FieldKind::String,
///         location: FieldLocation::Body,
///     }],
/// };
/// assert_eq!(DELETE_SECRET.target(), "secretsmanager.DeleteSecret");
/// ```
#[derive(Debug, PartialEq)]
pub struct OperationSchema {
    /// The service identifier, e.g. `secretsmanager`.
    pub service: &'static str,
    /// The operation name, e.g. `DeleteSecret`.
    pub operation: &'static str,
    /// The name of the generated input type, used in validation errors.
    pub input: &'static str,
    /// The HTTP method, fixed per operation.
    pub method: http::Method,
    /// The URI path. Either a literal or a template with `{WireName}`
    /// placeholders filled from the input's fields.
    pub path: &'static str,
    /// The fields of the input, in declaration order. Bodies and query
    /// strings preserve this order.
    pub fields: &'static [FieldSchema],
}

impl OperationSchema {
    /// The value of the operation target header for this operation.
    ///
    /// This is how the receiving service selects the handler despite the
    /// uniform method and path.
    pub fn target(&self) -> String {
        format!("{}.{}", self.service, self.operation)
    }

    pub(crate) fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    pub(crate) fn index_of_wire(&self, wire_name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.wire_name == wire_name)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    static TEST_OP: OperationSchema = OperationSchema {
        service: "secretsmanager",
        operation: "DeleteSecret",
        input: "DeleteSecretRequest",
        method: http::Method::POST,
        path: "/",
        fields: &[
            FieldSchema {
                name: "secret_id",
                wire_name: "SecretId",
                required: true,
                kind: FieldKind::String,
                location: FieldLocation::Body,
            },
            FieldSchema {
                name: "force_delete_without_recovery",
                wire_name: "ForceDeleteWithoutRecovery",
                required: false,
                kind: FieldKind::Boolean,
                location: FieldLocation::Body,
            },
        ],
    };

    #[test]
    fn target() {
        assert_eq!(TEST_OP.target(), "secretsmanager.DeleteSecret");
    }

    #[test]
    fn lookup() {
        assert_eq!(TEST_OP.index_of("secret_id"), Some(0));
        assert_eq!(TEST_OP.index_of("SecretId"), None);
        assert_eq!(TEST_OP.index_of_wire("SecretId"), Some(0));
        assert_eq!(
            TEST_OP.index_of_wire("ForceDeleteWithoutRecovery"),
            Some(1)
        );
        assert_eq!(TEST_OP.index_of_wire("not-a-field"), None);
    }
}
