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

//! Typed service errors and the schema tables that describe them.
//!
//! Each error code a service declares is described by a static
//! [ExceptionSchema]: the code itself plus the wire keys of any
//! error-specific metadata. A [ServiceException] is one occurrence of such
//! an error, created by the dispatcher for a failed call and populated once
//! from the response body. Population is best-effort and total: a missing
//! key leaves the accessor unset and a malformed body extracts nothing,
//! but the exception always carries at least its HTTP status and a
//! message.

use crate::response::ErrorResponse;
use serde_json::Value;

/// Describes one service-declared error code.
#[derive(Debug, PartialEq)]
pub struct ExceptionSchema {
    /// The code the service uses to identify this failure, e.g.
    /// `SnapStartTimeoutException`.
    pub code: &'static str,
    /// Wire keys of the error-specific metadata fields, each one
    /// independently optional in the response body.
    pub fields: &'static [&'static str],
}

/// The fallback schema for responses that declare no recognized code.
///
/// Dispatch never fails: a response with an unknown or absent error code
/// resolves to an exception with this schema, carrying the HTTP status and
/// whatever message could be extracted.
pub static UNKNOWN: ExceptionSchema = ExceptionSchema {
    code: "Unknown",
    fields: &[],
};

/// An error returned by a service call.
///
/// One instance corresponds to one failed call. The dispatcher constructs
/// it with the response's HTTP status, which seeds a default message from
/// the status line, and then populates it from the response body. After
/// population the exception is treated as immutable and surfaced to the
/// caller, usually wrapped in [Error::service][crate::error::Error::service].
///
/// # Example
/// ```
/// use asyncaws_core::exception::{ExceptionSchema, ServiceException};
/// use asyncaws_core::response::ErrorResponse;
/// static SNAP_START_TIMEOUT: ExceptionSchema = ExceptionSchema {
///     code: "SnapStartTimeoutException",
///     fields: &["Type"],
/// };
/// let response = ErrorResponse::new(
///     http::StatusCode::REQUEST_TIMEOUT,
///     http::HeaderMap::new(),
///     bytes::Bytes::from_static(br#"{"Type":"User","message":"timed out"}"#),
/// );
/// let exception = ServiceException::from_response(&SNAP_START_TIMEOUT, &response);
/// assert_eq!(exception.message(), "timed out");
/// assert_eq!(exception.field("Type"), Some("User"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ServiceException {
    schema: &'static ExceptionSchema,
    status: http::StatusCode,
    message: String,
    values: Vec<Option<String>>,
}

impl ServiceException {
    /// Creates an unpopulated exception with the default message derived
    /// from the HTTP status line.
    pub fn new(schema: &'static ExceptionSchema, status: http::StatusCode) -> Self {
        let message = match status.canonical_reason() {
            Some(reason) => format!("HTTP {} {reason}", status.as_u16()),
            None => format!("HTTP {}", status.as_u16()),
        };
        Self {
            schema,
            status,
            message,
            values: vec![None; schema.fields.len()],
        }
    }

    /// Creates an exception and populates it from `response` in one step.
    pub fn from_response(schema: &'static ExceptionSchema, response: &ErrorResponse) -> Self {
        let mut exception = Self::new(schema, response.status());
        exception.populate(response);
        exception
    }

    /// Extracts the message and the declared metadata fields from the
    /// response body.
    ///
    /// This is best-effort and never fails. The message key is matched
    /// case-insensitively (services vary between `message` and `Message`)
    /// and only a present, non-null value overwrites the default. Each
    /// metadata field is read from its own key independently; unrecognized
    /// keys in the body are ignored.
    pub fn populate(&mut self, response: &ErrorResponse) {
        let data = response.decode_body();
        let message = data
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case("message"))
            .and_then(|(_, v)| as_string(v));
        if let Some(message) = message {
            self.message = message;
        }
        for (i, key) in self.schema.fields.iter().enumerate() {
            self.values[i] = data.get(*key).and_then(as_string);
        }
    }

    /// The error code this exception was registered under.
    pub fn code(&self) -> &'static str {
        self.schema.code
    }

    /// The human-readable error message.
    ///
    /// Defaults to the HTTP status line when the service did not include
    /// one in the response body.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The HTTP status of the failed call.
    pub fn status(&self) -> http::StatusCode {
        self.status
    }

    /// An error-specific metadata field, by its wire key.
    ///
    /// Returns `None` both for keys absent from the response and for keys
    /// this exception's schema does not declare.
    pub fn field(&self, wire_name: &str) -> Option<&str> {
        let i = self.schema.fields.iter().position(|k| *k == wire_name)?;
        self.values[i].as_deref()
    }

    /// The failure was the caller's fault (HTTP 4xx).
    pub fn is_client_error(&self) -> bool {
        self.status.is_client_error()
    }

    /// The failure was the service's fault (HTTP 5xx).
    pub fn is_server_error(&self) -> bool {
        self.status.is_server_error()
    }
}

impl std::fmt::Display for ServiceException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "the service reports an error with code {} described as: {}",
            self.schema.code, self.message
        )
    }
}

impl std::error::Error for ServiceException {}

/// Renders a loose JSON value the way the error fields expect: scalars
/// become their string form, everything else (including `null`) is treated
/// as absent.
fn as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
