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

//! Maps service error codes to exception schemas.
//!
//! Each generated service crate exports the catalog of error codes its
//! operations can return. A dispatcher sitting between the transport and
//! the application holds a registry built from those catalogs and uses it
//! to turn failed responses into typed exceptions. The registry lives
//! outside the input and exception types on purpose: they stay pure data,
//! and swapping the catalog (or merging several services into one
//! dispatcher) requires no changes to either.

use crate::exception::{ExceptionSchema, ServiceException, UNKNOWN};
use crate::response::ErrorResponse;
use std::collections::HashMap;

/// A lookup table from error-code strings to exception schemas.
///
/// # Example
/// ```
/// use asyncaws_core::exception::ExceptionSchema;
/// use asyncaws_core::registry::ExceptionRegistry;
/// static NOT_FOUND: ExceptionSchema = ExceptionSchema {
///     code: "ResourceNotFoundException",
///     fields: &[],
/// };
/// let registry: ExceptionRegistry = [&NOT_FOUND].into_iter().collect();
/// assert!(registry.get("ResourceNotFoundException").is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ExceptionRegistry {
    entries: HashMap<&'static str, &'static ExceptionSchema>,
}

impl ExceptionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a schema under its code. The last registration for a
    /// given code wins.
    pub fn register(&mut self, schema: &'static ExceptionSchema) {
        self.entries.insert(schema.code, schema);
    }

    /// The schema registered for `code`, if any.
    pub fn get(&self, code: &str) -> Option<&'static ExceptionSchema> {
        self.entries.get(code).copied()
    }

    /// Turns a failed response into the typed exception matching its
    /// declared error code.
    ///
    /// This is total: a response with an unknown or missing code resolves
    /// to the generic [UNKNOWN] schema rather than failing, so a mangled
    /// error body can never mask the underlying failure with a parse
    /// error of its own.
    pub fn resolve(&self, response: &ErrorResponse) -> ServiceException {
        let schema = match response.error_code() {
            Some(code) => self.get(&code).unwrap_or_else(|| {
                tracing::debug!("no exception registered for error code {code}");
                &UNKNOWN
            }),
            None => {
                tracing::debug!(
                    "failed response with status {} declares no error code",
                    response.status()
                );
                &UNKNOWN
            }
        };
        ServiceException::from_response(schema, response)
    }
}

impl FromIterator<&'static ExceptionSchema> for ExceptionRegistry {
    fn from_iter<T: IntoIterator<Item = &'static ExceptionSchema>>(iter: T) -> Self {
        let mut registry = Self::new();
        for schema in iter {
            registry.register(schema);
        }
        registry
    }
}

impl Extend<&'static ExceptionSchema> for ExceptionRegistry {
    fn extend<T: IntoIterator<Item = &'static ExceptionSchema>>(&mut self, iter: T) {
        for schema in iter {
            self.register(schema);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    static NOT_FOUND: ExceptionSchema = ExceptionSchema {
        code: "ResourceNotFoundException",
        fields: &[],
    };
    static SNAP_START_TIMEOUT: ExceptionSchema = ExceptionSchema {
        code: "SnapStartTimeoutException",
        fields: &["Type"],
    };

    fn response(body: &str) -> ErrorResponse {
        ErrorResponse::new(
            http::StatusCode::BAD_REQUEST,
            http::HeaderMap::new(),
            bytes::Bytes::from(body.to_string()),
        )
    }

    #[test]
    fn resolve_registered_code() {
        let registry: ExceptionRegistry =
            [&NOT_FOUND, &SNAP_START_TIMEOUT].into_iter().collect();
        let exception = registry.resolve(&response(
            r#"{"__type":"SnapStartTimeoutException","Type":"User","message":"timed out"}"#,
        ));
        assert_eq!(exception.code(), "SnapStartTimeoutException");
        assert_eq!(exception.message(), "timed out");
        assert_eq!(exception.field("Type"), Some("User"));
    }

    #[test]
    fn resolve_unknown_code_falls_back() {
        let registry: ExceptionRegistry = [&NOT_FOUND].into_iter().collect();
        let exception =
            registry.resolve(&response(r#"{"__type":"NoSuchException","message":"hm"}"#));
        assert_eq!(exception.code(), "Unknown");
        assert_eq!(exception.message(), "hm");
    }

    #[test]
    fn resolve_missing_code_falls_back() {
        let registry: ExceptionRegistry = [&NOT_FOUND].into_iter().collect();
        let exception = registry.resolve(&response("not even json"));
        assert_eq!(exception.code(), "Unknown");
        assert_eq!(exception.message(), "HTTP 400 Bad Request");
    }

    #[test]
    fn extend_merges_catalogs() {
        let mut registry: ExceptionRegistry = [&NOT_FOUND].into_iter().collect();
        registry.extend([&SNAP_START_TIMEOUT]);
        assert!(registry.get("ResourceNotFoundException").is_some());
        assert!(registry.get("SnapStartTimeoutException").is_some());
        assert!(registry.get("SomethingElse").is_none());
    }
}
