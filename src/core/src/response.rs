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

//! Failed-response decoding.
//!
//! When a call fails the transport hands this layer the raw response:
//! status, headers, and the body bytes it already collected. Everything
//! extracted from it is extracted tolerantly. Services are inconsistent
//! about error payloads, proxies and load balancers produce bodies that are
//! not JSON at all, and none of that may turn into a parse error that masks
//! the real failure.

use serde_json::Value;

/// The header a service uses to declare the error type of a failed call.
///
/// Some service frontends append `:` and extra detail to the value; only
/// the part before the first `:` is the code.
const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";

/// A failed HTTP response, as handed over by the transport.
#[derive(Clone, Debug)]
pub struct ErrorResponse {
    status: http::StatusCode,
    headers: http::HeaderMap,
    body: bytes::Bytes,
}

impl ErrorResponse {
    pub fn new(status: http::StatusCode, headers: http::HeaderMap, body: bytes::Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    pub fn status(&self) -> http::StatusCode {
        self.status
    }

    pub fn headers(&self) -> &http::HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &bytes::Bytes {
        &self.body
    }

    /// Decodes the body as a loose JSON object.
    ///
    /// This never fails: a body that is absent, malformed, or not an
    /// object decodes to an empty map, and the caller simply extracts
    /// nothing from it.
    pub fn decode_body(&self) -> serde_json::Map<String, Value> {
        match serde_json::from_slice::<Value>(&self.body) {
            Ok(Value::Object(map)) => map,
            Ok(_) | Err(_) => serde_json::Map::new(),
        }
    }

    /// The error code the service declared for this failure, if any.
    ///
    /// The code is taken from the `x-amzn-errortype` header when present,
    /// otherwise from the body's `__type` or `code` key. Either form may
    /// carry a `<namespace>#` prefix or a `:<detail>` suffix; both are
    /// stripped so the result matches the codes used for registration.
    pub fn error_code(&self) -> Option<String> {
        let header = self
            .headers
            .get(ERROR_TYPE_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let declared = header.or_else(|| {
            let envelope: ErrorEnvelope =
                serde_json::from_slice(&self.body).unwrap_or_default();
            envelope.error_type.or(envelope.code)
        })?;
        let code = declared.split(':').next().unwrap_or_default();
        let code = code.rsplit('#').next().unwrap_or_default().trim();
        if code.is_empty() {
            return None;
        }
        Some(code.to_string())
    }
}

/// The subset of an error body used for dispatch.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ErrorEnvelope {
    #[serde(rename = "__type")]
    error_type: Option<String>,
    code: Option<String>,
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    fn response(body: &str) -> ErrorResponse {
        ErrorResponse::new(
            http::StatusCode::BAD_REQUEST,
            http::HeaderMap::new(),
            bytes::Bytes::from(body.to_string()),
        )
    }

    #[test]
    fn decode_object() {
        let got = response(r#"{"message":"oops","Type":"User"}"#).decode_body();
        assert_eq!(got.get("message"), Some(&json!("oops")));
        assert_eq!(got.get("Type"), Some(&json!("User")));
    }

    #[test_case(""; "empty body")]
    #[test_case("not json"; "malformed body")]
    #[test_case("[1, 2, 3]"; "not an object")]
    #[test_case("null"; "json null")]
    fn decode_degrades_to_empty(body: &str) {
        assert!(response(body).decode_body().is_empty());
    }

    #[test]
    fn error_code_from_body_type() {
        let got = response(r#"{"__type":"ResourceNotFoundException"}"#).error_code();
        assert_eq!(got.as_deref(), Some("ResourceNotFoundException"));
    }

    #[test]
    fn error_code_strips_namespace() {
        let got =
            response(r#"{"__type":"com.amazonaws.lambda#SnapStartTimeoutException"}"#).error_code();
        assert_eq!(got.as_deref(), Some("SnapStartTimeoutException"));
    }

    #[test]
    fn error_code_from_code_key() {
        let got = response(r#"{"code":"ThrottlingException"}"#).error_code();
        assert_eq!(got.as_deref(), Some("ThrottlingException"));
    }

    #[test]
    fn error_code_header_wins() {
        let mut headers = http::HeaderMap::new();
        headers.insert(
            ERROR_TYPE_HEADER,
            http::HeaderValue::from_static("FooException:http://internal/docs"),
        );
        let response = ErrorResponse::new(
            http::StatusCode::BAD_REQUEST,
            headers,
            bytes::Bytes::from_static(br#"{"__type":"BarException"}"#),
        );
        assert_eq!(response.error_code().as_deref(), Some("FooException"));
    }

    #[test_case(""; "empty body")]
    #[test_case("not json"; "malformed body")]
    #[test_case("{}"; "no declared code")]
    #[test_case(r#"{"__type":"  "}"#; "blank code")]
    fn error_code_absent(body: &str) {
        assert_eq!(response(body).error_code(), None);
    }

    #[test]
    fn accessors() {
        let response = response("{}");
        assert_eq!(response.status(), http::StatusCode::BAD_REQUEST);
        assert!(response.headers().is_empty());
        assert_eq!(response.body().as_ref(), b"{}");
    }
}
