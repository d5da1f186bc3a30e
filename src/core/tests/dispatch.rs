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

//! End-to-end dispatch: a failed response goes in, a typed error comes
//! out, no matter how mangled the response is.

use asyncaws_core::error::Error;
use asyncaws_core::exception::ExceptionSchema;
use asyncaws_core::registry::ExceptionRegistry;
use asyncaws_core::response::ErrorResponse;

static THROTTLING: ExceptionSchema = ExceptionSchema {
    code: "ThrottlingException",
    fields: &[],
};

static LIMIT_EXCEEDED: ExceptionSchema = ExceptionSchema {
    code: "LimitExceededException",
    fields: &["Type"],
};

fn registry() -> ExceptionRegistry {
    [&THROTTLING, &LIMIT_EXCEEDED].into_iter().collect()
}

fn response(status: u16, headers: http::HeaderMap, body: &'static [u8]) -> ErrorResponse {
    ErrorResponse::new(
        http::StatusCode::from_u16(status).unwrap(),
        headers,
        bytes::Bytes::from_static(body),
    )
}

#[test]
fn dispatch_by_body_type() {
    let response = response(
        429,
        http::HeaderMap::new(),
        br#"{"__type":"ThrottlingException","message":"slow down"}"#,
    );
    let exception = registry().resolve(&response);
    assert_eq!(exception.code(), "ThrottlingException");
    assert_eq!(exception.message(), "slow down");
    assert!(exception.is_client_error());
}

#[test]
fn dispatch_by_header_with_detail_suffix() {
    let mut headers = http::HeaderMap::new();
    headers.insert(
        "x-amzn-errortype",
        http::HeaderValue::from_static("LimitExceededException:http://internal/docs"),
    );
    let response = response(400, headers, br#"{"Type":"User","message":"too many"}"#);
    let exception = registry().resolve(&response);
    assert_eq!(exception.code(), "LimitExceededException");
    assert_eq!(exception.field("Type"), Some("User"));
    assert_eq!(exception.message(), "too many");
}

#[test]
fn dispatch_unknown_code_degrades_gracefully() {
    let response = response(
        500,
        http::HeaderMap::new(),
        br#"{"__type":"BrandNewException","message":"who knows"}"#,
    );
    let exception = registry().resolve(&response);
    assert_eq!(exception.code(), "Unknown");
    assert_eq!(exception.message(), "who knows");
    assert!(exception.is_server_error());
}

#[test]
fn dispatch_garbage_body_still_carries_the_status() {
    let response = response(502, http::HeaderMap::new(), b"<html>bad gateway</html>");
    let exception = registry().resolve(&response);
    assert_eq!(exception.code(), "Unknown");
    assert_eq!(exception.message(), "HTTP 502 Bad Gateway");
}

#[test]
fn resolved_exceptions_surface_as_core_errors() {
    let response = response(
        429,
        http::HeaderMap::new(),
        br#"{"__type":"ThrottlingException","message":"slow down"}"#,
    );
    let error = Error::service(registry().resolve(&response));
    assert!(error.is_service(), "{error:?}");
    let exception = error.service_exception().unwrap();
    assert_eq!(exception.code(), "ThrottlingException");
    assert!(error.to_string().contains("slow down"), "{error}");
}
