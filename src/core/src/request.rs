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

//! The transport-ready request descriptor.

/// A fully marshalled request, ready for a transport to execute.
///
/// Instances are produced by building an operation input and are immutable:
/// the transport reads the parts, sends the request, and drops the
/// descriptor. The headers always include the wire-format content type and
/// the operation target header; the body is always well-formed JSON, at
/// minimum the two-byte object `{}`.
#[derive(Clone, Debug, PartialEq)]
pub struct Request {
    method: http::Method,
    path: String,
    query: Vec<(String, String)>,
    headers: http::HeaderMap,
    body: bytes::Bytes,
}

impl Request {
    pub(crate) fn new(
        method: http::Method,
        path: String,
        query: Vec<(String, String)>,
        headers: http::HeaderMap,
        body: bytes::Bytes,
    ) -> Self {
        Self {
            method,
            path,
            query,
            headers,
            body,
        }
    }

    /// The HTTP method, fixed per operation.
    pub fn method(&self) -> &http::Method {
        &self.method
    }

    /// The URI path, with any template placeholders already expanded.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The query parameters, in field declaration order. Empty for most
    /// JSON protocol operations.
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn headers(&self) -> &http::HeaderMap {
        &self.headers
    }

    /// The serialized request body.
    pub fn body(&self) -> &bytes::Bytes {
        &self.body
    }

    /// Consumes the descriptor, returning its parts for the transport.
    pub fn into_parts(
        self,
    ) -> (
        http::Method,
        String,
        Vec<(String, String)>,
        http::HeaderMap,
        bytes::Bytes,
    ) {
        (self.method, self.path, self.query, self.headers, self.body)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn accessors() {
        let mut headers = http::HeaderMap::new();
        headers.insert(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("application/x-amz-json-1.1"),
        );
        let request = Request::new(
            http::Method::POST,
            "/".to_string(),
            vec![("Version".to_string(), "2017-10-17".to_string())],
            headers.clone(),
            bytes::Bytes::from_static(b"{}"),
        );
        assert_eq!(request.method(), &http::Method::POST);
        assert_eq!(request.path(), "/");
        assert_eq!(request.query().len(), 1);
        assert_eq!(request.headers(), &headers);
        assert_eq!(request.body().as_ref(), b"{}");

        let (method, path, query, got_headers, body) = request.into_parts();
        assert_eq!(method, http::Method::POST);
        assert_eq!(path, "/");
        assert_eq!(query[0].0, "Version");
        assert_eq!(got_headers, headers);
        assert_eq!(body.as_ref(), b"{}");
    }
}
