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

use awscore::exception::{ExceptionSchema, ServiceException};
use awscore::registry::ExceptionRegistry;
use awscore::response::ErrorResponse;

static SNAP_START: ExceptionSchema = ExceptionSchema {
    code: "SnapStartException",
    fields: &["Type"],
};

static SNAP_START_NOT_READY: ExceptionSchema = ExceptionSchema {
    code: "SnapStartNotReadyException",
    fields: &["Type"],
};

static SNAP_START_TIMEOUT: ExceptionSchema = ExceptionSchema {
    code: "SnapStartTimeoutException",
    fields: &["Type"],
};

/// The error codes the Lambda operations in this crate declare, for
/// dispatcher registration.
pub fn error_registry() -> ExceptionRegistry {
    [&SNAP_START, &SNAP_START_NOT_READY, &SNAP_START_TIMEOUT]
        .into_iter()
        .collect()
}

/// The `afterRestore()` runtime hook encountered an error.
#[derive(Clone, Debug, PartialEq)]
pub struct SnapStartException {
    inner: ServiceException,
}

impl SnapStartException {
    /// Creates an unpopulated exception carrying `status`.
    pub fn new(status: http::StatusCode) -> Self {
        Self {
            inner: ServiceException::new(&SNAP_START, status),
        }
    }

    /// Creates the exception and populates it from `response`.
    pub fn from_response(response: &ErrorResponse) -> Self {
        Self {
            inner: ServiceException::from_response(&SNAP_START, response),
        }
    }

    /// Extracts the error detail from the failed response body.
    pub fn populate(&mut self, response: &ErrorResponse) {
        self.inner.populate(response);
    }

    pub fn message(&self) -> &str {
        self.inner.message()
    }

    pub fn status(&self) -> http::StatusCode {
        self.inner.status()
    }

    /// The exception type reported by the service, when present.
    pub fn r#type(&self) -> Option<&str> {
        self.inner.field("Type")
    }
}

impl std::fmt::Display for SnapStartException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.inner, f)
    }
}

impl std::error::Error for SnapStartException {}

impl From<SnapStartException> for ServiceException {
    fn from(value: SnapStartException) -> Self {
        value.inner
    }
}

impl TryFrom<ServiceException> for SnapStartException {
    type Error = ServiceException;

    /// Succeeds only for exceptions dispatched under this type's code; a
    /// mismatch hands the exception back untouched.
    fn try_from(value: ServiceException) -> Result<Self, ServiceException> {
        if value.code() == SNAP_START.code {
            Ok(Self { inner: value })
        } else {
            Err(value)
        }
    }
}

/// Lambda is initializing your function. You can invoke the function when
/// the function state becomes `Active`.
#[derive(Clone, Debug, PartialEq)]
pub struct SnapStartNotReadyException {
    inner: ServiceException,
}

impl SnapStartNotReadyException {
    /// Creates an unpopulated exception carrying `status`.
    pub fn new(status: http::StatusCode) -> Self {
        Self {
            inner: ServiceException::new(&SNAP_START_NOT_READY, status),
        }
    }

    /// Creates the exception and populates it from `response`.
    pub fn from_response(response: &ErrorResponse) -> Self {
        Self {
            inner: ServiceException::from_response(&SNAP_START_NOT_READY, response),
        }
    }

    /// Extracts the error detail from the failed response body.
    pub fn populate(&mut self, response: &ErrorResponse) {
        self.inner.populate(response);
    }

    pub fn message(&self) -> &str {
        self.inner.message()
    }

    pub fn status(&self) -> http::StatusCode {
        self.inner.status()
    }

    /// The exception type reported by the service, when present.
    pub fn r#type(&self) -> Option<&str> {
        self.inner.field("Type")
    }
}

impl std::fmt::Display for SnapStartNotReadyException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.inner, f)
    }
}

impl std::error::Error for SnapStartNotReadyException {}

impl From<SnapStartNotReadyException> for ServiceException {
    fn from(value: SnapStartNotReadyException) -> Self {
        value.inner
    }
}

impl TryFrom<ServiceException> for SnapStartNotReadyException {
    type Error = ServiceException;

    /// Succeeds only for exceptions dispatched under this type's code; a
    /// mismatch hands the exception back untouched.
    fn try_from(value: ServiceException) -> Result<Self, ServiceException> {
        if value.code() == SNAP_START_NOT_READY.code {
            Ok(Self { inner: value })
        } else {
            Err(value)
        }
    }
}

/// Lambda couldn't restore the snapshot within the timeout limit.
#[derive(Clone, Debug, PartialEq)]
pub struct SnapStartTimeoutException {
    inner: ServiceException,
}

impl SnapStartTimeoutException {
    /// Creates an unpopulated exception carrying `status`.
    pub fn new(status: http::StatusCode) -> Self {
        Self {
            inner: ServiceException::new(&SNAP_START_TIMEOUT, status),
        }
    }

    /// Creates the exception and populates it from `response`.
    pub fn from_response(response: &ErrorResponse) -> Self {
        Self {
            inner: ServiceException::from_response(&SNAP_START_TIMEOUT, response),
        }
    }

    /// Extracts the error detail from the failed response body.
    pub fn populate(&mut self, response: &ErrorResponse) {
        self.inner.populate(response);
    }

    pub fn message(&self) -> &str {
        self.inner.message()
    }

    pub fn status(&self) -> http::StatusCode {
        self.inner.status()
    }

    /// The exception type reported by the service, when present.
    pub fn r#type(&self) -> Option<&str> {
        self.inner.field("Type")
    }
}

impl std::fmt::Display for SnapStartTimeoutException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.inner, f)
    }
}

impl std::error::Error for SnapStartTimeoutException {}

impl From<SnapStartTimeoutException> for ServiceException {
    fn from(value: SnapStartTimeoutException) -> Self {
        value.inner
    }
}

impl TryFrom<ServiceException> for SnapStartTimeoutException {
    type Error = ServiceException;

    /// Succeeds only for exceptions dispatched under this type's code; a
    /// mismatch hands the exception back untouched.
    fn try_from(value: ServiceException) -> Result<Self, ServiceException> {
        if value.code() == SNAP_START_TIMEOUT.code {
            Ok(Self { inner: value })
        } else {
            Err(value)
        }
    }
}
