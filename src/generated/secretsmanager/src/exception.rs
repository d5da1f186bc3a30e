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

static RESOURCE_NOT_FOUND: ExceptionSchema = ExceptionSchema {
    code: "ResourceNotFoundException",
    fields: &[],
};

static INVALID_REQUEST: ExceptionSchema = ExceptionSchema {
    code: "InvalidRequestException",
    fields: &[],
};

/// The error codes the Secrets Manager operations in this crate declare,
/// for dispatcher registration.
pub fn error_registry() -> ExceptionRegistry {
    [&RESOURCE_NOT_FOUND, &INVALID_REQUEST].into_iter().collect()
}

/// Secrets Manager can't find the resource that you asked for.
#[derive(Clone, Debug, PartialEq)]
pub struct ResourceNotFoundException {
    inner: ServiceException,
}

impl ResourceNotFoundException {
    /// Creates an unpopulated exception carrying `status`.
    pub fn new(status: http::StatusCode) -> Self {
        Self {
            inner: ServiceException::new(&RESOURCE_NOT_FOUND, status),
        }
    }

    /// Creates the exception and populates it from `response`.
    pub fn from_response(response: &ErrorResponse) -> Self {
        Self {
            inner: ServiceException::from_response(&RESOURCE_NOT_FOUND, response),
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
}

impl std::fmt::Display for ResourceNotFoundException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.inner, f)
    }
}

impl std::error::Error for ResourceNotFoundException {}

impl From<ResourceNotFoundException> for ServiceException {
    fn from(value: ResourceNotFoundException) -> Self {
        value.inner
    }
}

impl TryFrom<ServiceException> for ResourceNotFoundException {
    type Error = ServiceException;

    /// Succeeds only for exceptions dispatched under this type's code; a
    /// mismatch hands the exception back untouched.
    fn try_from(value: ServiceException) -> Result<Self, ServiceException> {
        if value.code() == RESOURCE_NOT_FOUND.code {
            Ok(Self { inner: value })
        } else {
            Err(value)
        }
    }
}

/// The parameter values are not valid for the current state of the
/// resource. For example, the secret is scheduled for deletion, or it was
/// created or edited without a value in this region.
#[derive(Clone, Debug, PartialEq)]
pub struct InvalidRequestException {
    inner: ServiceException,
}

impl InvalidRequestException {
    /// Creates an unpopulated exception carrying `status`.
    pub fn new(status: http::StatusCode) -> Self {
        Self {
            inner: ServiceException::new(&INVALID_REQUEST, status),
        }
    }

    /// Creates the exception and populates it from `response`.
    pub fn from_response(response: &ErrorResponse) -> Self {
        Self {
            inner: ServiceException::from_response(&INVALID_REQUEST, response),
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
}

impl std::fmt::Display for InvalidRequestException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.inner, f)
    }
}

impl std::error::Error for InvalidRequestException {}

impl From<InvalidRequestException> for ServiceException {
    fn from(value: InvalidRequestException) -> Self {
        value.inner
    }
}

impl TryFrom<ServiceException> for InvalidRequestException {
    type Error = ServiceException;

    /// Succeeds only for exceptions dispatched under this type's code; a
    /// mismatch hands the exception back untouched.
    fn try_from(value: ServiceException) -> Result<Self, ServiceException> {
        if value.code() == INVALID_REQUEST.code {
            Ok(Self { inner: value })
        } else {
            Err(value)
        }
    }
}
