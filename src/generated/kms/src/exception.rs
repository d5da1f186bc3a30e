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

static CUSTOM_KEY_STORE_INVALID_STATE: ExceptionSchema = ExceptionSchema {
    code: "CustomKeyStoreInvalidStateException",
    fields: &[],
};

/// The error codes the KMS operations in this crate declare, for
/// dispatcher registration.
pub fn error_registry() -> ExceptionRegistry {
    [&CUSTOM_KEY_STORE_INVALID_STATE].into_iter().collect()
}

/// The request was rejected because of the `ConnectionState` of the custom
/// key store. To get the `ConnectionState` of a custom key store, use the
/// `DescribeCustomKeyStores` operation.
///
/// This exception is thrown when the operation requires the custom key
/// store to be in a particular `ConnectionState`: connecting a key store
/// that is `DISCONNECTING` or `FAILED`, creating a key in a key store that
/// is not `CONNECTED`, disconnecting a key store that is already
/// `DISCONNECTING` or `DISCONNECTED`, or updating or deleting a key store
/// that is not `DISCONNECTED`.
#[derive(Clone, Debug, PartialEq)]
pub struct CustomKeyStoreInvalidStateException {
    inner: ServiceException,
}

impl CustomKeyStoreInvalidStateException {
    /// Creates an unpopulated exception carrying `status`.
    pub fn new(status: http::StatusCode) -> Self {
        Self {
            inner: ServiceException::new(&CUSTOM_KEY_STORE_INVALID_STATE, status),
        }
    }

    /// Creates the exception and populates it from `response`.
    pub fn from_response(response: &ErrorResponse) -> Self {
        Self {
            inner: ServiceException::from_response(&CUSTOM_KEY_STORE_INVALID_STATE, response),
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

impl std::fmt::Display for CustomKeyStoreInvalidStateException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.inner, f)
    }
}

impl std::error::Error for CustomKeyStoreInvalidStateException {}

impl From<CustomKeyStoreInvalidStateException> for ServiceException {
    fn from(value: CustomKeyStoreInvalidStateException) -> Self {
        value.inner
    }
}

impl TryFrom<ServiceException> for CustomKeyStoreInvalidStateException {
    type Error = ServiceException;

    /// Succeeds only for exceptions dispatched under this type's code; a
    /// mismatch hands the exception back untouched.
    fn try_from(value: ServiceException) -> Result<Self, ServiceException> {
        if value.code() == CUSTOM_KEY_STORE_INVALID_STATE.code {
            Ok(Self { inner: value })
        } else {
            Err(value)
        }
    }
}
