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

use super::RequiredFieldError;
use crate::exception::ServiceException;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by all client libraries in this repository.
///
/// Errors come from two places. Building an operation input may fail
/// locally, before any request exists: a required field was never set, or
/// the assembled body cannot be serialized. After a request is executed the
/// service may reject it, in which case the transport hands back a typed
/// [ServiceException] wrapped in this error.
///
/// Most applications will just return the error or log it. Applications
/// that need to branch on the failure can use the predicates and accessors
/// to determine the error kind and query its details.
///
/// # Example
/// ```
/// use asyncaws_core::error::Error;
/// fn handle_error(e: Error) {
///     if let Some(field) = e.required_field() {
///         println!("fix the input and build again: {field}");
///     } else if let Some(exception) = e.service_exception() {
///         println!("the call failed with {}: {}", exception.code(), exception.message());
///     }
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error for an input that failed validation.
    ///
    /// # Example
    /// ```
    /// use asyncaws_core::error::{Error, RequiredFieldError};
    /// let error = Error::validation(RequiredFieldError {
    ///     field: "SecretId",
    ///     input: "DeleteSecretRequest",
    /// });
    /// assert!(error.is_validation());
    /// ```
    pub fn validation(source: RequiredFieldError) -> Self {
        Self {
            kind: ErrorKind::Validation,
            source: Some(source.into()),
        }
    }

    /// The input failed validation before any request was produced.
    ///
    /// This is always a client-side generated error and it is never
    /// transient: the same input fails the same way on every attempt.
    /// Supply the missing value and build again.
    pub fn is_validation(&self) -> bool {
        matches!(self.kind, ErrorKind::Validation)
    }

    /// The details of the validation failure, if this is a validation error.
    pub fn required_field(&self) -> Option<&RequiredFieldError> {
        if !self.is_validation() {
            return None;
        }
        self.source
            .as_ref()
            .and_then(|e| e.downcast_ref::<RequiredFieldError>())
    }

    /// Creates an error representing a serialization problem.
    ///
    /// Applications should have no need to use this function outside of
    /// mocks. The client libraries use it when an assembled request body or
    /// header value cannot be encoded.
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request could not be serialized.
    ///
    /// This is always a client-side generated error, generated before the
    /// request is made, and it is never transient.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// Creates an error with the information returned by the service.
    ///
    /// # Example
    /// ```
    /// use asyncaws_core::error::Error;
    /// use asyncaws_core::exception::{ExceptionSchema, ServiceException};
    /// static NOT_FOUND: ExceptionSchema = ExceptionSchema {
    ///     code: "ResourceNotFoundException",
    ///     fields: &[],
    /// };
    /// let exception = ServiceException::new(&NOT_FOUND, http::StatusCode::BAD_REQUEST);
    /// let error = Error::service(exception);
    /// assert_eq!(error.service_exception().map(|e| e.code()), Some("ResourceNotFoundException"));
    /// ```
    pub fn service(exception: ServiceException) -> Self {
        Self {
            kind: ErrorKind::Service(Box::new(exception)),
            source: None,
        }
    }

    /// The service rejected the call.
    pub fn is_service(&self) -> bool {
        matches!(self.kind, ErrorKind::Service(_))
    }

    /// The [ServiceException] associated with this error, if any.
    ///
    /// Service errors are opaque data carriers at this layer: whether the
    /// failed call should be retried is decided by the transport, not here.
    pub fn service_exception(&self) -> Option<&ServiceException> {
        match &self.kind {
            ErrorKind::Service(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::Validation, Some(e)) => {
                write!(f, "the request input failed validation: {e}")
            }
            (ErrorKind::Serialization, Some(e)) => {
                write!(f, "cannot serialize the request: {e}")
            }
            (ErrorKind::Service(e), _) => {
                write!(f, "{e}")
            }
            (_, None) => unreachable!("no constructor allows this"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error))
    }
}

/// The type of error held by an [Error] instance.
#[derive(Debug)]
enum ErrorKind {
    Validation,
    Serialization,
    Service(Box<ServiceException>),
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::exception::ExceptionSchema;
    use std::error::Error as StdError;

    static THROTTLING: ExceptionSchema = ExceptionSchema {
        code: "ThrottlingException",
        fields: &[],
    };

    #[test]
    fn validation() {
        let source = RequiredFieldError {
            field: "SecretId",
            input: "DeleteSecretRequest",
        };
        let error = Error::validation(source);
        assert!(error.is_validation(), "{error:?}");
        assert!(!error.is_serialization(), "{error:?}");
        assert!(!error.is_service(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        let got = error.required_field();
        assert!(
            matches!(got, Some(e) if e.field == "SecretId" && e.input == "DeleteSecretRequest"),
            "{error:?}"
        );
        assert!(error.to_string().contains("SecretId"), "{error}");
        assert!(error.service_exception().is_none(), "{error:?}");
    }

    #[test]
    fn ser() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error = Error::ser(source);
        assert!(error.is_serialization(), "{error:?}");
        assert!(!error.is_validation(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        assert!(error.required_field().is_none(), "{error:?}");
        assert!(
            error.to_string().contains("cannot serialize the request"),
            "{error}"
        );
    }

    #[test]
    fn service() {
        let exception =
            ServiceException::new(&THROTTLING, http::StatusCode::TOO_MANY_REQUESTS);
        let error = Error::service(exception);
        assert!(error.is_service(), "{error:?}");
        assert!(error.source().is_none(), "{error:?}");
        let got = error.service_exception();
        assert!(
            matches!(got, Some(e) if e.code() == "ThrottlingException"),
            "{error:?}"
        );
        assert!(error.to_string().contains("ThrottlingException"), "{error}");
    }
}
