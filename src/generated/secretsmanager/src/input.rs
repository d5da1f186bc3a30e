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

use awscore::input::Input;
use awscore::request::Request;
use awscore::schema::{FieldKind, FieldLocation, FieldSchema, OperationSchema};

static DELETE_SECRET: OperationSchema = OperationSchema {
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
            name: "recovery_window_in_days",
            wire_name: "RecoveryWindowInDays",
            required: false,
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

/// The request for `DeleteSecret`.
///
/// Deletes a secret and all of its versions. You can specify a recovery
/// window during which you can restore the secret, or delete it
/// immediately without any recovery window.
#[derive(Clone, Debug, PartialEq)]
pub struct DeleteSecretRequest {
    input: Input,
}

impl DeleteSecretRequest {
    pub fn new() -> Self {
        Self {
            input: Input::new(&DELETE_SECRET),
        }
    }

    /// Accepts either a configuration object or an existing request.
    ///
    /// Passing an existing `DeleteSecretRequest` hands it back unchanged;
    /// passing a [serde_json::Value] object populates a new request from
    /// its recognized keys (plus the `@region` override) and ignores the
    /// rest.
    pub fn create<T: Into<Self>>(input: T) -> Self {
        input.into()
    }

    /// The ARN or name of the secret to delete.
    pub fn secret_id(&self) -> Option<&str> {
        self.input.get_str("secret_id")
    }

    /// Sets the value of `secret_id`.
    pub fn set_secret_id<T: Into<String>>(mut self, v: T) -> Self {
        self.input.set("secret_id", v.into());
        self
    }

    /// Sets or clears the value of `secret_id`.
    pub fn set_or_clear_secret_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        match v {
            Some(v) => self.input.set("secret_id", v.into()),
            None => self.input.clear("secret_id"),
        }
        self
    }

    /// The number of days from 7 to 30 that Secrets Manager waits before
    /// permanently deleting the secret. You can't use both this parameter
    /// and `ForceDeleteWithoutRecovery` in the same call. If you don't use
    /// either, then Secrets Manager defaults to a 30 day recovery window.
    pub fn recovery_window_in_days(&self) -> Option<&str> {
        self.input.get_str("recovery_window_in_days")
    }

    /// Sets the value of `recovery_window_in_days`.
    pub fn set_recovery_window_in_days<T: Into<String>>(mut self, v: T) -> Self {
        self.input.set("recovery_window_in_days", v.into());
        self
    }

    /// Sets or clears the value of `recovery_window_in_days`.
    pub fn set_or_clear_recovery_window_in_days<T: Into<String>>(mut self, v: Option<T>) -> Self {
        match v {
            Some(v) => self.input.set("recovery_window_in_days", v.into()),
            None => self.input.clear("recovery_window_in_days"),
        }
        self
    }

    /// Specifies whether to delete the secret without any recovery window.
    /// You can't use both this parameter and `RecoveryWindowInDays` in the
    /// same call.
    pub fn force_delete_without_recovery(&self) -> Option<bool> {
        self.input.get_bool("force_delete_without_recovery")
    }

    /// Sets the value of `force_delete_without_recovery`.
    pub fn set_force_delete_without_recovery(mut self, v: bool) -> Self {
        self.input.set("force_delete_without_recovery", v);
        self
    }

    /// Sets or clears the value of `force_delete_without_recovery`.
    pub fn set_or_clear_force_delete_without_recovery(mut self, v: Option<bool>) -> Self {
        match v {
            Some(v) => self.input.set("force_delete_without_recovery", v),
            None => self.input.clear("force_delete_without_recovery"),
        }
        self
    }

    /// The region override supplied at construction, if any.
    pub fn region(&self) -> Option<&str> {
        self.input.region()
    }

    /// Sets the region override.
    pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
        self.input.set_region(Some(v.into()));
        self
    }

    /// Validates the request and marshals it into a transport-ready
    /// [Request].
    pub fn build(&self) -> awscore::Result<Request> {
        self.input.build()
    }
}

impl Default for DeleteSecretRequest {
    fn default() -> Self {
        Self::new()
    }
}

impl From<serde_json::Value> for DeleteSecretRequest {
    fn from(config: serde_json::Value) -> Self {
        Self {
            input: Input::from_config(&DELETE_SECRET, config),
        }
    }
}

static GET_SECRET_VALUE: OperationSchema = OperationSchema {
    service: "secretsmanager",
    operation: "GetSecretValue",
    input: "GetSecretValueRequest",
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
            name: "version_id",
            wire_name: "VersionId",
            required: false,
            kind: FieldKind::String,
            location: FieldLocation::Body,
        },
        FieldSchema {
            name: "version_stage",
            wire_name: "VersionStage",
            required: false,
            kind: FieldKind::String,
            location: FieldLocation::Body,
        },
    ],
};

/// The request for `GetSecretValue`.
///
/// Retrieves the contents of the encrypted fields from the specified
/// version of a secret, whichever version is specified.
#[derive(Clone, Debug, PartialEq)]
pub struct GetSecretValueRequest {
    input: Input,
}

impl GetSecretValueRequest {
    pub fn new() -> Self {
        Self {
            input: Input::new(&GET_SECRET_VALUE),
        }
    }

    /// Accepts either a configuration object or an existing request.
    pub fn create<T: Into<Self>>(input: T) -> Self {
        input.into()
    }

    /// The ARN or name of the secret to retrieve.
    pub fn secret_id(&self) -> Option<&str> {
        self.input.get_str("secret_id")
    }

    /// Sets the value of `secret_id`.
    pub fn set_secret_id<T: Into<String>>(mut self, v: T) -> Self {
        self.input.set("secret_id", v.into());
        self
    }

    /// Sets or clears the value of `secret_id`.
    pub fn set_or_clear_secret_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        match v {
            Some(v) => self.input.set("secret_id", v.into()),
            None => self.input.clear("secret_id"),
        }
        self
    }

    /// The unique identifier of the version of the secret to retrieve. If
    /// you don't specify either a `VersionStage` or `VersionId`, then
    /// Secrets Manager returns the `AWSCURRENT` version.
    pub fn version_id(&self) -> Option<&str> {
        self.input.get_str("version_id")
    }

    /// Sets the value of `version_id`.
    pub fn set_version_id<T: Into<String>>(mut self, v: T) -> Self {
        self.input.set("version_id", v.into());
        self
    }

    /// Sets or clears the value of `version_id`.
    pub fn set_or_clear_version_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        match v {
            Some(v) => self.input.set("version_id", v.into()),
            None => self.input.clear("version_id"),
        }
        self
    }

    /// The staging label of the version of the secret to retrieve.
    pub fn version_stage(&self) -> Option<&str> {
        self.input.get_str("version_stage")
    }

    /// Sets the value of `version_stage`.
    pub fn set_version_stage<T: Into<String>>(mut self, v: T) -> Self {
        self.input.set("version_stage", v.into());
        self
    }

    /// Sets or clears the value of `version_stage`.
    pub fn set_or_clear_version_stage<T: Into<String>>(mut self, v: Option<T>) -> Self {
        match v {
            Some(v) => self.input.set("version_stage", v.into()),
            None => self.input.clear("version_stage"),
        }
        self
    }

    /// The region override supplied at construction, if any.
    pub fn region(&self) -> Option<&str> {
        self.input.region()
    }

    /// Sets the region override.
    pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
        self.input.set_region(Some(v.into()));
        self
    }

    /// Validates the request and marshals it into a transport-ready
    /// [Request].
    pub fn build(&self) -> awscore::Result<Request> {
        self.input.build()
    }
}

impl Default for GetSecretValueRequest {
    fn default() -> Self {
        Self::new()
    }
}

impl From<serde_json::Value> for GetSecretValueRequest {
    fn from(config: serde_json::Value) -> Self {
        Self {
            input: Input::from_config(&GET_SECRET_VALUE, config),
        }
    }
}

static LIST_SECRETS: OperationSchema = OperationSchema {
    service: "secretsmanager",
    operation: "ListSecrets",
    input: "ListSecretsRequest",
    method: http::Method::POST,
    path: "/",
    fields: &[
        FieldSchema {
            name: "max_results",
            wire_name: "MaxResults",
            required: false,
            kind: FieldKind::Integer,
            location: FieldLocation::Body,
        },
        FieldSchema {
            name: "next_token",
            wire_name: "NextToken",
            required: false,
            kind: FieldKind::String,
            location: FieldLocation::Body,
        },
    ],
};

/// The request for `ListSecrets`.
///
/// Lists the secrets that are stored by Secrets Manager in the AWS
/// account. All parameters are optional; a request with none set lists
/// the first page of secrets.
#[derive(Clone, Debug, PartialEq)]
pub struct ListSecretsRequest {
    input: Input,
}

impl ListSecretsRequest {
    pub fn new() -> Self {
        Self {
            input: Input::new(&LIST_SECRETS),
        }
    }

    /// Accepts either a configuration object or an existing request.
    pub fn create<T: Into<Self>>(input: T) -> Self {
        input.into()
    }

    /// The number of results to include in the response, between 1
    /// and 100.
    pub fn max_results(&self) -> Option<i64> {
        self.input.get_i64("max_results")
    }

    /// Sets the value of `max_results`.
    pub fn set_max_results(mut self, v: i64) -> Self {
        self.input.set("max_results", v);
        self
    }

    /// Sets or clears the value of `max_results`.
    pub fn set_or_clear_max_results(mut self, v: Option<i64>) -> Self {
        match v {
            Some(v) => self.input.set("max_results", v),
            None => self.input.clear("max_results"),
        }
        self
    }

    /// A token that indicates where the output should continue from, as
    /// returned by a previous call.
    pub fn next_token(&self) -> Option<&str> {
        self.input.get_str("next_token")
    }

    /// Sets the value of `next_token`.
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.input.set("next_token", v.into());
        self
    }

    /// Sets or clears the value of `next_token`.
    pub fn set_or_clear_next_token<T: Into<String>>(mut self, v: Option<T>) -> Self {
        match v {
            Some(v) => self.input.set("next_token", v.into()),
            None => self.input.clear("next_token"),
        }
        self
    }

    /// The region override supplied at construction, if any.
    pub fn region(&self) -> Option<&str> {
        self.input.region()
    }

    /// Sets the region override.
    pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
        self.input.set_region(Some(v.into()));
        self
    }

    /// Validates the request and marshals it into a transport-ready
    /// [Request].
    pub fn build(&self) -> awscore::Result<Request> {
        self.input.build()
    }
}

impl Default for ListSecretsRequest {
    fn default() -> Self {
        Self::new()
    }
}

impl From<serde_json::Value> for ListSecretsRequest {
    fn from(config: serde_json::Value) -> Self {
        Self {
            input: Input::from_config(&LIST_SECRETS, config),
        }
    }
}
