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

//! Client types for AWS Lambda.
//!
//! This crate contains the typed errors for the Lambda operations used in
//! this repository, in particular the SnapStart restore failures. Each one
//! reports a `Type` discriminator alongside the message, identifying
//! whether the caller or the service caused the failure.

/// The typed errors this service declares.
pub mod exception;
