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

//! Client types for AWS Secrets Manager.
//!
//! This crate contains the request inputs and typed errors for the Secrets
//! Manager operations used in this repository. Building an input produces
//! a transport-ready request; executing it, signing it, and retrying it is
//! the job of a transport layer built on these types.

/// The request inputs, one per operation.
pub mod input;

/// The typed errors this service declares.
pub mod exception;
