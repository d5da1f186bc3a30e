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

//! AWS JSON protocol helpers.
//!
//! This crate contains the types shared by the generated AWS client crates
//! in this repository: the request descriptor produced when an operation
//! input is marshalled, the schema-driven input builder behind every
//! operation's request type, and the typed service exceptions extracted
//! from failed responses.
//!
//! Everything in this crate is a synchronous, in-memory transformation.
//! Executing the requests, signing them, and retrying them is the job of a
//! transport layer built on top of these types.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type returned when building operation inputs.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by generated clients.
pub mod error;

/// Typed service errors and the schema tables that describe them.
pub mod exception;

/// The schema-driven input builder engine.
pub mod input;

/// Maps service error codes to exception schemas.
pub mod registry;

/// The transport-ready request descriptor.
pub mod request;

/// Failed-response decoding.
pub mod response;

/// Static descriptor tables for operations and their fields.
pub mod schema;

mod path_template;
