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

//! Errors returned when marshalling requests and by the services themselves.
//!
//! The client libraries distinguish between errors detected before a request
//! leaves the process (a required field was never set, the body cannot be
//! serialized) and errors reported by the service after a request was
//! executed. The former are always recoverable by fixing the input and
//! building again; the latter carry whatever detail the service included in
//! its response.

mod core_error;
mod required_field;
pub use core_error::*;
pub use required_field::*;
