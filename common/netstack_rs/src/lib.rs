// Copyright (C) 2024 Huawei Device Co., Ltd.
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Rust interface to the netstack HTTP library.
//!
//! This crate describes the single-shot HTTP API of the platform netstack in
//! Rust types: the options a request is started with, the response delivered
//! to its callback, the error codes it reports, and the request handle that
//! must be destroyed once the request has finished.
//!
//! # Modules
//!
//! * [`request`] - Request options and the completion callback
//! * [`task`] - Native request handles and the client that creates them
//! * [`response`] - Response data delivered on success
//! * [`error`] - Error types and well-known error codes

#![warn(
    missing_docs,
    clippy::redundant_static_lifetimes,
    clippy::enum_variant_names,
    clippy::clone_on_copy,
    clippy::unused_async
)]
#![deny(unused_must_use)]
#![allow(missing_docs, clippy::new_without_default)]

/// Request options and the completion callback.
pub mod request;

/// Native request handles and the client that creates them.
///
/// Every handle corresponds to exactly one request and cannot be reused.
pub mod task;

/// Response data delivered on success.
pub mod response;

/// Error types and well-known error codes.
pub mod error;

pub use error::{HttpClientError, HttpErrorCode};
pub use request::{
    ClientCert, HttpDataType, HttpProxy, HttpRequestOptions, RequestCallback, UsingProxy,
    BODY_SIZE_UNLIMITED,
};
pub use response::{HttpData, HttpResponse};
pub use task::{HttpClient, HttpRequest};
