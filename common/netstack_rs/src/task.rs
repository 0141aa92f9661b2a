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

//! Native request handles.
//!
//! A handle is obtained from an [`HttpClient`], used for exactly one
//! [`request`](HttpRequest::request) and then released with
//! [`destroy`](HttpRequest::destroy).

use std::sync::Arc;

use crate::request::{HttpRequestOptions, RequestCallback};

/// A native HTTP request object.
///
/// # Examples
///
/// ```
/// use netstack_rs::{HttpClient, HttpRequestOptions, RequestCallback};
///
/// struct Ignore;
/// impl RequestCallback for Ignore {}
///
/// fn fire(client: &dyn HttpClient) {
///     let request = client.create_http();
///     request.request(
///         "https://example.com",
///         HttpRequestOptions::new("GET"),
///         Box::new(Ignore),
///     );
/// }
/// ```
pub trait HttpRequest: Send + Sync {
    /// Starts the request.
    ///
    /// The callback receives exactly one of `on_success` or `on_fail`,
    /// possibly before this method returns.
    fn request(&self, url: &str, options: HttpRequestOptions, callback: Box<dyn RequestCallback>);

    /// Releases the native request object.
    fn destroy(&self);
}

/// Factory for native request objects.
pub trait HttpClient: Send + Sync {
    /// Creates a fresh request object.
    fn create_http(&self) -> Arc<dyn HttpRequest>;
}
