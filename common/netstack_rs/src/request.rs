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

//! Options for starting a netstack HTTP request.
//!
//! [`HttpRequestOptions`] mirrors the option object accepted by the native
//! `request` call. Optional fields are left out of the serialized form when
//! they are `None`, so the native side only sees the settings a caller made.

use std::collections::HashMap;

use serde::{Serialize, Serializer};

use crate::error::HttpClientError;
use crate::response::{HttpData, HttpResponse};

/// Body size limit that disables the native 5MB response cap.
///
/// Length enforcement is left to the caller's own limits.
pub const BODY_SIZE_UNLIMITED: u64 = u64::MAX;

/// Options passed to [`HttpRequest::request`](crate::task::HttpRequest::request).
///
/// # Examples
///
/// ```
/// use netstack_rs::{HttpDataType, HttpRequestOptions};
///
/// let mut options = HttpRequestOptions::new("GET");
/// options.read_timeout = Some(30000);
/// options.expect_data_type = Some(HttpDataType::String);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpRequestOptions {
    /// Uppercase HTTP method.
    pub method: String,
    /// Request headers.
    pub header: HashMap<String, String>,
    /// Maximum accepted response body size.
    pub max_limit: u64,
    /// Request body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_data: Option<HttpData>,
    /// Read timeout in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_timeout: Option<u64>,
    /// Type the native side should decode the response body into.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expect_data_type: Option<HttpDataType>,
    /// Request priority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    /// Path to the CA certificate bundle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_path: Option<String>,
    /// Client certificate used for mutual TLS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_cert: Option<ClientCert>,
    /// Proxy selection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub using_proxy: Option<UsingProxy>,
}

impl HttpRequestOptions {
    /// Creates options for `method` with no headers, no body and no limit.
    pub fn new(method: &str) -> Self {
        Self {
            method: method.to_string(),
            header: HashMap::new(),
            max_limit: BODY_SIZE_UNLIMITED,
            extra_data: None,
            read_timeout: None,
            expect_data_type: None,
            priority: None,
            ca_path: None,
            client_cert: None,
            using_proxy: None,
        }
    }
}

/// Native decoding target for the response body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum HttpDataType {
    /// Body is delivered as text.
    String = 0,
    /// Body is parsed as JSON.
    Object = 1,
    /// Body is delivered as raw bytes.
    ArrayBuffer = 2,
}

impl Serialize for HttpDataType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(*self as i32)
    }
}

/// Client certificate material in the shape the native side expects.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientCert {
    /// Path to the certificate file.
    pub cert_path: String,
    /// Uppercase certificate type (`PEM`, `DER`, `P12`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cert_type: Option<String>,
    /// Path to the private key file.
    pub key_path: String,
    /// Password of the private key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_password: Option<String>,
}

/// Proxy selection of a request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum UsingProxy {
    /// Use (`true`) or bypass (`false`) the system proxy.
    System(bool),
    /// Use the given proxy.
    Custom(HttpProxy),
}

/// An explicitly configured HTTP proxy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpProxy {
    /// Proxy host name.
    pub host: String,
    /// Proxy port.
    pub port: u16,
    /// Hosts that bypass the proxy.
    pub exclusion_list: Vec<String>,
}

/// Completion callback of a single-shot request.
///
/// The native side calls exactly one of the methods, exactly once, and drops
/// the callback afterwards.
#[allow(unused_variables)]
pub trait RequestCallback: Send {
    /// Called when the request completes with a response.
    fn on_success(&mut self, response: HttpResponse) {}

    /// Called when the request fails without a response.
    fn on_fail(&mut self, error: HttpClientError) {}
}
