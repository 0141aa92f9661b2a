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

//! Request configuration consumed by the adapter.
//!
//! A [`RequestConfig`] is assembled by the caller, usually through a
//! [`RequestConfigBuilder`], and is shared behind an `Arc` once it has been
//! handed to a transport. Outcomes and errors echo that same `Arc`.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use request_utils::context::Context;

use crate::form_data::FormData;

/// Bytes transferred so far and the expected total.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProgressEvent {
    pub loaded: u64,
    pub total: u64,
}

/// Receives transfer progress of downloads and uploads.
pub type ProgressCallback = Arc<dyn Fn(ProgressEvent) + Send + Sync>;

/// Turns query parameters into the query string, replacing the default
/// encoding.
pub type ParamsSerializer = Arc<dyn Fn(&[(String, String)]) -> String + Send + Sync>;

/// Request body.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    /// Text sent verbatim.
    Text(String),
    /// JSON value handed to the native side as an object.
    Json(serde_json::Value),
    /// Raw bytes.
    Raw(Vec<u8>),
    /// Multipart form, sent through the upload transport.
    Form(FormData),
}

impl From<FormData> for RequestBody {
    fn from(form: FormData) -> Self {
        RequestBody::Form(form)
    }
}

impl From<&str> for RequestBody {
    fn from(text: &str) -> Self {
        RequestBody::Text(text.to_string())
    }
}

impl From<String> for RequestBody {
    fn from(text: String) -> Self {
        RequestBody::Text(text)
    }
}

impl From<Vec<u8>> for RequestBody {
    fn from(bytes: Vec<u8>) -> Self {
        RequestBody::Raw(bytes)
    }
}

impl From<serde_json::Value> for RequestBody {
    fn from(value: serde_json::Value) -> Self {
        RequestBody::Json(value)
    }
}

/// Client certificate material for mutual TLS.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientCertConfig {
    pub cert_path: String,
    /// Certificate type, `pem`, `der` or `p12` in any case.
    pub cert_type: Option<String>,
    pub key_path: String,
    pub key_passwd: Option<String>,
}

/// Proxy settings of a plain request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProxyConfig {
    /// Use (`true`) or bypass (`false`) the system proxy.
    System(bool),
    /// Route through the given proxy.
    Custom {
        host: String,
        port: u16,
        exclusion_list: Vec<String>,
    },
}

/// Status code policy applied by [`settle`](crate::settle::settle).
#[derive(Clone)]
pub enum ValidateStatus {
    /// Accepts `min..=max`.
    Range { min: u32, max: u32 },
    /// Accepts the codes the predicate returns `true` for.
    Predicate(Arc<dyn Fn(u32) -> bool + Send + Sync>),
    /// Accepts every status code.
    AcceptAll,
}

impl ValidateStatus {
    /// Checks whether `status` resolves the request.
    pub fn accepts(&self, status: u32) -> bool {
        match self {
            ValidateStatus::Range { min, max } => (*min..=*max).contains(&status),
            ValidateStatus::Predicate(predicate) => predicate(status),
            ValidateStatus::AcceptAll => true,
        }
    }
}

impl Default for ValidateStatus {
    fn default() -> Self {
        ValidateStatus::Range { min: 200, max: 299 }
    }
}

impl fmt::Debug for ValidateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidateStatus::Range { min, max } => f
                .debug_struct("Range")
                .field("min", min)
                .field("max", max)
                .finish(),
            ValidateStatus::Predicate(_) => f.write_str("Predicate"),
            ValidateStatus::AcceptAll => f.write_str("AcceptAll"),
        }
    }
}

/// Configuration of a single request.
#[derive(Clone)]
pub struct RequestConfig {
    /// HTTP method in any case, `get` by default.
    pub method: String,
    pub url: Option<String>,
    /// Prefixed to `url` unless `url` is absolute.
    pub base_url: Option<String>,
    /// Query parameters, in order. Names may repeat.
    pub params: Vec<(String, String)>,
    pub params_serializer: Option<ParamsSerializer>,
    pub headers: HashMap<String, String>,
    pub data: Option<RequestBody>,
    /// Read timeout in milliseconds.
    pub timeout: Option<u64>,
    /// Response type hint: `string`, `object` or `array_buffer`.
    pub response_type: Option<String>,
    pub priority: Option<u32>,
    pub ca_path: Option<String>,
    pub client_cert: Option<ClientCertConfig>,
    pub proxy: Option<ProxyConfig>,
    /// Download destination. Relative paths live under the cache directory.
    pub file_path: Option<String>,
    /// Application context. Required for uploads.
    pub context: Option<Context>,
    pub on_upload_progress: Option<ProgressCallback>,
    pub on_download_progress: Option<ProgressCallback>,
    pub validate_status: ValidateStatus,
}

impl RequestConfig {
    /// Creates a builder starting from the default configuration.
    pub fn builder() -> RequestConfigBuilder {
        RequestConfigBuilder::new()
    }

    /// Returns the method in uppercase.
    pub fn method_upper(&self) -> String {
        self.method.to_ascii_uppercase()
    }

    /// Checks the method, ignoring case.
    pub fn is_method(&self, method: &str) -> bool {
        self.method.eq_ignore_ascii_case(method)
    }
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            method: "get".to_string(),
            url: None,
            base_url: None,
            params: Vec::new(),
            params_serializer: None,
            headers: HashMap::new(),
            data: None,
            timeout: None,
            response_type: None,
            priority: None,
            ca_path: None,
            client_cert: None,
            proxy: None,
            file_path: None,
            context: None,
            on_upload_progress: None,
            on_download_progress: None,
            validate_status: ValidateStatus::default(),
        }
    }
}

impl fmt::Debug for RequestConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestConfig")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("base_url", &self.base_url)
            .field("params", &self.params)
            .field("headers", &self.headers)
            .field("data", &self.data)
            .field("timeout", &self.timeout)
            .field("response_type", &self.response_type)
            .field("file_path", &self.file_path)
            .field("context", &self.context)
            .field("validate_status", &self.validate_status)
            .finish_non_exhaustive()
    }
}

/// Builder for [`RequestConfig`].
///
/// # Examples
///
/// ```
/// use axios_ohos_adapter::RequestConfig;
///
/// let config = RequestConfig::builder()
///     .method("post")
///     .url("https://example.com/items")
///     .header("Content-Type", "application/json")
///     .timeout(10_000)
///     .build();
/// assert_eq!(config.method_upper(), "POST");
/// ```
pub struct RequestConfigBuilder {
    inner: RequestConfig,
}

impl RequestConfigBuilder {
    pub fn new() -> Self {
        Self {
            inner: RequestConfig::default(),
        }
    }

    pub fn method(&mut self, method: &str) -> &mut Self {
        self.inner.method = method.to_string();
        self
    }

    pub fn url(&mut self, url: &str) -> &mut Self {
        self.inner.url = Some(url.to_string());
        self
    }

    pub fn base_url(&mut self, base_url: &str) -> &mut Self {
        self.inner.base_url = Some(base_url.to_string());
        self
    }

    /// Appends a query parameter.
    pub fn param(&mut self, name: &str, value: &str) -> &mut Self {
        self.inner.params.push((name.to_string(), value.to_string()));
        self
    }

    pub fn params_serializer(&mut self, serializer: ParamsSerializer) -> &mut Self {
        self.inner.params_serializer = Some(serializer);
        self
    }

    /// Sets a header, replacing any previous value of the same name.
    pub fn header(&mut self, name: &str, value: &str) -> &mut Self {
        self.inner.headers.insert(name.to_string(), value.to_string());
        self
    }

    pub fn data<B: Into<RequestBody>>(&mut self, body: B) -> &mut Self {
        self.inner.data = Some(body.into());
        self
    }

    pub fn timeout(&mut self, millis: u64) -> &mut Self {
        self.inner.timeout = Some(millis);
        self
    }

    pub fn response_type(&mut self, hint: &str) -> &mut Self {
        self.inner.response_type = Some(hint.to_string());
        self
    }

    pub fn priority(&mut self, priority: u32) -> &mut Self {
        self.inner.priority = Some(priority);
        self
    }

    pub fn ca_path(&mut self, path: &str) -> &mut Self {
        self.inner.ca_path = Some(path.to_string());
        self
    }

    pub fn client_cert(&mut self, cert: ClientCertConfig) -> &mut Self {
        self.inner.client_cert = Some(cert);
        self
    }

    pub fn proxy(&mut self, proxy: ProxyConfig) -> &mut Self {
        self.inner.proxy = Some(proxy);
        self
    }

    pub fn file_path(&mut self, path: &str) -> &mut Self {
        self.inner.file_path = Some(path.to_string());
        self
    }

    pub fn context(&mut self, context: Context) -> &mut Self {
        self.inner.context = Some(context);
        self
    }

    pub fn on_upload_progress(&mut self, callback: ProgressCallback) -> &mut Self {
        self.inner.on_upload_progress = Some(callback);
        self
    }

    pub fn on_download_progress(&mut self, callback: ProgressCallback) -> &mut Self {
        self.inner.on_download_progress = Some(callback);
        self
    }

    pub fn validate_status(&mut self, policy: ValidateStatus) -> &mut Self {
        self.inner.validate_status = policy;
        self
    }

    pub fn build(&mut self) -> RequestConfig {
        self.inner.clone()
    }
}
