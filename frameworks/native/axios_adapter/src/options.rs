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

//! Maps a [`RequestConfig`] onto the option shapes of the native calls.
//!
//! Every mapping is a pure function of the configuration. Settings the
//! caller left unset stay unset in the native options.

use std::sync::Arc;

use netstack_rs::{ClientCert, HttpData, HttpDataType, HttpProxy, HttpRequestOptions, UsingProxy};
use request_core::{DownloadConfig, DownloadConfigBuilder, File, RequestData, UploadConfig};

use crate::config::{ClientCertConfig, ProxyConfig, RequestBody, RequestConfig};
use crate::error::AxiosError;
use crate::url::{build_full_path, build_url, FullPath};

pub const URL_MISSING: &str = "Cannot read properties of url!";
pub const FORM_OVER_HTTP: &str = "Multipart form data requires a POST request with a context!";

pub const DOWNLOAD_DESCRIPTION: &str = "download file!";
pub const DOWNLOAD_TITLE: &str = "download";

/// Resolves the URL to request, query string included.
///
/// # Errors
///
/// `BadOption` when there is nothing to request. Any other path is passed on
/// untouched for the native layer to judge.
pub fn request_url(config: &Arc<RequestConfig>) -> Result<String, AxiosError> {
    match build_full_path(config.base_url.as_deref(), config.url.as_deref()) {
        FullPath::Url(path) => Ok(build_url(
            &path,
            &config.params,
            config.params_serializer.as_ref(),
        )),
        FullPath::Empty => Err(AxiosError::bad_option(URL_MISSING).with_config(config.clone())),
    }
}

/// Maps a response type hint onto the native decoding target.
pub fn expect_data_type(hint: &str) -> Option<HttpDataType> {
    match hint.to_ascii_uppercase().as_str() {
        "STRING" => Some(HttpDataType::String),
        "OBJECT" => Some(HttpDataType::Object),
        "ARRAY_BUFFER" => Some(HttpDataType::ArrayBuffer),
        _ => None,
    }
}

pub fn client_cert(cert: &ClientCertConfig) -> ClientCert {
    ClientCert {
        cert_path: cert.cert_path.clone(),
        cert_type: cert.cert_type.as_ref().map(|t| t.to_ascii_uppercase()),
        key_path: cert.key_path.clone(),
        key_password: cert.key_passwd.clone(),
    }
}

pub fn using_proxy(proxy: &ProxyConfig) -> UsingProxy {
    match proxy {
        ProxyConfig::System(enabled) => UsingProxy::System(*enabled),
        ProxyConfig::Custom {
            host,
            port,
            exclusion_list,
        } => UsingProxy::Custom(HttpProxy {
            host: host.clone(),
            port: *port,
            exclusion_list: exclusion_list.clone(),
        }),
    }
}

/// Maps a body onto native request data. Forms have no plain mapping.
pub fn extra_data(body: &RequestBody) -> Option<HttpData> {
    match body {
        RequestBody::Text(text) => Some(HttpData::Text(text.clone())),
        RequestBody::Json(value) => Some(HttpData::Object(value.clone())),
        RequestBody::Raw(bytes) => Some(HttpData::Binary(bytes.clone())),
        RequestBody::Form(_) => None,
    }
}

/// Builds the options of a plain request.
///
/// # Errors
///
/// `BadOptionValue` for a form body, which only the upload transport sends.
pub fn http_options(config: &Arc<RequestConfig>) -> Result<HttpRequestOptions, AxiosError> {
    let mut options = HttpRequestOptions::new(&config.method_upper());
    options.header = config.headers.clone();
    if let Some(body) = &config.data {
        match extra_data(body) {
            Some(data) => options.extra_data = Some(data),
            None => {
                return Err(AxiosError::bad_option_value(FORM_OVER_HTTP).with_config(config.clone()))
            }
        }
    }
    options.read_timeout = config.timeout;
    options.expect_data_type = config.response_type.as_deref().and_then(expect_data_type);
    options.priority = config.priority;
    options.ca_path = config.ca_path.clone();
    options.client_cert = config.client_cert.as_ref().map(client_cert);
    options.using_proxy = config.proxy.as_ref().map(using_proxy);
    Ok(options)
}

/// Builds the options of a download of `url`.
pub fn download_options(config: &RequestConfig, url: &str) -> DownloadConfig {
    let mut builder = DownloadConfigBuilder::new(url);
    builder
        .description(DOWNLOAD_DESCRIPTION)
        .title(DOWNLOAD_TITLE)
        .roaming(true)
        .metered(true)
        .headers(config.headers.clone());
    if let Some(path) = config.file_path.as_deref().filter(|p| !p.is_empty()) {
        builder.file_path(path);
    }
    builder.build()
}

/// Builds the options of an upload of `files` and `data` to `url`.
pub fn upload_options(
    config: &RequestConfig,
    url: &str,
    files: Vec<File>,
    data: Vec<RequestData>,
) -> UploadConfig {
    UploadConfig {
        url: url.to_string(),
        header: config.headers.clone(),
        method: config.method_upper(),
        files,
        data,
    }
}
