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

//! Transport selection.

use std::path::Path;
use std::sync::Arc;

use netstack_rs::HttpClient;
use request_core::RequestAgent;
use request_utils::file_control::try_path_exists;
use request_utils::{debug, error};

use crate::config::{RequestBody, RequestConfig};
use crate::error::AxiosError;
use crate::settle::TransportOutcome;
use crate::{download, http, upload};

pub const FILE_EXISTS: &str = "The file already exist, please delete the file first!";

/// The transport a request goes through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportKind {
    Http,
    Download,
    Upload,
}

/// Picks the transport for `config`.
///
/// A form body posted with a context is uploaded; a `GET` with a file path
/// is downloaded; everything else is a plain request.
pub fn select_transport(config: &RequestConfig) -> TransportKind {
    let is_form = matches!(config.data, Some(RequestBody::Form(_)));
    if is_form && config.is_method("post") && config.context.is_some() {
        TransportKind::Upload
    } else if config.file_path.as_deref().is_some_and(|p| !p.is_empty())
        && config.is_method("get")
    {
        TransportKind::Download
    } else {
        TransportKind::Http
    }
}

/// Resolves where a download lands.
///
/// `file_path` is kept when it already lies in `cache_dir` or there is no
/// cache directory; otherwise it is taken relative to `cache_dir`.
///
/// # Examples
///
/// ```
/// use axios_ohos_adapter::resolve_download_path;
///
/// assert_eq!(resolve_download_path("/data/cache", "f.bin"), "/data/cache/f.bin");
/// assert_eq!(resolve_download_path("/data/cache", "/data/cache/f.bin"), "/data/cache/f.bin");
/// assert_eq!(resolve_download_path("", "f.bin"), "f.bin");
/// ```
pub fn resolve_download_path(cache_dir: &str, file_path: &str) -> String {
    if cache_dir.is_empty() || file_path.contains(cache_dir) {
        file_path.to_string()
    } else {
        format!("{}/{}", cache_dir, file_path)
    }
}

/// Sends requests through the native network stack.
#[derive(Clone)]
pub struct Adapter {
    http: Arc<dyn HttpClient>,
    agent: Arc<dyn RequestAgent>,
}

impl Adapter {
    pub fn new(http: Arc<dyn HttpClient>, agent: Arc<dyn RequestAgent>) -> Self {
        Self { http, agent }
    }

    /// Sends `config` through the transport [`select_transport`] picks.
    ///
    /// # Errors
    ///
    /// Downloads to a path that already exists, or whose existence cannot be
    /// checked, fail with `BadOption` before anything is started. Otherwise
    /// see [`http::send`], [`download::download`] and [`upload::upload`].
    pub async fn request(&self, config: RequestConfig) -> Result<TransportOutcome, AxiosError> {
        let config = Arc::new(config);
        let kind = select_transport(&config);
        debug!("transport {:?} for {:?}", kind, config.url);
        match kind {
            TransportKind::Upload => upload::upload(self.agent.as_ref(), config).await,
            TransportKind::Download => {
                check_destination(&config)?;
                download::download(self.agent.as_ref(), config).await
            }
            TransportKind::Http => http::send(self.http.as_ref(), config).await,
        }
    }
}

fn check_destination(config: &RequestConfig) -> Result<(), AxiosError> {
    let file_path = config.file_path.as_deref().unwrap_or_default();
    let cache_dir = config
        .context
        .as_ref()
        .and_then(|context| context.cache_dir())
        .unwrap_or_default();
    let path = resolve_download_path(cache_dir, file_path);
    match try_path_exists(Path::new(&path)) {
        Ok(false) => Ok(()),
        Ok(true) => {
            error!("download destination {} exists", path);
            Err(AxiosError::bad_option(FILE_EXISTS))
        }
        Err(e) => {
            error!("check download destination {} failed: {}", path, e);
            Err(AxiosError::bad_option(e.to_string()))
        }
    }
}
