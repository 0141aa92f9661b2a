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

//! Configuration of upload and download tasks.

use std::collections::HashMap;

use crate::file::{File, RequestData};

/// Configuration of a download task.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DownloadConfig {
    /// Resource to download.
    pub url: String,
    /// Request headers.
    pub header: HashMap<String, String>,
    /// Whether the task may run on metered connections.
    pub enable_metered: bool,
    /// Whether the task may run while roaming.
    pub enable_roaming: bool,
    /// Description shown in the notification.
    pub description: String,
    /// Title shown in the notification.
    pub title: String,
    /// Destination path of the downloaded file.
    pub file_path: Option<String>,
    /// Whether the task runs in background mode.
    pub background: bool,
}

/// Builder for creating a [`DownloadConfig`] with a fluent interface.
///
/// # Examples
///
/// ```rust
/// use request_core::config::DownloadConfigBuilder;
///
/// let config = DownloadConfigBuilder::new("https://example.com/a.bin")
///     .title("download")
///     .metered(true)
///     .file_path("a.bin")
///     .build();
/// assert!(config.enable_metered);
/// ```
pub struct DownloadConfigBuilder {
    url: String,
    headers: Option<HashMap<String, String>>,

    // network configuration
    enable_metered: Option<bool>,
    enable_roaming: Option<bool>,

    // description of the task
    description: Option<String>,
    title: Option<String>,

    background: Option<bool>,
    file_path: Option<String>,
}

impl DownloadConfigBuilder {
    /// Creates a builder for downloading `url`.
    pub fn new(url: &str) -> Self {
        DownloadConfigBuilder {
            url: url.to_string(),
            headers: None,
            enable_metered: None,
            enable_roaming: None,
            description: None,
            title: None,
            background: None,
            file_path: None,
        }
    }

    /// Sets HTTP headers for the request.
    pub fn headers(&mut self, headers: HashMap<String, String>) -> &mut Self {
        self.headers = Some(headers);
        self
    }

    /// Sets whether the task should run on metered connections.
    pub fn metered(&mut self, enable: bool) -> &mut Self {
        self.enable_metered = Some(enable);
        self
    }

    /// Sets whether the task should run on roaming connections.
    pub fn roaming(&mut self, enable: bool) -> &mut Self {
        self.enable_roaming = Some(enable);
        self
    }

    /// Sets the description for the task.
    pub fn description(&mut self, description: &str) -> &mut Self {
        self.description = Some(description.to_string());
        self
    }

    /// Sets the title for the task.
    pub fn title(&mut self, title: &str) -> &mut Self {
        self.title = Some(title.to_string());
        self
    }

    /// Sets whether the task should run in background mode.
    pub fn background(&mut self, background: bool) -> &mut Self {
        self.background = Some(background);
        self
    }

    /// Sets the destination path of the download.
    pub fn file_path(&mut self, file_path: &str) -> &mut Self {
        self.file_path = Some(file_path.to_string());
        self
    }

    /// Builds the configuration, using defaults for unset values.
    pub fn build(&self) -> DownloadConfig {
        DownloadConfig {
            url: self.url.clone(),
            header: self.headers.clone().unwrap_or_default(),
            enable_metered: self.enable_metered.unwrap_or(false),
            enable_roaming: self.enable_roaming.unwrap_or(false),
            description: self.description.clone().unwrap_or_default(),
            title: self.title.clone().unwrap_or_default(),
            file_path: self.file_path.clone(),
            background: self.background.unwrap_or(false),
        }
    }
}

/// Configuration of a multipart upload task.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadConfig {
    /// Upload target.
    pub url: String,
    /// Request headers.
    pub header: HashMap<String, String>,
    /// Uppercase HTTP method, `POST` or `PUT`.
    pub method: String,
    /// File parts.
    pub files: Vec<File>,
    /// Plain parts.
    pub data: Vec<RequestData>,
}
