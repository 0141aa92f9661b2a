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

//! Handles of the native objects behind a request.

use std::fmt;
use std::sync::Arc;

use netstack_rs::HttpRequest;
use request_core::{DownloadTask, UploadTask};

/// The native object an outcome or error refers to.
#[derive(Clone)]
pub enum NativeHandle {
    Http(Arc<dyn HttpRequest>),
    Download(Arc<dyn DownloadTask>),
    Upload(Arc<dyn UploadTask>),
}

impl NativeHandle {
    pub fn as_http(&self) -> Option<&Arc<dyn HttpRequest>> {
        match self {
            NativeHandle::Http(request) => Some(request),
            _ => None,
        }
    }

    pub fn as_download(&self) -> Option<&Arc<dyn DownloadTask>> {
        match self {
            NativeHandle::Download(task) => Some(task),
            _ => None,
        }
    }

    pub fn as_upload(&self) -> Option<&Arc<dyn UploadTask>> {
        match self {
            NativeHandle::Upload(task) => Some(task),
            _ => None,
        }
    }
}

impl fmt::Debug for NativeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NativeHandle::Http(_) => f.write_str("NativeHandle::Http"),
            NativeHandle::Download(_) => f.write_str("NativeHandle::Download"),
            NativeHandle::Upload(_) => f.write_str("NativeHandle::Upload"),
        }
    }
}
