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

//! Upload and download task handles.
//!
//! Tasks are started through a [`RequestAgent`]. Starting is two-phased: the
//! agent may refuse the configuration synchronously, or accept it and hand
//! back a future that resolves to the task handle once the service has
//! scheduled it. Handlers are then attached per event; `complete` and `fail`
//! are mutually exclusive and fire at most once per task.

use std::sync::Arc;

use futures::future::BoxFuture;
use request_utils::context::Context;

use crate::config::{DownloadConfig, UploadConfig};
use crate::error::RequestError;
use crate::info::{HeaderReceive, TaskState};

/// Receives `(transferred, total)` byte counts.
pub type ProgressHandler = Box<dyn FnMut(u64, u64) + Send>;

/// Receives the `complete` event.
pub type CompleteHandler = Box<dyn FnMut() + Send>;

/// Receives the error code of a failed download.
pub type DownloadFailHandler = Box<dyn FnMut(i32) + Send>;

/// Receives the per-file states of a failed upload.
pub type UploadFailHandler = Box<dyn FnMut(Vec<TaskState>) + Send>;

/// Receives the response of an upload.
pub type HeaderReceiveHandler = Box<dyn FnMut(HeaderReceive) + Send>;

/// Future resolving to a scheduled task, or to the reason it could not be.
pub type TaskFuture<T> = BoxFuture<'static, Result<Arc<T>, RequestError>>;

/// A scheduled download.
pub trait DownloadTask: Send + Sync {
    /// Subscribes to `progress`.
    fn on_progress(&self, handler: ProgressHandler);

    /// Subscribes to `complete`.
    fn on_complete(&self, handler: CompleteHandler);

    /// Subscribes to `fail`.
    fn on_fail(&self, handler: DownloadFailHandler);
}

/// A scheduled multipart upload.
pub trait UploadTask: Send + Sync {
    /// Subscribes to `progress`.
    fn on_progress(&self, handler: ProgressHandler);

    /// Subscribes to `headerReceive`.
    fn on_header_receive(&self, handler: HeaderReceiveHandler);

    /// Subscribes to `complete`.
    fn on_complete(&self, handler: CompleteHandler);

    /// Subscribes to `fail`.
    fn on_fail(&self, handler: UploadFailHandler);
}

/// Entry point of the platform upload/download service.
pub trait RequestAgent: Send + Sync {
    /// Starts a download.
    ///
    /// # Errors
    ///
    /// The outer error means the configuration was refused before anything
    /// was scheduled; the inner one that scheduling failed.
    fn download_file(
        &self,
        context: Option<&Context>,
        config: DownloadConfig,
    ) -> Result<TaskFuture<dyn DownloadTask>, RequestError>;

    /// Starts an upload.
    ///
    /// # Errors
    ///
    /// Same two-phase contract as [`RequestAgent::download_file`].
    fn upload_file(
        &self,
        context: &Context,
        config: UploadConfig,
    ) -> Result<TaskFuture<dyn UploadTask>, RequestError>;
}
