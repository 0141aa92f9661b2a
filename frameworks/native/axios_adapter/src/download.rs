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

//! Downloads through the request service.

use std::sync::Arc;

use netstack_rs::HttpData;
use request_core::{DownloadTask, RequestAgent, SubscribeType};
use request_utils::{error, info};

use crate::config::{ProgressEvent, RequestConfig};
use crate::error::AxiosError;
use crate::handle::NativeHandle;
use crate::options::{download_options, request_url};
use crate::settle::{settle, TransportOutcome};
use crate::terminal;

/// Data of a settled download. The service reports nothing richer.
pub const DOWNLOAD_SUCCESS: &str = "download success!";

enum Terminal {
    Complete,
    Fail(i32),
}

/// Downloads `config.url` to `config.file_path`.
///
/// The download settles with [`DOWNLOAD_SUCCESS`] and status 200 on
/// `complete`. The task is left to the service once it has finished.
///
/// # Errors
///
/// Validation errors; `BadOptionValue` if the agent refuses the options;
/// `Network` if scheduling fails or the task reports `fail`, whose code
/// becomes the message.
pub async fn download(
    agent: &dyn RequestAgent,
    config: Arc<RequestConfig>,
) -> Result<TransportOutcome, AxiosError> {
    let url = request_url(&config)?;
    let options = download_options(&config, &url);

    info!("download {} to {:?}", url, options.file_path);
    let pending = agent
        .download_file(config.context.as_ref(), options)
        .map_err(|e| {
            error!("download refused: {}", e);
            AxiosError::bad_option_value(e.to_string()).with_config(config.clone())
        })?;
    let task = pending.await.map_err(|e| {
        error!("download not scheduled: {}", e);
        AxiosError::network(e.to_string()).with_config(config.clone())
    })?;

    subscribe(task.as_ref(), &config).await.map_err(|e| {
        e.with_config(config.clone())
            .with_request(NativeHandle::Download(task.clone()))
    })?;

    let outcome = TransportOutcome::new(HttpData::Text(DOWNLOAD_SUCCESS.to_string()), 200, config)
        .with_request(NativeHandle::Download(task));
    settle(outcome)
}

// Waits for the terminal event of `task`.
async fn subscribe(task: &dyn DownloadTask, config: &RequestConfig) -> Result<(), AxiosError> {
    if let Some(callback) = config.on_download_progress.clone() {
        task.on_progress(Box::new(move |loaded, total| {
            callback(ProgressEvent { loaded, total })
        }));
    }

    let (sender, receiver) = terminal::channel();
    let fail = sender.clone();
    task.on_fail(Box::new(move |code| {
        fail.send(Terminal::Fail(code));
    }));
    task.on_complete(Box::new(move || {
        sender.send(Terminal::Complete);
    }));

    match receiver.await {
        Ok(Terminal::Complete) => Ok(()),
        Ok(Terminal::Fail(code)) => {
            error!("download {} with code {}", SubscribeType::Fail.as_str(), code);
            Err(AxiosError::network(code.to_string()))
        }
        Err(_) => Err(AxiosError::network("download finished without a result")),
    }
}
