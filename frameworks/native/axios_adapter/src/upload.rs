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

//! Multipart uploads through the request service.
//!
//! Text entries of the form travel as plain parts. `internal://` URIs and
//! buffers travel as files; buffers are staged in the [`TempStore`] first
//! and removed again once the upload has settled.

use std::sync::{Arc, Mutex};

use netstack_rs::HttpData;
use request_core::{
    File, HeaderReceive, RequestAgent, RequestData, SubscribeType, TaskState, UploadTask,
};
use request_utils::context::ContextError;
use request_utils::{debug, error, info, warn};

use crate::config::{ProgressEvent, RequestBody, RequestConfig};
use crate::error::{AxiosError, ErrorCode};
use crate::form_data::{FormData, FormValue};
use crate::handle::NativeHandle;
use crate::options::{request_url, upload_options};
use crate::settle::{settle, TransportOutcome};
use crate::temp::{TempStore, TEMP_RETENTION};
use crate::terminal;

pub const MISSING_PARAMETERS: &str = "Cannot read properties, please check the parameters!";

/// A form split into its file parts and plain parts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormParts {
    pub files: Vec<File>,
    pub data: Vec<RequestData>,
}

/// Splits `form`, staging buffers in `store`.
///
/// A buffer is written under its entry option, or under a generated name.
///
/// # Errors
///
/// `BadOption` if a buffer cannot be written.
pub fn split_form(form: &FormData, store: &TempStore) -> Result<FormParts, AxiosError> {
    let mut parts = FormParts::default();
    for (name, entry) in form.entries() {
        if let Some(uri) = entry.value.internal_uri() {
            parts.files.push(File::from_uri(name, uri));
            continue;
        }
        match &entry.value {
            FormValue::Buffer(bytes) => {
                let file_name = match entry.option.as_deref().filter(|o| !o.is_empty()) {
                    Some(option) => option.to_string(),
                    None => TempStore::generate_name(),
                };
                let uri = store.write(&file_name, bytes).map_err(|e| {
                    error!("stage {} failed: {}", file_name, e);
                    AxiosError::bad_option(format!(
                        "The file operation failed with error message: {}",
                        e
                    ))
                })?;
                parts.files.push(File {
                    filename: file_name,
                    name: name.to_string(),
                    uri,
                    file_type: String::new(),
                });
            }
            FormValue::Text(text) => parts.data.push(RequestData::new(name, text)),
        }
    }
    Ok(parts)
}

enum Terminal {
    Complete(HeaderReceive),
    Fail(Vec<TaskState>),
}

/// Uploads the form body of `config`.
///
/// Staged files older than [`TEMP_RETENTION`] are purged before the request
/// is built. The upload settles on `complete` only once `headerReceive` has
/// delivered the response; the body becomes the data, the status is 200.
/// After settling, the files staged for this upload are removed.
///
/// # Errors
///
/// `BadOption` for a missing context, form body or cache directory, or an
/// unwritable buffer; validation errors of the URL; `BadOptionValue` if the
/// agent refuses the options; `Network` if scheduling fails; the first state
/// of a `fail` event as message and `Native` code.
pub async fn upload(
    agent: &dyn RequestAgent,
    config: Arc<RequestConfig>,
) -> Result<TransportOutcome, AxiosError> {
    let (context, form) = match (&config.context, &config.data) {
        (Some(context), Some(RequestBody::Form(form))) => (context.clone(), form),
        _ => return Err(AxiosError::bad_option(MISSING_PARAMETERS)),
    };
    let cache_dir = context.resolve_cache_dir().await.map_err(|e| {
        error!("cache directory unavailable: {}", e);
        match e {
            ContextError::Accessor(msg) => AxiosError::bad_option(msg),
            _ => AxiosError::bad_option(MISSING_PARAMETERS),
        }
    })?;
    let store = TempStore::new(&cache_dir);
    let purged = store.purge_expired(TEMP_RETENTION);
    if purged > 0 {
        debug!("purged {} expired staged files", purged);
    }
    let url = request_url(&config)?;

    let parts = split_form(form, &store)?;
    let options = upload_options(&config, &url, parts.files, parts.data);
    let files = options.files.clone();

    info!("upload {} files and {} fields to {}", files.len(), options.data.len(), url);
    let pending = agent.upload_file(&context, options).map_err(|e| {
        error!("upload refused: {}", e);
        AxiosError::bad_option_value(e.to_string()).with_config(config.clone())
    })?;
    let task = pending.await.map_err(|e| {
        error!("upload not scheduled: {}", e);
        AxiosError::network(e.to_string()).with_config(config.clone())
    })?;

    let header = subscribe(task.as_ref(), &config)
        .await
        .map_err(|e| e.with_config(config.clone()))?;

    let outcome = TransportOutcome::new(
        HttpData::Text(header.body.unwrap_or_default()),
        200,
        config,
    )
    .with_headers(header.headers)
    .with_request(NativeHandle::Upload(task));
    let result = settle(outcome);
    store.remove_uploaded(&files);
    result
}

// Waits for the response of `task`.
async fn subscribe(
    task: &dyn UploadTask,
    config: &RequestConfig,
) -> Result<HeaderReceive, AxiosError> {
    if let Some(callback) = config.on_upload_progress.clone() {
        task.on_progress(Box::new(move |loaded, total| {
            callback(ProgressEvent { loaded, total })
        }));
    }

    let (sender, receiver) = terminal::channel();
    let received = Arc::new(Mutex::new(None::<HeaderReceive>));

    let slot = received.clone();
    task.on_header_receive(Box::new(move |header| {
        if let Ok(mut slot) = slot.lock() {
            *slot = Some(header);
        }
    }));

    let complete = sender.clone();
    task.on_complete(Box::new(move || {
        let header = received.lock().ok().and_then(|mut slot| slot.take());
        match header {
            Some(header) => {
                complete.send(Terminal::Complete(header));
            }
            None => warn!(
                "upload {} before {}, not settling",
                SubscribeType::Complete.as_str(),
                SubscribeType::HeaderReceive.as_str()
            ),
        }
    }));
    task.on_fail(Box::new(move |states| {
        sender.send(Terminal::Fail(states));
    }));

    match receiver.await {
        Ok(Terminal::Complete(header)) => Ok(header),
        Ok(Terminal::Fail(states)) => Err(fail_error(states)),
        Err(_) => Err(AxiosError::network("upload finished without a response")),
    }
}

fn fail_error(states: Vec<TaskState>) -> AxiosError {
    match states.into_iter().next() {
        Some(state) => {
            error!("upload of {} failed: {} {}", state.path, state.response_code, state.message);
            let code = i32::try_from(state.response_code).unwrap_or(i32::MAX);
            AxiosError::new(state.message, ErrorCode::Native(code))
        }
        None => {
            error!("upload failed without task states");
            AxiosError::new("", ErrorCode::Unspecified)
        }
    }
}
