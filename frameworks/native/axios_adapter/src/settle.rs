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

//! Settlement of transport outcomes.

use std::collections::HashMap;
use std::sync::Arc;

use netstack_rs::HttpData;
use request_utils::debug;

use crate::config::RequestConfig;
use crate::error::{AxiosError, ErrorCode};
use crate::handle::NativeHandle;

/// What a transport produced, before the status policy is applied.
#[derive(Clone, Debug)]
pub struct TransportOutcome {
    pub data: HttpData,
    pub status: u32,
    pub status_text: String,
    pub headers: HashMap<String, String>,
    pub config: Arc<RequestConfig>,
    pub request: Option<NativeHandle>,
}

impl TransportOutcome {
    /// Creates an outcome with no status text, headers or handle.
    pub fn new(data: HttpData, status: u32, config: Arc<RequestConfig>) -> Self {
        Self {
            data,
            status,
            status_text: String::new(),
            headers: HashMap::new(),
            config,
            request: None,
        }
    }

    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    pub fn with_request(mut self, request: NativeHandle) -> Self {
        self.request = Some(request);
        self
    }
}

/// Resolves `outcome` if its status is 0 or passes `config.validate_status`.
///
/// # Errors
///
/// A rejected status yields `"Request failed with status code {status}"`,
/// classified as `BadRequest` for 4xx and `BadResponse` for 5xx. The error
/// carries the config, the native handle and the outcome itself.
pub fn settle(outcome: TransportOutcome) -> Result<TransportOutcome, AxiosError> {
    // A status of 0 carries no verdict.
    if outcome.status == 0 || outcome.config.validate_status.accepts(outcome.status) {
        return Ok(outcome);
    }
    debug!("status {} rejected by validate_status", outcome.status);
    let code = match outcome.status / 100 {
        4 => ErrorCode::BadRequest,
        5 => ErrorCode::BadResponse,
        _ => ErrorCode::Unspecified,
    };
    let mut error = AxiosError::new(
        format!("Request failed with status code {}", outcome.status),
        code,
    )
    .with_config(outcome.config.clone());
    if let Some(request) = outcome.request.clone() {
        error = error.with_request(request);
    }
    Err(error.with_response(outcome))
}
