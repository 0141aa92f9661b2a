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

//! Errors surfaced to the caller.
//!
//! Every rejection carries a classification [`ErrorCode`] and, when known,
//! the configuration it came from plus the native handle and the outcome that
//! were available when it was raised.

use std::fmt;
use std::sync::Arc;

use crate::config::RequestConfig;
use crate::handle::NativeHandle;
use crate::settle::TransportOutcome;

/// Classification of an [`AxiosError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    /// Required configuration is missing.
    BadOption,
    /// A configuration value is malformed, or the native call threw.
    BadOptionValue,
    /// The native call was rejected or reported a failure.
    Network,
    /// Settled with a 4xx status.
    BadRequest,
    /// Settled with a 5xx status.
    BadResponse,
    /// Code reported by the native side.
    Native(i32),
    /// No code is available.
    Unspecified,
}

impl ErrorCode {
    /// Returns the axios name of the code. Native and missing codes have none.
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            ErrorCode::BadOption => Some("ERR_BAD_OPTION"),
            ErrorCode::BadOptionValue => Some("ERR_BAD_OPTION_VALUE"),
            ErrorCode::Network => Some("ERR_NETWORK"),
            ErrorCode::BadRequest => Some("ERR_BAD_REQUEST"),
            ErrorCode::BadResponse => Some("ERR_BAD_RESPONSE"),
            ErrorCode::Native(_) | ErrorCode::Unspecified => None,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::Native(code) => write!(f, "{}", code),
            ErrorCode::Unspecified => Ok(()),
            other => f.write_str(other.as_str().unwrap_or_default()),
        }
    }
}

/// A rejected request.
#[derive(Clone, Debug)]
pub struct AxiosError {
    message: String,
    code: ErrorCode,
    config: Option<Arc<RequestConfig>>,
    request: Option<NativeHandle>,
    response: Option<Box<TransportOutcome>>,
}

impl AxiosError {
    pub fn new<S: Into<String>>(message: S, code: ErrorCode) -> Self {
        Self {
            message: message.into(),
            code,
            config: None,
            request: None,
            response: None,
        }
    }

    pub fn bad_option<S: Into<String>>(message: S) -> Self {
        Self::new(message, ErrorCode::BadOption)
    }

    pub fn bad_option_value<S: Into<String>>(message: S) -> Self {
        Self::new(message, ErrorCode::BadOptionValue)
    }

    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::new(message, ErrorCode::Network)
    }

    /// Attaches the configuration of the failed request.
    pub fn with_config(mut self, config: Arc<RequestConfig>) -> Self {
        self.config = Some(config);
        self
    }

    /// Attaches the native handle of the failed request.
    pub fn with_request(mut self, request: NativeHandle) -> Self {
        self.request = Some(request);
        self
    }

    /// Attaches the outcome a status check rejected.
    pub fn with_response(mut self, response: TransportOutcome) -> Self {
        self.response = Some(Box::new(response));
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn config(&self) -> Option<&Arc<RequestConfig>> {
        self.config.as_ref()
    }

    pub fn request(&self) -> Option<&NativeHandle> {
        self.request.as_ref()
    }

    pub fn response(&self) -> Option<&TransportOutcome> {
        self.response.as_deref()
    }
}

impl fmt::Display for AxiosError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            ErrorCode::Unspecified => write!(f, "{}", self.message),
            code => write!(f, "[{}] {}", code, self.message),
        }
    }
}

impl std::error::Error for AxiosError {}
