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

//! Error handling for netstack HTTP requests.
//!
//! The native side reports failures as a numeric code plus a message. Codes
//! the platform documents are available as [`HttpErrorCode`]; any other code
//! is kept verbatim in [`HttpClientError`].

use std::fmt;

use serde::Serialize;

/// An error reported by the native request instead of a response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HttpClientError {
    /// Native error code.
    code: i32,
    /// Human-readable description of the error.
    #[serde(rename = "message")]
    msg: String,
}

impl HttpClientError {
    /// Creates a new `HttpClientError` with the given code and message.
    pub fn new<S: Into<String>>(code: i32, msg: S) -> Self {
        Self {
            code,
            msg: msg.into(),
        }
    }

    /// Gets the raw error code.
    pub fn code(&self) -> i32 {
        self.code
    }

    /// Gets the documented error code, or `HttpUnknownOtherError` for codes
    /// outside the documented set.
    pub fn kind(&self) -> HttpErrorCode {
        HttpErrorCode::try_from(self.code).unwrap_or_default()
    }

    /// Gets the human-readable error message.
    pub fn msg(&self) -> &str {
        &self.msg
    }

    /// Serializes the error the way the native side prints it.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.to_string())
    }
}

impl fmt::Display for HttpClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.msg, self.code)
    }
}

impl std::error::Error for HttpClientError {}

/// Documented netstack error codes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum HttpErrorCode {
    /// No error.
    HttpNoneErr = 0,
    /// Missing network permission.
    HttpPermissionDeniedCode = 201,
    /// Invalid parameter.
    HttpParseErrorCode = 401,
    /// Unsupported protocol.
    HttpUnsupportedProtocol = 2300001,
    /// Malformed URL.
    HttpUrlMalformat = 2300003,
    /// Proxy name could not be resolved.
    HttpCouldntResolveProxy = 2300005,
    /// Host name could not be resolved.
    HttpCouldntResolveHost = 2300006,
    /// Connection to the server failed.
    HttpCouldntConnect = 2300007,
    /// Writing received data failed.
    HttpWriteError = 2300023,
    /// Upload failed.
    HttpUploadFailed = 2300025,
    /// Reading the body to send failed.
    HttpReadError = 2300026,
    /// Out of memory.
    HttpOutOfMemory = 2300027,
    /// Operation timed out.
    HttpOperationTimedout = 2300028,
    /// Too many redirects.
    HttpTooManyRedirects = 2300047,
    /// Server returned nothing.
    HttpGotNothing = 2300052,
    /// Sending data failed.
    HttpSendError = 2300055,
    /// Receiving data failed.
    HttpRecvError = 2300056,
    /// Local certificate problem.
    HttpSslCertproblem = 2300058,
    /// Server certificate verification failed.
    HttpPeerFailedVerification = 2300060,
    /// Response exceeded the size limit.
    HttpFilesizeExceeded = 2300063,
    /// CA certificate file is invalid.
    HttpSslCacertBadfile = 2300077,
    /// Any other failure.
    #[default]
    HttpUnknownOtherError = 2300999,
}

impl TryFrom<i32> for HttpErrorCode {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        let code = match value {
            0 => HttpErrorCode::HttpNoneErr,
            201 => HttpErrorCode::HttpPermissionDeniedCode,
            401 => HttpErrorCode::HttpParseErrorCode,
            2300001 => HttpErrorCode::HttpUnsupportedProtocol,
            2300003 => HttpErrorCode::HttpUrlMalformat,
            2300005 => HttpErrorCode::HttpCouldntResolveProxy,
            2300006 => HttpErrorCode::HttpCouldntResolveHost,
            2300007 => HttpErrorCode::HttpCouldntConnect,
            2300023 => HttpErrorCode::HttpWriteError,
            2300025 => HttpErrorCode::HttpUploadFailed,
            2300026 => HttpErrorCode::HttpReadError,
            2300027 => HttpErrorCode::HttpOutOfMemory,
            2300028 => HttpErrorCode::HttpOperationTimedout,
            2300047 => HttpErrorCode::HttpTooManyRedirects,
            2300052 => HttpErrorCode::HttpGotNothing,
            2300055 => HttpErrorCode::HttpSendError,
            2300056 => HttpErrorCode::HttpRecvError,
            2300058 => HttpErrorCode::HttpSslCertproblem,
            2300060 => HttpErrorCode::HttpPeerFailedVerification,
            2300063 => HttpErrorCode::HttpFilesizeExceeded,
            2300077 => HttpErrorCode::HttpSslCacertBadfile,
            2300999 => HttpErrorCode::HttpUnknownOtherError,
            _ => return Err(value),
        };
        Ok(code)
    }
}
