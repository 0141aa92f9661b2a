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

//! Error type of the request service.

use std::fmt;

use crate::error_code;

/// An error reported by the request service when starting a task.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestError {
    /// Service error code, see [`error_code`].
    code: i32,
    /// Human-readable description.
    message: String,
}

impl RequestError {
    /// Creates a new error.
    pub fn new<S: Into<String>>(code: i32, message: S) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Creates a parameter check failure.
    pub fn parameter<S: Into<String>>(message: S) -> Self {
        Self::new(error_code::PARAMETER_CHECK, message)
    }

    /// Returns the error code.
    pub fn code(&self) -> i32 {
        self.code
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for RequestError {}
