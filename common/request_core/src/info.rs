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

//! Payloads of upload and download task events.

use std::collections::HashMap;

/// Events a task handle can be subscribed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubscribeType {
    /// Bytes transferred so far.
    Progress,
    /// Response headers of an upload have arrived.
    HeaderReceive,
    /// Task finished successfully.
    Complete,
    /// Task failed.
    Fail,
}

impl SubscribeType {
    /// Returns the event name used by the platform.
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscribeType::Progress => "progress",
            SubscribeType::HeaderReceive => "headerReceive",
            SubscribeType::Complete => "complete",
            SubscribeType::Fail => "fail",
        }
    }
}

/// Status information for one file of a failed upload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskState {
    /// Path to the file being processed.
    pub path: String,
    /// HTTP response code for this file.
    pub response_code: u32,
    /// Additional status message for this file.
    pub message: String,
}

/// Response of an upload, delivered with the `headerReceive` event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderReceive {
    /// Response headers.
    pub headers: HashMap<String, String>,
    /// Response body, when the server sent one.
    pub body: Option<String>,
}
