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

//! Core types of the platform upload/download service.
//!
//! Describes what an upload or download task is started with
//! ([`config`], [`file`]), what its events carry ([`info`]), and how tasks
//! are started and observed ([`task`]). The service itself is provided by
//! the platform behind the [`task::RequestAgent`] trait.

#![allow(missing_docs, clippy::new_without_default)]

pub mod config;
pub mod error;
pub mod error_code;
pub mod file;
pub mod info;
pub mod task;

pub use config::{DownloadConfig, DownloadConfigBuilder, UploadConfig};
pub use error::RequestError;
pub use file::{File, RequestData};
pub use info::{HeaderReceive, SubscribeType, TaskState};
pub use task::{DownloadTask, RequestAgent, UploadTask};
