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

//! Axios transport adapter over the OpenHarmony network stack.
//!
//! A [`RequestConfig`] is dispatched by [`Adapter::request`] to one of three
//! transports:
//!
//! * plain requests through the netstack single-shot HTTP call,
//! * downloads through the request service when a destination path is set,
//! * multipart uploads through the request service when the body is a
//!   [`FormData`].
//!
//! Each transport produces exactly one [`TransportOutcome`], which is
//! classified by [`settle`] into a resolved outcome or an [`AxiosError`].

#![allow(missing_docs, clippy::new_without_default)]

pub mod config;
pub mod dispatch;
pub mod download;
pub mod error;
pub mod form_data;
pub mod handle;
pub mod http;
pub mod options;
pub mod settle;
pub mod temp;
pub mod upload;
pub mod url;

mod terminal;


pub use config::{
    ClientCertConfig, ParamsSerializer, ProgressCallback, ProgressEvent, ProxyConfig,
    RequestBody, RequestConfig, RequestConfigBuilder, ValidateStatus,
};
pub use dispatch::{resolve_download_path, select_transport, Adapter, TransportKind};
pub use error::{AxiosError, ErrorCode};
pub use form_data::{FormData, FormEntry, FormValue};
pub use handle::NativeHandle;
pub use settle::{settle, TransportOutcome};
pub use temp::{TempStore, TEMP_RETENTION};
