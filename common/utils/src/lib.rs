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

//! Common utilities for request operations.
//!
//! This crate provides a collection of utility functions and modules shared by
//! the native bindings and the adapter, including the application context,
//! random number generation, file helpers and logging.

#![warn(missing_docs)]
#![allow(missing_docs, clippy::new_without_default)]

/// Application context and cache directory resolution.
pub mod context;

/// Fast pseudorandom number generation utilities.
pub mod fastrand;

/// File system helpers used for temporary upload storage.
pub mod file_control;

// Logging goes through the `log` facade; crates import the macros from here.
pub use log::{debug, error, info, warn};
