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

//! Staging area for upload payloads.
//!
//! Buffers of a multipart form are written below `{cache_dir}/axios_temp`
//! and handed to the upload service as `internal://cache/axios_temp/{name}`.
//! Files are removed after a successful upload; anything left behind by an
//! interrupted upload is purged once it has not been accessed for
//! [`TEMP_RETENTION`].

use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use request_core::File;
use request_utils::fastrand::fast_random_below;
use request_utils::file_control::{last_access, list_files, remove_file, write_file_sync};
use request_utils::{debug, error, info};

/// Name of the staging directory inside the cache directory.
pub const TEMP_DIR: &str = "axios_temp";

/// Prefix of URIs addressing application files.
pub const INTERNAL_URI_PREFIX: &str = "internal://";

/// Prefix of URIs addressing staged files.
pub const TEMP_URI_PREFIX: &str = "internal://cache/axios_temp/";

/// How long an untouched staged file is kept.
pub const TEMP_RETENTION: Duration = Duration::from_secs(12 * 60 * 60);

/// Staging directory bound to one cache directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TempStore {
    dir: PathBuf,
}

impl TempStore {
    pub fn new<P: AsRef<Path>>(cache_dir: P) -> Self {
        Self {
            dir: cache_dir.as_ref().join(TEMP_DIR),
        }
    }

    /// Path of the staging directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the URI a staged file called `name` is uploaded from.
    pub fn uri_for(name: &str) -> String {
        format!("{}{}", TEMP_URI_PREFIX, name)
    }

    /// Maps a staged file URI back to its path. Other URIs yield `None`.
    pub fn path_for_uri(&self, uri: &str) -> Option<PathBuf> {
        let name = uri.strip_prefix(TEMP_URI_PREFIX)?;
        if name.is_empty() || name.contains('/') {
            return None;
        }
        Some(self.dir.join(name))
    }

    /// Generates a file name for a buffer without caller-supplied name.
    pub fn generate_name() -> String {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or_default();
        format!("default{}{:04}", millis, fast_random_below(10_000))
    }

    /// Writes `content` as `name` and returns its URI.
    pub fn write(&self, name: &str, content: &[u8]) -> io::Result<String> {
        let path = write_file_sync(&self.dir, name, content)?;
        info!("staged {} bytes at {}", content.len(), path.display());
        Ok(Self::uri_for(name))
    }

    /// Removes the staged files among `files`. Returns how many were removed.
    ///
    /// Files not living in the staging directory are left alone. Failures are
    /// logged and skipped.
    pub fn remove_uploaded(&self, files: &[File]) -> usize {
        let mut removed = 0;
        for file in files {
            let Some(path) = self.path_for_uri(&file.uri) else {
                continue;
            };
            match remove_file(&path) {
                Ok(()) => removed += 1,
                Err(e) => error!("remove staged file {} failed: {}", path.display(), e),
            }
        }
        removed
    }

    /// Removes staged files idle for `retention` or longer. Returns how many
    /// were removed.
    ///
    /// A missing staging directory holds nothing to purge. Other failures are
    /// logged and skipped.
    pub fn purge_expired(&self, retention: Duration) -> usize {
        let files = match list_files(&self.dir) {
            Ok(files) => files,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return 0,
            Err(e) => {
                error!("list {} failed: {}", self.dir.display(), e);
                return 0;
            }
        };
        let now = SystemTime::now();
        let mut removed = 0;
        for path in files {
            let accessed = match last_access(&path) {
                Ok(accessed) => accessed,
                Err(e) => {
                    error!("stat {} failed: {}", path.display(), e);
                    continue;
                }
            };
            // Access times in the future count as now.
            let idle = now.duration_since(accessed).unwrap_or_default();
            if idle < retention {
                continue;
            }
            match remove_file(&path) {
                Ok(()) => {
                    debug!("purged expired staged file {}", path.display());
                    removed += 1;
                }
                Err(e) => error!("remove expired file {} failed: {}", path.display(), e),
            }
        }
        removed
    }
}
