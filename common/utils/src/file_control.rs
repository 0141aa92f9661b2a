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

//! File helpers for temporary request storage.
//!
//! These wrap the handful of synchronous file system primitives the adapter
//! needs for staging upload payloads: existence checks, synchronous writes,
//! listing, access times and unlinking.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Checks if a path exists in the filesystem.
///
/// # Examples
///
/// ```rust
/// use request_utils::file_control::path_exists;
///
/// assert!(path_exists("/"));
/// assert!(!path_exists("/this/path/almost/certainly/does/not/exist"));
/// ```
pub fn path_exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().exists()
}

/// Checks if a path exists, reporting failures to find out.
///
/// Unlike [`path_exists`], a permission error is not mistaken for absence.
pub fn try_path_exists<P: AsRef<Path>>(path: P) -> io::Result<bool> {
    path.as_ref().try_exists()
}

/// Checks that `name` is a single path component usable as a file name.
///
/// Names containing separators or consisting of `.`/`..` would escape the
/// directory they are written into.
///
/// # Examples
///
/// ```rust
/// use request_utils::file_control::check_file_name;
///
/// assert!(check_file_name("avatar.png"));
/// assert!(!check_file_name("../avatar.png"));
/// assert!(!check_file_name(""));
/// ```
pub fn check_file_name(name: &str) -> bool {
    !(name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\'))
}

/// Writes `content` to `dir/name`, creating `dir` if needed.
///
/// The data is flushed to disk before the file is closed. Returns the path of
/// the written file.
pub fn write_file_sync<P: AsRef<Path>>(dir: P, name: &str, content: &[u8]) -> io::Result<PathBuf> {
    if !check_file_name(name) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid file name {:?}", name),
        ));
    }
    let dir = dir.as_ref();
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    let path = dir.join(name);
    let mut file = OpenOptions::new()
        .create(true)
        .read(true)
        .write(true)
        .truncate(true)
        .open(&path)?;
    file.write_all(content)?;
    file.sync_all()?;
    Ok(path)
}

/// Lists the regular files directly inside `dir`.
pub fn list_files<P: AsRef<Path>>(dir: P) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }
    Ok(files)
}

/// Returns the last access time of `path`.
///
/// Falls back to the modification time on file systems that do not record
/// access times.
pub fn last_access<P: AsRef<Path>>(path: P) -> io::Result<SystemTime> {
    let meta = fs::metadata(path)?;
    meta.accessed().or_else(|_| meta.modified())
}

/// Removes the file at `path`.
pub fn remove_file<P: AsRef<Path>>(path: P) -> io::Result<()> {
    fs::remove_file(path)
}
