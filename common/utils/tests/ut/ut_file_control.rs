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

use std::fs::{File, FileTimes};
use std::time::Duration;

use tempfile::TempDir;

use super::*;

// @tc.name: ut_check_file_name
// @tc.desc: Test file name validation with valid and escaping names
// @tc.precon: NA
// @tc.step: 1. Call check_file_name with different inputs
// @tc.expect: Plain names pass, separators and relative segments fail
// @tc.type: FUNC
// @tc.require: issueNumber
// @tc.level: Level 2
#[test]
fn ut_check_file_name() {
    assert!(check_file_name("a.bin"));
    assert!(check_file_name("default1700000000000"));
    assert!(check_file_name(".hidden"));
    assert!(!check_file_name(""));
    assert!(!check_file_name("."));
    assert!(!check_file_name(".."));
    assert!(!check_file_name("a/b"));
    assert!(!check_file_name(r"a\b"));
}

// @tc.name: ut_write_file_sync
// @tc.desc: Test synchronous write creates the directory and the file
// @tc.precon: NA
// @tc.step: 1. Write a file into a missing subdirectory
//           2. Write again with shorter content
//           3. Read the file back
// @tc.expect: Directory is created and the file holds the latest content
// @tc.type: FUNC
// @tc.require: issueNumber
// @tc.level: Level 1
#[test]
fn ut_write_file_sync() {
    let dir = TempDir::new().unwrap();
    let sub = dir.path().join("axios_temp");
    assert!(!path_exists(&sub));

    let path = write_file_sync(&sub, "blob", b"hello world").unwrap();
    assert!(path_exists(&sub));
    assert_eq!(path, sub.join("blob"));

    write_file_sync(&sub, "blob", b"hi").unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), b"hi");
}

// @tc.name: ut_write_file_sync_bad_name
// @tc.desc: Test synchronous write rejects names escaping the directory
// @tc.precon: NA
// @tc.step: 1. Write a file named "../escape"
// @tc.expect: InvalidInput error and nothing is written
// @tc.type: FUNC
// @tc.require: issueNumber
// @tc.level: Level 2
#[test]
fn ut_write_file_sync_bad_name() {
    let dir = TempDir::new().unwrap();
    let err = write_file_sync(dir.path().join("sub"), "../escape", b"x").unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    assert!(!path_exists(dir.path().join("escape")));
}

// @tc.name: ut_list_and_remove_files
// @tc.desc: Test listing skips directories and removal deletes files
// @tc.precon: NA
// @tc.step: 1. Create two files and one subdirectory
//           2. List the directory, remove one file, list again
// @tc.expect: Only regular files are listed and removal is reflected
// @tc.type: FUNC
// @tc.require: issueNumber
// @tc.level: Level 1
#[test]
fn ut_list_and_remove_files() {
    let dir = TempDir::new().unwrap();
    write_file_sync(dir.path(), "a", b"a").unwrap();
    write_file_sync(dir.path(), "b", b"b").unwrap();
    std::fs::create_dir(dir.path().join("nested")).unwrap();

    let mut files = list_files(dir.path()).unwrap();
    files.sort();
    assert_eq!(files, vec![dir.path().join("a"), dir.path().join("b")]);

    remove_file(dir.path().join("a")).unwrap();
    assert_eq!(list_files(dir.path()).unwrap(), vec![dir.path().join("b")]);
    assert!(remove_file(dir.path().join("a")).is_err());
}

// @tc.name: ut_last_access
// @tc.desc: Test last access time reflects explicitly set file times
// @tc.precon: NA
// @tc.step: 1. Create a file and set its access and modification times back
//           2. Read the last access time
// @tc.expect: Returned time equals the time that was set
// @tc.type: FUNC
// @tc.require: issueNumber
// @tc.level: Level 1
#[test]
fn ut_last_access() {
    let dir = TempDir::new().unwrap();
    let path = write_file_sync(dir.path(), "old", b"x").unwrap();
    let past = SystemTime::now() - Duration::from_secs(3600);
    let times = FileTimes::new().set_accessed(past).set_modified(past);
    File::options().write(true).open(&path).unwrap().set_times(times).unwrap();

    let access = last_access(&path).unwrap();
    let diff = access
        .duration_since(past)
        .unwrap_or_else(|e| e.duration());
    assert!(diff < Duration::from_secs(1));
}

// @tc.name: ut_try_path_exists
// @tc.desc: Test the checked existence query
// @tc.precon: NA
// @tc.step: 1. Query an existing file and a missing one
// @tc.expect: Ok(true) and Ok(false)
// @tc.type: FUNC
// @tc.require: issueNumber
// @tc.level: Level 1
#[test]
fn ut_try_path_exists() {
    let dir = TempDir::new().unwrap();
    let path = write_file_sync(dir.path(), "here", b"x").unwrap();
    assert!(try_path_exists(&path).unwrap());
    assert!(!try_path_exists(dir.path().join("gone")).unwrap());
}
