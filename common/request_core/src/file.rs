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

//! Form parts of an upload task.

/// A file part of a multipart upload.
///
/// # Examples
///
/// ```rust
/// use request_core::file::File;
///
/// let file = File::from_uri("avatar", "internal://cache/photos/me.jpg");
/// assert_eq!(file.filename, "me.jpg");
/// assert_eq!(file.file_type, "jpg");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct File {
    /// File name reported to the server.
    pub filename: String,
    /// Form field name.
    pub name: String,
    /// `internal://` URI of the file content.
    pub uri: String,
    /// File type, usually the extension of `filename`.
    pub file_type: String,
}

impl File {
    /// Creates a file part for an existing resource, deriving the file name
    /// from the last path segment of `uri` and the type from its extension.
    pub fn from_uri(name: &str, uri: &str) -> Self {
        let filename = file_name_of(uri);
        Self {
            file_type: extension_of(filename).to_string(),
            filename: filename.to_string(),
            name: name.to_string(),
            uri: uri.to_string(),
        }
    }
}

/// A plain `name=value` part of a multipart upload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestData {
    /// Form field name.
    pub name: String,
    /// Field value.
    pub value: String,
}

impl RequestData {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

/// Returns the text after the last `/` of `path`.
pub fn file_name_of(path: &str) -> &str {
    match path.rfind('/') {
        Some(index) => &path[index + 1..],
        None => path,
    }
}

/// Returns the text after the last `.` of `file_name`, or an empty string.
pub fn extension_of(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(index) => &file_name[index + 1..],
        None => "",
    }
}
