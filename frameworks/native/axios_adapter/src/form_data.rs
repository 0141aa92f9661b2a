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

//! Multipart form bodies.
//!
//! [`FormData`] keeps fields in the order their names were first appended.
//! A name may carry several entries, kept in append order.

/// Value of a form entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormValue {
    /// Text. A text starting with `internal://` refers to an existing file.
    Text(String),
    /// Binary content, staged to a temporary file before uploading.
    Buffer(Vec<u8>),
}

impl FormValue {
    /// Returns the `internal://` URI this value refers to, if any.
    pub fn internal_uri(&self) -> Option<&str> {
        match self {
            FormValue::Text(text) if text.starts_with(crate::temp::INTERNAL_URI_PREFIX) => {
                Some(text)
            }
            _ => None,
        }
    }
}

impl From<&str> for FormValue {
    fn from(text: &str) -> Self {
        FormValue::Text(text.to_string())
    }
}

impl From<String> for FormValue {
    fn from(text: String) -> Self {
        FormValue::Text(text)
    }
}

impl From<Vec<u8>> for FormValue {
    fn from(bytes: Vec<u8>) -> Self {
        FormValue::Buffer(bytes)
    }
}

impl From<&[u8]> for FormValue {
    fn from(bytes: &[u8]) -> Self {
        FormValue::Buffer(bytes.to_vec())
    }
}

/// A value together with its optional metadata.
///
/// For buffers the metadata is the file name used when staging the content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormEntry {
    pub value: FormValue,
    pub option: Option<String>,
}

/// An ordered multipart form.
///
/// # Examples
///
/// ```
/// use axios_ohos_adapter::{FormData, FormValue};
///
/// let mut form = FormData::new();
/// form.append("tag", "a", None);
/// form.append("tag", "b", None);
/// assert_eq!(form.get("tag").map(|e| &e.value), Some(&FormValue::from("a")));
/// assert_eq!(form.get_all("tag").len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormData {
    fields: Vec<(String, Vec<FormEntry>)>,
}

impl FormData {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Adds an entry, keeping entries already stored under `name`.
    pub fn append<V: Into<FormValue>>(&mut self, name: &str, value: V, option: Option<&str>) {
        let entry = FormEntry {
            value: value.into(),
            option: option.map(str::to_string),
        };
        match self.fields.iter_mut().find(|(key, _)| key == name) {
            Some((_, entries)) => entries.push(entry),
            None => self.fields.push((name.to_string(), vec![entry])),
        }
    }

    /// Returns the first entry stored under `name`.
    pub fn get(&self, name: &str) -> Option<&FormEntry> {
        self.get_all(name).first()
    }

    /// Returns every entry stored under `name`, in append order.
    pub fn get_all(&self, name: &str) -> &[FormEntry] {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, entries)| entries.as_slice())
            .unwrap_or(&[])
    }

    pub fn has(&self, name: &str) -> bool {
        self.fields.iter().any(|(key, _)| key == name)
    }

    /// Removes all entries of `name`. Returns whether there were any.
    pub fn delete(&mut self, name: &str) -> bool {
        let before = self.fields.len();
        self.fields.retain(|(key, _)| key != name);
        self.fields.len() != before
    }

    /// Replaces all entries of `name` with a single one.
    ///
    /// An existing name keeps its position; a new name goes last.
    pub fn set<V: Into<FormValue>>(&mut self, name: &str, value: V, option: Option<&str>) {
        let entry = FormEntry {
            value: value.into(),
            option: option.map(str::to_string),
        };
        match self.fields.iter_mut().find(|(key, _)| key == name) {
            Some((_, entries)) => *entries = vec![entry],
            None => self.fields.push((name.to_string(), vec![entry])),
        }
    }

    /// Calls `f` with `(value, name, option)` for every entry.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&FormValue, &str, Option<&str>),
    {
        for (name, entry) in self.entries() {
            f(&entry.value, name, entry.option.as_deref());
        }
    }

    /// Iterates over `(name, entry)` pairs.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &FormEntry)> {
        self.fields
            .iter()
            .flat_map(|(name, entries)| entries.iter().map(move |entry| (name.as_str(), entry)))
    }

    /// Number of entries over all names.
    pub fn len(&self) -> usize {
        self.fields.iter().map(|(_, entries)| entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
