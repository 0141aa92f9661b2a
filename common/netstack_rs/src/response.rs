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

//! Response data delivered by a successful netstack request.

use std::collections::HashMap;

use serde::Serialize;

/// A request or response body.
///
/// Which variant a response carries depends on the
/// [`HttpDataType`](crate::request::HttpDataType) the request asked for.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum HttpData {
    /// Text content.
    Text(String),
    /// Parsed JSON content.
    Object(serde_json::Value),
    /// Raw bytes.
    Binary(Vec<u8>),
}

impl HttpData {
    /// Returns the text content, if this is a text body.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            HttpData::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl Default for HttpData {
    fn default() -> Self {
        HttpData::Text(String::new())
    }
}

/// The response handed to
/// [`RequestCallback::on_success`](crate::request::RequestCallback::on_success).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HttpResponse {
    /// Response body.
    pub result: HttpData,
    /// HTTP status code.
    pub response_code: u32,
    /// Response headers as reported by the server.
    pub header: HashMap<String, String>,
    /// Raw `Set-Cookie` content.
    pub cookies: String,
}

impl HttpResponse {
    /// Looks up a header value, ignoring the case of the header name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.header
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}
