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

//! Request target resolution.
//!
//! The full path joins `base_url` and `url`; the query string built from
//! `params` is then appended to it.

use crate::config::ParamsSerializer;

/// Result of joining the base URL and the request URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FullPath {
    Url(String),
    /// Nothing to request.
    Empty,
}

/// Checks for a `scheme://` or protocol-relative `//` prefix.
///
/// # Examples
///
/// ```
/// use axios_ohos_adapter::url::is_absolute_url;
///
/// assert!(is_absolute_url("https://example.com"));
/// assert!(is_absolute_url("//example.com"));
/// assert!(!is_absolute_url("/items"));
/// ```
pub fn is_absolute_url(url: &str) -> bool {
    if url.starts_with("//") {
        return true;
    }
    let Some(colon) = url.find(':') else {
        return false;
    };
    let scheme = &url[..colon];
    let mut chars = scheme.chars();
    let valid_scheme = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    };
    valid_scheme && url[colon + 1..].starts_with("//")
}

/// Joins `base` and `relative` with exactly one `/`.
pub fn combine_urls(base: &str, relative: &str) -> String {
    if relative.is_empty() {
        return base.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        relative.trim_start_matches('/')
    )
}

/// Resolves the request URL against the base URL.
pub fn build_full_path(base_url: Option<&str>, url: Option<&str>) -> FullPath {
    let url = url.unwrap_or_default();
    let full = match base_url {
        Some(base) if !base.is_empty() && !is_absolute_url(url) => combine_urls(base, url),
        _ => url.to_string(),
    };
    if full.is_empty() {
        FullPath::Empty
    } else {
        FullPath::Url(full)
    }
}

/// Percent-encodes a query component, keeping the characters axios leaves
/// readable.
pub fn encode(component: &str) -> String {
    urlencoding::encode(component)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
        .replace("%3A", ":")
        .replace("%24", "$")
        .replace("%2C", ",")
        .replace("%20", "+")
        .replace("%5B", "[")
        .replace("%5D", "]")
}

/// Appends the serialized `params` to `url`.
///
/// The fragment of `url` is dropped when a query is appended.
pub fn build_url(
    url: &str,
    params: &[(String, String)],
    serializer: Option<&ParamsSerializer>,
) -> String {
    if params.is_empty() {
        return url.to_string();
    }
    let query = match serializer {
        Some(serialize) => serialize(params),
        None => params
            .iter()
            .map(|(name, value)| format!("{}={}", encode(name), encode(value)))
            .collect::<Vec<_>>()
            .join("&"),
    };
    if query.is_empty() {
        return url.to_string();
    }
    let base = match url.find('#') {
        Some(index) => &url[..index],
        None => url,
    };
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{}{}{}", base, separator, query)
}
