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

use super::*;

// @tc.name: ut_request_config_defaults
// @tc.desc: Test the default request configuration
// @tc.precon: NA
// @tc.step: 1. Build a config without setting anything
// @tc.expect: Method is get, status policy is the 2xx range, nothing else set
// @tc.type: FUNC
// @tc.require: issueNumber
// @tc.level: Level 0
#[test]
fn ut_request_config_defaults() {
    let config = RequestConfig::builder().build();
    assert_eq!(config.method, "get");
    assert!(config.url.is_none());
    assert!(config.params.is_empty());
    assert!(config.data.is_none());
    assert!(config.context.is_none());
    assert!(config.validate_status.accepts(200));
    assert!(config.validate_status.accepts(299));
    assert!(!config.validate_status.accepts(300));
    assert!(!config.validate_status.accepts(199));
}

// @tc.name: ut_request_config_builder
// @tc.desc: Test the builder applies settings
// @tc.precon: NA
// @tc.step: 1. Build a config with several setters
//           2. Set the same header twice
// @tc.expect: Settings are applied, params keep order, last header wins
// @tc.type: FUNC
// @tc.require: issueNumber
// @tc.level: Level 1
#[test]
fn ut_request_config_builder() {
    let config = RequestConfig::builder()
        .method("Post")
        .base_url("https://example.com")
        .url("/items")
        .param("b", "2")
        .param("a", "1")
        .header("Accept", "text/plain")
        .header("Accept", "application/json")
        .data("payload")
        .timeout(3000)
        .response_type("string")
        .priority(2)
        .file_path("f.bin")
        .build();

    assert_eq!(config.method_upper(), "POST");
    assert!(config.is_method("post"));
    assert!(!config.is_method("get"));
    assert_eq!(config.base_url.as_deref(), Some("https://example.com"));
    assert_eq!(config.url.as_deref(), Some("/items"));
    assert_eq!(
        config.params,
        vec![
            ("b".to_string(), "2".to_string()),
            ("a".to_string(), "1".to_string())
        ]
    );
    assert_eq!(config.headers.get("Accept").map(String::as_str), Some("application/json"));
    assert_eq!(config.data, Some(RequestBody::Text("payload".to_string())));
    assert_eq!(config.timeout, Some(3000));
    assert_eq!(config.response_type.as_deref(), Some("string"));
    assert_eq!(config.priority, Some(2));
    assert_eq!(config.file_path.as_deref(), Some("f.bin"));
}

// @tc.name: ut_request_body_from
// @tc.desc: Test body conversions
// @tc.precon: NA
// @tc.step: 1. Convert text, bytes, json and a form into bodies
// @tc.expect: Each lands in the matching variant
// @tc.type: FUNC
// @tc.require: issueNumber
// @tc.level: Level 1
#[test]
fn ut_request_body_from() {
    assert_eq!(RequestBody::from("a"), RequestBody::Text("a".to_string()));
    assert_eq!(RequestBody::from(vec![1u8, 2]), RequestBody::Raw(vec![1, 2]));
    assert_eq!(
        RequestBody::from(serde_json::json!({"k": 1})),
        RequestBody::Json(serde_json::json!({"k": 1}))
    );
    assert!(matches!(
        RequestBody::from(FormData::new()),
        RequestBody::Form(_)
    ));
}

// @tc.name: ut_validate_status_policies
// @tc.desc: Test each status policy
// @tc.precon: NA
// @tc.step: 1. Evaluate a range, a predicate and accept-all
// @tc.expect: Range is inclusive, predicate decides, accept-all accepts
// @tc.type: FUNC
// @tc.require: issueNumber
// @tc.level: Level 1
#[test]
fn ut_validate_status_policies() {
    let range = ValidateStatus::Range { min: 200, max: 204 };
    assert!(range.accepts(200));
    assert!(range.accepts(204));
    assert!(!range.accepts(205));

    let only_created = ValidateStatus::Predicate(Arc::new(|status: u32| status == 201));
    assert!(only_created.accepts(201));
    assert!(!only_created.accepts(200));

    assert!(ValidateStatus::AcceptAll.accepts(500));
    assert_eq!(format!("{:?}", only_created), "Predicate");
}

// @tc.name: ut_request_config_shares_callbacks
// @tc.desc: Test cloned configs share their callbacks
// @tc.precon: NA
// @tc.step: 1. Build a config with a progress callback
//           2. Clone it and call the callback of the clone
// @tc.expect: The original callback observes the event
// @tc.type: FUNC
// @tc.require: issueNumber
// @tc.level: Level 2
#[test]
fn ut_request_config_shares_callbacks() {
    use std::sync::Mutex;

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let config = RequestConfig::builder()
        .on_download_progress(Arc::new(move |event: ProgressEvent| {
            sink.lock().unwrap().push(event)
        }))
        .build();
    let copy = config.clone();
    (copy.on_download_progress.unwrap())(ProgressEvent { loaded: 1, total: 2 });
    assert_eq!(*seen.lock().unwrap(), vec![ProgressEvent { loaded: 1, total: 2 }]);
}
